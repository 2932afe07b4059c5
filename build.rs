use std::env;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Elementary CORDIC rotation angles: atan(2^-i), in radians
fn compute_theta_table() -> [f64; 64] {
    (0..64)
        .map(|i| f64::atan2(1.0, f64::powf(2.0, i as _)))
        .collect::<Vec<f64>>()
        .try_into()
        .unwrap()
}

fn main() {
    println!("cargo:rerun-if-changed=build.rs");

    let out_dir = env::var_os("OUT_DIR").unwrap();
    let dest_path = Path::new(&out_dir).join("cordic_tables.rs");
    let mut f = File::create(dest_path).unwrap();

    let theta_table = compute_theta_table();
    writeln!(&mut f, "#[allow(clippy::approx_constant)]").unwrap();
    writeln!(&mut f, "const THETA_TABLE: [f64; {}] = {:?};", theta_table.len(), theta_table).unwrap();
}
