/* atan2lut | main.rs
 * Copyright (c) 2025 L. Sartory
 * SPDX-License-Identifier: MIT
 */

/* Prints the atan2 lookup table to the standard output */

/******************************************************************************/

use std::io::{self, Write};

use tracing::debug;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/******************************************************************************/

/// Diagnostics go to stderr, so the table on stdout stays untouched
fn setup_logging() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    let stderr_layer = fmt::layer()
        .with_writer(io::stderr)
        .with_target(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .init();
}

fn main() -> io::Result<()> {
    setup_logging();

    let table = atan2lut::generate();
    debug!(size = atan2lut::SIZE, scale = atan2lut::SCALE, "table generated");

    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{table}")?;
    stdout.flush()?;

    debug!("table written");
    Ok(())
}
