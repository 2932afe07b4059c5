/* atan2lut | cordic.rs
 * Copyright (c) 2025 L. Sartory
 * SPDX-License-Identifier: MIT
 */

/* Two-argument arctangent by CORDIC vectoring */

/******************************************************************************/

use core::f64::consts::PI;

include!(concat!(env!("OUT_DIR"), "/cordic_tables.rs"));

/******************************************************************************/

/// Number of micro-rotations
const N: usize = 63;

const fn abs(x: f64) -> f64 {
    if x < 0.0 { -x } else { x }
}

/// Angle of the vector (x, y) for x >= 0 and y >= 0
///
/// The vector is rotated towards the positive x axis, one elementary angle per step, and the
/// applied rotations are summed up. The accumulated gain only scales x, so it never needs to be
/// compensated.
const fn vectoring(mut y: f64, mut x: f64) -> f64 {
    let mut theta = 0.0;
    let mut p2i = 1.0;

    let mut i = 0;
    while i < N {
        let sigma = if y > 0.0 { 1.0 } else { -1.0 };
        theta += sigma * THETA_TABLE[i];
        (x, y) = (x + sigma * y * p2i, y - sigma * x * p2i);
        p2i /= 2.0;
        i += 1;
    }

    theta
}

/// Signed angle of the vector (x, y) from the positive x axis, in radians
///
/// Same argument order and range as `f64::atan2`: the result lies in [-pi, pi], and the origin
/// maps to 0.
pub const fn atan2(y: f64, x: f64) -> f64 {
    let ay = abs(y);
    let ax = abs(x);

    if ay == 0.0 && ax == 0.0 {
        return 0.0;
    }

    let first_quadrant = if ay == 0.0 { 0.0 } else { vectoring(ay, ax) };
    let angle = if x < 0.0 { PI - first_quadrant } else { first_quadrant };
    if y < 0.0 { -angle } else { angle }
}

/******************************************************************************/
