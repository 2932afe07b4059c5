/* atan2lut | common.rs
 * Copyright (c) 2025 L. Sartory
 * SPDX-License-Identifier: MIT
 */

/******************************************************************************/

use core::f64::consts::PI;

/// Converts an angle from radians to degrees
pub const fn to_degrees(radians: f64) -> f64 {
    radians * 180.0 / PI
}

/// Rounds to the nearest integer, ties to even
///
/// Example: 0.5 --> 0, 1.5 --> 2, 2.5 --> 2, -2.5 --> -2
/// The input must fit in an i64.
pub const fn round_ties_even(x: f64) -> i64 {
    let t = x as i64;
    let frac = x - t as f64;
    let odd = t & 1 == 1;

    if frac > 0.5 || (frac == 0.5 && odd) {
        t + 1
    } else if frac < -0.5 || (frac == -0.5 && odd) {
        t - 1
    } else {
        t
    }
}

/// Number of characters needed to print an integer in base 10, sign included
pub const fn int_width(x: i64) -> usize {
    let mut n = x.unsigned_abs();
    let mut width = if x < 0 { 2 } else { 1 };
    while n >= 10 {
        n /= 10;
        width += 1;
    }
    width
}

/******************************************************************************/

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_ulps_eq;

    #[test]
    fn test_to_degrees() {
        assert_ulps_eq!(to_degrees(PI), 180.0);
        assert_ulps_eq!(to_degrees(PI / 4.0), 45.0);
        assert_ulps_eq!(to_degrees(-PI / 2.0), -90.0);
        assert_eq!(to_degrees(0.0), 0.0);
    }

    #[test]
    fn test_round_ties_even() {
        let cases = [
            ( 0.0,  0), ( 0.4,  0), ( 0.5,  0), ( 0.6,  1),
            ( 1.5,  2), ( 2.5,  2), ( 3.5,  4), (44.9999, 45),
            (-0.4,  0), (-0.5,  0), (-1.5, -2), (-2.5, -2),
            (-3.5, -4), (-89.51, -90)
        ];

        for (x, expected) in cases {
            assert_eq!(round_ties_even(x), expected, "round_ties_even({x})");
        }
    }

    #[test]
    fn test_round_ties_even_matches_std() {
        let mut x = -200.0;
        while x < 200.0 {
            assert_eq!(round_ties_even(x), x.round_ties_even() as i64);
            x += 0.125;
        }
    }

    #[test]
    fn test_int_width() {
        assert_eq!(int_width(0), 1);
        assert_eq!(int_width(9), 1);
        assert_eq!(int_width(90), 2);
        assert_eq!(int_width(180), 3);
        assert_eq!(int_width(-1), 2);
        assert_eq!(int_width(-180), 4);
        assert_eq!(int_width(i64::MIN), 20);
    }
}
