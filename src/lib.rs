/* atan2lut | lib.rs
 * Copyright (c) 2025 L. Sartory
 * SPDX-License-Identifier: MIT
 */

/* Quantized two-argument arctangent lookup table */

/******************************************************************************/

#![cfg_attr(not(test), no_std)]
#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

/******************************************************************************/

mod common;
mod cordic;
/// numpy-style text rendering of the table
pub mod format;

use core::fmt;

use format::{ArrayDisplay, PrintOptions};

/******************************************************************************/

/// Number of rows and columns of the table
pub const SIZE: usize = 128;

/// Divisor mapping a table index to a coordinate in [0, 1)
pub const SCALE: f64 = 128.0;

/// Angle in whole degrees
pub type Degrees = i16;

/// The generated lookup table
///
/// Cell `[x][y]` holds the angle of the vector `(x / 128, y / 128)` from the positive x axis,
/// rounded to the nearest degree.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Atan2Table {
    cells: [[Degrees; SIZE]; SIZE]
}

impl Atan2Table {
    /// Borrows the whole table, indexed `[x][y]`
    pub const fn rows(&self) -> &[[Degrees; SIZE]; SIZE] {
        &self.cells
    }

    /// Renders the table with custom print options
    ///
    /// The `Display` implementation uses [`PrintOptions::DEFAULT`].
    pub fn display(&self, options: PrintOptions) -> ArrayDisplay<'_, SIZE, SIZE> {
        ArrayDisplay::new(&self.cells, options)
    }
}

impl fmt::Display for Atan2Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.display(PrintOptions::DEFAULT), f)
    }
}

/******************************************************************************/

/// Angle of table cell (x, y), in whole degrees
const fn cell_angle(x: usize, y: usize) -> Degrees {
    let nx = x as f64 / SCALE;
    let ny = y as f64 / SCALE;
    common::round_ties_even(common::to_degrees(cordic::atan2(ny, nx))) as Degrees
}

/// Computes the complete lookup table
///
/// Every cell is filled exactly once, x in the outer loop and y in the inner one.
/// For example:
/// ```
/// let table = atan2lut::generate();
/// assert_eq!(table.rows()[1][1], 45);
/// assert_eq!(table.rows()[0][127], 90);
/// ```
pub const fn generate() -> Atan2Table {
    let mut cells = [[0; SIZE]; SIZE];

    let mut x = 0;
    while x < SIZE {
        let mut y = 0;
        while y < SIZE {
            cells[x][y] = cell_angle(x, y);
            y += 1;
        }
        x += 1;
    }

    Atan2Table { cells }
}

/******************************************************************************/
