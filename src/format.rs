/* atan2lut | format.rs
 * Copyright (c) 2025 L. Sartory
 * SPDX-License-Identifier: MIT
 */

/* Text rendering of 2D tables, laid out like a printed numpy float array */

/******************************************************************************/

use core::fmt;

use crate::common::int_width;
use crate::Degrees;

/******************************************************************************/

/// Rendering parameters
///
/// The defaults are the ones numpy prints arrays with.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PrintOptions {
    /// Element count above which the output is summarized
    pub threshold: usize,
    /// Number of leading and trailing entries kept on each summarized axis
    pub edge_items: usize,
    /// Maximum number of characters per line, brackets included
    pub line_width: usize
}

impl PrintOptions {
    /// numpy's default print options
    pub const DEFAULT: Self = Self {
        threshold: 1000,
        edge_items: 3,
        line_width: 75
    };
}

impl Default for PrintOptions {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/******************************************************************************/

/// Width of the indentation in front of each row, opening brackets included
const ROW_INDENT: usize = 2;
const SUMMARY: &str = "...";

/// One printed position along an axis
#[derive(Clone, Copy)]
enum Slot {
    Item(usize),
    Ellipsis
}

impl Slot {
    fn item(self) -> Option<usize> {
        match self {
            Slot::Item(i) => Some(i),
            Slot::Ellipsis => None
        }
    }
}

/// Positions printed along an axis of length `len`
fn slots(len: usize, edge_items: usize, summarize: bool) -> impl Iterator<Item = Slot> {
    let show_summary = summarize && 2 * edge_items < len;
    let (leading, trailing) = if show_summary { (edge_items, edge_items) } else { (0, len) };

    (0..leading)
        .map(Slot::Item)
        .chain(show_summary.then_some(Slot::Ellipsis))
        .chain((len - trailing..len).map(Slot::Item))
}

/******************************************************************************/

/// Displays an `R` x `C` array of integral values
///
/// Every value is printed as a float with no fractional digits (`90.`), right-aligned to the
/// widest value that actually gets printed. Arrays with more than `threshold` elements only show
/// their edges, and rows too long for `line_width` are wrapped.
///
/// ```
/// use atan2lut::format::{ArrayDisplay, PrintOptions};
///
/// let data = [[1, -2], [30, 4]];
/// let text = ArrayDisplay::new(&data, PrintOptions::DEFAULT).to_string();
/// assert_eq!(text, "[[ 1. -2.]\n [30.  4.]]");
/// ```
pub struct ArrayDisplay<'a, const R: usize, const C: usize> {
    rows: &'a [[Degrees; C]; R],
    options: PrintOptions
}

impl<'a, const R: usize, const C: usize> ArrayDisplay<'a, R, C> {
    /// Wraps a borrowed array for display
    pub fn new(rows: &'a [[Degrees; C]; R], options: PrintOptions) -> Self {
        Self { rows, options }
    }

    fn summarize(&self) -> bool {
        R * C > self.options.threshold
    }

    /// Width of the integer part shared by all printed elements
    fn pad(&self) -> usize {
        let rows = self.rows;
        let edge_items = self.options.edge_items;
        let summarize = self.summarize();

        slots(R, edge_items, summarize)
            .filter_map(Slot::item)
            .flat_map(|r| {
                slots(C, edge_items, summarize)
                    .filter_map(Slot::item)
                    .map(move |c| int_width(rows[r][c] as i64))
            })
            .max()
            .unwrap_or(1)
    }

    fn fmt_row(&self, f: &mut fmt::Formatter<'_>, row: &[Degrees; C], pad: usize) -> fmt::Result {
        // Room left on a line once the closing bracket is accounted for
        let max_width = self.options.line_width.saturating_sub(ROW_INDENT);
        let mut line = ROW_INDENT;

        f.write_str("[")?;
        for (i, slot) in slots(C, self.options.edge_items, self.summarize()).enumerate() {
            let word = match slot {
                Slot::Item(_) => pad + 1,
                Slot::Ellipsis => SUMMARY.len()
            };

            if i > 0 {
                if line + 1 + word > max_width {
                    f.write_str("\n  ")?;
                    line = ROW_INDENT;
                } else {
                    f.write_str(" ")?;
                    line += 1;
                }
            }

            match slot {
                Slot::Item(c) => write!(f, "{:>pad$}.", row[c])?,
                Slot::Ellipsis => f.write_str(SUMMARY)?
            }
            line += word;
        }
        f.write_str("]")
    }
}

impl<const R: usize, const C: usize> fmt::Display for ArrayDisplay<'_, R, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if R == 0 || C == 0 {
            return f.write_str("[]");
        }

        let pad = self.pad();

        f.write_str("[")?;
        for (i, slot) in slots(R, self.options.edge_items, self.summarize()).enumerate() {
            if i > 0 {
                f.write_str("\n ")?;
            }
            match slot {
                Slot::Item(r) => self.fmt_row(f, &self.rows[r], pad)?,
                Slot::Ellipsis => f.write_str(SUMMARY)?
            }
        }
        f.write_str("]")
    }
}

/******************************************************************************/

#[cfg(test)]
mod tests {
    use super::*;

    const FULL: PrintOptions = PrintOptions { threshold: usize::MAX, ..PrintOptions::DEFAULT };

    #[test]
    fn test_small_array() {
        let data = [[1, 2], [3, 4]];
        assert_eq!(ArrayDisplay::new(&data, PrintOptions::DEFAULT).to_string(), "[[1. 2.]\n [3. 4.]]");
    }

    #[test]
    fn test_negative_values() {
        let data = [[-180, 0, 5], [90, -45, 180]];
        assert_eq!(
            ArrayDisplay::new(&data, PrintOptions::DEFAULT).to_string(),
            "[[-180.    0.    5.]\n [  90.  -45.  180.]]"
        );
    }

    #[test]
    fn test_empty_array() {
        let rows: [[Degrees; 0]; 3] = [[]; 3];
        assert_eq!(ArrayDisplay::new(&rows, PrintOptions::DEFAULT).to_string(), "[]");
        let none: [[Degrees; 4]; 0] = [];
        assert_eq!(ArrayDisplay::new(&none, PrintOptions::DEFAULT).to_string(), "[]");
    }

    #[test]
    fn test_summarized() {
        let data = [[1, 2, 3], [4, 55, 6], [7, 8, 9]];
        let options = PrintOptions { threshold: 0, edge_items: 1, ..PrintOptions::DEFAULT };
        // The hidden 55 does not widen the columns
        assert_eq!(ArrayDisplay::new(&data, options).to_string(), "[[1. ... 3.]\n ...\n [7. ... 9.]]");
    }

    #[test]
    fn test_no_summary_on_short_axes() {
        let data = [[1, 2], [3, 4]];
        let options = PrintOptions { threshold: 0, edge_items: 1, ..PrintOptions::DEFAULT };
        assert_eq!(ArrayDisplay::new(&data, options).to_string(), "[[1. 2.]\n [3. 4.]]");
    }

    #[test]
    fn test_wrapping() {
        let data = [[100; 20]];
        let expected = "[[100. 100. 100. 100. 100. 100. 100. 100. 100. 100. 100. 100. 100. 100.\n  \
                        100. 100. 100. 100. 100. 100.]]";
        assert_eq!(ArrayDisplay::new(&data, FULL).to_string(), expected);
    }

    #[test]
    fn test_wrapped_lines_fit() {
        let data = [[7; 128]; 2];
        let text = ArrayDisplay::new(&data, FULL).to_string();

        assert!(text.lines().all(|line| line.len() <= PrintOptions::DEFAULT.line_width));
        assert_eq!(text.matches('7').count(), 256);
    }
}
