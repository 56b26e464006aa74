//! Partition a grid into 2x2 cells and turn each into a block code.

use crate::error::{SpriteError, UnknownPatternError};
use crate::grid::PixelGrid;
use crate::pattern::{self, BlockCode};

/// A 2x2 cell taken from a grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    /// Input row of the top-left pixel (always even).
    pub row: usize,
    /// Input column of the top-left pixel (always even).
    pub column: usize,
    /// Pixels in order top-left, top-right, bottom-left, bottom-right.
    pub pixels: [char; 4],
}

impl Cell {
    /// Extract the cell whose top-left pixel is at (column, row).
    pub fn at(grid: &PixelGrid, column: usize, row: usize) -> Cell {
        Cell {
            row,
            column,
            pixels: [
                grid.cell(column, row),
                grid.cell(column + 1, row),
                grid.cell(column, row + 1),
                grid.cell(column + 1, row + 1),
            ],
        }
    }

    pub fn signature(&self) -> String {
        self.pixels.iter().collect()
    }
}

/// Classify a cell against the block pattern table.
pub fn classify_cell(cell: &Cell) -> Result<BlockCode, UnknownPatternError> {
    let signature = cell.signature();
    match pattern::lookup(&signature) {
        Some(code) => Ok(code),
        None => Err(UnknownPatternError {
            row: cell.row,
            column: cell.column,
            signature,
        }),
    }
}

/// Result of encoding a grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Encoding {
    /// One entry per row pair, each holding one code per column pair.
    pub rows: Vec<Vec<BlockCode>>,
    /// Cells that matched no pattern, in reading order. Each was encoded as
    /// [`BlockCode::BLANK`].
    pub diagnostics: Vec<UnknownPatternError>,
}

impl Encoding {
    /// Whether every cell matched a pattern.
    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }

    pub fn block_count(&self) -> usize {
        self.rows.iter().map(Vec::len).sum()
    }

    /// Turn unknown patterns into an error, for runs that must be exact.
    pub fn ensure_clean(&self) -> Result<(), SpriteError> {
        if self.is_clean() {
            Ok(())
        } else {
            Err(SpriteError::UnknownPatterns(self.diagnostics.len()))
        }
    }
}

/// Encode every 2x2 cell of `grid` in reading order.
///
/// Unknown cells do not stop encoding: they are recorded in
/// [`Encoding::diagnostics`] and emitted as the blank block, so the output
/// always has `height / 2` rows of `width / 2` codes.
pub fn encode(grid: &PixelGrid) -> Encoding {
    let mut rows = Vec::with_capacity(grid.height() / 2);
    let mut diagnostics = Vec::new();

    for row in (0..grid.height()).step_by(2) {
        let mut codes = Vec::with_capacity(grid.width() / 2);
        for column in (0..grid.width()).step_by(2) {
            let cell = Cell::at(grid, column, row);
            match classify_cell(&cell) {
                Ok(code) => codes.push(code),
                Err(e) => {
                    diagnostics.push(e);
                    codes.push(BlockCode::BLANK);
                }
            }
        }
        rows.push(codes);
    }

    Encoding { rows, diagnostics }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn codes(row: &[u8]) -> Vec<BlockCode> {
        row.iter().map(|&c| BlockCode(c)).collect()
    }

    #[test]
    fn cell_reads_row_major() {
        let grid = PixelGrid::from_lines(["ab", "cd"]).unwrap();
        let cell = Cell::at(&grid, 0, 0);
        assert_eq!(cell.pixels, ['a', 'b', 'c', 'd']);
        assert_eq!(cell.signature(), "abcd");
    }

    #[test]
    fn single_inverse_block() {
        let grid = PixelGrid::from_lines(["oo", "oo"]).unwrap();
        let enc = encode(&grid);
        assert_eq!(enc.rows, vec![codes(&[0x80])]);
        assert!(enc.is_clean());
    }

    #[test]
    fn all_background_8x8() {
        let grid = PixelGrid::from_lines(["--------"; 8]).unwrap();
        let enc = encode(&grid);
        assert_eq!(enc.rows.len(), 4);
        for row in &enc.rows {
            assert_eq!(row, &codes(&[0, 0, 0, 0]));
        }
        assert_eq!(enc.block_count(), 16);
    }

    #[test]
    fn space_ship() {
        let grid = PixelGrid::from_lines([
            "---oo---",
            "---oo---",
            "--oooo--",
            "-oooooo-",
            "oooooooo",
            "oo-oo-oo",
            "o------o",
            "o------o",
        ])
        .unwrap();
        let enc = encode(&grid);
        assert_eq!(
            enc.rows,
            vec![
                codes(&[0x00, 0x85, 0x05, 0x00]),
                codes(&[0x87, 0x80, 0x80, 0x04]),
                codes(&[0x80, 0x84, 0x07, 0x80]),
                codes(&[0x05, 0x00, 0x00, 0x85]),
            ]
        );
        assert!(enc.is_clean());
    }

    #[test]
    fn grey_blocks() {
        let grid = PixelGrid::from_lines(["**--oo@@", "****@@oo"]).unwrap();
        let enc = encode(&grid);
        // (** / **) (-- / **) (oo / @@) (@@ / oo)
        assert_eq!(enc.rows, vec![codes(&[0x08, 0x09, 0x89, 0x90])]);
    }

    #[test]
    fn unknown_pattern_falls_back_to_blank() {
        let grid = PixelGrid::from_lines(["----o?", "----o?"]).unwrap();
        let enc = encode(&grid);
        assert_eq!(enc.rows, vec![codes(&[0x00, 0x00, 0x00])]);
        assert_eq!(
            enc.diagnostics,
            vec![UnknownPatternError {
                row: 0,
                column: 4,
                signature: "o?o?".to_string(),
            }]
        );
        assert!(!enc.is_clean());
        assert!(matches!(enc.ensure_clean(), Err(SpriteError::UnknownPatterns(1))));
    }

    #[test]
    fn diagnostics_in_reading_order() {
        let grid = PixelGrid::from_lines(["xx--", "xx--", "--yy", "--yy"]).unwrap();
        let enc = encode(&grid);
        let positions: Vec<_> = enc.diagnostics.iter().map(|d| (d.row, d.column)).collect();
        assert_eq!(positions, vec![(0, 0), (2, 2)]);
        assert_eq!(enc.rows, vec![codes(&[0, 0]), codes(&[0, 0])]);
    }

    #[test]
    fn mixed_alphabet_cell_is_unknown() {
        // Every character is valid, but the combination is not a block.
        let cell = Cell {
            row: 2,
            column: 6,
            pixels: ['o', '*', '-', '@'],
        };
        let err = classify_cell(&cell).unwrap_err();
        assert_eq!(err.signature, "o*-@");
        assert_eq!((err.row, err.column), (2, 6));
    }

    #[test]
    fn encode_is_repeatable() {
        let grid = PixelGrid::from_lines(["o-oo", "-o?o"]).unwrap();
        assert_eq!(encode(&grid), encode(&grid));
    }
}
