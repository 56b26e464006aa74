mod validate;

use crate::error::ShapeError;
use crate::types::Pixel;

/// A validated rectangular grid of sprite characters.
///
/// Width and height are both even and non-zero. Characters are kept as
/// written; anything outside the pixel alphabet is left for the encoder to
/// report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelGrid {
    width: usize,
    height: usize,
    /// Characters in row-major order (top-to-bottom, left-to-right).
    cells: Vec<char>,
}

/// Number of grid cells of each pixel kind.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PixelCensus {
    pub blank: usize,
    pub ink: usize,
    pub grey: usize,
    pub inverse_grey: usize,
    /// Characters outside the pixel alphabet.
    pub other: usize,
}

impl PixelGrid {
    /// Build a grid from individual rows.
    ///
    /// All rows must have the same non-zero, even length and the row count
    /// must be even. Nothing is kept if any check fails.
    pub fn from_lines<I, S>(lines: I) -> Result<PixelGrid, ShapeError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let rows: Vec<Vec<char>> = lines
            .into_iter()
            .map(|line| line.as_ref().chars().collect())
            .collect();

        let (width, height) = validate::check_shape(&rows)?;

        Ok(PixelGrid {
            width,
            height,
            cells: rows.into_iter().flatten().collect(),
        })
    }

    /// Build a grid from source text, one row per line.
    ///
    /// Both `\n` and `\r\n` line endings are accepted. Blank lines at the end
    /// of the text are ignored, as is a leading byte order mark.
    pub fn from_text(text: &str) -> Result<PixelGrid, ShapeError> {
        let text = text.strip_prefix('\u{feff}').unwrap_or(text);
        let mut lines: Vec<&str> = text.lines().collect();
        while lines.last().is_some_and(|l| l.is_empty()) {
            lines.pop();
        }
        PixelGrid::from_lines(lines)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Get the character at position (x, y).
    pub fn cell(&self, x: usize, y: usize) -> char {
        self.cells[y * self.width + x]
    }

    /// Get row `y` as a slice of characters.
    pub fn row(&self, y: usize) -> &[char] {
        &self.cells[y * self.width..(y + 1) * self.width]
    }

    pub fn rows(&self) -> impl Iterator<Item = &[char]> {
        self.cells.chunks_exact(self.width)
    }

    pub fn pixel_census(&self) -> PixelCensus {
        let mut census = PixelCensus::default();
        for &c in &self.cells {
            match Pixel::from_char(c) {
                Some(Pixel::Blank) => census.blank += 1,
                Some(Pixel::Ink) => census.ink += 1,
                Some(Pixel::Grey) => census.grey += 1,
                Some(Pixel::InverseGrey) => census.inverse_grey += 1,
                None => census.other += 1,
            }
        }
        census
    }
}
