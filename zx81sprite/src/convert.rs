//! Whole-file conversion: read a sprite, encode it, write the listing.

use std::path::Path;

use crate::asm::{self, AsmStyle};
use crate::encode::{self, Encoding};
use crate::error::{ShapeError, SpriteError};
use crate::grid::PixelGrid;

/// An encoded sprite together with its rendered listing.
#[derive(Debug, Clone)]
pub struct Conversion {
    pub grid: PixelGrid,
    pub encoding: Encoding,
    pub listing: String,
}

/// Convert sprite source text without touching the filesystem.
pub fn convert_text(text: &str, style: &AsmStyle) -> Result<Conversion, ShapeError> {
    let grid = PixelGrid::from_text(text)?;
    let encoding = encode::encode(&grid);
    let listing = asm::render_listing(&encoding, style);
    Ok(Conversion {
        grid,
        encoding,
        listing,
    })
}

/// Convert the sprite at `input` and write the listing to `output`.
///
/// The output file is only written once the input has been read and its
/// shape validated, so a failed run leaves no listing behind. An output
/// path that cannot be created is therefore only noticed after encoding. Unknown
/// patterns do not fail the conversion; they are returned in
/// [`Encoding::diagnostics`].
pub fn convert_file(
    input: &Path,
    output: &Path,
    style: &AsmStyle,
) -> Result<Conversion, SpriteError> {
    let bytes = std::fs::read(input).map_err(|source| SpriteError::Read {
        path: input.to_path_buf(),
        source,
    })?;
    log::debug!("read {} bytes from {}", bytes.len(), input.display());

    // Invalid UTF-8 becomes U+FFFD and is reported as an unknown pattern.
    let text = String::from_utf8_lossy(&bytes);

    let conversion = convert_text(&text, style)?;

    std::fs::write(output, &conversion.listing).map_err(|source| SpriteError::Write {
        path: output.to_path_buf(),
        source,
    })?;
    log::debug!(
        "wrote {} bytes to {}",
        conversion.listing.len(),
        output.display()
    );

    Ok(conversion)
}
