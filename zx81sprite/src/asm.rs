#[cfg(feature = "serde")]
use serde::Deserialize;

use crate::encode::Encoding;

/// How the assembler listing is laid out.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Deserialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields))]
pub struct AsmStyle {
    /// Header line written before the data.
    pub label: String,
    /// Data directive, e.g. `DB` or `DEFB`.
    pub directive: String,
    /// Leading whitespace of each data line.
    pub indent: String,
    /// Prefix of each hex byte, e.g. `$` or `0x`.
    pub hex_prefix: String,
}

impl Default for AsmStyle {
    fn default() -> Self {
        AsmStyle {
            label: "spriteData".to_string(),
            directive: "DB".to_string(),
            indent: "   ".to_string(),
            hex_prefix: "$".to_string(),
        }
    }
}

/// Render an encoding as a label line followed by one data line per row.
///
/// ```text
/// spriteData
///    DB $00,$85,$05,$00
/// ```
pub fn render_listing(encoding: &Encoding, style: &AsmStyle) -> String {
    let mut out = String::new();
    out.push_str(&style.label);
    out.push('\n');
    for row in &encoding.rows {
        out.push_str(&style.indent);
        out.push_str(&style.directive);
        out.push(' ');
        for (i, code) in row.iter().enumerate() {
            if i > 0 {
                out.push(',');
            }
            out.push_str(&format!("{}{:02X}", style.hex_prefix, code.0));
        }
        out.push('\n');
    }
    out
}
