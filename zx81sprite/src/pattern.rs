//! The ZX81 block graphics character set.
//!
//! Each character cell shows 2x2 low-res pixels. A cell is identified by its
//! signature: the four pixel characters read top-left, top-right,
//! bottom-left, bottom-right.

use std::fmt;

/// A one-byte ZX81 character code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BlockCode(pub u8);

impl BlockCode {
    /// The all-background block, also used when a cell cannot be classified.
    pub const BLANK: BlockCode = BlockCode(0x00);

    /// Whether this is an inverse video character (high bit set).
    pub fn is_inverse(self) -> bool {
        self.0 & 0x80 != 0
    }
}

impl fmt::Display for BlockCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${:02X}", self.0)
    }
}

/// A table entry mapping a cell signature to its character code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pattern {
    pub signature: &'static str,
    pub code: BlockCode,
}

const fn pattern(signature: &'static str, code: u8) -> Pattern {
    Pattern {
        signature,
        code: BlockCode(code),
    }
}

/// All 22 block graphics: 11 normal followed by 11 inverse.
///
/// Note that `@@oo` is `$90`, not `$8A`; the table follows the ROM
/// character set rather than the `normal + 0x80` rule.
pub const PATTERN_TABLE: [Pattern; 22] = [
    pattern("----", 0x00),
    pattern("o---", 0x01),
    pattern("-o--", 0x02),
    pattern("oo--", 0x03),
    pattern("--o-", 0x04),
    pattern("o-o-", 0x05),
    pattern("-oo-", 0x06),
    pattern("ooo-", 0x07),
    pattern("****", 0x08),
    pattern("--**", 0x09),
    pattern("**--", 0x0A),
    pattern("oooo", 0x80),
    pattern("-ooo", 0x81),
    pattern("o-oo", 0x82),
    pattern("--oo", 0x83),
    pattern("oo-o", 0x84),
    pattern("-o-o", 0x85),
    pattern("o--o", 0x86),
    pattern("---o", 0x87),
    pattern("@@@@", 0x88),
    pattern("oo@@", 0x89),
    pattern("@@oo", 0x90),
];

/// Look up the code for a signature.
///
/// Matches whole signatures only: `"oooo-"` or `"oo"` never match.
pub fn lookup(signature: &str) -> Option<BlockCode> {
    PATTERN_TABLE
        .iter()
        .find(|p| p.signature == signature)
        .map(|p| p.code)
}
