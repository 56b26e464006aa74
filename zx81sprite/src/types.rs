/// One low-res pixel of the sprite description.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pixel {
    /// `-`: pixel off.
    Blank,
    /// `o`: pixel on.
    Ink,
    /// `*`: normal grey half of a block.
    Grey,
    /// `@`: inverse grey half of a block.
    InverseGrey,
}

impl Pixel {
    /// Map a source character to a pixel, or `None` if it is not part of
    /// the alphabet.
    pub fn from_char(c: char) -> Option<Pixel> {
        match c {
            '-' => Some(Pixel::Blank),
            'o' => Some(Pixel::Ink),
            '*' => Some(Pixel::Grey),
            '@' => Some(Pixel::InverseGrey),
            _ => None,
        }
    }
}
