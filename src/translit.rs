//! ASCII transliteration of tag text.

/// Turns arbitrary text into an ASCII approximation. May return an empty
/// string when nothing in the input has an ASCII rendering.
pub trait Transliterator {
    fn to_ascii(&self, s: &str) -> String;
}

/// Transliterator backed by the `any_ascii` tables.
#[derive(Debug, Default, Clone, Copy)]
pub struct AnyAscii;

impl Transliterator for AnyAscii {
    fn to_ascii(&self, s: &str) -> String {
        any_ascii::any_ascii(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn any_ascii_strips_diacritics() {
        assert_eq!(AnyAscii.to_ascii("Sigur Rós"), "Sigur Ros");
        assert_eq!(AnyAscii.to_ascii("Motörhead"), "Motorhead");
    }

    #[test]
    fn any_ascii_passes_ascii_through() {
        assert_eq!(AnyAscii.to_ascii("Plain Text 123"), "Plain Text 123");
        assert_eq!(AnyAscii.to_ascii(""), "");
    }
}
