use std::fmt;
use std::path::PathBuf;

/// Stand-in for a tag that is missing or blank.
pub const UNKNOWN: &str = "Unknown";
/// Stand-in for a value whose transliteration came out empty.
pub const EMPTY: &str = "Empty";

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Field {
    Artist,
    Album,
    Title,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Field::Artist => "artist",
            Field::Album => "album",
            Field::Title => "title",
        })
    }
}

/// One field of a track: the tag text and its ASCII rendering.
///
/// Neither string is ever empty; see [`UNKNOWN`] and [`EMPTY`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldValue {
    pub raw: String,
    pub ascii: String,
}

impl FieldValue {
    pub fn is_unknown(&self) -> bool {
        self.raw == UNKNOWN
    }

    pub fn is_empty_ascii(&self) -> bool {
        self.ascii == EMPTY
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Track {
    pub path: PathBuf,
    pub artist: FieldValue,
    pub album: FieldValue,
    pub title: FieldValue,
}
