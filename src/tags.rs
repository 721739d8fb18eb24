//! Reading artist/album/title tags from audio files.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use lofty::file::TaggedFileExt;
use lofty::probe::Probe;
use lofty::tag::{ItemKey, Tag};

use crate::error::TagError;

/// Every value stored for each field, as found in the file. Any of the lists
/// may be empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawTags {
    pub artist: Vec<String>,
    pub album: Vec<String>,
    pub title: Vec<String>,
}

pub trait TagReader {
    /// Whether `path` holds a format the reader understands.
    fn is_audio_file(&self, path: &Path) -> Result<bool, TagError>;

    fn read_tags(&self, path: &Path) -> Result<RawTags, TagError>;
}

/// [`TagReader`] over `lofty`. Formats are recognized by content, not by
/// file extension.
#[derive(Debug, Default, Clone, Copy)]
pub struct LoftyTagReader;

fn values(tag: &Tag, key: &ItemKey) -> Vec<String> {
    tag.items()
        .filter(|item| item.key() == key)
        .filter_map(|item| item.value().text())
        .map(str::to_string)
        .collect()
}

impl TagReader for LoftyTagReader {
    fn is_audio_file(&self, path: &Path) -> Result<bool, TagError> {
        let probe_err = |source| TagError::Probe {
            path: path.to_path_buf(),
            source,
        };

        let file = File::open(path).map_err(probe_err)?;
        let probe = Probe::new(BufReader::new(file))
            .guess_file_type()
            .map_err(probe_err)?;
        Ok(probe.file_type().is_some())
    }

    fn read_tags(&self, path: &Path) -> Result<RawTags, TagError> {
        let tagged = lofty::read_from_path(path).map_err(|e| TagError::UnreadableFile {
            path: path.to_path_buf(),
            source: Box::new(e),
        })?;

        let Some(tag) = tagged.primary_tag().or_else(|| tagged.first_tag()) else {
            return Ok(RawTags::default());
        };

        Ok(RawTags {
            artist: values(tag, &ItemKey::TrackArtist),
            album: values(tag, &ItemKey::AlbumTitle),
            title: values(tag, &ItemKey::TrackTitle),
        })
    }
}
