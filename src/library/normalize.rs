use std::path::Path;

use tracing::warn;

use crate::translit::Transliterator;

use super::model::{EMPTY, Field, FieldValue, Track, UNKNOWN};

/// Apply the fallback policy to one field's tag values.
///
/// Values are joined with a single space. A blank result becomes
/// [`UNKNOWN`]; a transliteration that comes back empty becomes [`EMPTY`].
/// Each fallback is reported once through a `warn` event.
pub fn normalize_field<S: AsRef<str>>(
    path: &Path,
    field: Field,
    values: &[S],
    translit: &dyn Transliterator,
) -> FieldValue {
    let joined = values
        .iter()
        .map(|v| v.as_ref())
        .collect::<Vec<&str>>()
        .join(" ");

    let raw = if joined.trim().is_empty() {
        warn!(path = %path.display(), "empty {field}, setting to {UNKNOWN}");
        UNKNOWN.to_string()
    } else {
        joined
    };

    let ascii = match translit.to_ascii(&raw) {
        a if a.is_empty() => {
            warn!(path = %path.display(), raw = %raw, "{field} transliterated to nothing, setting to {EMPTY}");
            EMPTY.to_string()
        }
        a => a,
    };

    FieldValue { raw, ascii }
}

/// Build a [`Track`] from the raw tag values read for `path`.
pub fn normalize<S: AsRef<str>>(
    path: &Path,
    artist: &[S],
    album: &[S],
    title: &[S],
    translit: &dyn Transliterator,
) -> Track {
    Track {
        path: path.to_path_buf(),
        artist: normalize_field(path, Field::Artist, artist, translit),
        album: normalize_field(path, Field::Album, album, translit),
        title: normalize_field(path, Field::Title, title, translit),
    }
}
