use std::collections::hash_map::Entry;
use std::collections::{HashMap, HashSet};
use std::ffi::OsString;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::PlanError;
use crate::library::{AlbumBucket, LibraryIndex, path_segment};

/// One planned move. `destination` is relative to the target directory and
/// always has three components: artist, album, file name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlanEntry {
    pub source: PathBuf,
    pub destination: PathBuf,
    /// ASCII title the file name was built from, suffix included.
    pub title: String,
    /// Disambiguation suffix, when the bare title was already taken.
    pub suffix: Option<usize>,
}

/// File name for `key`, carrying over the extension of `source` untouched.
fn file_name(key: &str, source: &Path) -> OsString {
    let mut name = OsString::from(key);
    if let Some(ext) = source.extension() {
        name.push(".");
        name.push(ext);
    }
    name
}

fn plan_bucket(artist_key: &str, bucket: &AlbumBucket, plan: &mut Vec<PlanEntry>) {
    let dir = Path::new(artist_key).join(&bucket.key);

    let mut used: HashSet<String> = HashSet::new();
    let mut seen: HashMap<String, usize> = HashMap::new();

    for track in &bucket.tracks {
        let ascii = &track.title.ascii;
        let base = path_segment(ascii);
        let count = seen.entry(base.clone()).or_insert(0);

        let (title, key, suffix) = if *count == 0 && !used.contains(&base) {
            (ascii.clone(), base, None)
        } else {
            let mut n = (*count).max(1);
            loop {
                let title = format!("{ascii}{n}");
                let key = path_segment(&title);
                if !used.contains(&key) {
                    debug!(
                        path = %track.path.display(),
                        "title {ascii:?} already taken in {}, using {title:?}",
                        dir.display()
                    );
                    break (title, key, Some(n));
                }
                n += 1;
            }
        };
        *count += 1;

        let destination = dir.join(file_name(&key, &track.path));
        used.insert(key);
        plan.push(PlanEntry {
            source: track.path.clone(),
            destination,
            title,
            suffix,
        });
    }
}

/// Turn `index` into a list of moves with pairwise distinct destinations.
///
/// Buckets are visited artist by artist, album by album, in insertion order,
/// and so are the tracks inside a bucket. Within a bucket the first track to
/// claim a title keeps it; later ones get a numeric suffix, starting at 1 and
/// counting up per title. Suffix counters start over in every bucket.
pub fn build_plan(index: &LibraryIndex) -> Result<Vec<PlanEntry>, PlanError> {
    let mut plan = Vec::with_capacity(index.track_count());
    for artist in index.artists() {
        for bucket in &artist.albums {
            plan_bucket(&artist.key, bucket, &mut plan);
        }
    }

    let mut claimed: HashMap<&Path, &Path> = HashMap::with_capacity(plan.len());
    for entry in &plan {
        match claimed.entry(&entry.destination) {
            Entry::Occupied(first) => {
                return Err(PlanError::DestinationCollision {
                    destination: entry.destination.clone(),
                    first: first.get().to_path_buf(),
                    second: entry.source.clone(),
                });
            }
            Entry::Vacant(slot) => {
                slot.insert(&entry.source);
            }
        }
    }

    Ok(plan)
}
