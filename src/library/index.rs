use std::collections::{HashMap, HashSet};

use super::model::Track;
use super::snake::path_segment;

/// Tracks sharing one artist key and one album key, in the order they were
/// added.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlbumBucket {
    pub key: String,
    pub tracks: Vec<Track>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtistGroup {
    pub key: String,
    pub albums: Vec<AlbumBucket>,
    album_pos: HashMap<String, usize>,
}

impl ArtistGroup {
    fn new(key: String) -> Self {
        Self {
            key,
            albums: Vec::new(),
            album_pos: HashMap::new(),
        }
    }

    fn bucket_mut(&mut self, album_key: String) -> &mut AlbumBucket {
        let idx = match self.album_pos.get(&album_key) {
            Some(&i) => i,
            None => {
                self.album_pos.insert(album_key.clone(), self.albums.len());
                self.albums.push(AlbumBucket {
                    key: album_key,
                    tracks: Vec::new(),
                });
                self.albums.len() - 1
            }
        };
        &mut self.albums[idx]
    }
}

/// Artist key -> album key -> tracks.
///
/// Artists, the albums of an artist and the tracks of an album all iterate
/// in first-insertion order. Title disambiguation depends on it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LibraryIndex {
    artists: Vec<ArtistGroup>,
    artist_pos: HashMap<String, usize>,
}

impl LibraryIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `track` to the bucket `(artist_key, album_key)`. Keys are the
    /// [`path_segment`] of the track's ASCII artist and album.
    pub fn insert_keyed(&mut self, artist_key: String, album_key: String, track: Track) {
        let idx = match self.artist_pos.get(&artist_key) {
            Some(&i) => i,
            None => {
                self.artist_pos.insert(artist_key.clone(), self.artists.len());
                self.artists.push(ArtistGroup::new(artist_key));
                self.artists.len() - 1
            }
        };
        self.artists[idx].bucket_mut(album_key).tracks.push(track);
    }

    pub fn artists(&self) -> &[ArtistGroup] {
        &self.artists
    }

    pub fn track_count(&self) -> usize {
        self.artists
            .iter()
            .flat_map(|a| a.albums.iter())
            .map(|b| b.tracks.len())
            .sum()
    }

    pub fn is_empty(&self) -> bool {
        self.artists.is_empty()
    }
}

/// Shape of a library, counted by normalized key.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Statistics {
    pub tracks: usize,
    pub artists: usize,
    pub albums: usize,
    pub titles: usize,
    pub unknown_artists: usize,
    pub unknown_albums: usize,
    pub unknown_titles: usize,
    pub empty_artists: usize,
    pub empty_albums: usize,
    pub empty_titles: usize,
}

/// Group `tracks` into a [`LibraryIndex`] and count what was seen.
pub fn group<I>(tracks: I) -> (LibraryIndex, Statistics)
where
    I: IntoIterator<Item = Track>,
{
    let mut index = LibraryIndex::new();
    let mut stats = Statistics::default();

    let mut artists: HashSet<String> = HashSet::new();
    let mut albums: HashSet<String> = HashSet::new();
    let mut titles: HashSet<String> = HashSet::new();

    for track in tracks {
        let artist_key = path_segment(&track.artist.ascii);
        let album_key = path_segment(&track.album.ascii);
        let title_key = path_segment(&track.title.ascii);

        stats.tracks += 1;
        if artists.insert(artist_key.clone()) {
            stats.artists += 1;
        }
        if albums.insert(album_key.clone()) {
            stats.albums += 1;
        }
        if titles.insert(title_key) {
            stats.titles += 1;
        }

        stats.unknown_artists += usize::from(track.artist.is_unknown());
        stats.unknown_albums += usize::from(track.album.is_unknown());
        stats.unknown_titles += usize::from(track.title.is_unknown());
        stats.empty_artists += usize::from(track.artist.is_empty_ascii());
        stats.empty_albums += usize::from(track.album.is_empty_ascii());
        stats.empty_titles += usize::from(track.title.is_empty_ascii());

        index.insert_keyed(artist_key, album_key, track);
    }

    (index, stats)
}
