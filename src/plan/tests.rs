use super::*;
use crate::library::{LibraryIndex, Track, group, normalize};
use crate::translit::AnyAscii;
use std::collections::HashSet;
use std::path::{Path, PathBuf};

const NONE: &[&str] = &[];

fn t(path: &str, artist: &str, album: &str, title: &str) -> Track {
    normalize(Path::new(path), &[artist], &[album], &[title], &AnyAscii)
}

fn untagged(path: &str) -> Track {
    normalize(Path::new(path), NONE, NONE, NONE, &AnyAscii)
}

fn index(tracks: Vec<Track>) -> LibraryIndex {
    group(tracks).0
}

fn destinations(plan: &[PlanEntry]) -> Vec<PathBuf> {
    plan.iter().map(|e| e.destination.clone()).collect()
}

#[test]
fn untagged_files_share_a_bucket_and_get_suffixes() {
    let plan = build_plan(&index(vec![untagged("/in/a.mp3"), untagged("/in/b.mp3")])).unwrap();

    assert_eq!(
        destinations(&plan),
        vec![
            PathBuf::from("unknown/unknown/unknown.mp3"),
            PathBuf::from("unknown/unknown/unknown1.mp3"),
        ]
    );
    assert_eq!(plan[0].source, PathBuf::from("/in/a.mp3"));
    assert_eq!(plan[0].suffix, None);
    assert_eq!(plan[1].title, "Unknown1");
    assert_eq!(plan[1].suffix, Some(1));
}

#[test]
fn titles_differing_only_in_case_collide() {
    let plan = build_plan(&index(vec![
        t("/in/1.flac", "A", "B", "Song"),
        t("/in/2.flac", "A", "B", "song"),
    ]))
    .unwrap();

    assert_eq!(
        destinations(&plan),
        vec![PathBuf::from("a/b/song.flac"), PathBuf::from("a/b/song1.flac")]
    );
}

#[test]
fn nth_colliding_track_gets_suffix_n_minus_one() {
    let tracks = (0..4).map(|i| t(&format!("/in/{i}.ogg"), "A", "B", "Intro")).collect();
    let plan = build_plan(&index(tracks)).unwrap();

    let suffixes: Vec<Option<usize>> = plan.iter().map(|e| e.suffix).collect();
    assert_eq!(suffixes, vec![None, Some(1), Some(2), Some(3)]);
    assert_eq!(plan[3].destination, PathBuf::from("a/b/intro3.ogg"));
}

#[test]
fn counters_reset_per_bucket() {
    let plan = build_plan(&index(vec![
        t("/in/1.mp3", "A", "One", ""),
        t("/in/2.mp3", "A", "Two", ""),
        t("/in/3.mp3", "A", "One", ""),
        t("/in/4.mp3", "B", "One", ""),
    ]))
    .unwrap();

    assert_eq!(
        destinations(&plan),
        vec![
            PathBuf::from("a/one/unknown.mp3"),
            PathBuf::from("a/one/unknown1.mp3"),
            PathBuf::from("a/two/unknown.mp3"),
            PathBuf::from("b/one/unknown.mp3"),
        ]
    );
    assert_eq!(plan[1].source, PathBuf::from("/in/3.mp3"));
}

#[test]
fn suffix_skips_keys_already_claimed_by_real_titles() {
    let plan = build_plan(&index(vec![
        t("/in/1.mp3", "A", "B", "Unknown1"),
        t("/in/2.mp3", "A", "B", ""),
        t("/in/3.mp3", "A", "B", ""),
        t("/in/4.mp3", "A", "B", "Unknown1"),
    ]))
    .unwrap();

    assert_eq!(
        destinations(&plan),
        vec![
            PathBuf::from("a/b/unknown1.mp3"),
            PathBuf::from("a/b/unknown.mp3"),
            PathBuf::from("a/b/unknown2.mp3"),
            PathBuf::from("a/b/unknown11.mp3"),
        ]
    );
}

#[test]
fn extension_is_kept_verbatim() {
    let plan = build_plan(&index(vec![
        t("/in/Loud.MP3", "A", "B", "Loud"),
        t("/in/raw", "A", "B", "Raw"),
        t("/in/x.Flac", "A", "B", "Loud"),
    ]))
    .unwrap();

    assert_eq!(
        destinations(&plan),
        vec![
            PathBuf::from("a/b/loud.MP3"),
            PathBuf::from("a/b/raw"),
            PathBuf::from("a/b/loud1.Flac"),
        ]
    );
}

#[test]
fn transliterated_names_build_the_path() {
    let plan = build_plan(&index(vec![t(
        "/in/x.flac",
        "Sigur Rós",
        "( )",
        "Untitled #1 (Vaka)",
    )]))
    .unwrap();

    assert_eq!(
        plan[0].destination,
        PathBuf::from("sigur_ros/empty/untitled_1_vaka.flac")
    );
    assert_eq!(plan[0].destination.components().count(), 3);
}

#[test]
fn destinations_are_pairwise_distinct() {
    let titles = [
        "", "", "Unknown", "Unknown1", "unknown 1", "Unknown", "!!!", "!!!", "Empty", "1",
        "Song", "SONG", "song", "Song1", "Song 1", "song_1", "",
    ];
    let tracks = titles
        .iter()
        .enumerate()
        .map(|(i, title)| t(&format!("/in/{i}.mp3"), "Same", "Album", title))
        .collect();
    let plan = build_plan(&index(tracks)).unwrap();

    assert_eq!(plan.len(), titles.len());
    let unique: HashSet<&PathBuf> = plan.iter().map(|e| &e.destination).collect();
    assert_eq!(unique.len(), plan.len());
    assert!(plan.iter().all(|e| e.destination.components().count() == 3));
}

#[test]
fn plan_follows_index_order() {
    let plan = build_plan(&index(vec![
        t("/in/1.mp3", "Zed", "Z", "a"),
        t("/in/2.mp3", "Abe", "A", "b"),
        t("/in/3.mp3", "Zed", "Y", "c"),
        t("/in/4.mp3", "Zed", "Z", "d"),
    ]))
    .unwrap();

    let sources: Vec<PathBuf> = plan.iter().map(|e| e.source.clone()).collect();
    assert_eq!(
        sources,
        vec![
            PathBuf::from("/in/1.mp3"),
            PathBuf::from("/in/4.mp3"),
            PathBuf::from("/in/3.mp3"),
            PathBuf::from("/in/2.mp3"),
        ]
    );
}

#[test]
fn empty_index_plans_nothing() {
    assert!(build_plan(&LibraryIndex::new()).unwrap().is_empty());
}
