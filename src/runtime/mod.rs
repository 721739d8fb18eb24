use std::path::{Path, PathBuf};
use std::time::Instant;

use tracing::{debug, error, info, warn};

use crate::error::{Result, TagError};
use crate::fs::{Filesystem, StdFilesystem};
use crate::library::{Statistics, Track, group, normalize};
use crate::plan::build_plan;
use crate::tags::{LoftyTagReader, TagReader};
use crate::translit::{AnyAscii, Transliterator};

mod materialize;
mod settings;
mod tree;

pub use materialize::{MaterializeReport, materialize, preview};
pub use settings::load_settings;

#[derive(Debug, Clone)]
pub struct RunOptions {
    pub scan_dir: PathBuf,
    pub target_dir: PathBuf,
    pub dry_run: bool,
    pub strict: bool,
    pub show_tree: bool,
}

#[derive(Debug, Default)]
pub struct RunSummary {
    pub stats: Statistics,
    /// Files skipped because they are not audio.
    pub skipped: usize,
    /// Audio files whose tags could not be read.
    pub unreadable: Vec<PathBuf>,
    pub planned: usize,
    pub report: MaterializeReport,
}

impl RunSummary {
    pub fn is_success(&self) -> bool {
        self.report.failed() == 0
    }
}

/// Run the organizer with the real tag reader, transliterator and filesystem.
pub fn run(opts: &RunOptions, fs: &StdFilesystem) -> Result<RunSummary> {
    organize(opts, &LoftyTagReader, &AnyAscii, fs)
}

fn timed<T>(what: &str, f: impl FnOnce() -> T) -> T {
    let start = Instant::now();
    let out = f();
    debug!("{what} took {:.3} ms", start.elapsed().as_secs_f64() * 1000.0);
    out
}

fn read_track(
    path: &Path,
    reader: &dyn TagReader,
    translit: &dyn Transliterator,
) -> Result<Option<Track>, TagError> {
    if !reader.is_audio_file(path)? {
        debug!("not an audio file, skipping {}", path.display());
        return Ok(None);
    }
    let tags = reader.read_tags(path)?;
    Ok(Some(normalize(
        path,
        &tags.artist[..],
        &tags.album[..],
        &tags.title[..],
        translit,
    )))
}

fn collect_tracks(
    files: &[PathBuf],
    reader: &dyn TagReader,
    translit: &dyn Transliterator,
    strict: bool,
    summary: &mut RunSummary,
) -> Result<Vec<Track>> {
    let mut tracks = Vec::with_capacity(files.len());
    for path in files {
        match read_track(path, reader, translit) {
            Ok(Some(track)) => tracks.push(track),
            Ok(None) => summary.skipped += 1,
            Err(e) if strict => return Err(e.into()),
            Err(e) => {
                error!("{e}");
                summary.unreadable.push(path.clone());
            }
        }
    }
    Ok(tracks)
}

fn report_statistics(stats: &Statistics) {
    info!("Tracks: {}", stats.tracks);
    info!("Artists: {}", stats.artists);
    info!("Albums: {}", stats.albums);
    info!("Titles: {}", stats.titles);
    info!(
        "Unknown artists/albums/titles: {}/{}/{}",
        stats.unknown_artists, stats.unknown_albums, stats.unknown_titles
    );
    info!(
        "Empty artists/albums/titles: {}/{}/{}",
        stats.empty_artists, stats.empty_albums, stats.empty_titles
    );
}

fn log_tree(root: &Path) {
    match tree::render(root) {
        Ok(lines) => {
            debug!("directory tree");
            for line in lines {
                debug!("{line}");
            }
        }
        Err(e) => warn!("failed to read {} for the tree view: {e}", root.display()),
    }
}

/// Scan, group, plan and move, in that order.
///
/// Statistics are reported before anything is moved. Unreadable audio files
/// are skipped unless `opts.strict` is set; failed moves are collected in the
/// summary rather than aborting the run.
pub fn organize(
    opts: &RunOptions,
    reader: &dyn TagReader,
    translit: &dyn Transliterator,
    fs: &dyn Filesystem,
) -> Result<RunSummary> {
    let mut summary = RunSummary::default();

    let files = timed("scan", || fs.list_files(&opts.scan_dir))?;
    let tracks = timed("tag reading", || {
        collect_tracks(&files, reader, translit, opts.strict, &mut summary)
    })?;
    info!(
        "found {} music files in {}",
        tracks.len(),
        opts.scan_dir.display()
    );
    if !summary.unreadable.is_empty() {
        warn!("{} unreadable audio files left in place", summary.unreadable.len());
    }

    let (index, stats) = timed("grouping", || group(tracks));
    summary.stats = stats;
    report_statistics(&summary.stats);
    if index.is_empty() {
        info!("nothing to organize in {}", opts.scan_dir.display());
        return Ok(summary);
    }

    let plan = timed("planning", || build_plan(&index))?;
    summary.planned = plan.len();

    if opts.dry_run {
        preview(&plan, &opts.target_dir);
        return Ok(summary);
    }

    if !fs.exists(&opts.target_dir) {
        debug!("creating target directory {}", opts.target_dir.display());
        fs.create_dir(&opts.target_dir)?;
    }

    summary.report = timed("moving", || materialize(&plan, &opts.target_dir, fs));
    info!(
        "moved {} of {} files into {}",
        summary.report.moved,
        plan.len(),
        opts.target_dir.display()
    );
    if !summary.is_success() {
        error!("{} files could not be moved", summary.report.failed());
    }

    if opts.show_tree && fs.exists(&opts.target_dir) {
        log_tree(&opts.target_dir);
    }

    Ok(summary)
}
