use std::collections::HashSet;
use std::path::{Path, PathBuf};

use tracing::{debug, error, info};

use crate::error::FsError;
use crate::fs::Filesystem;
use crate::plan::PlanEntry;

#[derive(Debug, Default)]
pub struct MaterializeReport {
    pub moved: usize,
    pub dirs_created: usize,
    pub dirs_reused: usize,
    pub failures: Vec<FsError>,
}

impl MaterializeReport {
    pub fn failed(&self) -> usize {
        self.failures.len()
    }
}

struct DirCache<'a> {
    fs: &'a dyn Filesystem,
    ready: HashSet<PathBuf>,
}

impl DirCache<'_> {
    /// Make sure `dir` exists, creating it when missing. Directories left over
    /// from an earlier run are reused as they are.
    fn ensure(&mut self, dir: &Path, report: &mut MaterializeReport) -> Result<(), FsError> {
        if self.ready.contains(dir) {
            return Ok(());
        }
        if self.fs.exists(dir) {
            report.dirs_reused += 1;
        } else {
            debug!("creating directory {}", dir.display());
            self.fs.create_dir(dir)?;
            report.dirs_created += 1;
        }
        self.ready.insert(dir.to_path_buf());
        Ok(())
    }
}

fn move_one(
    entry: &PlanEntry,
    target: &Path,
    dirs: &mut DirCache<'_>,
    report: &mut MaterializeReport,
) -> Result<(), FsError> {
    let album_dir = entry.destination.parent().unwrap_or(Path::new(""));
    let artist_dir = album_dir.parent().unwrap_or(Path::new(""));

    dirs.ensure(&target.join(artist_dir), report)?;
    dirs.ensure(&target.join(album_dir), report)?;

    let to = target.join(&entry.destination);
    debug!("moving {} to {}", entry.source.display(), to.display());
    dirs.fs.rename(&entry.source, &to)
}

/// Execute `plan` against `fs`, one entry at a time.
///
/// A failing entry is logged and recorded in the report; the remaining
/// entries are still attempted. Files already moved stay where they are.
pub fn materialize(plan: &[PlanEntry], target: &Path, fs: &dyn Filesystem) -> MaterializeReport {
    let mut report = MaterializeReport::default();
    let mut dirs = DirCache {
        fs,
        ready: HashSet::new(),
    };

    for entry in plan {
        match move_one(entry, target, &mut dirs, &mut report) {
            Ok(()) => report.moved += 1,
            Err(e) => {
                error!("{e}");
                report.failures.push(e);
            }
        }
    }

    debug!(
        "created {} directories, reused {}",
        report.dirs_created, report.dirs_reused
    );
    report
}

/// Log what [`materialize`] would do, touching nothing.
pub fn preview(plan: &[PlanEntry], target: &Path) {
    for entry in plan {
        info!(
            "would move {} -> {}",
            entry.source.display(),
            target.join(&entry.destination).display()
        );
    }
    info!("dry run, {} files left in place", plan.len());
}
