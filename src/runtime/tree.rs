use std::fs;
use std::io;
use std::path::Path;

const BRANCH: &str = "├── ";
const LAST_BRANCH: &str = "└── ";
const PIPE: &str = "│   ";
const SPACE: &str = "    ";

fn display_name(path: &Path) -> String {
    let name = path
        .file_name()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());
    if path.is_dir() { format!("{name}/") } else { name }
}

fn walk(dir: &Path, prefix: &str, lines: &mut Vec<String>) -> io::Result<()> {
    let mut children = fs::read_dir(dir)?
        .map(|e| e.map(|e| e.path()))
        .collect::<io::Result<Vec<_>>>()?;
    children.sort_by_key(|p| p.to_string_lossy().to_lowercase());

    let count = children.len();
    for (i, child) in children.iter().enumerate() {
        let last = i + 1 == count;
        let branch = if last { LAST_BRANCH } else { BRANCH };
        lines.push(format!("{prefix}{branch}{}", display_name(child)));
        if child.is_dir() {
            let next = format!("{prefix}{}", if last { SPACE } else { PIPE });
            walk(child, &next, lines)?;
        }
    }
    Ok(())
}

/// Render the directory tree under `root`, one line per entry, children
/// sorted case-insensitively.
pub fn render(root: &Path) -> io::Result<Vec<String>> {
    let mut lines = vec![display_name(root)];
    walk(root, "", &mut lines)?;
    Ok(lines)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn render_draws_nested_entries() {
        let dir = tempdir().unwrap();
        let root = dir.path().join("music");
        fs::create_dir_all(root.join("abba").join("gold")).unwrap();
        fs::create_dir_all(root.join("Queen")).unwrap();
        fs::write(root.join("abba").join("gold").join("sos.mp3"), b"x").unwrap();
        fs::write(root.join("abba").join("gold").join("waterloo.mp3"), b"x").unwrap();
        fs::write(root.join("notes.txt"), b"x").unwrap();

        assert_eq!(
            render(&root).unwrap(),
            vec![
                "music/",
                "├── abba/",
                "│   └── gold/",
                "│       ├── sos.mp3",
                "│       └── waterloo.mp3",
                "├── notes.txt",
                "└── Queen/",
            ]
        );
    }

    #[test]
    fn render_of_empty_dir_is_just_the_root() {
        let dir = tempdir().unwrap();
        let root = dir.path().join("empty");
        fs::create_dir(&root).unwrap();
        assert_eq!(render(&root).unwrap(), vec!["empty/"]);
    }
}
