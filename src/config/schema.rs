use serde::Deserialize;

/// Top-level settings loaded from `config.toml`.
///
/// File format: TOML
/// Default path (Linux/XDG): `$XDG_CONFIG_HOME/tunesort/config.toml` or `~/.config/tunesort/config.toml`
///
/// Precedence (highest wins):
/// 1) Command-line flags
/// 2) Environment variables (prefix `TUNESORT__`, `__` as nested separator)
/// 3) Config file (if present)
/// 4) Struct defaults
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub scan: ScanSettings,
    pub organize: OrganizeSettings,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ScanSettings {
    /// Whether to follow symlinks while walking the scan directory.
    pub follow_links: bool,
    /// Whether to include hidden files/directories (dotfiles).
    pub include_hidden: bool,
    /// Optional cap on directory recursion depth. The scan root is depth 0.
    pub max_depth: Option<usize>,
}

impl Default for ScanSettings {
    fn default() -> Self {
        Self {
            follow_links: false,
            include_hidden: true,
            max_depth: None,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OrganizeSettings {
    /// Log the planned moves instead of performing them.
    pub dry_run: bool,
    /// Abort the whole run on the first audio file whose tags can't be read.
    /// Otherwise such files are skipped and counted.
    pub strict: bool,
    /// Log the resulting target tree at debug level once files are moved.
    pub show_tree: bool,
}

impl Default for OrganizeSettings {
    fn default() -> Self {
        Self {
            dry_run: false,
            strict: false,
            show_tree: true,
        }
    }
}
