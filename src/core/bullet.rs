use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

pub const DEFAULT_BULLET: char = '-';

static BULLET_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"BULLET\s*=>\s*['"]\s*(?P<bullet>.)\s*['"]"#).unwrap()
});

/// How a `~`-prefixed rc path is checked for existence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HomeLookup {
    /// Test the path verbatim, so `~/.rerc` only matches a directory literally named `~`.
    Literal,
    /// Expand a leading `~` to the user's home directory first.
    Expanded,
}

impl HomeLookup {
    pub fn apply(&self, path: &Path) -> PathBuf {
        match self {
            Self::Literal => path.to_path_buf(),
            Self::Expanded => expand_home(path),
        }
    }
}

fn expand_home(path: &Path) -> PathBuf {
    let Ok(rest) = path.strip_prefix("~") else {
        return path.to_path_buf();
    };
    match dirs::home_dir() {
        Some(home) => home.join(rest),
        None => path.to_path_buf(),
    }
}

/// Extract the bullet from rc file content. The last assignment wins.
pub fn parse_bullet(content: &str) -> char {
    BULLET_RE
        .captures_iter(content)
        .filter_map(|caps| caps.name("bullet")?.as_str().chars().next())
        .last()
        .unwrap_or(DEFAULT_BULLET)
}

/// Resolve the bullet from the first rc path that exists.
pub fn resolve_bullet(paths: &[PathBuf], lookup: HomeLookup) -> char {
    let Some(path) = paths.iter().map(|p| lookup.apply(p)).find(|p| p.exists()) else {
        log::debug!("No rc file found, using default bullet '{}'", DEFAULT_BULLET);
        return DEFAULT_BULLET;
    };

    match std::fs::read_to_string(&path) {
        Ok(content) => parse_bullet(&content),
        Err(e) => {
            log::warn!("Failed to read {}: {}", path.display(), e);
            DEFAULT_BULLET
        }
    }
}
