//! `compile_commands.json` loading and lookup.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Component, Path, PathBuf};

/// File name clang tooling expects inside a build directory.
pub const COMPILE_COMMANDS: &str = "compile_commands.json";

/// One entry of a JSON compilation database.
#[derive(Debug, Clone, Deserialize)]
pub struct CompileCommand {
    pub directory: PathBuf,
    pub file: PathBuf,
    #[serde(default)]
    pub command: Option<String>,
    #[serde(default)]
    pub arguments: Option<Vec<String>>,
    #[serde(default)]
    pub output: Option<PathBuf>,
}

/// Compile commands indexed by absolute source path.
#[derive(Debug, Default)]
pub struct CompileDatabase {
    entries: HashMap<PathBuf, CompileCommand>,
}

impl CompileDatabase {
    /// Load `path` and index every entry by its resolved file path.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        let db = Self::from_json(&content)
            .with_context(|| format!("parsing {}", path.display()))?;
        log::info!("loaded {} compile command(s) from {}", db.len(), path.display());
        Ok(db)
    }

    pub fn from_json(content: &str) -> Result<Self> {
        let commands: Vec<CompileCommand> = serde_json::from_str(content)?;
        let entries = commands
            .into_iter()
            .map(|cmd| (resolve(&cmd.directory.join(&cmd.file)), cmd))
            .collect();
        Ok(Self { entries })
    }

    /// Look up the entry for a source file, resolving it like the index keys.
    pub fn get(&self, file: &Path) -> Option<&CompileCommand> {
        self.entries.get(&resolve(file))
    }

    pub fn contains(&self, file: &Path) -> bool {
        self.get(file).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Absolute, symlink-resolved form of `path`.
///
/// Falls back to lexical normalization when the file does not exist.
pub fn resolve(path: &Path) -> PathBuf {
    if let Ok(p) = path.canonicalize() {
        return p;
    }
    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()
            .unwrap_or_else(|_| PathBuf::from("."))
            .join(path)
    };
    let mut out = PathBuf::new();
    for comp in absolute.components() {
        match comp {
            Component::CurDir => {}
            Component::ParentDir => {
                out.pop();
            }
            other => out.push(other.as_os_str()),
        }
    }
    out
}
