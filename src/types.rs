//! Core types shared by the namespace and tidy passes.

use std::path::{Path, PathBuf};

/// Which files a directory pass picks up.
///
/// `cxx()` matches the `.cpp`/`.h` layout; `cxx_extended()` covers mixed C/C++ trees.
#[derive(Debug, Clone)]
pub struct SourceConfig {
    /// Source file extensions, without the dot. Discovery yields files grouped
    /// by extension in this order.
    pub extensions: Vec<String>,

    /// Directory names skipped anywhere in the tree.
    pub skip_dirs: Vec<&'static str>,
}

impl SourceConfig {
    /// `.cpp` implementation files and `.h` headers.
    pub fn cxx() -> Self {
        Self {
            extensions: vec!["cpp".to_string(), "h".to_string()],
            skip_dirs: vec![".git"],
        }
    }

    /// Broader C/C++ coverage: adds C sources and the other common header
    /// and implementation suffixes.
    pub fn cxx_extended() -> Self {
        Self {
            extensions: ["cpp", "cc", "cxx", "c", "h", "hpp", "hh", "hxx"]
                .iter()
                .map(|e| e.to_string())
                .collect(),
            skip_dirs: vec![".git", "build", "third_party"],
        }
    }

    pub fn with_extensions(mut self, extensions: &[String]) -> Self {
        if !extensions.is_empty() {
            self.extensions = extensions
                .iter()
                .map(|e| e.trim_start_matches('.').to_string())
                .collect();
        }
        self
    }
}

/// Settings for the namespace pass.
#[derive(Debug, Clone)]
pub struct NamespaceConfig {
    /// Outermost namespace every file is placed under.
    pub root_namespace: String,

    /// Absolute directories whose contents are left alone.
    pub excludes: Vec<PathBuf>,

    /// Formatter run as `<formatter> -i <file>` after a rewrite. `None` skips formatting.
    pub formatter: Option<String>,

    pub source: SourceConfig,
}

impl NamespaceConfig {
    pub fn pkt() -> Self {
        Self {
            root_namespace: "pkt".to_string(),
            excludes: Vec::new(),
            formatter: Some("clang-format".to_string()),
            source: SourceConfig::cxx(),
        }
    }

    /// Resolve `--exclude` arguments (relative to `root`) into absolute paths.
    pub fn exclude_relative(mut self, root: &Path, dirs: &[PathBuf]) -> Self {
        self.excludes = dirs.iter().map(|d| root.join(d)).collect();
        self
    }
}

/// Outcome class of a single processed file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Ok,
    Skipped,
    Warning,
    Failed,
}

/// What happened to one file during a pass.
#[derive(Debug, Clone)]
pub struct FileReport {
    pub file: String,
    pub status: Status,
    pub message: String,
}

impl FileReport {
    pub fn new(file: impl Into<String>, status: Status, message: impl Into<String>) -> Self {
        Self {
            file: file.into(),
            status,
            message: message.into(),
        }
    }
}
