//! Run clang-tidy over every source file in a directory.

use crate::compile_db::{COMPILE_COMMANDS, CompileDatabase, resolve};
use crate::discovery::find_source_files;
use crate::runner::CommandRunner;
use crate::types::{FileReport, SourceConfig, Status};
use anyhow::Result;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Settings for a clang-tidy pass.
#[derive(Debug, Clone)]
pub struct TidyConfig {
    pub program: String,
    /// Build directory containing `compile_commands.json`, passed as `-p`.
    pub build_dir: PathBuf,
    pub checks: String,
    /// Apply suggested fixes in place.
    pub fix: bool,
}

impl Default for TidyConfig {
    fn default() -> Self {
        Self {
            program: "clang-tidy".to_string(),
            build_dir: PathBuf::from("build/debug-widgets"),
            checks: "readability-identifier-naming".to_string(),
            fix: true,
        }
    }
}

/// Arguments for one clang-tidy invocation on `file`.
pub fn tidy_args(file: &Path, config: &TidyConfig) -> Vec<OsString> {
    let mut args = vec![
        file.as_os_str().to_os_string(),
        OsString::from("-p"),
        config.build_dir.as_os_str().to_os_string(),
    ];
    if config.fix {
        args.push(OsString::from("-fix"));
    }
    args.push(OsString::from(format!("-checks={}", config.checks)));
    args
}

/// Run clang-tidy on every source file under `source_dir`.
///
/// Fails only when the compilation database is missing or unreadable. Each
/// file's outcome is returned as a report; a failing file does not stop the pass.
pub fn run_on_dir(
    source_dir: &Path,
    config: &TidyConfig,
    source: &SourceConfig,
    runner: &dyn CommandRunner,
) -> Result<Vec<FileReport>> {
    let db_path = config.build_dir.join(COMPILE_COMMANDS);
    if !db_path.exists() {
        anyhow::bail!("{} not found at {}", COMPILE_COMMANDS, db_path.display());
    }
    let db = CompileDatabase::load(&db_path)?;

    let files = find_source_files(source_dir, source);
    if files.is_empty() {
        log::warn!(
            "no {} files found in {}",
            source
                .extensions
                .iter()
                .map(|e| format!(".{}", e))
                .collect::<Vec<_>>()
                .join("/"),
            source_dir.display()
        );
        return Ok(Vec::new());
    }

    let mut reports = Vec::new();
    for file in &files {
        let resolved = resolve(file);
        let display = resolved.display().to_string();
        let indexed = db.contains(&resolved);
        if !indexed {
            log::warn!("not in {}: {}, processing anyway", COMPILE_COMMANDS, file.display());
        }
        println!("Running {} on: {}", config.program, display);

        let report = match runner.run(&config.program, &tidy_args(&resolved, config)) {
            Ok(status) if status.success => {
                let message = if indexed {
                    "clean".to_string()
                } else {
                    format!("clean (not in {})", COMPILE_COMMANDS)
                };
                FileReport::new(display, Status::Ok, message)
            }
            Ok(status) => FileReport::new(
                display,
                Status::Failed,
                format!("{} reported errors ({})", config.program, status.describe()),
            ),
            Err(e) => FileReport::new(display, Status::Failed, format!("{:#}", e)),
        };
        reports.push(report);
    }
    Ok(reports)
}
