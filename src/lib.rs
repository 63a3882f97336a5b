//! Bulk edits for C/C++ source trees: namespace injection and clang-tidy passes.

mod compile_db;
mod discovery;
mod namespace;
mod report;
mod runner;
mod scanner;
mod tidy;
mod types;

pub use compile_db::{COMPILE_COMMANDS, CompileCommand, CompileDatabase};
pub use discovery::{find_source_files, is_excluded};
pub use namespace::{WrapOutcome, namespace_for, process_directory, wrap_file, wrap_source};
pub use report::{Summary, format_report, print_reports};
pub use runner::{CommandRunner, SystemRunner, ToolStatus};
pub use scanner::{LineClass, classify_line, find_first_code_line, split_lines};
pub use tidy::{TidyConfig, run_on_dir, tidy_args};
pub use types::{FileReport, NamespaceConfig, SourceConfig, Status};

use anyhow::Result;
use std::path::Path;

/// Run the namespace pass over `root` and print the results.
pub fn run_namespaces(
    config: &NamespaceConfig,
    root: &Path,
    runner: &dyn CommandRunner,
) -> Result<Summary> {
    println!(
        "Injecting {}::<dir> namespaces under {}...\n",
        config.root_namespace,
        root.display()
    );
    let reports = process_directory(root, config, runner)?;
    Ok(print_reports(&reports))
}

/// Run clang-tidy over `source_dir` and print the results.
pub fn run_tidy(
    config: &TidyConfig,
    source: &SourceConfig,
    source_dir: &Path,
    runner: &dyn CommandRunner,
) -> Result<Summary> {
    let reports = run_on_dir(source_dir, config, source, runner)?;
    if reports.is_empty() {
        println!("No source files found in {}", source_dir.display());
        return Ok(Summary::default());
    }
    println!();
    Ok(print_reports(&reports))
}
