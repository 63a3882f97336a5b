//! Namespace injection: wrap the code portion of each source file in
//! `namespace <root>::<dir>::<subdir> { ... }`.

use crate::discovery::{find_source_files, is_excluded};
use crate::runner::CommandRunner;
use crate::scanner::{find_first_code_line, split_lines};
use crate::types::{FileReport, NamespaceConfig, Status};
use anyhow::{Context, Result};
use std::ffi::OsString;
use std::path::{Component, Path};

const INDENT: &str = "    ";

/// Result of attempting to wrap one file's content.
#[derive(Debug, PartialEq, Eq)]
pub enum WrapOutcome {
    AlreadyNamespaced,
    NoCode,
    Wrapped(String),
}

/// Build the qualified namespace for a file living in `relative_dir`.
pub fn namespace_for(root_namespace: &str, relative_dir: &Path) -> String {
    let mut parts = vec![root_namespace.to_string()];
    for comp in relative_dir.components() {
        if let Component::Normal(name) = comp {
            parts.push(name.to_string_lossy().to_string());
        }
    }
    parts.join("::")
}

/// Wrap everything from the first code line onward in `namespace`.
pub fn wrap_source(content: &str, namespace: &str) -> WrapOutcome {
    let lines = split_lines(content);
    let marker = format!("namespace {}", namespace);
    if lines.iter().any(|l| l.contains(&marker)) {
        return WrapOutcome::AlreadyNamespaced;
    }

    let Some(insert_at) = find_first_code_line(&lines) else {
        return WrapOutcome::NoCode;
    };

    let mut out = String::with_capacity(content.len() + lines.len() * INDENT.len() + 64);
    for line in &lines[..insert_at] {
        out.push_str(line);
    }
    out.push_str(&format!("\nnamespace {} {{\n\n", namespace));
    for line in &lines[insert_at..] {
        if line.trim().is_empty() {
            out.push('\n');
        } else {
            out.push_str(INDENT);
            out.push_str(line);
        }
    }
    if !out.ends_with('\n') {
        out.push('\n');
    }
    out.push_str(&format!("}} // namespace {}\n", namespace));

    WrapOutcome::Wrapped(out)
}

/// Wrap a single file in place and run the formatter over it.
pub fn wrap_file(
    path: &Path,
    namespace: &str,
    formatter: Option<&str>,
    runner: &dyn CommandRunner,
) -> Result<FileReport> {
    let display = path.display().to_string();
    let content =
        std::fs::read_to_string(path).with_context(|| format!("reading {}", display))?;

    let wrapped = match wrap_source(&content, namespace) {
        WrapOutcome::AlreadyNamespaced => {
            return Ok(FileReport::new(
                display,
                Status::Skipped,
                format!("already contains namespace {}", namespace),
            ));
        }
        WrapOutcome::NoCode => {
            return Ok(FileReport::new(display, Status::Skipped, "no code found"));
        }
        WrapOutcome::Wrapped(w) => w,
    };

    std::fs::write(path, wrapped).with_context(|| format!("writing {}", display))?;
    log::info!("wrapped {} in {}", display, namespace);

    let Some(formatter) = formatter else {
        return Ok(FileReport::new(display, Status::Ok, "namespaced"));
    };

    let args = vec![OsString::from("-i"), path.as_os_str().to_os_string()];
    match runner.run(formatter, &args) {
        Ok(status) if status.success => Ok(FileReport::new(display, Status::Ok, "namespaced")),
        Ok(status) => Ok(FileReport::new(
            display,
            Status::Warning,
            format!("{} failed: {}", formatter, status.describe()),
        )),
        Err(e) => Ok(FileReport::new(
            display,
            Status::Warning,
            format!("{} failed: {:#}", formatter, e),
        )),
    }
}

/// Wrap every source file under `root` in the namespace matching its directory.
pub fn process_directory(
    root: &Path,
    config: &NamespaceConfig,
    runner: &dyn CommandRunner,
) -> Result<Vec<FileReport>> {
    if !root.is_dir() {
        anyhow::bail!("not a directory: {}", root.display());
    }

    let mut reports = Vec::new();
    for file in find_source_files(root, &config.source) {
        if is_excluded(&file, &config.excludes) {
            log::debug!("excluded: {}", file.display());
            continue;
        }
        let rel = file.strip_prefix(root).unwrap_or(&file);
        let dir = rel.parent().unwrap_or_else(|| Path::new(""));
        let namespace = namespace_for(&config.root_namespace, dir);

        match wrap_file(&file, &namespace, config.formatter.as_deref(), runner) {
            Ok(report) => reports.push(report),
            Err(e) => {
                log::error!("{:#}", e);
                reports.push(FileReport::new(
                    file.display().to_string(),
                    Status::Failed,
                    format!("{:#}", e),
                ));
            }
        }
    }
    Ok(reports)
}
