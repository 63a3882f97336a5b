//! Running external tools (clang-format, clang-tidy).

use anyhow::{Context, Result};
use std::ffi::OsString;
use std::process::Command;

/// Exit information of a finished tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToolStatus {
    pub success: bool,
    pub code: Option<i32>,
}

impl ToolStatus {
    pub fn describe(&self) -> String {
        match self.code {
            Some(code) => format!("exit code {}", code),
            None => "terminated by signal".to_string(),
        }
    }
}

/// Something that can run a program to completion.
pub trait CommandRunner {
    /// Run `program` with `args`, returning once it exits.
    ///
    /// Arguments are passed through untouched, so non-UTF-8 paths survive.
    /// An `Err` means the program could not be started at all.
    fn run(&self, program: &str, args: &[OsString]) -> Result<ToolStatus>;
}

/// Runs tools as child processes that share this process's stdio.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn run(&self, program: &str, args: &[OsString]) -> Result<ToolStatus> {
        log::debug!("exec: {} {:?}", program, args);
        let status = Command::new(program)
            .args(args)
            .status()
            .with_context(|| format!("failed to run {}", program))?;
        Ok(ToolStatus {
            success: status.success(),
            code: status.code(),
        })
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;
    use std::cell::RefCell;
    use std::collections::HashMap;

    /// Records invocations instead of spawning anything.
    #[derive(Default)]
    pub struct RecordingRunner {
        pub calls: RefCell<Vec<(String, Vec<OsString>)>>,
        /// Exit codes keyed by an argument that must appear in the call.
        pub exit_codes: HashMap<String, i32>,
        /// Programs that fail to start.
        pub missing: Vec<String>,
    }

    impl RecordingRunner {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn programs(&self) -> Vec<String> {
            self.calls.borrow().iter().map(|(p, _)| p.clone()).collect()
        }
    }

    impl CommandRunner for RecordingRunner {
        fn run(&self, program: &str, args: &[OsString]) -> Result<ToolStatus> {
            self.calls
                .borrow_mut()
                .push((program.to_string(), args.to_vec()));
            if self.missing.iter().any(|m| m == program) {
                anyhow::bail!("No such file or directory (os error 2)");
            }
            let code = args
                .iter()
                .find_map(|a| a.to_str().and_then(|a| self.exit_codes.get(a).copied()))
                .unwrap_or(0);
            Ok(ToolStatus {
                success: code == 0,
                code: Some(code),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn describe_status() {
        let ok = ToolStatus { success: true, code: Some(0) };
        assert_eq!(ok.describe(), "exit code 0");
        let killed = ToolStatus { success: false, code: None };
        assert_eq!(killed.describe(), "terminated by signal");
    }

    #[test]
    fn system_runner_reports_spawn_failure() {
        let err = SystemRunner
            .run("cxx-codemod-definitely-not-a-real-tool", &[])
            .unwrap_err();
        assert!(err.to_string().contains("failed to run"));
    }
}
