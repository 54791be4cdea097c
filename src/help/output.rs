//! The three values handed back to the command runner

use crate::error::ResolveError;

/// Process exit status of a help invocation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitStatus {
    Success,
    /// The selector did not resolve to exactly one template
    NotFound,
    /// A parameter was unknown, missing its value or given an invalid value
    InvalidOption,
}

impl ExitStatus {
    pub fn code(self) -> i32 {
        match self {
            ExitStatus::Success => 0,
            ExitStatus::NotFound => 103,
            ExitStatus::InvalidOption => 127,
        }
    }

    pub fn for_error(err: &ResolveError) -> Self {
        if err.is_selection_error() {
            ExitStatus::NotFound
        } else {
            ExitStatus::InvalidOption
        }
    }
}

/// Rendered result of one invocation.
///
/// Success writes only to `stdout`, failure only to `stderr`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HelpOutput {
    pub stdout: String,
    pub stderr: String,
    pub status: ExitStatus,
}

impl HelpOutput {
    pub fn success(stdout: String) -> Self {
        Self {
            stdout,
            stderr: String::new(),
            status: ExitStatus::Success,
        }
    }

    pub fn failure(stderr: String, status: ExitStatus) -> Self {
        Self {
            stdout: String::new(),
            stderr,
            status,
        }
    }

    pub fn exit_code(&self) -> i32 {
        self.status.code()
    }

    pub fn is_success(&self) -> bool {
        self.status == ExitStatus::Success
    }
}
