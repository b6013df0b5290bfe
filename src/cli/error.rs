// SPDX-License-Identifier: Apache-2.0

use ndstate::{ErrorKind, NdstateError};

pub(crate) const DEFAULT_ERROR_CODE: i32 = 1;
pub(crate) const EX_DATAERR: i32 = 65;
pub(crate) const EX_USAGE: i32 = 64;

/// Error printed to stderr, `code` is the process exit code.
#[derive(Debug)]
pub(crate) struct CliError {
    pub(crate) code: i32,
    pub(crate) error_msg: String,
}

impl CliError {
    pub(crate) fn new(code: i32, error_msg: String) -> Self {
        Self { code, error_msg }
    }

    /// Invalid state file or a failed interface.
    pub(crate) fn data_error(error_msg: String) -> Self {
        Self::new(EX_DATAERR, error_msg)
    }
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.error_msg)
    }
}

impl From<String> for CliError {
    fn from(error_msg: String) -> Self {
        Self::new(DEFAULT_ERROR_CODE, error_msg)
    }
}

impl From<std::io::Error> for CliError {
    fn from(e: std::io::Error) -> Self {
        Self::new(DEFAULT_ERROR_CODE, format!("std::io::Error: {e}"))
    }
}

impl From<NdstateError> for CliError {
    fn from(e: NdstateError) -> Self {
        match e.kind() {
            ErrorKind::InvalidArgument => Self::data_error(e.to_string()),
            _ => Self::new(DEFAULT_ERROR_CODE, e.to_string()),
        }
    }
}

impl From<serde_yaml::Error> for CliError {
    fn from(e: serde_yaml::Error) -> Self {
        Self::data_error(format!("serde_yaml::Error: {e}"))
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        Self::data_error(format!("serde_json::Error: {e}"))
    }
}

impl From<clap::Error> for CliError {
    fn from(e: clap::Error) -> Self {
        Self::new(EX_USAGE, e.render().to_string())
    }
}
