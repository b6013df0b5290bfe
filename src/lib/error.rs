// SPDX-License-Identifier: Apache-2.0

use std::error::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum ErrorKind {
    /// Descriptor fields are missing, malformed or contradicting each other.
    InvalidArgument,
    /// Failed to read, write, rename or remove a unit file.
    IoError,
    /// Failed to clear the unit directory in destructive mode.
    DestructiveWipeError,
    Bug,
}

impl Default for ErrorKind {
    fn default() -> Self {
        Self::Bug
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{self:?}")
    }
}

impl std::fmt::Display for NdstateError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.kind, self.msg)
    }
}

impl Error for NdstateError {}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub struct NdstateError {
    kind: ErrorKind,
    msg: String,
}

impl NdstateError {
    pub fn new(kind: ErrorKind, msg: String) -> Self {
        Self { kind, msg }
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    pub fn msg(&self) -> &str {
        self.msg.as_str()
    }

    pub(crate) fn invalid_argument(msg: String) -> Self {
        let e = Self::new(ErrorKind::InvalidArgument, msg);
        log::error!("{}", e);
        e
    }

    pub(crate) fn io(
        action: &str,
        path: &std::path::Path,
        e: &std::io::Error,
    ) -> Self {
        let e = Self::new(
            ErrorKind::IoError,
            format!("Failed to {action} {}: {e}", path.display()),
        );
        log::error!("{}", e);
        e
    }
}

impl From<serde_yaml::Error> for NdstateError {
    fn from(e: serde_yaml::Error) -> Self {
        NdstateError::new(
            ErrorKind::InvalidArgument,
            format!("Invalid YAML string: {e}"),
        )
    }
}
