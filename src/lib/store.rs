// SPDX-License-Identifier: Apache-2.0

use std::collections::HashMap;
use std::fs::File;
use std::io::{ErrorKind as IoErrorKind, Write};
use std::path::{Path, PathBuf};

use crate::{ErrorKind, NdstateError, ReconcileAction, UnitKind};

/// Directory holding the unit files consumed by systemd-networkd.
///
/// At most one writer is expected per directory, no locking is done.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnitStore {
    dir: PathBuf,
}

impl Default for UnitStore {
    fn default() -> Self {
        Self::new(Self::DEFAULT_UNIT_DIR)
    }
}

impl UnitStore {
    pub const DEFAULT_UNIT_DIR: &'static str = "/etc/systemd/network";

    pub fn new<P: Into<PathBuf>>(dir: P) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        self.dir.as_path()
    }

    pub fn unit_path(&self, iface_name: &str, kind: UnitKind) -> PathBuf {
        self.dir.join(kind.file_name(iface_name))
    }

    /// Content of the unit file, `None` if it does not exist.
    pub fn read(
        &self,
        iface_name: &str,
        kind: UnitKind,
    ) -> Result<Option<Vec<u8>>, NdstateError> {
        let path = self.unit_path(iface_name, kind);
        match std::fs::read(&path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == IoErrorKind::NotFound => Ok(None),
            Err(e) => Err(NdstateError::io("read", &path, &e)),
        }
    }

    /// All unit files currently stored for specified interface.
    pub fn existing(
        &self,
        iface_name: &str,
    ) -> Result<HashMap<UnitKind, Vec<u8>>, NdstateError> {
        let mut ret = HashMap::new();
        for kind in UnitKind::ALL {
            if let Some(content) = self.read(iface_name, kind)? {
                ret.insert(kind, content);
            }
        }
        Ok(ret)
    }

    /// Apply the actions in order, return whether anything changed on disk.
    pub fn apply(
        &self,
        actions: &[ReconcileAction],
    ) -> Result<bool, NdstateError> {
        let mut changed = false;
        for action in actions {
            match action {
                ReconcileAction::Create(unit) => {
                    let path = self.write(&unit.file_name(), &unit.content)?;
                    log::info!("Created {}", path.display());
                    changed = true;
                }
                ReconcileAction::Update(unit) => {
                    let path = self.write(&unit.file_name(), &unit.content)?;
                    log::info!("Updated {}", path.display());
                    changed = true;
                }
                ReconcileAction::Delete { iface_name, kind } => {
                    if self.remove(&self.unit_path(iface_name, *kind))? {
                        changed = true;
                    }
                }
                ReconcileAction::NoOp { .. } => {
                    log::debug!("{} is up to date", action.file_name());
                }
            }
        }
        Ok(changed)
    }

    /// Remove every `.link`, `.network` and `.netdev` file or symlink of the
    /// directory, other entries are left untouched. Returns the removed file
    /// names.
    pub fn wipe(&self) -> Result<Vec<String>, NdstateError> {
        let mut removed = Vec::new();
        let entries = match std::fs::read_dir(&self.dir) {
            Ok(e) => e,
            Err(e) if e.kind() == IoErrorKind::NotFound => return Ok(removed),
            Err(e) => return Err(wipe_error(&self.dir, &e)),
        };

        let mut paths = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| wipe_error(&self.dir, &e))?;
            let path = entry.path();
            // Links are not followed, masking and dangling links included
            let file_type =
                entry.file_type().map_err(|e| wipe_error(&path, &e))?;
            if (file_type.is_file() || file_type.is_symlink())
                && is_unit_file_name(&path)
            {
                paths.push(path);
            }
        }
        paths.sort_unstable();

        for path in paths {
            match std::fs::remove_file(&path) {
                Ok(()) => (),
                Err(e) if e.kind() == IoErrorKind::NotFound => continue,
                Err(e) => return Err(wipe_error(&path, &e)),
            }
            log::info!("Removed {}", path.display());
            if let Some(file_name) = path.file_name() {
                removed.push(file_name.to_string_lossy().to_string());
            }
        }
        Ok(removed)
    }

    fn write(
        &self,
        file_name: &str,
        content: &str,
    ) -> Result<PathBuf, NdstateError> {
        std::fs::create_dir_all(&self.dir).map_err(|e| {
            NdstateError::io("create directory", &self.dir, &e)
        })?;
        let dest = self.dir.join(file_name);
        let mut tmp = TmpUnitFile::create(&self.dir, file_name)?;
        tmp.write_all(content.as_bytes())?;
        tmp.persist(&dest)?;
        Ok(dest)
    }

    // Removing a file which does not exist is not an error.
    fn remove(&self, path: &Path) -> Result<bool, NdstateError> {
        match std::fs::remove_file(path) {
            Ok(()) => {
                log::info!("Removed {}", path.display());
                Ok(true)
            }
            Err(e) if e.kind() == IoErrorKind::NotFound => Ok(false),
            Err(e) => Err(NdstateError::io("remove", path, &e)),
        }
    }
}

fn is_unit_file_name(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .and_then(UnitKind::from_extension)
        .is_some()
}

fn wipe_error(path: &Path, e: &std::io::Error) -> NdstateError {
    let e = NdstateError::new(
        ErrorKind::DestructiveWipeError,
        format!("Failed to clear unit directory at {}: {e}", path.display()),
    );
    log::error!("{}", e);
    e
}

/// Hidden temporary file in the unit directory, renamed over its target on
/// [TmpUnitFile::persist] and removed when dropped otherwise.
struct TmpUnitFile {
    path: PathBuf,
    fd: Option<File>,
}

impl TmpUnitFile {
    fn create(dir: &Path, file_name: &str) -> Result<Self, NdstateError> {
        let path =
            dir.join(format!(".{}.{}.tmp", file_name, uuid::Uuid::new_v4()));
        let fd = File::create(&path)
            .map_err(|e| NdstateError::io("create", &path, &e))?;
        Ok(Self { path, fd: Some(fd) })
    }

    fn write_all(&mut self, data: &[u8]) -> Result<(), NdstateError> {
        if let Some(fd) = self.fd.as_mut() {
            fd.write_all(data)
                .and_then(|()| fd.sync_all())
                .map_err(|e| NdstateError::io("write", &self.path, &e))?;
        }
        Ok(())
    }

    fn persist(mut self, dest: &Path) -> Result<(), NdstateError> {
        // Close before rename
        self.fd.take();
        std::fs::rename(&self.path, dest)
            .map_err(|e| NdstateError::io("rename", dest, &e))?;
        self.path = PathBuf::new();
        Ok(())
    }
}

impl Drop for TmpUnitFile {
    fn drop(&mut self) {
        if !self.path.as_os_str().is_empty() {
            if let Err(e) = std::fs::remove_file(&self.path) {
                log::warn!(
                    "Failed to remove temporary file {}: {e}",
                    self.path.display()
                );
            }
        }
    }
}
