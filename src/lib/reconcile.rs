// SPDX-License-Identifier: Apache-2.0

use std::collections::HashMap;

use serde::Serialize;

use crate::{UnitFile, UnitKind, UnitSet};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case", tag = "action")]
pub enum ReconcileAction {
    Create(UnitFile),
    Update(UnitFile),
    Delete { iface_name: String, kind: UnitKind },
    NoOp { iface_name: String, kind: UnitKind },
}

impl ReconcileAction {
    pub fn is_noop(&self) -> bool {
        matches!(self, Self::NoOp { .. })
    }

    pub fn file_name(&self) -> String {
        match self {
            Self::Create(f) | Self::Update(f) => f.file_name(),
            Self::Delete { iface_name, kind }
            | Self::NoOp { iface_name, kind } => kind.file_name(iface_name),
        }
    }
}

/// Actions needed to bring the unit files of one interface to the desired
/// state.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct Reconciliation {
    pub iface_name: String,
    pub actions: Vec<ReconcileAction>,
}

impl Reconciliation {
    pub fn changed(&self) -> bool {
        self.actions.iter().any(|a| !a.is_noop())
    }
}

/// Compare the desired unit set of `iface_name`, `None` meaning the interface
/// is absent, against the content currently stored for each unit kind.
pub fn reconcile(
    iface_name: &str,
    desired: Option<&UnitSet>,
    existing: &HashMap<UnitKind, Vec<u8>>,
) -> Reconciliation {
    let mut actions = Vec::new();
    for kind in UnitKind::ALL {
        let desired_content = desired.and_then(|d| d.get(kind));
        let cur_content = existing.get(&kind);
        let action = match (desired_content, cur_content) {
            (Some(content), None) => ReconcileAction::Create(UnitFile {
                iface_name: iface_name.to_string(),
                kind,
                content: content.to_string(),
            }),
            (Some(content), Some(cur))
                if content.as_bytes() != cur.as_slice() =>
            {
                ReconcileAction::Update(UnitFile {
                    iface_name: iface_name.to_string(),
                    kind,
                    content: content.to_string(),
                })
            }
            (None, Some(_)) => ReconcileAction::Delete {
                iface_name: iface_name.to_string(),
                kind,
            },
            _ => ReconcileAction::NoOp {
                iface_name: iface_name.to_string(),
                kind,
            },
        };
        log::debug!("{}: {:?}", kind.file_name(iface_name), action);
        actions.push(action);
    }
    Reconciliation {
        iface_name: iface_name.to_string(),
        actions,
    }
}
