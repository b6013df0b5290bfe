// SPDX-License-Identifier: Apache-2.0

use crate::{NdstateError, UnitKind, ValidatedInterface};

/// Linux `IFNAMSIZ`, including the trailing NUL.
pub(crate) const IFNAMSIZ: usize = 16;

/// Names derived from a validated descriptor.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[non_exhaustive]
pub struct ResolvedNames {
    /// Stem of the `.link`, `.network` and `.netdev` files.
    pub base: String,
    /// VLAN interfaces announced by a host descriptor. Each of them is
    /// expected to be configured by its own descriptor.
    pub vlan_children: Vec<String>,
    /// MACVLAN interfaces announced by a host descriptor.
    pub macvlan_children: Vec<String>,
}

impl ResolvedNames {
    pub fn unit_file_name(&self, kind: UnitKind) -> String {
        kind.file_name(&self.base)
    }

    pub fn children(&self) -> impl Iterator<Item = &str> {
        self.vlan_children
            .iter()
            .chain(self.macvlan_children.iter())
            .map(|s| s.as_str())
    }
}

/// Derive the unit file stem and, for host-style descriptors, the child
/// interface names announced in `vlan` and `macvlan`. The base name was
/// already checked by [crate::validate].
pub fn resolve(
    iface: &ValidatedInterface,
) -> Result<ResolvedNames, NdstateError> {
    let desc = iface.descriptor();

    let vlan_children = iface
        .vlan()
        .map(|v| v.children().to_vec())
        .unwrap_or_default();
    let macvlan_children = iface.macvlan_children().to_vec();

    for child in vlan_children.iter().chain(macvlan_children.iter()) {
        validate_ifname(child)?;
        if child == &desc.name {
            return Err(NdstateError::invalid_argument(format!(
                "Interface {} cannot list itself as child interface",
                desc.name
            )));
        }
    }
    if let Some(dup) = find_duplicate(&vlan_children, &macvlan_children) {
        return Err(NdstateError::invalid_argument(format!(
            "Child interface {dup} is listed more than once by interface {}",
            desc.name
        )));
    }

    Ok(ResolvedNames {
        base: desc.name.clone(),
        vlan_children,
        macvlan_children,
    })
}

fn find_duplicate<'a>(a: &'a [String], b: &'a [String]) -> Option<&'a str> {
    let all: Vec<&str> =
        a.iter().chain(b.iter()).map(|s| s.as_str()).collect();
    for (i, name) in all.iter().enumerate() {
        if all[i + 1..].contains(name) {
            return Some(*name);
        }
    }
    None
}

/// Interface names end up both as kernel interface names and as unit file
/// stems in a shared directory.
pub(crate) fn validate_ifname(name: &str) -> Result<(), NdstateError> {
    let reason = if name.is_empty() {
        Some("empty name".to_string())
    } else if name.len() >= IFNAMSIZ {
        Some(format!("name too long (max {} chars)", IFNAMSIZ - 1))
    } else if name == "." || name == ".." {
        Some("name is a relative directory".to_string())
    } else if name.contains('/') || name.contains('\0') {
        Some("name contains invalid characters".to_string())
    } else if name.chars().any(|c| c.is_whitespace()) {
        Some("name contains whitespace".to_string())
    } else {
        None
    };
    match reason {
        Some(reason) => Err(NdstateError::invalid_argument(format!(
            "Invalid interface name '{name}': {reason}"
        ))),
        None => Ok(()),
    }
}
