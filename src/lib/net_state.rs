// SPDX-License-Identifier: Apache-2.0

use serde::{Deserialize, Serialize};

use crate::{
    reconcile, resolve, synthesize, validate, InterfaceDescriptor,
    Interfaces, NdstateError, ResolvedNames, UnitStore, ValidatedInterface,
};

#[derive(Clone, Debug, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
#[non_exhaustive]
/// The [NetworkState] is the batch of interface descriptors applied in one
/// invocation.
///
/// Example yaml:
///
/// ```yaml
/// interfaces:
/// - name: eth0
///   state: present
///   mac: 00:11:22:33:44:55
///   ip4: 1.2.3.4
///   gw4: 1.1.1.1
///   dns4:
///   - 4.3.2.1
/// - name: br0
///   type: bridge
///   bridge-type: none
///   ip4: 192.168.0.1
/// - name: eth42
///   bridge: br0
/// ```
pub struct NetworkState {
    #[serde(default)]
    /// Network interfaces
    pub interfaces: Interfaces,
}

/// Outcome of one descriptor, reported back to the caller.
#[derive(Clone, Debug, Serialize, Default, PartialEq, Eq)]
#[non_exhaustive]
pub struct InterfaceResult {
    pub name: String,
    pub changed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Clone, Debug, Serialize, Default, PartialEq, Eq)]
#[non_exhaustive]
pub struct ApplyReport {
    /// Unit files removed by destructive mode.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub wiped: Vec<String>,
    pub interfaces: Vec<InterfaceResult>,
}

impl ApplyReport {
    pub fn changed(&self) -> bool {
        !self.wiped.is_empty() || self.interfaces.iter().any(|i| i.changed)
    }

    pub fn has_error(&self) -> bool {
        self.interfaces.iter().any(|i| i.error.is_some())
    }
}

impl NetworkState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrapping function of [serde_yaml::from_str()] for [NetworkState].
    pub fn new_from_yaml(net_state_yaml: &str) -> Result<Self, NdstateError> {
        Ok(serde_yaml::from_str(net_state_yaml)?)
    }

    pub fn append_interface_data(&mut self, iface: InterfaceDescriptor) {
        self.interfaces.push(iface);
    }

    pub fn is_destructive(&self) -> bool {
        self.interfaces.is_destructive()
    }

    /// Write the unit files of every descriptor into the store.
    ///
    /// All descriptors are validated first. When any valid descriptor asks
    /// for destructive mode, every unit file of the store is removed before
    /// the first descriptor is applied; failing to do so aborts the whole
    /// batch. A rejected descriptor never triggers the removal.
    /// Failure of a single descriptor is recorded in its [InterfaceResult]
    /// and does not stop the others.
    pub fn apply(
        &self,
        store: &UnitStore,
    ) -> Result<ApplyReport, NdstateError> {
        let descs = self.interfaces.to_vec();
        let prepared: Vec<Result<PreparedInterface, NdstateError>> =
            descs.iter().copied().map(PreparedInterface::new).collect();

        let mut report = ApplyReport::default();
        if is_destructive(&descs, &prepared) {
            log::info!(
                "Destructive mode: removing all unit files in {}",
                store.dir().display()
            );
            report.wiped = store.wipe()?;
        }

        for (iface, prepared) in descs.iter().zip(prepared) {
            let result = prepared.and_then(|p| p.apply(store));
            report.interfaces.push(match result {
                Ok(changed) => InterfaceResult {
                    name: iface.name.clone(),
                    changed,
                    error: None,
                },
                Err(e) => InterfaceResult {
                    name: iface.name.clone(),
                    changed: false,
                    error: Some(e.to_string()),
                },
            });
        }
        Ok(report)
    }
}

fn is_destructive(
    descs: &[&InterfaceDescriptor],
    prepared: &[Result<PreparedInterface, NdstateError>],
) -> bool {
    let mut ret = false;
    for (desc, prepared) in descs.iter().zip(prepared) {
        if !desc.destructive {
            continue;
        }
        if prepared.is_ok() {
            ret = true;
        } else {
            log::warn!(
                "Ignoring destructive mode of rejected interface {}",
                desc.name
            );
        }
    }
    ret
}

/// Descriptor which passed validation and naming resolution.
pub(crate) struct PreparedInterface {
    pub(crate) iface: ValidatedInterface,
    pub(crate) names: ResolvedNames,
}

impl PreparedInterface {
    pub(crate) fn new(
        desc: &InterfaceDescriptor,
    ) -> Result<Self, NdstateError> {
        let iface = validate(desc)?;
        let names = resolve(&iface)?;
        if names.children().next().is_some() {
            log::info!(
                "Interface {} is host of {}, they should be configured by \
                their own descriptors",
                names.base,
                names.children().collect::<Vec<&str>>().join(" ")
            );
        }
        Ok(Self { iface, names })
    }

    fn apply(&self, store: &UnitStore) -> Result<bool, NdstateError> {
        let desired = if self.iface.descriptor().is_absent() {
            None
        } else {
            Some(synthesize(&self.iface))
        };
        let existing = store.existing(&self.names.base)?;
        let reconciliation =
            reconcile(&self.names.base, desired.as_ref(), &existing);
        let changed = store.apply(&reconciliation.actions)?;
        if !changed {
            log::info!("Interface {} is up to date", self.names.base);
        }
        Ok(changed)
    }
}
