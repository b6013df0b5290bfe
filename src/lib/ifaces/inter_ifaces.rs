// SPDX-License-Identifier: Apache-2.0

use serde::{
    ser::SerializeSeq, Deserialize, Deserializer, Serialize, Serializer,
};

use crate::InterfaceDescriptor;

/// Ordered batch of interface descriptors.
///
/// Descriptors are processed in the order they were provided: the caller is
/// responsible for placing a VLAN host before its VLAN children and the
/// children before the bridge they join.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Interfaces {
    pub(crate) ifaces: Vec<InterfaceDescriptor>,
}

impl<'de> Deserialize<'de> for Interfaces {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let mut ret = Self::new();
        let ifaces =
            <Vec<InterfaceDescriptor> as Deserialize>::deserialize(
                deserializer,
            )?;
        for iface in ifaces {
            ret.push(iface)
        }
        Ok(ret)
    }
}

impl Serialize for Interfaces {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut seq = serializer.serialize_seq(Some(self.ifaces.len()))?;
        for iface in &self.ifaces {
            seq.serialize_element(iface)?;
        }
        seq.end()
    }
}

impl Interfaces {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, iface: InterfaceDescriptor) {
        self.ifaces.push(iface);
    }

    pub fn to_vec(&self) -> Vec<&InterfaceDescriptor> {
        self.ifaces.iter().collect()
    }

    pub fn len(&self) -> usize {
        self.ifaces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ifaces.is_empty()
    }

    /// Whether any descriptor asks for destructive mode. When applied, only
    /// descriptors passing validation can trigger the removal.
    pub fn is_destructive(&self) -> bool {
        self.ifaces.iter().any(|i| i.destructive)
    }
}
