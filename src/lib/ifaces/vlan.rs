// SPDX-License-Identifier: Apache-2.0

use crate::{NdstateError, VlanType};

pub(crate) const VLAN_ID_MIN: u16 = 1;
pub(crate) const VLAN_ID_MAX: u16 = 4094;

/// The `vlan` descriptor field interpreted according to its `vlan-type`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum VlanSpec {
    /// 802.1Q tag of the VLAN interface itself.
    Tag(u16),
    /// Names of the VLAN interfaces to create on a host interface.
    Children(Vec<String>),
}

impl VlanSpec {
    pub(crate) fn parse(
        value: &str,
        vlan_type: VlanType,
    ) -> Result<Self, NdstateError> {
        match vlan_type {
            VlanType::Interface => parse_vlan_id(value).map(Self::Tag),
            VlanType::Host => {
                parse_child_list("vlan", value).map(Self::Children)
            }
        }
    }

    pub fn tag(&self) -> Option<u16> {
        if let Self::Tag(id) = self {
            Some(*id)
        } else {
            None
        }
    }

    pub fn children(&self) -> &[String] {
        if let Self::Children(names) = self {
            names.as_slice()
        } else {
            &[]
        }
    }
}

fn parse_vlan_id(value: &str) -> Result<u16, NdstateError> {
    let id = value.trim().parse::<u16>().map_err(|e| {
        NdstateError::invalid_argument(format!(
            "Invalid VLAN ID '{value}', expecting integer between \
            {VLAN_ID_MIN} and {VLAN_ID_MAX}: {e}"
        ))
    })?;
    if !(VLAN_ID_MIN..=VLAN_ID_MAX).contains(&id) {
        return Err(NdstateError::invalid_argument(format!(
            "VLAN ID {id} out of range, expecting integer between \
            {VLAN_ID_MIN} and {VLAN_ID_MAX}"
        )));
    }
    Ok(id)
}

pub(crate) fn parse_child_list(
    prop_name: &str,
    value: &str,
) -> Result<Vec<String>, NdstateError> {
    let names: Vec<String> =
        value.split_whitespace().map(|s| s.to_string()).collect();
    if names.is_empty() {
        return Err(NdstateError::invalid_argument(format!(
            "The {prop_name} property of a host interface should hold at \
            least one child interface name"
        )));
    }
    Ok(names)
}
