// SPDX-License-Identifier: Apache-2.0

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
#[non_exhaustive]
pub enum InterfaceType {
    /// Physical or already existing kernel interface, only configured.
    Simple,
    Vlan,
    #[serde(rename = "macvlan", alias = "mac-vlan")]
    MacVlan,
    Bridge,
    Bond,
}

impl Default for InterfaceType {
    fn default() -> Self {
        Self::Simple
    }
}

impl std::fmt::Display for InterfaceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Self::Simple => "simple",
                Self::Vlan => "vlan",
                Self::MacVlan => "macvlan",
                Self::Bridge => "bridge",
                Self::Bond => "bond",
            }
        )
    }
}

impl InterfaceType {
    /// Whether the network manager has to create a kernel device for this
    /// type, i.e. whether a netdev unit is needed.
    pub fn is_virtual(&self) -> bool {
        !matches!(self, Self::Simple)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum InterfaceState {
    Present,
    Absent,
}

impl Default for InterfaceState {
    fn default() -> Self {
        Self::Present
    }
}

impl std::fmt::Display for InterfaceState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Self::Present => "present",
                Self::Absent => "absent",
            }
        )
    }
}

/// What the bridge itself is attached to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BridgeType {
    Simple,
    /// VLAN-aware bridge
    Vlan,
    Bond,
    /// Standalone bridge
    None,
}

impl Default for BridgeType {
    fn default() -> Self {
        Self::Simple
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum VlanType {
    /// The descriptor is the VLAN interface itself, `vlan` is the tag.
    Interface,
    /// The descriptor is the host of VLANs, `vlan` lists the child names.
    Host,
}

impl Default for VlanType {
    fn default() -> Self {
        Self::Interface
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DhcpMode {
    #[serde(alias = "no")]
    None,
    Ipv4,
    Ipv6,
    Yes,
}

impl DhcpMode {
    pub fn is_enabled(&self) -> bool {
        !matches!(self, Self::None)
    }
}

impl std::fmt::Display for DhcpMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Self::None => "no",
                Self::Ipv4 => "ipv4",
                Self::Ipv6 => "ipv6",
                Self::Yes => "yes",
            }
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
#[non_exhaustive]
/// One logical interface to configure. The example yaml of a VLAN interface
/// joining a bridge would be:
/// ```yaml
/// ---
/// name: dmz
/// type: vlan
/// state: present
/// vlan: 1337
/// bridge: br-dmz
/// ```
pub struct InterfaceDescriptor {
    /// Interface name, also the stem of the `.link`, `.network` and
    /// `.netdev` files.
    #[serde(alias = "interface")]
    pub name: String,
    #[serde(default)]
    pub state: InterfaceState,
    #[serde(rename = "type", default)]
    pub iface_type: InterfaceType,
    #[serde(default, alias = "bridge_type")]
    pub bridge_type: BridgeType,
    #[serde(default, alias = "vlan_type")]
    pub vlan_type: VlanType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mac: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ip4: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gw4: Option<String>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        default,
        deserialize_with = "crate::deserializer::option_vec_or_string"
    )]
    pub dns4: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ntp: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    /// Name of the bridge to attach this interface to.
    pub bridge: Option<String>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        default,
        deserialize_with = "crate::deserializer::option_string_or_u64"
    )]
    /// Numeric VLAN tag for `vlan-type: interface`, or space separated
    /// names of VLANs to create for `vlan-type: host`.
    pub vlan: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    /// Space separated names of MACVLANs to create, `vlan-type: host` only.
    pub macvlan: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dhcp: Option<DhcpMode>,
    #[serde(
        default,
        skip_serializing_if = "std::ops::Not::not",
        deserialize_with = "crate::deserializer::bool_or_string"
    )]
    /// Remove every unit file of the directory before applying the batch.
    pub destructive: bool,
}

impl InterfaceDescriptor {
    pub fn new(name: &str, state: InterfaceState) -> Self {
        Self {
            name: name.to_string(),
            state,
            ..Default::default()
        }
    }

    pub fn is_absent(&self) -> bool {
        self.state == InterfaceState::Absent
    }

    /// Host-style descriptors only enumerate children to be configured by
    /// their own descriptors.
    pub fn is_host(&self) -> bool {
        self.vlan_type == VlanType::Host
    }
}
