// SPDX-License-Identifier: Apache-2.0

use super::link::NdSettingMatch;
use super::unit::{unit_sections_to_string, ToUnitSection};
use crate::{DhcpMode, InterfaceType, ValidatedInterface};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub(crate) struct NdSettingNetwork {
    pub(crate) dhcp: Option<DhcpMode>,
    pub(crate) address: Option<String>,
    pub(crate) gateway: Option<String>,
    pub(crate) dns: Vec<String>,
    pub(crate) ntp: Option<String>,
    pub(crate) bridge: Option<String>,
}

impl ToUnitSection for NdSettingNetwork {
    const SECTION_NAME: &'static str = "Network";

    fn to_entries(&self) -> Vec<(&'static str, String)> {
        let mut ret = Vec::new();
        if let Some(dhcp) = self.dhcp.filter(|d| d.is_enabled()) {
            ret.push(("DHCP", dhcp.to_string()));
        }
        if let Some(v) = self.address.as_ref() {
            ret.push(("Address", v.to_string()));
        }
        if let Some(v) = self.gateway.as_ref() {
            ret.push(("Gateway", v.to_string()));
        }
        for dns in &self.dns {
            ret.push(("DNS", dns.to_string()));
        }
        if let Some(v) = self.ntp.as_ref() {
            ret.push(("NTP", v.to_string()));
        }
        if let Some(v) = self.bridge.as_ref() {
            ret.push(("Bridge", v.to_string()));
        }
        ret
    }
}

/// VLAN membership of a bridge port.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct NdSettingBridgeVlan {
    pub(crate) vlan: u16,
}

impl ToUnitSection for NdSettingBridgeVlan {
    const SECTION_NAME: &'static str = "BridgeVLAN";

    fn to_entries(&self) -> Vec<(&'static str, String)> {
        vec![("VLAN", self.vlan.to_string())]
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct NdNetwork {
    matches: NdSettingMatch,
    network: NdSettingNetwork,
    bridge_vlan: Option<NdSettingBridgeVlan>,
}

impl NdNetwork {
    /// Host interfaces only announce children, they carry no addressing.
    pub(crate) fn new(iface: &ValidatedInterface) -> Option<Self> {
        let desc = iface.descriptor();
        if desc.is_host() {
            return None;
        }

        let matches = match desc.mac.as_deref() {
            Some(mac) if desc.iface_type == InterfaceType::Simple => {
                NdSettingMatch::by_mac(mac)
            }
            _ => NdSettingMatch::by_name(&desc.name),
        };

        let network = NdSettingNetwork {
            dhcp: desc.dhcp,
            address: desc.ip4.clone(),
            gateway: desc.gw4.clone(),
            dns: desc.dns4.clone().unwrap_or_default(),
            ntp: desc.ntp.clone(),
            bridge: desc.bridge.clone(),
        };

        // The tag of a VLAN interface belongs to its netdev
        let bridge_vlan = if desc.iface_type == InterfaceType::Vlan {
            None
        } else {
            iface.vlan_tag().map(|vlan| NdSettingBridgeVlan { vlan })
        };

        Some(Self {
            matches,
            network,
            bridge_vlan,
        })
    }

    pub(crate) fn to_unit_string(&self) -> String {
        let mut sections = vec![
            self.matches.to_section(),
            self.network.to_section(),
        ];
        if let Some(bridge_vlan) = self.bridge_vlan.as_ref() {
            sections.push(bridge_vlan.to_section());
        }
        unit_sections_to_string(&sections)
    }
}
