// SPDX-License-Identifier: Apache-2.0

use super::unit::{unit_sections_to_string, ToUnitSection};
use crate::{BridgeType, InterfaceType, ValidatedInterface};

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct NdSettingNetDev {
    pub(crate) name: String,
    pub(crate) kind: InterfaceType,
    pub(crate) mac: Option<String>,
}

impl ToUnitSection for NdSettingNetDev {
    const SECTION_NAME: &'static str = "NetDev";

    fn to_entries(&self) -> Vec<(&'static str, String)> {
        let mut ret = vec![
            ("Name", self.name.clone()),
            ("Kind", self.kind.to_string()),
        ];
        if let Some(mac) = self.mac.as_ref() {
            ret.push(("MACAddress", mac.to_string()));
        }
        ret
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct NdSettingVlan {
    pub(crate) id: u16,
}

impl ToUnitSection for NdSettingVlan {
    const SECTION_NAME: &'static str = "VLAN";

    fn to_entries(&self) -> Vec<(&'static str, String)> {
        vec![("Id", self.id.to_string())]
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct NdSettingMacVlan {
    pub(crate) mode: &'static str,
}

impl ToUnitSection for NdSettingMacVlan {
    const SECTION_NAME: &'static str = "MACVLAN";

    fn to_entries(&self) -> Vec<(&'static str, String)> {
        vec![("Mode", self.mode.to_string())]
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct NdSettingBridge {
    pub(crate) vlan_filtering: bool,
}

impl ToUnitSection for NdSettingBridge {
    const SECTION_NAME: &'static str = "Bridge";

    fn to_entries(&self) -> Vec<(&'static str, String)> {
        vec![(
            "VLANFiltering",
            if self.vlan_filtering { "yes" } else { "no" }.to_string(),
        )]
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum NdNetdevOptions {
    Vlan(NdSettingVlan),
    MacVlan(NdSettingMacVlan),
    Bridge(NdSettingBridge),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct NdNetdev {
    netdev: NdSettingNetDev,
    options: Option<NdNetdevOptions>,
}

impl NdNetdev {
    pub(crate) fn new(iface: &ValidatedInterface) -> Option<Self> {
        let desc = iface.descriptor();
        if !desc.iface_type.is_virtual() || desc.is_host() {
            return None;
        }

        let options = match desc.iface_type {
            InterfaceType::Vlan => iface
                .vlan_tag()
                .map(|id| NdNetdevOptions::Vlan(NdSettingVlan { id })),
            InterfaceType::MacVlan => {
                Some(NdNetdevOptions::MacVlan(NdSettingMacVlan {
                    mode: "bridge",
                }))
            }
            InterfaceType::Bridge if desc.bridge_type == BridgeType::Vlan => {
                Some(NdNetdevOptions::Bridge(NdSettingBridge {
                    vlan_filtering: true,
                }))
            }
            _ => None,
        };

        Some(Self {
            netdev: NdSettingNetDev {
                name: desc.name.clone(),
                kind: desc.iface_type,
                mac: desc.mac.clone(),
            },
            options,
        })
    }

    pub(crate) fn to_unit_string(&self) -> String {
        let mut sections = vec![self.netdev.to_section()];
        match self.options.as_ref() {
            Some(NdNetdevOptions::Vlan(v)) => sections.push(v.to_section()),
            Some(NdNetdevOptions::MacVlan(v)) => sections.push(v.to_section()),
            Some(NdNetdevOptions::Bridge(v)) => sections.push(v.to_section()),
            None => (),
        }
        unit_sections_to_string(&sections)
    }
}
