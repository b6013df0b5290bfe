// SPDX-License-Identifier: Apache-2.0

use super::unit::{unit_sections_to_string, ToUnitSection};
use crate::{InterfaceType, ValidatedInterface};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub(crate) struct NdSettingMatch {
    pub(crate) mac: Option<String>,
    pub(crate) original_name: Option<String>,
    pub(crate) name: Option<String>,
}

impl NdSettingMatch {
    pub(crate) fn by_mac(mac: &str) -> Self {
        Self {
            mac: Some(mac.to_string()),
            ..Default::default()
        }
    }

    pub(crate) fn by_name(name: &str) -> Self {
        Self {
            name: Some(name.to_string()),
            ..Default::default()
        }
    }

    fn by_original_name(name: &str) -> Self {
        Self {
            original_name: Some(name.to_string()),
            ..Default::default()
        }
    }
}

impl ToUnitSection for NdSettingMatch {
    const SECTION_NAME: &'static str = "Match";

    fn to_entries(&self) -> Vec<(&'static str, String)> {
        let mut ret = Vec::new();
        if let Some(v) = self.mac.as_ref() {
            ret.push(("MACAddress", v.to_string()));
        }
        if let Some(v) = self.original_name.as_ref() {
            ret.push(("OriginalName", v.to_string()));
        }
        if let Some(v) = self.name.as_ref() {
            ret.push(("Name", v.to_string()));
        }
        ret
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub(crate) struct NdSettingLink {
    pub(crate) name: String,
}

impl ToUnitSection for NdSettingLink {
    const SECTION_NAME: &'static str = "Link";

    fn to_entries(&self) -> Vec<(&'static str, String)> {
        vec![("Name", self.name.clone())]
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct NdLink {
    matches: NdSettingMatch,
    link: NdSettingLink,
}

impl NdLink {
    // Interfaces with a MAC are matched by it. Existing kernel interfaces
    // without MAC are matched by their own name, virtual devices without
    // MAC need no link file as the netdev already names them.
    pub(crate) fn new(iface: &ValidatedInterface) -> Option<Self> {
        let desc = iface.descriptor();
        let matches = if let Some(mac) = desc.mac.as_deref() {
            NdSettingMatch::by_mac(mac)
        } else if desc.iface_type == InterfaceType::Simple {
            NdSettingMatch::by_original_name(&desc.name)
        } else {
            return None;
        };
        Some(Self {
            matches,
            link: NdSettingLink {
                name: desc.name.clone(),
            },
        })
    }

    pub(crate) fn to_unit_string(&self) -> String {
        unit_sections_to_string(&[
            self.matches.to_section(),
            self.link.to_section(),
        ])
    }
}
