// SPDX-License-Identifier: Apache-2.0

use std::net::Ipv4Addr;
use std::str::FromStr;

use crate::{
    ifaces::parse_child_list, naming::validate_ifname, InterfaceDescriptor,
    InterfaceType, NdstateError, VlanSpec,
};

/// Descriptor whose field combination has been checked against its type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedInterface {
    desc: InterfaceDescriptor,
    vlan: Option<VlanSpec>,
    macvlan_children: Vec<String>,
}

impl ValidatedInterface {
    pub fn descriptor(&self) -> &InterfaceDescriptor {
        &self.desc
    }

    pub fn name(&self) -> &str {
        self.desc.name.as_str()
    }

    pub fn vlan(&self) -> Option<&VlanSpec> {
        self.vlan.as_ref()
    }

    pub fn vlan_tag(&self) -> Option<u16> {
        self.vlan.as_ref().and_then(|v| v.tag())
    }

    pub fn macvlan_children(&self) -> &[String] {
        self.macvlan_children.as_slice()
    }
}

/// Check that the fields supplied for the descriptor type are complete and
/// not contradicting each other. No I/O is performed.
///
/// Absent descriptors only need a valid name, their other fields are
/// ignored.
pub fn validate(
    desc: &InterfaceDescriptor,
) -> Result<ValidatedInterface, NdstateError> {
    validate_ifname(&desc.name)?;

    if desc.is_absent() {
        return Ok(ValidatedInterface {
            desc: desc.clone(),
            vlan: None,
            macvlan_children: Vec::new(),
        });
    }

    if desc.is_host() && desc.bridge.is_some() {
        return Err(NdstateError::invalid_argument(format!(
            "Interface {} cannot be attached to bridge {} while being \
            host of VLAN or MACVLAN interfaces",
            desc.name,
            desc.bridge.as_deref().unwrap_or_default()
        )));
    }

    if let Some(br_name) = desc.bridge.as_deref() {
        if desc.iface_type == InterfaceType::Bridge {
            return Err(NdstateError::invalid_argument(format!(
                "Can not specify a bridge to attach interface to when \
                creating a bridge: (bridge: {br_name})"
            )));
        }
        validate_ifname(br_name)?;
        if br_name == desc.name {
            return Err(NdstateError::invalid_argument(format!(
                "Interface {} cannot be attached to itself",
                desc.name
            )));
        }
    }

    if desc.dhcp.map(|d| d.is_enabled()).unwrap_or_default()
        && (desc.ip4.is_some() || desc.gw4.is_some())
    {
        return Err(NdstateError::invalid_argument(format!(
            "Cannot specify static address and DHCP at the same time \
            for interface {}",
            desc.name
        )));
    }

    let vlan = desc
        .vlan
        .as_deref()
        .map(|v| VlanSpec::parse(v, desc.vlan_type))
        .transpose()?;

    let macvlan_children = match desc.macvlan.as_deref() {
        Some(v) if desc.is_host() => parse_child_list("macvlan", v)?,
        Some(_) => {
            return Err(NdstateError::invalid_argument(format!(
                "The macvlan property of interface {} is only allowed \
                with vlan-type host",
                desc.name
            )));
        }
        None => Vec::new(),
    };

    if desc.is_host() {
        if vlan.is_none() && macvlan_children.is_empty() {
            return Err(NdstateError::invalid_argument(format!(
                "Host interface {} should define child interfaces in the \
                vlan or macvlan property",
                desc.name
            )));
        }
    } else if desc.iface_type == InterfaceType::Vlan && vlan.is_none() {
        return Err(NdstateError::invalid_argument(format!(
            "Have to supply a VLAN ID for VLAN interface {}",
            desc.name
        )));
    }

    if let Some(mac) = desc.mac.as_deref() {
        validate_mac(mac)?;
    }
    if let Some(ip4) = desc.ip4.as_deref() {
        validate_ipv4_with_prefix(ip4)?;
    }
    if let Some(gw4) = desc.gw4.as_deref() {
        parse_ipv4("gw4", gw4)?;
    }
    for dns in desc.dns4.as_deref().unwrap_or_default() {
        parse_ipv4("dns4", dns)?;
    }
    if let Some(ntp) = desc.ntp.as_deref() {
        if ntp.is_empty() || ntp.chars().any(|c| c.is_whitespace()) {
            return Err(NdstateError::invalid_argument(format!(
                "Invalid NTP server '{ntp}' for interface {}",
                desc.name
            )));
        }
    }

    Ok(ValidatedInterface {
        desc: desc.clone(),
        vlan,
        macvlan_children,
    })
}

fn validate_mac(mac: &str) -> Result<(), NdstateError> {
    let octets: Vec<&str> = mac.split(':').collect();
    if octets.len() != 6
        || octets.iter().any(|o| {
            o.len() != 2 || !o.chars().all(|c| c.is_ascii_hexdigit())
        })
    {
        return Err(NdstateError::invalid_argument(format!(
            "Invalid MAC address '{mac}', expecting format \
            XX:XX:XX:XX:XX:XX"
        )));
    }
    Ok(())
}

fn validate_ipv4_with_prefix(addr: &str) -> Result<(), NdstateError> {
    let (ip, prefix) = match addr.split_once('/') {
        Some((ip, prefix)) => (ip, Some(prefix)),
        None => (addr, None),
    };
    parse_ipv4("ip4", ip)?;
    if let Some(prefix) = prefix {
        match prefix.parse::<u8>() {
            Ok(p) if p <= 32 => (),
            _ => {
                return Err(NdstateError::invalid_argument(format!(
                    "Invalid IPv4 prefix length '{prefix}' in address \
                    {addr}, expecting integer between 0 and 32"
                )));
            }
        }
    }
    Ok(())
}

fn parse_ipv4(prop_name: &str, addr: &str) -> Result<Ipv4Addr, NdstateError> {
    Ipv4Addr::from_str(addr).map_err(|e| {
        NdstateError::invalid_argument(format!(
            "Invalid IPv4 address '{addr}' in {prop_name}: {e}"
        ))
    })
}
