// SPDX-License-Identifier: Apache-2.0

mod inter_ifaces;
mod vlan;

pub use inter_ifaces::Interfaces;
pub(crate) use vlan::parse_child_list;
pub use vlan::VlanSpec;
