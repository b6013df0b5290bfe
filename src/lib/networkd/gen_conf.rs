// SPDX-License-Identifier: Apache-2.0

use super::{link::NdLink, netdev::NdNetdev, network::NdNetwork, UnitSet};
use crate::ValidatedInterface;

/// Build the link, network and netdev bodies of a validated descriptor.
///
/// This is a pure function: the same descriptor always yields byte identical
/// bodies, which is what makes repeated applies idempotent.
pub fn synthesize(iface: &ValidatedInterface) -> UnitSet {
    let mut unit_set = UnitSet::new(iface.name());
    unit_set.link = NdLink::new(iface).map(|l| l.to_unit_string());
    unit_set.network = NdNetwork::new(iface).map(|n| n.to_unit_string());
    unit_set.netdev = NdNetdev::new(iface).map(|n| n.to_unit_string());
    log::debug!("Synthesized units for {}: {:?}", iface.name(), unit_set);
    unit_set
}
