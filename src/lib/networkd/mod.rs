// SPDX-License-Identifier: Apache-2.0

mod gen_conf;
mod link;
mod netdev;
mod network;
mod unit;

pub use self::gen_conf::synthesize;
pub use self::unit::{UnitFile, UnitKind, UnitSet};

pub(crate) const NETWORKD_BACKEND_NAME: &str = "systemd-networkd";
