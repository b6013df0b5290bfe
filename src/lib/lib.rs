// SPDX-License-Identifier: Apache-2.0

//! Declarative systemd-networkd configuration.
//!
//! Each [InterfaceDescriptor] is validated, its names resolved, and the
//! `.link`, `.network` and `.netdev` unit bodies synthesized out of it.
//! The bodies are then reconciled against the unit directory, creating,
//! updating or removing files so that repeated applies converge.

mod deserializer;
mod error;
mod gen_conf;
mod iface;
mod ifaces;
mod naming;
mod net_state;
mod networkd;
mod reconcile;
mod store;
mod validate;


pub use crate::error::{ErrorKind, NdstateError};
pub use crate::iface::{
    BridgeType, DhcpMode, InterfaceDescriptor, InterfaceState, InterfaceType,
    VlanType,
};
pub use crate::ifaces::{Interfaces, VlanSpec};
pub use crate::naming::{resolve, ResolvedNames};
pub use crate::net_state::{ApplyReport, InterfaceResult, NetworkState};
pub use crate::networkd::{synthesize, UnitFile, UnitKind, UnitSet};
pub use crate::reconcile::{reconcile, ReconcileAction, Reconciliation};
pub use crate::store::UnitStore;
pub use crate::validate::{validate, ValidatedInterface};
