// SPDX-License-Identifier: Apache-2.0

use std::collections::HashMap;

use crate::{
    reconcile, unit_tests::testlib::gen_units, ReconcileAction, UnitKind,
    UnitSet,
};

const ETH0_YAML: &str = r#"---
name: eth0
mac: "00:11:22:33:44:55"
ip4: 1.2.3.4
"#;

fn existing_of(units: &UnitSet) -> HashMap<UnitKind, Vec<u8>> {
    units
        .to_files()
        .into_iter()
        .map(|f| (f.kind, f.content.into_bytes()))
        .collect()
}

#[test]
fn test_reconcile_create_on_empty_store() {
    let units = gen_units(ETH0_YAML);
    let result = reconcile("eth0", Some(&units), &HashMap::new());

    assert!(result.changed());
    assert_eq!(result.actions.len(), 3);
    assert!(matches!(
        &result.actions[0],
        ReconcileAction::Create(f) if f.kind == UnitKind::Link
    ));
    assert!(matches!(
        &result.actions[1],
        ReconcileAction::Create(f) if f.kind == UnitKind::Network
    ));
    assert!(result.actions[2].is_noop());
    assert_eq!(result.actions[2].file_name(), "eth0.netdev");
}

#[test]
fn test_reconcile_noop_when_identical() {
    let units = gen_units(ETH0_YAML);
    let result = reconcile("eth0", Some(&units), &existing_of(&units));

    assert!(!result.changed());
    assert!(result.actions.iter().all(|a| a.is_noop()));
}

#[test]
fn test_reconcile_update_on_byte_difference() {
    let units = gen_units(ETH0_YAML);
    let mut existing = existing_of(&units);
    // Trailing whitespace is a difference too
    existing
        .get_mut(&UnitKind::Network)
        .unwrap()
        .extend_from_slice(b" ");

    let result = reconcile("eth0", Some(&units), &existing);
    assert!(result.changed());
    assert!(result.actions[0].is_noop());
    assert_eq!(
        result.actions[1],
        ReconcileAction::Update(units.to_files()[1].clone())
    );
}

#[test]
fn test_reconcile_delete_netdev_on_type_change() {
    let old = gen_units(
        r#"---
name: internet
type: vlan
vlan: 10
"#,
    );
    let new = gen_units(
        r#"---
name: internet
ip4: 2.3.4.6
"#,
    );

    let result = reconcile("internet", Some(&new), &existing_of(&old));
    assert_eq!(
        result.actions[2],
        ReconcileAction::Delete {
            iface_name: "internet".to_string(),
            kind: UnitKind::Netdev,
        }
    );
    assert!(matches!(result.actions[0], ReconcileAction::Create(_)));
    assert!(matches!(result.actions[1], ReconcileAction::Update(_)));
}

#[test]
fn test_reconcile_absent_removes_everything() {
    let units = gen_units(ETH0_YAML);
    let result = reconcile("eth0", None, &existing_of(&units));

    assert!(result.changed());
    assert_eq!(
        result.actions,
        vec![
            ReconcileAction::Delete {
                iface_name: "eth0".to_string(),
                kind: UnitKind::Link,
            },
            ReconcileAction::Delete {
                iface_name: "eth0".to_string(),
                kind: UnitKind::Network,
            },
            ReconcileAction::NoOp {
                iface_name: "eth0".to_string(),
                kind: UnitKind::Netdev,
            },
        ]
    );
}

#[test]
fn test_reconcile_absent_on_empty_store() {
    let result = reconcile("eth0", None, &HashMap::new());
    assert!(!result.changed());
}
