// SPDX-License-Identifier: Apache-2.0

use crate::{
    resolve, unit_tests::testlib::new_iface, validate, ErrorKind, UnitKind,
};

#[test]
fn test_resolve_plain_iface() {
    let names = resolve(
        &validate(&new_iface(
            r#"---
name: eth0
state: present
"#,
        ))
        .unwrap(),
    )
    .unwrap();

    assert_eq!(names.base, "eth0");
    assert_eq!(names.unit_file_name(UnitKind::Link), "eth0.link");
    assert_eq!(names.unit_file_name(UnitKind::Network), "eth0.network");
    assert_eq!(names.unit_file_name(UnitKind::Netdev), "eth0.netdev");
    assert_eq!(names.children().count(), 0);
}

#[test]
fn test_resolve_host_children() {
    let names = resolve(
        &validate(&new_iface(
            r#"---
name: eth2
state: present
vlan-type: host
vlan: "internet   internal"
macvlan: mac0
"#,
        ))
        .unwrap(),
    )
    .unwrap();

    assert_eq!(names.vlan_children, vec!["internet", "internal"]);
    assert_eq!(names.macvlan_children, vec!["mac0"]);
    assert_eq!(
        names.children().collect::<Vec<&str>>(),
        vec!["internet", "internal", "mac0"]
    );
}

#[test]
fn test_resolve_child_name_too_long() {
    let result = resolve(
        &validate(&new_iface(
            r#"---
name: eth2
state: present
vlan-type: host
vlan: internet a_very_long_vlan_name
"#,
        ))
        .unwrap(),
    );
    assert!(result.is_err());
    if let Err(e) = result {
        assert_eq!(e.kind(), ErrorKind::InvalidArgument);
        assert!(e.msg().contains("a_very_long_vlan_name"));
    }
}

#[test]
fn test_resolve_child_name_with_slash() {
    let result = resolve(
        &validate(&new_iface(
            r#"---
name: eth2
state: present
vlan-type: host
vlan: ../dmz
"#,
        ))
        .unwrap(),
    );
    assert!(result.is_err());
}

#[test]
fn test_resolve_duplicate_child() {
    let result = resolve(
        &validate(&new_iface(
            r#"---
name: eth2
state: present
vlan-type: host
vlan: dmz
macvlan: dmz
"#,
        ))
        .unwrap(),
    );
    assert!(result.is_err());
}

#[test]
fn test_resolve_child_same_as_host() {
    let result = resolve(
        &validate(&new_iface(
            r#"---
name: eth2
state: present
vlan-type: host
vlan: eth2
"#,
        ))
        .unwrap(),
    );
    assert!(result.is_err());
}
