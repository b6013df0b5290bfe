// SPDX-License-Identifier: Apache-2.0

use crate::{VlanSpec, VlanType};

#[test]
fn test_vlan_spec_tag() {
    let spec = VlanSpec::parse(" 1337 ", VlanType::Interface).unwrap();
    assert_eq!(spec, VlanSpec::Tag(1337));
    assert_eq!(spec.tag(), Some(1337));
    assert!(spec.children().is_empty());
}

#[test]
fn test_vlan_spec_children() {
    let spec = VlanSpec::parse("internet internal", VlanType::Host).unwrap();
    assert_eq!(spec.tag(), None);
    assert_eq!(spec.children(), &["internet", "internal"]);
}

#[test]
fn test_vlan_spec_numeric_children() {
    // Host interfaces take names, even numeric looking ones
    let spec = VlanSpec::parse("10", VlanType::Host).unwrap();
    assert_eq!(spec, VlanSpec::Children(vec!["10".to_string()]));
}

#[test]
fn test_vlan_spec_range() {
    assert!(VlanSpec::parse("1", VlanType::Interface).is_ok());
    assert!(VlanSpec::parse("4094", VlanType::Interface).is_ok());
    assert!(VlanSpec::parse("0", VlanType::Interface).is_err());
    assert!(VlanSpec::parse("4095", VlanType::Interface).is_err());
    assert!(VlanSpec::parse("-1", VlanType::Interface).is_err());
    assert!(VlanSpec::parse("", VlanType::Interface).is_err());
}
