// SPDX-License-Identifier: Apache-2.0

use crate::{
    unit_tests::testlib::{list_store, new_store, read_unit},
    DhcpMode, ErrorKind, InterfaceDescriptor, InterfaceState, InterfaceType,
    NetworkState, UnitStore,
};

const HOME_NET_YAML: &str = r#"---
interfaces:
- name: eth0
  state: present
  mac: "00:11:22:33:44:55"
  ip4: 1.2.3.4
  dns4:
  - 4.3.2.1
  gw4: 1.1.1.1
- name: br0
  type: bridge
  bridge-type: none
  ip4: 192.168.0.1
- name: eth42
  bridge: br0
"#;

#[test]
fn test_invalid_top_key() {
    let result = NetworkState::new_from_yaml(
        r#"---
invalid_key: abc
"#,
    );

    assert!(result.is_err());
    if let Err(e) = result {
        assert_eq!(e.kind(), ErrorKind::InvalidArgument);
    }
}

#[test]
fn test_invalid_top_type() {
    let result = serde_yaml::from_str::<NetworkState>(
        r#"---
- invalid_key: abc
"#,
    );

    assert!(result.is_err());
}

#[test]
fn test_invalid_iface_key() {
    let result = NetworkState::new_from_yaml(
        r#"---
interfaces:
- name: eth0
  address: 1.2.3.4
"#,
    );

    assert!(result.is_err());
}

#[test]
fn test_empty_state() {
    let net_state = NetworkState::new_from_yaml("---\n{}\n").unwrap();
    assert!(net_state.interfaces.is_empty());

    let (_tmp, store) = new_store();
    let report = net_state.apply(&store).unwrap();
    assert!(!report.changed());
    assert!(list_store(&store).is_empty());
}

#[test]
fn test_lenient_forms() {
    let net_state = NetworkState::new_from_yaml(
        r#"---
interfaces:
- interface: internet
  type: vlan
  vlan: 10
  dns4: 8.8.8.8 8.8.4.4
  destructive: "yes"
- name: internal
  type: vlan
  vlan: "42"
  dhcp: "no"
  ip4: 10.0.0.1/24
  dns4:
  - 10.0.0.53
- name: eth2
  vlan_type: host
  vlan: internet internal
  destructive: false
- name: br0
  type: bridge
  bridge_type: vlan
"#,
    )
    .unwrap();

    assert_eq!(net_state.interfaces.len(), 4);
    let ifaces = net_state.interfaces.to_vec();
    assert_eq!(ifaces[0].name, "internet");
    assert_eq!(ifaces[0].iface_type, InterfaceType::Vlan);
    assert_eq!(ifaces[0].vlan.as_deref(), Some("10"));
    assert_eq!(
        ifaces[0].dns4,
        Some(vec!["8.8.8.8".to_string(), "8.8.4.4".to_string()])
    );
    assert!(ifaces[0].destructive);
    assert_eq!(ifaces[1].vlan.as_deref(), Some("42"));
    assert_eq!(ifaces[1].dhcp, Some(DhcpMode::None));
    assert_eq!(ifaces[1].dns4, Some(vec!["10.0.0.53".to_string()]));
    assert!(ifaces[2].is_host());
    assert!(!ifaces[2].destructive);
    assert!(net_state.is_destructive());
}

#[test]
fn test_apply_is_idempotent() {
    let (_tmp, store) = new_store();
    let net_state = NetworkState::new_from_yaml(HOME_NET_YAML).unwrap();

    let report = net_state.apply(&store).unwrap();
    assert!(report.changed());
    assert!(!report.has_error());
    assert!(report.interfaces.iter().all(|i| i.changed));
    let files = list_store(&store);
    assert_eq!(
        files,
        vec![
            "br0.netdev".to_string(),
            "br0.network".to_string(),
            "eth0.link".to_string(),
            "eth0.network".to_string(),
            "eth42.link".to_string(),
            "eth42.network".to_string(),
        ]
    );
    let contents: Vec<String> =
        files.iter().map(|f| read_unit(&store, f)).collect();

    let report = net_state.apply(&store).unwrap();
    assert!(!report.changed());
    assert!(report.interfaces.iter().all(|i| !i.changed));
    assert_eq!(list_store(&store), files);
    let new_contents: Vec<String> =
        files.iter().map(|f| read_unit(&store, f)).collect();
    assert_eq!(contents, new_contents);
}

#[test]
fn test_apply_changed_descriptor_updates_files() {
    let (_tmp, store) = new_store();
    NetworkState::new_from_yaml(
        r#"---
interfaces:
- name: internet
  type: vlan
  vlan: 10
"#,
    )
    .unwrap()
    .apply(&store)
    .unwrap();
    assert!(read_unit(&store, "internet.netdev").contains("Id=10\n"));

    let report = NetworkState::new_from_yaml(
        r#"---
interfaces:
- name: internet
  type: vlan
  vlan: 20
"#,
    )
    .unwrap()
    .apply(&store)
    .unwrap();
    assert!(report.changed());
    assert!(read_unit(&store, "internet.netdev").contains("Id=20\n"));
}

#[test]
fn test_apply_absent_removes_files() {
    let (_tmp, store) = new_store();
    NetworkState::new_from_yaml(HOME_NET_YAML)
        .unwrap()
        .apply(&store)
        .unwrap();

    let mut net_state = NetworkState::new();
    net_state.append_interface_data(InterfaceDescriptor::new(
        "br0",
        InterfaceState::Absent,
    ));
    let report = net_state.apply(&store).unwrap();

    assert!(report.changed());
    assert_eq!(net_state.interfaces.to_vec()[0].state, InterfaceState::Absent);
    assert_eq!(
        list_store(&store),
        vec![
            "eth0.link".to_string(),
            "eth0.network".to_string(),
            "eth42.link".to_string(),
            "eth42.network".to_string(),
        ]
    );

    // Already gone
    let report = net_state.apply(&store).unwrap();
    assert!(!report.changed());
}

#[test]
fn test_apply_destructive_clears_whole_dir() {
    let (_tmp, store) = new_store();
    NetworkState::new_from_yaml(HOME_NET_YAML)
        .unwrap()
        .apply(&store)
        .unwrap();
    std::fs::write(store.dir().join("99-local.conf"), "keep").unwrap();

    // Destructive flag on a later descriptor still clears files written for
    // other interfaces before the batch
    let report = NetworkState::new_from_yaml(
        r#"---
interfaces:
- name: eth0
  mac: "00:11:22:33:44:55"
  dhcp: yes
- name: wlan0
  dhcp: ipv4
  destructive: yes
"#,
    )
    .unwrap()
    .apply(&store)
    .unwrap();

    assert_eq!(report.wiped.len(), 6);
    assert!(report.changed());
    assert_eq!(
        list_store(&store),
        vec![
            "99-local.conf".to_string(),
            "eth0.link".to_string(),
            "eth0.network".to_string(),
            "wlan0.link".to_string(),
            "wlan0.network".to_string(),
        ]
    );
    assert!(read_unit(&store, "eth0.network").contains("DHCP=yes\n"));
}

#[test]
fn test_apply_invalid_descriptor_writes_nothing() {
    let (_tmp, store) = new_store();
    let report = NetworkState::new_from_yaml(
        r#"---
interfaces:
- name: eth2
  vlan-type: host
  vlan: internet internal
  bridge: br0
- name: eth0
  ip4: 1.2.3.4
"#,
    )
    .unwrap()
    .apply(&store)
    .unwrap();

    assert!(report.has_error());
    assert_eq!(report.interfaces[0].name, "eth2");
    assert!(!report.interfaces[0].changed);
    assert!(report.interfaces[0].error.is_some());
    assert_eq!(report.interfaces[1].error, None);
    assert!(report.interfaces[1].changed);
    assert_eq!(
        list_store(&store),
        vec!["eth0.link".to_string(), "eth0.network".to_string()]
    );
}

#[test]
fn test_apply_vlan_host_and_children() {
    let (_tmp, store) = new_store();
    let report = NetworkState::new_from_yaml(
        r#"---
interfaces:
- name: eth2
  mac: "00:11:22:33:44:55"
  vlan-type: host
  vlan: internet internal
- name: internet
  type: vlan
  vlan: 10
  ip4: 2.3.4.6
- name: internal
  type: vlan
  vlan: 42
  dhcp: "yes"
"#,
    )
    .unwrap()
    .apply(&store)
    .unwrap();

    assert!(!report.has_error());
    assert_eq!(
        list_store(&store),
        vec![
            "eth2.link".to_string(),
            "internal.netdev".to_string(),
            "internal.network".to_string(),
            "internet.netdev".to_string(),
            "internet.network".to_string(),
        ]
    );
}

#[test]
fn test_gen_conf() {
    let net_state = NetworkState::new_from_yaml(
        r#"---
interfaces:
- name: internet
  type: vlan
  vlan: 10
  ip4: 2.3.4.6
- name: eth9
  state: absent
"#,
    )
    .unwrap();

    let confs = net_state.gen_conf().unwrap();
    let files = confs.get("systemd-networkd").unwrap();
    assert_eq!(
        files,
        &vec![
            (
                "internet.network".to_string(),
                "[Match]\nName=internet\n\n[Network]\nAddress=2.3.4.6\n"
                    .to_string()
            ),
            (
                "internet.netdev".to_string(),
                "[NetDev]\nName=internet\nKind=vlan\n\n[VLAN]\nId=10\n"
                    .to_string()
            ),
        ]
    );
}

#[test]
fn test_gen_conf_invalid_descriptor() {
    let net_state = NetworkState::new_from_yaml(
        r#"---
interfaces:
- name: internet
  type: vlan
"#,
    )
    .unwrap();

    let result = net_state.gen_conf();
    assert!(result.is_err());
    if let Err(e) = result {
        assert_eq!(e.kind(), ErrorKind::InvalidArgument);
    }
}

#[test]
fn test_apply_rejected_destructive_descriptor_keeps_store() {
    let (_tmp, store) = new_store();
    NetworkState::new_from_yaml(HOME_NET_YAML)
        .unwrap()
        .apply(&store)
        .unwrap();
    let files = list_store(&store);

    let net_state = NetworkState::new_from_yaml(
        r#"---
interfaces:
- name: eth2
  vlan-type: host
  vlan: internet internal
  bridge: br0
  destructive: true
"#,
    )
    .unwrap();
    let report = net_state.apply(&store).unwrap();

    assert!(report.wiped.is_empty());
    assert!(!report.changed());
    assert!(report.interfaces[0].error.is_some());
    assert_eq!(list_store(&store), files);
}

#[test]
fn test_apply_absent_ignores_type_fields() {
    let (_tmp, store) = new_store();
    NetworkState::new_from_yaml(
        r#"---
interfaces:
- name: internet
  type: vlan
  vlan: 10
"#,
    )
    .unwrap()
    .apply(&store)
    .unwrap();
    assert_eq!(list_store(&store).len(), 2);

    let report = NetworkState::new_from_yaml(
        r#"---
interfaces:
- name: internet
  type: vlan
  state: absent
"#,
    )
    .unwrap()
    .apply(&store)
    .unwrap();

    assert_eq!(report.interfaces[0].error, None);
    assert!(report.interfaces[0].changed);
    assert!(list_store(&store).is_empty());
}

#[test]
fn test_apply_wipe_failure_aborts_batch() {
    let (tmp, _) = new_store();
    let path = tmp.path().join("not_a_dir");
    std::fs::write(&path, "keep").unwrap();
    let store = UnitStore::new(&path);

    let result = NetworkState::new_from_yaml(
        r#"---
interfaces:
- name: eth0
  ip4: 1.2.3.4
- name: wlan0
  dhcp: ipv4
  destructive: true
"#,
    )
    .unwrap()
    .apply(&store);

    assert!(result.is_err());
    if let Err(e) = result {
        assert_eq!(e.kind(), ErrorKind::DestructiveWipeError);
    }
    assert!(path.is_file());
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "keep");
    assert_eq!(
        list_store(&UnitStore::new(tmp.path())),
        vec!["not_a_dir".to_string()]
    );
}
