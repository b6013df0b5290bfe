// SPDX-License-Identifier: Apache-2.0

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum UnitKind {
    /// Link identity rules, `<name>.link`
    Link,
    /// Addressing and membership rules, `<name>.network`
    Network,
    /// Virtual device creation, `<name>.netdev`
    Netdev,
}

impl UnitKind {
    pub const ALL: [Self; 3] = [Self::Link, Self::Network, Self::Netdev];

    pub fn extension(&self) -> &'static str {
        match self {
            Self::Link => "link",
            Self::Network => "network",
            Self::Netdev => "netdev",
        }
    }

    pub fn file_name(&self, iface_name: &str) -> String {
        format!("{}.{}", iface_name, self.extension())
    }

    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext {
            "link" => Some(Self::Link),
            "network" => Some(Self::Network),
            "netdev" => Some(Self::Netdev),
            _ => None,
        }
    }
}

impl std::fmt::Display for UnitKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.extension())
    }
}

/// A single unit file to be stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UnitFile {
    pub iface_name: String,
    pub kind: UnitKind,
    pub content: String,
}

impl UnitFile {
    pub fn file_name(&self) -> String {
        self.kind.file_name(&self.iface_name)
    }
}

/// The unit bodies synthesized for one interface. A `None` body means the
/// corresponding file should not exist.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[non_exhaustive]
pub struct UnitSet {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub network: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub netdev: Option<String>,
}

impl UnitSet {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            ..Default::default()
        }
    }

    pub fn get(&self, kind: UnitKind) -> Option<&str> {
        match kind {
            UnitKind::Link => self.link.as_deref(),
            UnitKind::Network => self.network.as_deref(),
            UnitKind::Netdev => self.netdev.as_deref(),
        }
    }

    pub fn to_files(&self) -> Vec<UnitFile> {
        UnitKind::ALL
            .iter()
            .filter_map(|kind| {
                self.get(*kind).map(|content| UnitFile {
                    iface_name: self.name.clone(),
                    kind: *kind,
                    content: content.to_string(),
                })
            })
            .collect()
    }
}

/// Section of an INI style unit file.
pub(crate) trait ToUnitSection {
    const SECTION_NAME: &'static str;

    fn to_entries(&self) -> Vec<(&'static str, String)>;

    fn to_section(&self) -> (&'static str, Vec<(&'static str, String)>) {
        (Self::SECTION_NAME, self.to_entries())
    }
}

/// Sections are separated by an empty line, keys keep the order they were
/// pushed in.
pub(crate) fn unit_sections_to_string(
    sections: &[(&str, Vec<(&str, String)>)],
) -> String {
    let mut ret = String::new();
    for (section_name, entries) in sections {
        if !ret.is_empty() {
            ret += "\n";
        }
        ret += &format!("[{section_name}]\n");
        for (key, value) in entries {
            ret += &format!("{key}={value}\n");
        }
    }
    ret
}
