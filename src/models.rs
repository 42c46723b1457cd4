use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AuthKind {
    #[default]
    Key,
    Password,
}

/// Runtime connectivity of a host. Never written to the config file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HostStatus {
    #[default]
    Unknown,
    Online,
    Offline,
}

/// The (address, port, username) triple that identifies a host.
/// Display names may collide, so they take no part in identity.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct HostId {
    pub address: String,
    pub port: u16,
    pub username: String,
}

impl fmt::Display for HostId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}:{}", self.username, self.address, self.port)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Host {
    pub name: String,
    pub ip: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default = "default_username")]
    pub username: String,
    #[serde(default)]
    pub auth_type: AuthKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key_path: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,
    #[serde(default, skip_serializing_if = "BTreeSet::is_empty")]
    pub tags: BTreeSet<String>,
    #[serde(default, skip_serializing_if = "is_false")]
    pub favorite: bool,
    /// File transfer support for the session; absent means enabled.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_transfer: Option<bool>,
    #[serde(skip)]
    pub status: HostStatus,
}

fn default_port() -> u16 {
    22
}

fn default_username() -> String {
    "app".to_string()
}

fn is_false(value: &bool) -> bool {
    !*value
}

impl Host {
    #[cfg(test)]
    pub fn new(name: impl Into<String>, ip: impl Into<String>, username: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ip: ip.into(),
            port: default_port(),
            username: username.into(),
            auth_type: AuthKind::Key,
            key_path: None,
            password: None,
            description: String::new(),
            tags: BTreeSet::new(),
            favorite: false,
            file_transfer: None,
            status: HostStatus::Unknown,
        }
    }

    pub fn id(&self) -> HostId {
        HostId {
            address: self.ip.clone(),
            port: self.port,
            username: self.username.clone(),
        }
    }

    pub fn same_identity(&self, other: &Host) -> bool {
        self.ip == other.ip && self.port == other.port && self.username == other.username
    }

    /// Password auth, or key auth with no key but a stored password.
    pub fn uses_password(&self) -> bool {
        match self.auth_type {
            AuthKind::Password => true,
            AuthKind::Key => {
                self.key_path.as_deref().map_or(true, str::is_empty)
                    && self.password.as_deref().is_some_and(|p| !p.is_empty())
            }
        }
    }

    /// `user@ip:port`
    pub fn target(&self) -> String {
        format!("{}@{}:{}", self.username, self.ip, self.port)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Group {
    pub name: String,
    #[serde(default)]
    pub hosts: Vec<Host>,
}

impl Group {
    #[cfg(test)]
    pub fn new(name: impl Into<String>, hosts: Vec<Host>) -> Self {
        Self {
            name: name.into(),
            hosts,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_ignores_name() {
        let a = Host::new("web", "10.0.0.1", "root");
        let b = Host::new("web-renamed", "10.0.0.1", "root");
        assert!(a.same_identity(&b));
        assert_eq!(a.id(), b.id());

        let mut c = b.clone();
        c.port = 2222;
        assert!(!a.same_identity(&c));
    }

    #[test]
    fn test_uses_password() {
        let mut host = Host::new("db", "10.0.0.2", "app");
        assert!(!host.uses_password());

        host.password = Some("secret".into());
        assert!(host.uses_password());

        host.key_path = Some("/home/app/.ssh/id_ed25519".into());
        assert!(!host.uses_password());

        host.auth_type = AuthKind::Password;
        assert!(host.uses_password());
    }

    #[test]
    fn test_status_is_not_serialized() {
        let mut host = Host::new("web", "10.0.0.1", "root");
        host.status = HostStatus::Online;
        let text = toml::to_string(&host).unwrap();
        assert!(!text.contains("status"));

        let back: Host = toml::from_str(&text).unwrap();
        assert_eq!(back.status, HostStatus::Unknown);
    }

    #[test]
    fn test_missing_fields_take_defaults() {
        let host: Host = toml::from_str("name = \"a\"\nip = \"1.2.3.4\"").unwrap();
        assert_eq!(host.port, 22);
        assert_eq!(host.username, "app");
        assert_eq!(host.auth_type, AuthKind::Key);
        assert!(host.tags.is_empty());
        assert!(!host.favorite);
    }
}
