use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Firewall status as reported by the API
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum FirewallStatus {
    Enabled,
    Disabled,
    Deleted,
}

/// A cloud firewall
///
/// Only `id` is required; absent fields stay absent when serialized again.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Firewall {
    /// Unique firewall ID
    pub id: u64,

    /// Display label
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,

    /// Whether the firewall is enforced
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<FirewallStatus>,

    /// Inbound and outbound rules
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rules: Option<FirewallRules>,

    /// User tags
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,

    /// Creation timestamp
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created: Option<NaiveDateTime>,

    /// Last updated timestamp
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated: Option<NaiveDateTime>,
}

impl Firewall {
    pub fn new(id: u64) -> Self {
        Self {
            id,
            label: None,
            status: None,
            rules: None,
            tags: None,
            created: None,
            updated: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct FirewallRules {
    /// Rules applied to incoming traffic
    #[serde(default)]
    pub inbound: Vec<FirewallRule>,

    /// Rules applied to outgoing traffic
    #[serde(default)]
    pub outbound: Vec<FirewallRule>,
}

/// A single inbound or outbound rule
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FirewallRule {
    /// TCP, UDP or ICMP
    pub protocol: String,

    /// Comma separated ports or ranges, e.g. "22, 80-90"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ports: Option<String>,

    /// Source or destination addresses
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub addresses: Option<RuleAddresses>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct RuleAddresses {
    /// IPv4 addresses or CIDR ranges
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ipv4: Option<Vec<String>>,

    /// IPv6 addresses or CIDR ranges
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ipv6: Option<Vec<String>>,
}

/// An entity a firewall is attached to
///
/// Only `id` is required, as with [`Firewall`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FirewallDevice {
    /// Unique device ID
    pub id: u64,

    /// The attached entity
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entity: Option<DeviceEntity>,

    /// Attachment timestamp
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created: Option<NaiveDateTime>,

    /// Last updated timestamp
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated: Option<NaiveDateTime>,
}

impl FirewallDevice {
    pub fn new(id: u64) -> Self {
        Self {
            id,
            entity: None,
            created: None,
            updated: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DeviceEntity {
    /// ID of the entity, e.g. a Linode instance ID
    pub id: u64,

    /// Entity kind, e.g. "linode"
    #[serde(rename = "type")]
    pub entity_type: String,

    /// Entity label
    pub label: String,

    /// API path of the entity
    pub url: String,
}
