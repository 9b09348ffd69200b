use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::error::ApiError;
use crate::firewalls::{Firewall, FirewallDevice};

/// Canned data served by the mocked API
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Fixtures {
    #[serde(default)]
    pub firewalls: Vec<Firewall>,

    #[serde(default)]
    pub devices: Vec<FirewallDevice>,
}

impl Fixtures {
    /// Load fixtures from a JSON file
    pub fn load(path: &Path) -> Result<Self, ApiError> {
        let raw = std::fs::read_to_string(path).map_err(|source| ApiError::FixtureRead {
            path: path.to_path_buf(),
            source,
        })?;
        let fixtures = Self::from_json(&raw)?;

        tracing::debug!(
            path = %path.display(),
            firewalls = fixtures.firewalls.len(),
            devices = fixtures.devices.len(),
            "Fixtures loaded"
        );

        Ok(fixtures)
    }

    pub fn from_json(raw: &str) -> Result<Self, ApiError> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Built-in sample data
    pub fn sample() -> Self {
        let value = json!({
            "firewalls": [
                {
                    "id": 1,
                    "label": "firewall-public",
                    "status": "enabled",
                    "rules": {
                        "inbound": [
                            {
                                "protocol": "TCP",
                                "ports": "22, 80, 443",
                                "addresses": {"ipv4": ["0.0.0.0/0"], "ipv6": ["::/0"]}
                            }
                        ],
                        "outbound": []
                    },
                    "tags": ["public"],
                    "created": "2019-09-11T19:44:38",
                    "updated": "2019-09-11T19:44:38"
                },
                {
                    "id": 2,
                    "label": "firewall-internal",
                    "status": "disabled",
                    "rules": {
                        "inbound": [
                            {
                                "protocol": "UDP",
                                "ports": "53",
                                "addresses": {"ipv4": ["192.168.0.0/16"]}
                            }
                        ],
                        "outbound": [
                            {"protocol": "ICMP"}
                        ]
                    },
                    "tags": [],
                    "created": "2019-10-02T08:12:00",
                    "updated": "2019-11-20T14:30:05"
                }
            ],
            "devices": [
                {
                    "id": 10,
                    "entity": {
                        "id": 16621754,
                        "type": "linode",
                        "label": "web-1",
                        "url": "/v4/linode/instances/16621754"
                    },
                    "created": "2019-09-12T10:00:00",
                    "updated": "2019-09-12T10:00:00"
                },
                {
                    "id": 11,
                    "entity": {
                        "id": 16621755,
                        "type": "linode",
                        "label": "web-2",
                        "url": "/v4/linode/instances/16621755"
                    },
                    "created": "2019-09-12T10:05:00",
                    "updated": "2019-09-12T10:05:00"
                }
            ]
        });

        serde_json::from_value(value).expect("built-in sample fixtures are valid")
    }
}
