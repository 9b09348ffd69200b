pub mod models;
mod request;
mod service;

pub use models::{
    DeviceEntity, Firewall, FirewallDevice, FirewallRule, FirewallRules, FirewallStatus,
};
pub use request::ApiRequest;
pub use service::{
    get_firewall_devices, get_firewalls, FirewallApi, MockFirewallApi, DEVICES_DELAY,
    FIREWALLS_DELAY,
};
