//! Mocked firewall and firewall device listings for a paginated cloud API.
//!
//! Listings resolve after a fixed delay to a single-page envelope around
//! caller supplied data. [`firewalls::FirewallApi`] is the seam where a real
//! HTTP client would plug in.

pub mod config;
pub mod error;
pub mod firewalls;
pub mod fixtures;
pub mod page;

pub use error::ApiError;
pub use page::{Filter, Page, Params};
