use std::time::Duration;

use async_trait::async_trait;

use super::models::{Firewall, FirewallDevice};
use super::request::ApiRequest;
use crate::config::AppConfig;
use crate::error::ApiError;
use crate::fixtures::Fixtures;
use crate::page::{Filter, Page, Params};

pub const FIREWALLS_DELAY: Duration = Duration::from_millis(1000);
pub const DEVICES_DELAY: Duration = Duration::ZERO;

/// Resolve `data` as a single page once `delay` has passed.
/// A zero delay still yields to the scheduler once.
async fn deferred_page<T>(data: Vec<T>, delay: Duration) -> Page<T> {
    if delay.is_zero() {
        tokio::task::yield_now().await;
    } else {
        tokio::time::sleep(delay).await;
    }
    Page::single(data)
}

/// Mocked `GET /networking/firewalls`. `params` and `filter` are ignored.
pub async fn get_firewalls(
    mock_data: Vec<Firewall>,
    params: &Params,
    filter: &Filter,
) -> Page<Firewall> {
    tracing::trace!(?params, filter_keys = filter.len(), "Mocked firewall listing");
    deferred_page(mock_data, FIREWALLS_DELAY).await
}

/// Mocked `GET /networking/firewalls/{id}/devices`. `id` is ignored.
pub async fn get_firewall_devices(
    id: u64,
    mock_data: Vec<FirewallDevice>,
) -> Page<FirewallDevice> {
    tracing::trace!(firewall_id = id, "Mocked firewall device listing");
    deferred_page(mock_data, DEVICES_DELAY).await
}

/// Firewall endpoints of the API
#[async_trait]
pub trait FirewallApi: Send + Sync {
    /// List firewalls
    async fn get_firewalls(
        &self,
        params: &Params,
        filter: &Filter,
    ) -> Result<Page<Firewall>, ApiError>;

    /// List the devices attached to a firewall
    async fn get_firewall_devices(&self, id: u64) -> Result<Page<FirewallDevice>, ApiError>;
}

/// `FirewallApi` backed by fixture data instead of the network
pub struct MockFirewallApi {
    fixtures: Fixtures,
    api_root: String,
    firewalls_delay: Duration,
    devices_delay: Duration,
}

impl MockFirewallApi {
    pub fn new(fixtures: Fixtures, api_root: &str) -> Self {
        Self {
            fixtures,
            api_root: api_root.trim_end_matches('/').to_string(),
            firewalls_delay: FIREWALLS_DELAY,
            devices_delay: DEVICES_DELAY,
        }
    }

    pub fn from_config(fixtures: Fixtures, config: &AppConfig) -> Self {
        Self::new(fixtures, &config.api_root)
            .with_delays(config.firewalls_delay(), config.devices_delay())
    }

    pub fn with_delays(mut self, firewalls: Duration, devices: Duration) -> Self {
        self.firewalls_delay = firewalls;
        self.devices_delay = devices;
        self
    }

    fn log_request(&self, request: &ApiRequest) {
        match request.url(&self.api_root) {
            Ok(url) => tracing::debug!(
                method = %request.method,
                url = %url,
                filter = ?request.x_filter().ok().flatten(),
                "Serving mocked request"
            ),
            Err(e) => tracing::warn!(
                error = %e,
                path = %request.path,
                "Mocked request has no valid URL"
            ),
        }
    }
}

#[async_trait]
impl FirewallApi for MockFirewallApi {
    async fn get_firewalls(
        &self,
        params: &Params,
        filter: &Filter,
    ) -> Result<Page<Firewall>, ApiError> {
        self.log_request(&ApiRequest::list_firewalls(params, filter));

        let page = deferred_page(self.fixtures.firewalls.clone(), self.firewalls_delay).await;
        tracing::info!(results = page.results, "Firewalls listed");
        Ok(page)
    }

    async fn get_firewall_devices(&self, id: u64) -> Result<Page<FirewallDevice>, ApiError> {
        self.log_request(&ApiRequest::list_firewall_devices(id));

        let page = deferred_page(self.fixtures.devices.clone(), self.devices_delay).await;
        tracing::info!(firewall_id = id, results = page.results, "Firewall devices listed");
        Ok(page)
    }
}
