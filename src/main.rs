use serde_json::json;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use firewall_mock::config::AppConfig;
use firewall_mock::firewalls::{FirewallApi, MockFirewallApi};
use firewall_mock::fixtures::Fixtures;
use firewall_mock::{Filter, Params};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "firewall_mock=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    // Load configuration
    let config = AppConfig::load()?;
    tracing::info!("Configuration loaded successfully");

    let fixtures = match &config.fixtures_path {
        Some(path) => Fixtures::load(path)?,
        None => {
            tracing::info!("No fixtures configured, using built-in samples");
            Fixtures::sample()
        }
    };

    let api = MockFirewallApi::from_config(fixtures, &config);

    let params = Params::default();
    let filter = Filter::new();
    let (firewalls, devices) = tokio::join!(
        api.get_firewalls(&params, &filter),
        api.get_firewall_devices(config.firewall_id)
    );

    let output = json!({
        "firewalls": firewalls?,
        "devices": devices?,
    });
    println!("{}", serde_json::to_string_pretty(&output)?);

    Ok(())
}
