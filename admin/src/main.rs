//! Duka Admin Client - connectivity check
//!
//! Loads the configuration, builds the API client and verifies the admin
//! API is reachable by listing the public subscription plans.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use duka_admin::{AdminApiClient, Config};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "duka_admin=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    dotenvy::dotenv().ok();
    let config = Config::load()?;

    tracing::info!("Starting Duka admin client");
    tracing::info!("Environment: {}", config.environment);
    tracing::info!("API base URL: {}", config.api.base_url);

    let mut api = AdminApiClient::new(config.api.base_url.clone());
    if let Some(token) = config.api.session_token.clone() {
        api = api.with_token(token);
    }

    let plans = api.list_subscription_plans().await?;
    tracing::info!("Admin API reachable, {} subscription plans available", plans.len());
    for plan in &plans {
        tracing::info!(plan = %plan.name, "plan");
    }

    Ok(())
}
