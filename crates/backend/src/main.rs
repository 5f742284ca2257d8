use std::sync::Arc;

use anyhow::Context;
use retail_backend::routes::{bind_listener, configure_routes, AppState};
use retail_backend::shared::analytics::{load_from_path, queries};
use retail_backend::shared::config;
use retail_backend::shared::format::{format_money, format_number};
use retail_backend::system;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    system::tracing::initialize()?;

    let config = config::load_config()?;
    let dataset_path = config::get_dataset_path(&config);

    // The dataset is loaded exactly once; a malformed file stops startup
    let dataset = load_from_path(&dataset_path, &config.dataset.load_options())
        .with_context(|| format!("failed to load dataset {}", dataset_path.display()))?;

    let kpi = queries::kpi_summary(&dataset);
    tracing::info!(
        "Dataset ready: {} records, revenue {}, {} customers, {} invoices",
        format_number(dataset.len() as u64),
        format_money(kpi.total_revenue),
        format_number(kpi.unique_customers),
        format_number(kpi.total_invoices)
    );

    let state = AppState {
        dataset: Arc::new(dataset),
        default_top_n: config.dashboard.top_n,
    };
    let app = configure_routes(state);

    let host = config.server.host.as_str();
    let port = config.server.port;

    tracing::info!("Attempting to bind server to http://{}:{}", host, port);
    let listener = match bind_listener(&config.server).await {
        Ok(listener) => {
            tracing::info!("Server successfully bound to {}", listener.local_addr()?);
            listener
        }
        Err(e) => {
            if e.kind() == std::io::ErrorKind::AddrInUse {
                tracing::error!(
                    "Error: Port {} is already in use. Please ensure no other process is using this port.",
                    port
                );
            } else {
                tracing::error!("Failed to bind to {}:{}. Error: {}", host, port, e);
            }
            return Err(e.into());
        }
    };

    axum::serve(listener, app).await?;

    Ok(())
}
