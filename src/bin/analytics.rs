//! Analytics service entry point.

use shortlink_services::config::{self, ServiceKind};
use shortlink_services::server;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = config::load_from_env(ServiceKind::Analytics)?;
    server::init_tracing(&config.log_level, &config.log_format);
    config.print_summary();

    server::run_analytics(config).await
}
