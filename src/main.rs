use std::sync::Arc;
use std::time::Duration;

use catalog_web::config::SiteConfig;
use catalog_web::server::{self, ServerLimits};
use catalog_web::state::AppState;
use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "catalog-web")]
#[command(about = "Category catalog page for a library management API", long_about = None)]
struct Args {
    /// Base URL of the library API
    #[arg(long, default_value = "http://localhost:3000")]
    api_url: String,

    /// Base URL cover photos are served from
    #[arg(long, default_value = "http://localhost:3000/assets/photos/")]
    photo_path: String,

    /// Path unauthenticated visitors are redirected to
    #[arg(long, default_value = "/login")]
    login_path: String,

    /// Books shown per page
    #[arg(long, default_value = "10")]
    items_per_page: u32,

    /// Log level
    #[arg(short, long, default_value = "info")]
    log_level: String,

    /// HTTP host to bind to (use 0.0.0.0 for public access)
    #[arg(long, default_value = "127.0.0.1")]
    host: String,

    /// HTTP port to bind to
    #[arg(short, long, default_value = "8080")]
    port: u16,

    /// Request timeout in seconds
    #[arg(long, default_value = "30")]
    request_timeout_secs: u64,

    /// Maximum concurrent requests (concurrency limit)
    #[arg(long, default_value = "64")]
    max_concurrent: usize,
}

impl Args {
    fn site_config(&self) -> SiteConfig {
        SiteConfig {
            api_base_url: self.api_url.clone(),
            photo_path: self.photo_path.clone(),
            login_path: self.login_path.clone(),
            items_per_page: self.items_per_page,
            ..SiteConfig::default()
        }
    }

    fn limits(&self) -> ServerLimits {
        ServerLimits {
            request_timeout: Duration::from_secs(self.request_timeout_secs),
            max_concurrent: self.max_concurrent,
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), tower::BoxError> {
    let args = Args::parse();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(format!("catalog_web={}", args.log_level).parse()?)
                .add_directive(format!("tower_http={}", args.log_level).parse()?),
        )
        .with_writer(std::io::stderr)
        .init();

    tracing::info!(
        api_url = %args.api_url,
        items_per_page = args.items_per_page,
        max_concurrent = args.max_concurrent,
        "Starting catalog-web"
    );

    let state = Arc::new(
        AppState::new(args.site_config()).map_err(|e| format!("Failed to create state: {e}"))?,
    );

    let addr = format!("{}:{}", args.host, args.port);
    server::serve(&addr, server::router(state, args.limits())).await
}
