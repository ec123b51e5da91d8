use order_cleaner::{build_router, AppConfig};
use tracing::info;
use tracing_subscriber::fmt::time::ChronoLocal;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 加载配置
    let config = AppConfig::load()?;

    // 初始化日志 - 本地时间格式, RUST_LOG 优先
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.logging.level));
    tracing_subscriber::fmt()
        .with_timer(ChronoLocal::new("%Y-%m-%d %H:%M:%S".to_string()))
        .with_env_filter(filter)
        .with_target(true)
        .with_level(true)
        .init();

    info!("Starting server with config: {:?}", config);

    let app = build_router(&config.server);

    let addr = config.listen_addr();
    info!("Server listening on {}", addr);
    info!("API Endpoints:");
    info!("  POST /orders         - 清洗订单 (JSON)");
    info!("  POST /orders/export  - 清洗订单 (CSV)");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
