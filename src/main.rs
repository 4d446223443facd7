use mendozacleaning_web::config::Config;
use mendozacleaning_web::notify::Mailer;
use mendozacleaning_web::{app, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = Config::from_env()?;

    let state = AppState {
        mailer: Mailer::new(config.resend_api_key, config.to_email),
    };

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    tracing::info!("Listening on {}", listener.local_addr()?);

    axum::serve(listener, app(state, &config.static_dir)).await?;

    Ok(())
}
