use anyhow::Result;
use quill_cms::application::{
    pipeline::SlugPolicy,
    services::{ApplicationServices, Ports},
};
use quill_cms::config::AppConfig;
use quill_cms::infrastructure::{
    database,
    imaging::{ImageCrateCodec, PngUploadValidator},
    media::FilesystemMediaStorage,
    repositories::sqlite_repositories,
    time::SystemClock,
    util::{DefaultSlugGenerator, RandomSuffixGenerator},
};
use quill_cms::presentation::http::{
    routes::{RouterOptions, build_router},
    state::HttpState,
};
use std::{net::SocketAddr, sync::Arc};
use tokio::signal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    if let Err(err) = bootstrap().await {
        tracing::error!(error = %err, "fatal error");
        eprintln!("fatal error: {err}");
        std::process::exit(1);
    }
}

async fn bootstrap() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = AppConfig::from_env()?;

    let pool = database::init_pool(config.database_url()).await?;
    database::run_migrations(&pool).await?;

    tokio::fs::create_dir_all(config.media_root()).await?;

    let ports = Ports {
        storage: Arc::new(FilesystemMediaStorage::new(config.media_root().clone())),
        codec: Arc::new(ImageCrateCodec),
        favicon_validator: Arc::new(PngUploadValidator),
        clock: Arc::new(SystemClock),
        slugger: Arc::new(DefaultSlugGenerator),
        suffixes: Arc::new(RandomSuffixGenerator),
    };
    let policy: SlugPolicy = config.slug_policy();
    let services = Arc::new(ApplicationServices::new(
        sqlite_repositories(&pool),
        ports,
        policy,
    ));

    let state = HttpState {
        services,
        max_upload_bytes: config.max_upload_bytes(),
    };
    let options = RouterOptions {
        allowed_origins: config.allowed_origins().to_vec(),
        media_root: Some(config.media_root().clone()),
    };

    let app = build_router(state, &options);

    let listener = tokio::net::TcpListener::bind(config.listen_addr()).await?;
    let address: SocketAddr = listener.local_addr()?;
    tracing::info!(
        %address,
        media_root = %config.media_root().display(),
        suffix_length = policy.suffix_length,
        max_attempts = policy.max_attempts,
        "listening"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    pool.close().await;
    Ok(())
}

fn init_tracing() {
    let env_filter = std::env::var("RUST_LOG")
        .ok()
        .unwrap_or_else(|| "info,tower_http=info,sqlx=warn".to_string());

    let subscriber = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(env_filter))
        .with(tracing_subscriber::fmt::layer());

    if subscriber.try_init().is_err() {
        tracing::warn!("tracing subscriber already initialised");
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to listen for CTRL+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to install terminate handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {}
        () = terminate => {}
    }
    tracing::info!("shutdown signal received");
}
