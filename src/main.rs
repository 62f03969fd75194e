use anyhow::Result;
use blogdesk::application::{
    ports::{time::Clock, util::SlugGenerator},
    services::ApplicationServices,
};
use blogdesk::config::{AppConfig, StorageBackend};
use blogdesk::domain::blog::{BlogReadRepository, BlogWriteRepository};
use blogdesk::infrastructure::{
    database,
    repositories::{
        InMemoryBlogRepository, PostgresBlogReadRepository, PostgresBlogWriteRepository,
    },
    time::SystemClock,
    util::DefaultSlugGenerator,
};
use blogdesk::presentation::http::{routes::build_router, state::HttpState};
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

type Repositories = (Arc<dyn BlogWriteRepository>, Arc<dyn BlogReadRepository>);

async fn repositories(config: &AppConfig) -> Result<Repositories> {
    match config.storage_backend() {
        StorageBackend::Postgres => {
            let pool = database::init_pool(config.database_url()).await?;
            database::run_migrations(&pool).await?;
            tracing::info!("using postgres storage");
            let write_repo: Arc<dyn BlogWriteRepository> =
                Arc::new(PostgresBlogWriteRepository::new(pool.clone()));
            let read_repo: Arc<dyn BlogReadRepository> =
                Arc::new(PostgresBlogReadRepository::new(pool));
            Ok((write_repo, read_repo))
        }
        StorageBackend::Memory => {
            tracing::warn!("using in-memory storage; data is lost on restart");
            let repo = Arc::new(InMemoryBlogRepository::new());
            let write_repo: Arc<dyn BlogWriteRepository> = repo.clone();
            let read_repo: Arc<dyn BlogReadRepository> = repo;
            Ok((write_repo, read_repo))
        }
    }
}

async fn bootstrap() -> Result<()> {
    init_tracing();

    let config = AppConfig::from_env()?;
    let (write_repo, read_repo) = repositories(&config).await?;

    let clock: Arc<dyn Clock> = Arc::new(SystemClock);
    let slugger: Arc<dyn SlugGenerator> = Arc::new(DefaultSlugGenerator);

    let services = Arc::new(ApplicationServices::new(
        write_repo, read_repo, clock, slugger,
    ));
    let state = HttpState { services };

    let app = build_router(state, &config);

    let listener = tokio::net::TcpListener::bind(config.listen_addr()).await?;
    let address: SocketAddr = listener.local_addr()?;
    tracing::info!("listening on {address}");

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    Ok(())
}

fn init_tracing() {
    dotenvy::dotenv().ok();
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
        _ = ctrl_c => {}
        _ = terminate => {}
    }
    tracing::info!("shutdown signal received");
}
