use axum::{
    extract::Extension,
    http::StatusCode,
    response::{Html, IntoResponse},
    routing::{get, get_service},
    Router,
};

use crate::common;

use common::{render_shell, Config, CONFIG};
use std::net::{SocketAddr, TcpListener};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("invalid server address `{0}`")]
    Address(String),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("server failed: {0}")]
    Serve(String),
}

/// The prerendered html shell, shared by every page route.
#[derive(Clone)]
struct Shell(Arc<String>);

async fn shell_handler(Extension(shell): Extension<Shell>) -> impl IntoResponse {
    Html(shell.0.as_str().to_owned())
}

/// Pages get the html shell, anything else is looked up in the static dir.
pub fn router(config: &Config) -> Router {
    let shell = Shell(Arc::new(render_shell(config)));

    let static_files = get_service(ServeDir::new(&config.server.static_dir)).handle_error(
        |err: std::io::Error| async move {
            tracing::error!("failed to serve static file: {}", err);
            (StatusCode::INTERNAL_SERVER_ERROR, "failed to read file")
        },
    );

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(shell_handler))
        .route("/demo", get(shell_handler))
        .layer(Extension(shell))
        .fallback_service(static_files)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

/// Logs to stdout through a background writer. Keep the guard alive for as long
/// as you want logs flushed.
pub fn init_tracing() -> WorkerGuard {
    let (writer, guard) = tracing_appender::non_blocking(std::io::stdout());

    let res = tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "welcome_cover=debug,tower_http=debug,axum::rejection=trace".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(writer))
        .try_init();

    if let Err(e) = res {
        eprintln!("tracing already initialized: {}", e);
    }

    guard
}

/// Serves the site on an already bound listener.
pub async fn serve(listener: TcpListener, config: &Config) -> Result<(), ServerError> {
    listener.set_nonblocking(true)?;
    tracing::info!(
        "serving {} from {} on {}",
        config.site.title,
        config.server.static_dir,
        listener.local_addr()?
    );

    let app = router(config);

    axum::Server::from_tcp(listener)
        .map_err(|e| ServerError::Serve(e.to_string()))?
        .serve(app.into_make_service())
        .await
        .map_err(|e| ServerError::Serve(e.to_string()))
}

pub async fn run() -> Result<(), ServerError> {
    let _guard = init_tracing();
    tracing::info!("starting server");

    let config = CONFIG.clone();
    let addr: SocketAddr = config
        .server
        .address
        .parse()
        .map_err(|_| ServerError::Address(config.server.address.clone()))?;

    let listener = TcpListener::bind(addr)?;
    serve(listener, &config).await
}
