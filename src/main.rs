//! Tigris Chat server
//!
//! Serves `POST /api/log-question`: appends each question to the question
//! log and relays it to the answer service.

use axum::http::HeaderValue;
use std::net::SocketAddr;
use std::sync::Arc;
use tigris_chat::answer::{AnswerService, HttpAnswerService, LoggingService};
use tigris_chat::api::{create_router, AppState};
use tigris_chat::config::ServerConfig;
use tigris_chat::question_log::FileQuestionLog;
use tower_http::{
    compression::CompressionLayer,
    cors::{AllowOrigin, Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "tigris_chat=info,tigris_server=info,tower_http=debug".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .json()
                .with_current_span(false)
                .with_span_list(false),
        )
        .init();

    let config = ServerConfig::from_env();

    let question_log = FileQuestionLog::new(&config.log_path);
    tracing::info!(path = %question_log.path().display(), "Logging questions");

    let answers = LoggingService::new(Arc::new(HttpAnswerService::new(
        &config.answer_service_url,
    )));
    tracing::info!(endpoint = %answers.endpoint(), "Relaying to answer service");

    let state = AppState::new(Arc::new(answers), Arc::new(question_log));

    let cors = CorsLayer::new()
        .allow_origin(allow_origin(config.allowed_origins.as_deref()))
        .allow_methods(Any)
        .allow_headers(Any);

    let compression = CompressionLayer::new()
        .gzip(true)
        .br(true)
        .deflate(true)
        .zstd(true);

    let app = create_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(compression);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("Tigris Chat server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

fn allow_origin(origins: Option<&[String]>) -> AllowOrigin {
    let Some(origins) = origins else {
        return AllowOrigin::from(Any);
    };
    let parsed: Vec<_> = origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::warn!(origin = %origin, error = %e, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();
    AllowOrigin::list(parsed)
}
