use std::time::Duration;

use axum::{
	http::{header::CONTENT_TYPE, HeaderValue, Method},
	Router,
};

use board::{
	dependencies::{board_state, config, connection_pool, run_migrations},
	routes::create_routes,
	services::{handlers::BoardHandler, response::ServiceError},
};
use tokio::{net::TcpListener, signal};
use tower::ServiceBuilder;
use tower_http::{
	cors::{AllowOrigin, CorsLayer},
	trace::TraceLayer,
};

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), ServiceError> {
	println!("Environment Variable Is Being Set...");
	let config = config()?;

	// ! Tracing
	tracing_subscriber::registry()
		.with(tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
			// axum logs rejections from built-in extractors with the `axum::rejection`
			// target, at `TRACE` level. `axum::rejection=trace` enables showing those events
			format!("board={},tower_http=debug,axum::rejection=trace", config.log_level).into()
		}))
		.with(tracing_subscriber::fmt::layer())
		.init();

	// ! Connection
	tracing::info!("Connections Are Being Pooled...");
	run_migrations(connection_pool().await?).await?;

	let board_state = board_state().await?;
	if let Err(err) = BoardHandler::refresh(&board_state).await {
		tracing::error!("Initial board load failed, starting empty: {}", err);
	}

	let listener_task = BoardHandler::run_change_listener(board_state.clone());
	let forward_task = if board_state.queue_client.is_some() {
		Some(BoardHandler::forward_queue_changes(board_state.clone()).await?)
	} else {
		tracing::info!("QUEUE_URL not set, change notifications stay in this instance");
		None
	};

	let origins = config
		.allow_origins
		.iter()
		.map(|origin| origin.parse::<HeaderValue>())
		.collect::<Result<Vec<_>, _>>()
		.map_err(|err| ServiceError::ConfigError(format!("Invalid ALLOW_ORIGINS: {err}")))?;

	let service_name = "/birthday-board";
	let app = Router::new().nest(service_name, create_routes(board_state)).layer(
		ServiceBuilder::new().layer(TraceLayer::new_for_http()).layer(
			CorsLayer::new()
				.allow_origin(AllowOrigin::list(origins))
				.allow_methods([Method::GET, Method::POST, Method::DELETE])
				.allow_headers([CONTENT_TYPE])
				.max_age(Duration::from_secs(60 * 60)),
		),
	);

	tracing::info!("Start Web Server on {}...", config.server_ip_port);
	let listener = TcpListener::bind(&config.server_ip_port)
		.await
		.map_err(|err| ServiceError::ConfigError(format!("Cannot bind {}: {err}", config.server_ip_port)))?;
	axum::serve(listener, app)
		.with_graceful_shutdown(shutdown_signal())
		.await
		.map_err(|err| ServiceError::ConfigError(err.to_string()))?;

	listener_task.abort();
	if let Some(task) = forward_task {
		task.abort();
	}
	tracing::info!("Server shut down");
	Ok(())
}

async fn shutdown_signal() {
	let ctrl_c = async {
		if let Err(err) = signal::ctrl_c().await {
			tracing::error!("Failed to install Ctrl+C handler: {}", err);
			std::future::pending::<()>().await;
		}
		tracing::info!("Received Ctrl+C, shutting down");
	};

	#[cfg(unix)]
	let terminate = async {
		match signal::unix::signal(signal::unix::SignalKind::terminate()) {
			Ok(mut terminate) => {
				terminate.recv().await;
				tracing::info!("Received terminate signal, shutting down");
			}
			Err(err) => {
				tracing::error!("Failed to install signal handler: {}", err);
				std::future::pending::<()>().await;
			}
		}
	};

	#[cfg(not(unix))]
	let terminate = std::future::pending::<()>();

	tokio::select! {
		_ = ctrl_c => {},
		_ = terminate => {},
	}
}
