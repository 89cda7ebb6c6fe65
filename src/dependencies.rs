use std::sync::{Arc, OnceLock};

use async_nats::Client;
use sqlx::{postgres::PgPoolOptions, PgPool};
use tracing::info;

use crate::{
	adapters::repositories::Repository,
	config::Config,
	domain::{
		board::{BoardState, BoardStateWrapper},
		message::entity::BirthdayMessage,
		staff::entity::StaffMember,
	},
	services::response::ServiceError,
};

pub fn config() -> Result<&'static Config, ServiceError> {
	static CONFIG: OnceLock<Config> = OnceLock::new();
	let config = match CONFIG.get() {
		None => {
			let config = Config::new()?;

			CONFIG.get_or_init(|| config)
		}
		Some(config) => config,
	};
	Ok(config)
}

pub async fn connection_pool() -> Result<&'static PgPool, ServiceError> {
	static POOL: OnceLock<PgPool> = OnceLock::new();

	let p = match POOL.get() {
		None => {
			let config = config()?;
			let pool = PgPoolOptions::new()
				.max_connections(config.database_max_connections)
				.connect(&config.database_url)
				.await?;
			POOL.get_or_init(|| pool)
		}
		Some(pool) => pool,
	};
	Ok(p)
}

pub async fn run_migrations(pool: &PgPool) -> Result<(), ServiceError> {
	sqlx::migrate!("./migrations")
		.run(pool)
		.await
		.map_err(|err| ServiceError::ConfigError(format!("Migration failed: {err}")))?;
	info!("Database schema is up to date");
	Ok(())
}

/// `None` when no queue is configured.
pub async fn queue_client() -> Result<Option<&'static Client>, ServiceError> {
	static CLIENT: OnceLock<Client> = OnceLock::new();

	let Some(url) = config()?.queue_url.as_deref() else {
		return Ok(None);
	};
	let c = match CLIENT.get() {
		None => {
			let cl = async_nats::ConnectOptions::new()
				.name("birthday-board")
				.connect(url)
				.await
				.map_err(|err| ServiceError::QueueServiceError(err.to_string()))?;
			CLIENT.get_or_init(|| cl)
		}
		Some(c) => c,
	};
	Ok(Some(c))
}

pub async fn board_state() -> Result<BoardStateWrapper, ServiceError> {
	let pool = connection_pool().await?.clone();
	let queue_client = queue_client().await?.cloned();

	Ok(BoardState::new(
		Arc::new(Repository::<StaffMember>::new(pool.clone())),
		Arc::new(Repository::<BirthdayMessage>::new(pool)),
		config()?.today_source,
		queue_client,
	)
	.into())
}
