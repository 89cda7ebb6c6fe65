use crate::{domain::calendar::TodaySource, services::response::ServiceError};

pub struct Config {
	/// Which errors we want to log
	pub log_level: String,

	/// Port server is listening to
	pub server_ip_port: String,
	/// Change notifications are only shared between instances when set.
	pub queue_url: Option<String>,
	pub database_url: String,
	pub database_max_connections: u32,
	pub allow_origins: Vec<String>,
	pub today_source: TodaySource,
}

impl Config {
	pub fn new() -> Result<Config, ServiceError> {
		dotenv::dotenv().ok();
		Config::load(|key| std::env::var(key).ok())
	}

	pub fn load(var: impl Fn(&str) -> Option<String>) -> Result<Config, ServiceError> {
		let database_url = var("DATABASE_URL").ok_or_else(|| ServiceError::ConfigError("DATABASE_URL must be set!".into()))?;
		let queue_url = var("QUEUE_URL").filter(|url| !url.trim().is_empty());
		let log_level = var("LOG_LEVEL").unwrap_or("info".to_string());
		let server_ip_port = var("SERVER_IP_PORT").unwrap_or("0.0.0.0:80".into());
		let database_max_connections = match var("DATABASE_MAX_CONNECTIONS") {
			Some(value) => value
				.parse()
				.map_err(|_| ServiceError::ConfigError(format!("Invalid DATABASE_MAX_CONNECTIONS value: {value}")))?,
			None => 30,
		};
		let allow_origins = var("ALLOW_ORIGINS")
			.unwrap_or("http://localhost:3000,http://localhost:3001".to_string())
			.split(',')
			.map(|origin| origin.trim().to_string())
			.filter(|origin| !origin.is_empty())
			.collect();
		let today_source = match var("BOARD_TODAY") {
			Some(value) => value
				.parse()
				.map_err(|err| ServiceError::ConfigError(format!("Invalid BOARD_TODAY value: {err}")))?,
			None => TodaySource::Clock,
		};

		Ok(Config {
			queue_url,
			log_level,
			server_ip_port,
			database_url,
			database_max_connections,
			allow_origins,
			today_source,
		})
	}
}
