use axum::{
	http::StatusCode,
	response::{IntoResponse, Response},
	Json,
};
use serde_json::json;
use thiserror::Error;

use crate::domain::message::entity::MAX_MESSAGE_LENGTH;

#[derive(Debug, Error)]
pub enum ServiceError {
	#[error("Please enter your name")]
	EmptySenderName,

	#[error("Please enter a message")]
	EmptyMessage,

	#[error("Message is {0} characters long, the limit is {}", MAX_MESSAGE_LENGTH)]
	MessageTooLong(usize),

	#[error("Please enter a staff member name")]
	EmptyStaffName,

	#[error("Invalid birthday {month}/{day}")]
	InvalidBirthday { month: i32, day: i32 },

	#[error("Invalid date: {0}")]
	InvalidToday(String),

	#[error("Staff member not found: {0}")]
	StaffNotFound(i64),

	#[error("Message not found: {0}")]
	MessageNotFound(i64),

	#[error("There's already a test birthday person for {month}/{day}")]
	TestBirthdayExists { month: i32, day: i32 },

	#[error("ParsingError")]
	ParsingError,

	#[error("Database error: {0}")]
	DatabaseError(#[from] sqlx::Error),

	#[error("Queue service error: {0}")]
	QueueServiceError(String),

	#[error("Configuration error: {0}")]
	ConfigError(String),

	#[error("Internal error: {0}")]
	InternalError(String),
}

impl ServiceError {
	pub fn status(&self) -> StatusCode {
		match self {
			ServiceError::EmptySenderName
			| ServiceError::EmptyMessage
			| ServiceError::MessageTooLong(_)
			| ServiceError::EmptyStaffName
			| ServiceError::InvalidBirthday { .. }
			| ServiceError::InvalidToday(_)
			| ServiceError::ParsingError => StatusCode::BAD_REQUEST,
			ServiceError::StaffNotFound(_) | ServiceError::MessageNotFound(_) => StatusCode::NOT_FOUND,
			ServiceError::TestBirthdayExists { .. } => StatusCode::CONFLICT,
			ServiceError::DatabaseError(_)
			| ServiceError::QueueServiceError(_)
			| ServiceError::ConfigError(_)
			| ServiceError::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
		}
	}
}

impl IntoResponse for ServiceError {
	fn into_response(self) -> Response {
		let status = self.status();
		if status.is_server_error() {
			tracing::error!("Request failed: {}", self);
		}

		(status, Json(json!({ "error": self.to_string() }))).into_response()
	}
}
