mod board;
mod messages;
mod staff;

use axum::Router;
use serde::Deserialize;

use crate::{
	domain::{
		board::BoardStateWrapper,
		calendar::{Today, TodaySource},
	},
	services::response::ServiceError,
};

/// Optional `?month=&day=` override of the configured date source.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct DateQuery {
	month: Option<i32>,
	day: Option<i32>,
}

impl DateQuery {
	/// `None` when neither parameter is given.
	pub(crate) fn date_override(&self) -> Result<Option<Today>, ServiceError> {
		match (self.month, self.day) {
			(Some(month), Some(day)) => Today::new(month, day).map(Some),
			(None, None) => Ok(None),
			_ => Err(ServiceError::InvalidToday("month and day must be given together".into())),
		}
	}

	pub(crate) fn resolve(
		&self,
		source: TodaySource,
	) -> Result<Today, ServiceError> {
		Ok(self.date_override()?.unwrap_or_else(|| source.today()))
	}
}

pub fn create_routes(state: BoardStateWrapper) -> Router {
	Router::new()
		.merge(board::board_routers())
		.merge(staff::staff_routers())
		.merge(messages::message_routers())
		.with_state(state)
}
