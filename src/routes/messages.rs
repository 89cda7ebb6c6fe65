use axum::{
	extract::{Path, State},
	http::StatusCode,
	routing::{delete, get},
	Json, Router,
};

use crate::{
	domain::{
		board::BoardStateWrapper,
		message::entity::{BirthdayMessage, NewMessage},
	},
	services::{handlers::BoardHandler, response::ServiceError},
};

async fn list_messages_route(State(state): State<BoardStateWrapper>) -> Json<Vec<BirthdayMessage>> {
	Json(BoardHandler::messages(&state).await)
}

async fn create_message_route(
	State(state): State<BoardStateWrapper>,
	Json(message): Json<NewMessage>,
) -> Result<(StatusCode, Json<BirthdayMessage>), ServiceError> {
	let created = BoardHandler::post_message(&state, message).await?;
	Ok((StatusCode::CREATED, Json(created)))
}

async fn delete_message_route(
	State(state): State<BoardStateWrapper>,
	Path(id): Path<i64>,
) -> Result<StatusCode, ServiceError> {
	BoardHandler::delete_message(&state, id).await?;
	Ok(StatusCode::NO_CONTENT)
}

pub fn message_routers() -> Router<BoardStateWrapper> {
	Router::new()
		.route("/messages", get(list_messages_route).post(create_message_route))
		.route("/messages/:id", delete(delete_message_route))
}
