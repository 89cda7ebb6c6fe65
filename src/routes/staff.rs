use axum::{
	extract::{Path, State},
	http::StatusCode,
	routing::{delete, get},
	Json, Router,
};

use crate::{
	domain::{
		board::BoardStateWrapper,
		message::entity::BirthdayMessage,
		staff::entity::{NewStaffMember, StaffMember},
	},
	services::{handlers::BoardHandler, response::ServiceError},
};

async fn list_staff_route(State(state): State<BoardStateWrapper>) -> Json<Vec<StaffMember>> {
	Json(BoardHandler::staff(&state).await)
}

async fn create_staff_route(
	State(state): State<BoardStateWrapper>,
	Json(staff): Json<NewStaffMember>,
) -> Result<(StatusCode, Json<StaffMember>), ServiceError> {
	let created = BoardHandler::add_staff(&state, staff).await?;
	Ok((StatusCode::CREATED, Json(created)))
}

async fn delete_staff_route(
	State(state): State<BoardStateWrapper>,
	Path(id): Path<i64>,
) -> Result<StatusCode, ServiceError> {
	BoardHandler::remove_staff(&state, id).await?;
	Ok(StatusCode::NO_CONTENT)
}

async fn staff_messages_route(
	State(state): State<BoardStateWrapper>,
	Path(id): Path<i64>,
) -> Json<Vec<BirthdayMessage>> {
	Json(BoardHandler::messages_for(&state, id).await)
}

pub fn staff_routers() -> Router<BoardStateWrapper> {
	Router::new()
		.route("/staff", get(list_staff_route).post(create_staff_route))
		.route("/staff/:id", delete(delete_staff_route))
		.route("/staff/:id/messages", get(staff_messages_route))
}
