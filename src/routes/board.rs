use axum::{
	extract::{Query, State, WebSocketUpgrade},
	http::StatusCode,
	response::IntoResponse,
	routing::{get, post},
	Json, Router,
};
use serde_json::{json, Value};

use crate::{
	domain::{
		board::{
			schemas::{DatabaseStatus, TestBirthday, TodayBoard},
			BoardStateWrapper,
		},
		staff::upcoming::UpcomingView,
	},
	services::{handlers::BoardHandler, response::ServiceError},
};

use super::DateQuery;

async fn todays_board_route(
	State(state): State<BoardStateWrapper>,
	Query(date): Query<DateQuery>,
) -> Result<Json<TodayBoard>, ServiceError> {
	let today = date.resolve(state.today_source)?;
	Ok(Json(BoardHandler::todays_board(&state, today).await))
}

async fn upcoming_route(
	State(state): State<BoardStateWrapper>,
	Query(date): Query<DateQuery>,
) -> Result<Json<UpcomingView>, ServiceError> {
	let today = date.resolve(state.today_source)?;
	Ok(Json(BoardHandler::upcoming(&state, today).await))
}

async fn status_route(State(state): State<BoardStateWrapper>) -> Json<DatabaseStatus> {
	Json(BoardHandler::database_status(&state).await)
}

async fn refresh_route(State(state): State<BoardStateWrapper>) -> Result<StatusCode, ServiceError> {
	BoardHandler::refresh(&state).await?;
	Ok(StatusCode::NO_CONTENT)
}

async fn board_websocket_route(
	ws: WebSocketUpgrade,
	State(state): State<BoardStateWrapper>,
	Query(date): Query<DateQuery>,
) -> Result<impl IntoResponse, ServiceError> {
	let date = date.date_override()?;
	Ok(ws.on_upgrade(move |socket| BoardHandler::run_socket_broker(socket, state, date)))
}

async fn add_test_birthday_route(
	State(state): State<BoardStateWrapper>,
	Query(date): Query<DateQuery>,
) -> Result<(StatusCode, Json<TestBirthday>), ServiceError> {
	let today = date.resolve(state.today_source)?;
	let seeded = BoardHandler::add_test_birthday(&state, today).await?;
	Ok((StatusCode::CREATED, Json(seeded)))
}

async fn remove_test_birthday_route(
	State(state): State<BoardStateWrapper>,
	Query(date): Query<DateQuery>,
) -> Result<Json<Value>, ServiceError> {
	let today = date.resolve(state.today_source)?;
	let removed = BoardHandler::remove_test_birthday(&state, today).await?;
	Ok(Json(json!({ "removed": removed })))
}

pub fn board_routers() -> Router<BoardStateWrapper> {
	Router::new()
		.route("/board/today", get(todays_board_route))
		.route("/board/upcoming", get(upcoming_route))
		.route("/board/status", get(status_route))
		.route("/board/refresh", post(refresh_route))
		.route("/board/ws", get(board_websocket_route))
		.route("/test-birthday", post(add_test_birthday_route).delete(remove_test_birthday_route))
}
