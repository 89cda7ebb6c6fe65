use std::time::Duration;

use axum::extract::ws::{Message, WebSocket};
use futures::{stream::SplitStream, Sink, SinkExt, StreamExt};
use tokio::{sync::broadcast::error::RecvError, task::JoinHandle};
use tracing::{debug, error, info, instrument, warn};
use uuid::Uuid;

use crate::domain::{
	board::{
		schemas::{
			BoardTable, ChangeEvent, ChangeKind, ConnectionStatus, DatabaseStatus, RefreshNotice, TestBirthday, TodayBoard,
		},
		BoardStateWrapper,
	},
	calendar::Today,
	message::entity::{BirthdayMessage, NewMessage},
	staff::{
		entity::{NewStaffMember, StaffMember},
		upcoming::UpcomingView,
	},
};

use super::response::ServiceError;

pub const TEST_BIRTHDAY_NAME: &str = "Test Birthday Person";

/// How often an open board checks whether the day has rolled over.
const DATE_CHECK_INTERVAL: Duration = Duration::from_secs(60);

const TEST_BIRTHDAY_MESSAGES: [(&str, &str); 3] = [
	(
		"Welcome Team",
		"Happy Birthday! 🎉 This is a test message to show how the birthday board works. Hope you have an amazing day filled with joy and celebration! 🎂🎈",
	),
	(
		"Birthday Bot",
		"Wishing you all the best on your special day! May this year bring you happiness, success, and lots of cake! 🍰✨",
	),
	(
		"Demo User",
		"Another birthday wish! These messages appear as colorful sticky notes. You can add your own messages too! 🎊",
	),
];

pub struct BoardHandler;
impl BoardHandler {
	/// Reloads both tables and swaps the snapshot in one step.
	pub async fn refresh(state: &BoardStateWrapper) -> Result<(), ServiceError> {
		let _ordered = state.refresh_lock.lock().await;
		let staff = state.staff_repository.list().await?;
		let messages = state.message_repository.list().await?;

		state.write().await.replace(staff, messages);
		BoardHandler::notify_refreshed(state, None);
		Ok(())
	}

	/// Message changes only reload messages. Staff changes reload everything, since
	/// removing a member also removes their messages.
	pub async fn refresh_table(
		state: &BoardStateWrapper,
		table: BoardTable,
	) -> Result<(), ServiceError> {
		match table {
			BoardTable::BirthdayMessages => {
				let _ordered = state.refresh_lock.lock().await;
				let messages = state.message_repository.list().await?;
				state.write().await.replace_messages(messages);
				BoardHandler::notify_refreshed(state, Some(table));
				Ok(())
			}
			BoardTable::StaffMembers => BoardHandler::refresh(state).await,
		}
	}

	fn notify_refreshed(
		state: &BoardStateWrapper,
		table: Option<BoardTable>,
	) {
		// No receivers just means no socket is connected.
		let _ = state.refreshed.send(RefreshNotice { table });
	}

	pub async fn publish_change(
		state: &BoardStateWrapper,
		event: ChangeEvent,
	) -> Result<(), ServiceError> {
		match &state.queue_client {
			Some(queue_client) => {
				queue_client.publish(event.subject(), event.to_payload()?).await.map_err(|err| {
					error!("Change publishing error while notifying {:?}: {:?}", event, err);
					ServiceError::QueueServiceError(err.to_string())
				})?;
			}
			None => {
				if state.changes.send(event).is_err() {
					debug!("No change listener running for {:?}", event);
				}
			}
		}
		Ok(())
	}

	/// Runs after a committed write. The write stands either way, so a failed refresh or
	/// publish is only logged and the next refresh catches up.
	async fn sync_after_write(
		state: &BoardStateWrapper,
		table: BoardTable,
		kind: ChangeKind,
	) {
		if let Err(err) = BoardHandler::refresh_table(state, table).await {
			error!("Refresh after {:?} on {} failed: {}", kind, table.name(), err);
		}
		if let Err(err) = BoardHandler::publish_change(state, ChangeEvent::new(table, kind)).await {
			error!("Publishing {:?} on {} failed: {}", kind, table.name(), err);
		}
	}

	/// Re-reads the store on every change notification until the channel closes.
	pub fn run_change_listener(state: BoardStateWrapper) -> JoinHandle<()> {
		let mut receiver = state.changes.subscribe();
		tokio::spawn(async move {
			loop {
				let refreshed = match receiver.recv().await {
					Ok(event) => {
						debug!("Change received: {:?}", event);
						BoardHandler::refresh_table(&state, event.table).await
					}
					Err(RecvError::Lagged(skipped)) => {
						warn!("Change listener lagged behind by {} events, reloading everything", skipped);
						BoardHandler::refresh(&state).await
					}
					Err(RecvError::Closed) => break,
				};
				if let Err(err) = refreshed {
					error!("Board refresh failed: {}", err);
				}
			}
			info!("Change listener stopped");
		})
	}

	/// Feeds changes published by any instance on the queue into the local channel.
	pub async fn forward_queue_changes(state: BoardStateWrapper) -> Result<JoinHandle<()>, ServiceError> {
		let Some(queue_client) = state.queue_client.clone() else {
			return Err(ServiceError::ConfigError("QUEUE_URL is not set".into()));
		};
		let mut subscriber = queue_client
			.subscribe(ChangeEvent::wildcard_subject())
			.await
			.map_err(|err| ServiceError::QueueServiceError(err.to_string()))?;

		Ok(tokio::spawn(async move {
			while let Some(message) = subscriber.next().await {
				match ChangeEvent::try_from(&message.payload[..]) {
					Ok(event) => {
						if state.changes.send(event).is_err() {
							debug!("No change listener running for {:?}", event);
						}
					}
					Err(_) => warn!("Ignoring malformed change on {}", message.subject),
				}
			}
			info!("Queue change subscription ended");
		}))
	}

	pub async fn todays_board(
		state: &BoardStateWrapper,
		today: Today,
	) -> TodayBoard {
		state.read().await.todays_board(today)
	}

	pub async fn upcoming(
		state: &BoardStateWrapper,
		today: Today,
	) -> UpcomingView {
		state.read().await.upcoming(today)
	}

	pub async fn staff(state: &BoardStateWrapper) -> Vec<StaffMember> {
		state.read().await.staff.clone()
	}

	pub async fn messages(state: &BoardStateWrapper) -> Vec<BirthdayMessage> {
		state.read().await.messages.clone()
	}

	pub async fn messages_for(
		state: &BoardStateWrapper,
		staff_id: i64,
	) -> Vec<BirthdayMessage> {
		state.read().await.messages_for(staff_id)
	}

	#[instrument(skip_all, fields(staff_id = message.staff_member_id))]
	pub async fn post_message(
		state: &BoardStateWrapper,
		message: NewMessage,
	) -> Result<BirthdayMessage, ServiceError> {
		let message = message.validate()?;
		if state.staff_repository.get(message.staff_member_id).await?.is_none() {
			return Err(ServiceError::StaffNotFound(message.staff_member_id));
		}

		let created = state
			.message_repository
			.insert_many(vec![message])
			.await?
			.pop()
			.ok_or_else(|| ServiceError::InternalError("message insert returned no row".into()))?;
		info!(message_id = created.id, "Birthday note added");

		BoardHandler::sync_after_write(state, BoardTable::BirthdayMessages, ChangeKind::Insert).await;
		Ok(created)
	}

	#[instrument(skip(state))]
	pub async fn delete_message(
		state: &BoardStateWrapper,
		id: i64,
	) -> Result<(), ServiceError> {
		if !state.message_repository.delete(id).await? {
			return Err(ServiceError::MessageNotFound(id));
		}
		BoardHandler::sync_after_write(state, BoardTable::BirthdayMessages, ChangeKind::Delete).await;
		Ok(())
	}

	#[instrument(skip_all)]
	pub async fn add_staff(
		state: &BoardStateWrapper,
		staff: NewStaffMember,
	) -> Result<StaffMember, ServiceError> {
		let created = state.staff_repository.insert(staff.validate()?).await?;
		info!(staff_id = created.id, "Staff member added");

		BoardHandler::sync_after_write(state, BoardTable::StaffMembers, ChangeKind::Insert).await;
		Ok(created)
	}

	#[instrument(skip(state))]
	pub async fn remove_staff(
		state: &BoardStateWrapper,
		id: i64,
	) -> Result<(), ServiceError> {
		if !state.staff_repository.delete(id).await? {
			return Err(ServiceError::StaffNotFound(id));
		}
		BoardHandler::sync_after_write(state, BoardTable::StaffMembers, ChangeKind::Delete).await;
		Ok(())
	}

	/// Seeds a staff member whose birthday is `today`, with a few sample notes.
	#[instrument(skip_all, fields(today = %today))]
	pub async fn add_test_birthday(
		state: &BoardStateWrapper,
		today: Today,
	) -> Result<TestBirthday, ServiceError> {
		let existing = state
			.staff_repository
			.find_by_name_and_birthday(TEST_BIRTHDAY_NAME, today.month(), today.day())
			.await?;
		if !existing.is_empty() {
			return Err(ServiceError::TestBirthdayExists {
				month: today.month(),
				day: today.day(),
			});
		}

		let staff = state
			.staff_repository
			.insert(NewStaffMember {
				name: TEST_BIRTHDAY_NAME.to_string(),
				birthday_month: today.month(),
				birthday_day: today.day(),
			})
			.await?;

		let samples = TEST_BIRTHDAY_MESSAGES
			.iter()
			.map(|(sender_name, message)| NewMessage {
				staff_member_id: staff.id,
				sender_name: sender_name.to_string(),
				message: message.to_string(),
			})
			.collect();
		let messages = match state.message_repository.insert_many(samples).await {
			Ok(messages) => messages,
			Err(err) => {
				error!("Sample messages failed, removing test person {}: {}", staff.id, err);
				state.staff_repository.delete(staff.id).await?;
				return Err(err);
			}
		};

		BoardHandler::sync_after_write(state, BoardTable::StaffMembers, ChangeKind::Insert).await;
		Ok(TestBirthday { staff, messages })
	}

	/// Removes every test person seeded for `today` and returns how many there were.
	/// Whatever was removed before a failing delete still reaches the board.
	#[instrument(skip_all, fields(today = %today))]
	pub async fn remove_test_birthday(
		state: &BoardStateWrapper,
		today: Today,
	) -> Result<usize, ServiceError> {
		let existing = state
			.staff_repository
			.find_by_name_and_birthday(TEST_BIRTHDAY_NAME, today.month(), today.day())
			.await?;

		let mut removed = 0;
		let mut failure = None;
		for staff in &existing {
			match state.staff_repository.delete(staff.id).await {
				Ok(true) => removed += 1,
				Ok(false) => {}
				Err(err) => {
					failure = Some(err);
					break;
				}
			}
		}

		if removed > 0 {
			BoardHandler::sync_after_write(state, BoardTable::StaffMembers, ChangeKind::Delete).await;
		}
		match failure {
			Some(err) => Err(err),
			None => Ok(removed),
		}
	}

	pub async fn database_status(state: &BoardStateWrapper) -> DatabaseStatus {
		match state.staff_repository.count().await {
			Ok(count) => DatabaseStatus {
				status: ConnectionStatus::Connected,
				staff_count: Some(count),
				error: None,
			},
			Err(err) => {
				warn!("Database status check failed: {}", err);
				DatabaseStatus {
					status: ConnectionStatus::Error,
					staff_count: None,
					error: Some(err.to_string()),
				}
			}
		}
	}

	/// The day a board is drawn for: the override when given, else the configured source.
	pub fn board_date(
		state: &BoardStateWrapper,
		date: Option<Today>,
	) -> Today {
		date.unwrap_or_else(|| state.today_source.today())
	}

	/// Serves one websocket session until either side hangs up.
	pub async fn run_socket_broker(
		stream: WebSocket,
		state: BoardStateWrapper,
		date: Option<Today>,
	) {
		let session = Uuid::new_v4();
		info!(%session, ?date, "Board socket connected");

		let (sender, receiver) = stream.split();
		let mut send_task = tokio::spawn(BoardHandler::send_boards(state, date, sender));
		let mut recv_task = BoardHandler::_receive_until_closed(receiver);

		// Waits on multiple concurrent branches, returning when the first branch completes,
		// cancelling the remaining branches.
		tokio::select! {
			_ = (&mut send_task) => recv_task.abort(),
			_ = (&mut recv_task) => send_task.abort(),
		};
		info!(%session, "Board socket closed");
	}

	/// Sends the board on connect, after every refresh, and again once the day rolls over.
	pub async fn send_boards<S>(
		state: BoardStateWrapper,
		date: Option<Today>,
		mut sink: S,
	) where
		S: Sink<Message> + Unpin,
	{
		let mut refreshed = state.refreshed.subscribe();
		let mut day_check = tokio::time::interval(DATE_CHECK_INTERVAL);

		let Ok(mut shown) = BoardHandler::send_board(&mut sink, &state, date).await else {
			return;
		};
		loop {
			let sent = tokio::select! {
				notice = refreshed.recv() => match notice {
					Ok(_) | Err(RecvError::Lagged(_)) => BoardHandler::send_board(&mut sink, &state, date).await,
					Err(RecvError::Closed) => break,
				},
				_ = day_check.tick() => {
					if BoardHandler::board_date(&state, date) == shown {
						continue;
					}
					BoardHandler::send_board(&mut sink, &state, date).await
				}
			};
			match sent {
				Ok(today) => shown = today,
				Err(err) => {
					debug!("Stopped sending boards: {}", err);
					break;
				}
			}
		}
	}

	async fn send_board<S>(
		sink: &mut S,
		state: &BoardStateWrapper,
		date: Option<Today>,
	) -> Result<Today, ServiceError>
	where
		S: Sink<Message> + Unpin,
	{
		let today = BoardHandler::board_date(state, date);
		let board = BoardHandler::todays_board(state, today).await;
		let text = serde_json::to_string(&board).map_err(|err| ServiceError::InternalError(err.to_string()))?;
		sink.send(Message::Text(text))
			.await
			.map_err(|_| ServiceError::InternalError("board socket closed".into()))?;
		Ok(today)
	}

	fn _receive_until_closed(mut receiver: SplitStream<WebSocket>) -> JoinHandle<()> {
		tokio::spawn(async move {
			while let Some(Ok(message)) = receiver.next().await {
				if let Message::Close(_) = message {
					break;
				}
			}
		})
	}
}

#[cfg(test)]
mod test {
	use std::{sync::Arc, time::Duration};

	use axum::extract::ws::Message;
	use futures::{channel::mpsc, StreamExt};
	use serde_json::Value;

	use crate::{
		adapters::repositories::{InMemoryStore, MessageRepository},
		domain::{
			board::{
				schemas::{BoardTable, ChangeEvent, ChangeKind, ConnectionStatus},
				BoardState, BoardStateWrapper,
			},
			calendar::{Today, TodaySource},
			message::{entity::NewMessage, fixtures::message},
			staff::{entity::NewStaffMember, fixtures::staff},
		},
		services::{
			handlers::{BoardHandler, TEST_BIRTHDAY_NAME},
			response::ServiceError,
		},
	};

	fn board_state(store: InMemoryStore) -> BoardStateWrapper {
		BoardState::new(
			Arc::new(store.clone()),
			Arc::new(store),
			TodaySource::Fixed(Today::new(9, 20).unwrap()),
			None,
		)
		.into()
	}

	async fn seeded() -> (InMemoryStore, BoardStateWrapper) {
		let store = InMemoryStore::with_data(
			vec![staff(1, "A", 9, 20), staff(2, "B", 9, 25), staff(3, "C", 10, 1)],
			vec![message(10, 1), message(11, 2)],
		);
		let state = board_state(store.clone());
		BoardHandler::refresh(&state).await.unwrap();
		(store, state)
	}

	fn note(
		staff_member_id: i64,
		text: &str,
	) -> NewMessage {
		NewMessage {
			staff_member_id,
			sender_name: "Migo".to_string(),
			message: text.to_string(),
		}
	}

	#[tokio::test]
	async fn test_refresh_loads_snapshot() {
		'_given: {
			let (_store, state) = seeded().await;

			'_when: {
				let board = BoardHandler::todays_board(&state, Today::new(9, 20).unwrap()).await;

				assert_eq!(board.honorees.len(), 1);
				assert_eq!(board.honorees[0].notes.len(), 1);
				assert!(state.read().await.refreshed_at.is_some());
			}
		}
	}

	#[tokio::test]
	async fn test_post_message_updates_board() {
		'_given: {
			let (_store, state) = seeded().await;
			let mut refreshed = state.refreshed.subscribe();

			'_when: {
				let created = BoardHandler::post_message(&state, note(1, "  Happy birthday!  ")).await.unwrap();
				assert_eq!(created.message, "Happy birthday!");

				let board = BoardHandler::todays_board(&state, Today::new(9, 20).unwrap()).await;
				// Newest first.
				assert_eq!(board.honorees[0].notes[0].message_id, created.id);
				assert_eq!(board.honorees[0].notes.len(), 2);
				assert_eq!(refreshed.recv().await.unwrap().table, Some(BoardTable::BirthdayMessages));
			}
		}
	}

	#[tokio::test]
	async fn test_post_message_validation() {
		'_given: {
			let (_store, state) = seeded().await;

			'_when: {
				assert!(matches!(
					BoardHandler::post_message(&state, note(1, "   ")).await,
					Err(ServiceError::EmptyMessage)
				));
				assert!(matches!(
					BoardHandler::post_message(&state, note(42, "hi")).await,
					Err(ServiceError::StaffNotFound(42))
				));
				assert_eq!(BoardHandler::messages(&state).await.len(), 2);
			}
		}
	}

	#[tokio::test]
	async fn test_delete_message() {
		'_given: {
			let (_store, state) = seeded().await;

			'_when: {
				BoardHandler::delete_message(&state, 10).await.unwrap();

				assert!(BoardHandler::messages_for(&state, 1).await.is_empty());
				assert!(matches!(
					BoardHandler::delete_message(&state, 10).await,
					Err(ServiceError::MessageNotFound(10))
				));
			}
		}
	}

	#[tokio::test]
	async fn test_staff_roster_maintenance() {
		'_given: {
			let (_store, state) = seeded().await;

			'_when: {
				let created = BoardHandler::add_staff(
					&state,
					NewStaffMember {
						name: " Dee ".into(),
						birthday_month: 9,
						birthday_day: 22,
					},
				)
				.await
				.unwrap();
				assert_eq!(created.name, "Dee");

				let upcoming = BoardHandler::upcoming(&state, Today::new(9, 20).unwrap()).await;
				assert_eq!(upcoming.current_month.birthdays[0].name, "Dee");

				BoardHandler::remove_staff(&state, 1).await.unwrap();
				assert!(BoardHandler::messages_for(&state, 1).await.is_empty());
				assert!(BoardHandler::todays_board(&state, Today::new(9, 20).unwrap()).await.no_birthdays);
				assert!(matches!(
					BoardHandler::remove_staff(&state, 1).await,
					Err(ServiceError::StaffNotFound(1))
				));
			}
		}
	}

	#[tokio::test]
	async fn test_test_birthday_round() {
		'_given: {
			let (_store, state) = seeded().await;
			let today = Today::new(3, 14).unwrap();

			'_when: {
				let seeded = BoardHandler::add_test_birthday(&state, today).await.unwrap();
				assert_eq!(seeded.staff.name, TEST_BIRTHDAY_NAME);
				assert_eq!(seeded.messages.len(), 3);

				let board = BoardHandler::todays_board(&state, today).await;
				assert_eq!(board.honorees.len(), 1);
				assert_eq!(board.honorees[0].notes.len(), 3);

				assert!(matches!(
					BoardHandler::add_test_birthday(&state, today).await,
					Err(ServiceError::TestBirthdayExists { month: 3, day: 14 })
				));

				assert_eq!(BoardHandler::remove_test_birthday(&state, today).await.unwrap(), 1);
				assert_eq!(BoardHandler::remove_test_birthday(&state, today).await.unwrap(), 0);
				assert!(BoardHandler::todays_board(&state, today).await.no_birthdays);
				assert_eq!(BoardHandler::messages(&state).await.len(), 2);
			}
		}
	}

	#[tokio::test]
	async fn test_test_birthday_rolls_back_person_when_notes_fail() {
		'_given: {
			let (store, state) = seeded().await;
			store.fail_message_inserts();

			'_when: {
				let result = BoardHandler::add_test_birthday(&state, Today::new(3, 14).unwrap()).await;

				assert!(matches!(result, Err(ServiceError::DatabaseError(_))));
				assert_eq!(BoardHandler::database_status(&state).await.staff_count, Some(3));
			}
		}
	}

	#[tokio::test]
	async fn test_change_listener_replaces_snapshot() {
		'_given: {
			let (store, state) = seeded().await;
			let listener = BoardHandler::run_change_listener(state.clone());
			let mut refreshed = state.refreshed.subscribe();

			'_when: {
				// A write made by someone else, straight to the store.
				store.insert_many(vec![note(1, "From another instance")]).await.unwrap();
				assert_eq!(BoardHandler::messages_for(&state, 1).await.len(), 1);

				BoardHandler::publish_change(&state, ChangeEvent::new(BoardTable::BirthdayMessages, ChangeKind::Insert))
					.await
					.unwrap();
				tokio::time::timeout(Duration::from_secs(1), refreshed.recv()).await.unwrap().unwrap();

				assert_eq!(BoardHandler::messages_for(&state, 1).await.len(), 2);
			}
			listener.abort();
		}
	}

	#[tokio::test]
	async fn test_database_status() {
		let (_store, state) = seeded().await;

		let status = BoardHandler::database_status(&state).await;
		assert_eq!(status.status, ConnectionStatus::Connected);
		assert_eq!(status.staff_count, Some(3));
	}

	#[tokio::test]
	async fn test_stored_note_is_reported_when_refresh_fails() {
		'_given: {
			let (store, state) = seeded().await;
			let mut changes = state.changes.subscribe();
			store.fail_lists(true);

			'_when: {
				let created = BoardHandler::post_message(&state, note(2, "hi")).await;

				assert!(created.is_ok());
				assert_eq!(
					changes.recv().await.unwrap(),
					ChangeEvent::new(BoardTable::BirthdayMessages, ChangeKind::Insert)
				);

				store.fail_lists(false);
				assert_eq!(MessageRepository::list(&store).await.unwrap().len(), 3);
				BoardHandler::refresh(&state).await.unwrap();
				assert_eq!(BoardHandler::messages_for(&state, 2).await.len(), 2);
			}
		}
	}

	#[tokio::test]
	async fn test_removed_staff_is_reported_when_refresh_fails() {
		let (store, state) = seeded().await;
		store.fail_lists(true);

		BoardHandler::remove_staff(&state, 3).await.unwrap();

		store.fail_lists(false);
		assert_eq!(BoardHandler::database_status(&state).await.staff_count, Some(2));
	}

	#[tokio::test]
	async fn test_refresh_waits_for_the_one_in_progress() {
		'_given: {
			let (store, state) = seeded().await;
			let in_progress = state.refresh_lock.lock().await;
			let pending = tokio::spawn({
				let state = state.clone();
				async move { BoardHandler::refresh(&state).await }
			});
			tokio::task::yield_now().await;

			'_when: {
				store.insert_many(vec![note(2, "Written while waiting")]).await.unwrap();
				drop(in_progress);
				pending.await.unwrap().unwrap();

				assert_eq!(BoardHandler::messages_for(&state, 2).await.len(), 2);
			}
		}
	}

	fn board_from(frame: Message) -> Value {
		match frame {
			Message::Text(text) => serde_json::from_str(&text).unwrap(),
			other => panic!("expected a text frame, got {:?}", other),
		}
	}

	#[tokio::test]
	async fn test_socket_gets_board_on_connect_and_after_refresh() {
		'_given: {
			let (_store, state) = seeded().await;
			let (sink, mut frames) = mpsc::channel(8);
			let session = tokio::spawn(BoardHandler::send_boards(state.clone(), None, sink));

			'_when: {
				let first = board_from(frames.next().await.unwrap());
				assert_eq!(first["date"], "September 20");
				assert_eq!(first["honorees"][0]["notes"].as_array().unwrap().len(), 1);

				BoardHandler::post_message(&state, note(1, "Another one")).await.unwrap();
				let second = tokio::time::timeout(Duration::from_secs(1), frames.next()).await.unwrap().unwrap();
				assert_eq!(board_from(second)["honorees"][0]["notes"].as_array().unwrap().len(), 2);
			}
			session.abort();
		}
	}

	#[tokio::test]
	async fn test_socket_board_date_override() {
		let (_store, state) = seeded().await;
		let (sink, mut frames) = mpsc::channel(8);
		let session = tokio::spawn(BoardHandler::send_boards(state.clone(), Some(Today::new(9, 25).unwrap()), sink));

		let board = board_from(frames.next().await.unwrap());
		assert_eq!(board["date"], "September 25");
		assert_eq!(board["honorees"][0]["staff"]["name"], "B");
		assert_eq!(BoardHandler::board_date(&state, None), Today::new(9, 20).unwrap());
		session.abort();
	}

	#[tokio::test]
	async fn test_socket_session_ends_when_client_is_gone() {
		let (_store, state) = seeded().await;
		let (sink, frames) = mpsc::channel::<Message>(8);
		drop(frames);

		tokio::time::timeout(Duration::from_secs(1), BoardHandler::send_boards(state, None, sink))
			.await
			.unwrap();
	}
}
