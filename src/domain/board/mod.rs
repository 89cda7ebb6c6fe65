pub mod schemas;

use std::{ops::Deref, sync::Arc};

use chrono::{DateTime, Utc};
use tokio::sync::{broadcast, Mutex, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::adapters::repositories::{MessageRepository, StaffRepository};

use self::schemas::{ChangeEvent, HonoreeBoard, RefreshNotice, TodayBoard};
use super::{
	calendar::{format_birthday, Today, TodaySource},
	message::{entity::BirthdayMessage, messages_for, notes::place_notes},
	staff::{
		entity::StaffMember,
		todays_honorees,
		upcoming::{plan, UpcomingView},
	},
};

const CHANNEL_CAPACITY: usize = 100;

/// Everything the board renders from, as last read from the store.
#[derive(Clone, Debug, Default)]
pub struct BoardSnapshot {
	pub staff: Vec<StaffMember>,
	pub messages: Vec<BirthdayMessage>,
	pub refreshed_at: Option<DateTime<Utc>>,
}

impl BoardSnapshot {
	pub fn new(
		staff: Vec<StaffMember>,
		messages: Vec<BirthdayMessage>,
	) -> Self {
		Self {
			staff,
			messages,
			refreshed_at: Some(Utc::now()),
		}
	}

	pub fn replace(
		&mut self,
		staff: Vec<StaffMember>,
		messages: Vec<BirthdayMessage>,
	) {
		*self = Self::new(staff, messages);
	}

	pub fn replace_messages(
		&mut self,
		messages: Vec<BirthdayMessage>,
	) {
		self.messages = messages;
		self.refreshed_at = Some(Utc::now());
	}

	pub fn todays_board(
		&self,
		today: Today,
	) -> TodayBoard {
		let honorees: Vec<HonoreeBoard> = todays_honorees(today, &self.staff)
			.into_iter()
			.map(|staff| HonoreeBoard::new(staff, place_notes(&messages_for(staff.id, &self.messages))))
			.collect();

		TodayBoard {
			today,
			date: format_birthday(today.month(), today.day()),
			no_birthdays: honorees.is_empty(),
			honorees,
		}
	}

	pub fn upcoming(
		&self,
		today: Today,
	) -> UpcomingView {
		UpcomingView::new(today, &plan(today, &self.staff))
	}

	pub fn messages_for(
		&self,
		staff_id: i64,
	) -> Vec<BirthdayMessage> {
		messages_for(staff_id, &self.messages).into_iter().cloned().collect()
	}
}

pub struct BoardState {
	pub snapshot: RwLock<BoardSnapshot>,
	/// Held from the store read until the snapshot swap, so refreshes land in order.
	pub refresh_lock: Mutex<()>,
	pub staff_repository: Arc<dyn StaffRepository>,
	pub message_repository: Arc<dyn MessageRepository>,
	pub today_source: TodaySource,
	/// Change notifications, local or forwarded from the queue.
	pub changes: broadcast::Sender<ChangeEvent>,
	/// Fired after every snapshot replacement.
	pub refreshed: broadcast::Sender<RefreshNotice>,
	pub queue_client: Option<async_nats::Client>,
}

impl BoardState {
	pub fn new(
		staff_repository: Arc<dyn StaffRepository>,
		message_repository: Arc<dyn MessageRepository>,
		today_source: TodaySource,
		queue_client: Option<async_nats::Client>,
	) -> Self {
		let (changes, _) = broadcast::channel(CHANNEL_CAPACITY);
		let (refreshed, _) = broadcast::channel(CHANNEL_CAPACITY);
		Self {
			snapshot: Default::default(),
			refresh_lock: Default::default(),
			staff_repository,
			message_repository,
			today_source,
			changes,
			refreshed,
			queue_client,
		}
	}
}

#[derive(Clone)]
pub struct BoardStateWrapper(pub Arc<BoardState>);
impl From<Arc<BoardState>> for BoardStateWrapper {
	fn from(value: Arc<BoardState>) -> Self {
		Self(value)
	}
}
impl From<BoardState> for BoardStateWrapper {
	fn from(value: BoardState) -> Self {
		Arc::new(value).into()
	}
}
impl Deref for BoardStateWrapper {
	type Target = BoardState;
	fn deref(&self) -> &Self::Target {
		&self.0
	}
}
impl BoardStateWrapper {
	pub(crate) async fn read(&self) -> RwLockReadGuard<'_, BoardSnapshot> {
		self.0.snapshot.read().await
	}
	pub(crate) async fn write(&self) -> RwLockWriteGuard<'_, BoardSnapshot> {
		self.0.snapshot.write().await
	}
}
