use bytes::Bytes;
use serde::{Deserialize, Serialize};

use crate::{
	domain::{
		calendar::{format_birthday, Today},
		message::{entity::BirthdayMessage, notes::StickyNote},
		staff::entity::StaffMember,
	},
	services::response::ServiceError,
};

pub const CHANGE_SUBJECT_PREFIX: &str = "board.changes";

#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BoardTable {
	StaffMembers,
	BirthdayMessages,
}

impl BoardTable {
	pub fn name(&self) -> &'static str {
		match self {
			Self::StaffMembers => "staff_members",
			Self::BirthdayMessages => "birthday_messages",
		}
	}
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChangeKind {
	Insert,
	Delete,
}

/// Row-level change notification. Carries no row data: receivers re-read the table.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, Serialize, Deserialize)]
pub struct ChangeEvent {
	pub table: BoardTable,
	pub kind: ChangeKind,
}

impl ChangeEvent {
	pub fn new(
		table: BoardTable,
		kind: ChangeKind,
	) -> Self {
		Self { table, kind }
	}

	pub(crate) fn subject(&self) -> String {
		format!("{CHANGE_SUBJECT_PREFIX}.{}", self.table.name())
	}

	pub(crate) fn wildcard_subject() -> String {
		format!("{CHANGE_SUBJECT_PREFIX}.>")
	}

	pub(crate) fn to_payload(self) -> Result<Bytes, ServiceError> {
		serde_json::to_vec(&self).map(Bytes::from).map_err(|err| ServiceError::InternalError(err.to_string()))
	}
}

impl TryFrom<&[u8]> for ChangeEvent {
	type Error = ServiceError;
	fn try_from(value: &[u8]) -> Result<Self, Self::Error> {
		serde_json::from_slice::<ChangeEvent>(value).map_err(|_err| ServiceError::ParsingError)
	}
}

/// Sent to websocket sessions after the snapshot has been replaced.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize)]
pub struct RefreshNotice {
	pub table: Option<BoardTable>,
}

#[derive(Clone, PartialEq, Eq, Debug, Serialize)]
pub struct HonoreeBoard {
	pub staff: StaffMember,
	pub birthday: String,
	pub notes: Vec<StickyNote>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub hint: Option<&'static str>,
}

impl HonoreeBoard {
	pub fn new(
		staff: &StaffMember,
		notes: Vec<StickyNote>,
	) -> Self {
		Self {
			staff: staff.clone(),
			birthday: format_birthday(staff.birthday_month, staff.birthday_day),
			hint: notes.is_empty().then_some("Be the first to add a birthday note!"),
			notes,
		}
	}
}

#[derive(Clone, PartialEq, Eq, Debug, Serialize)]
pub struct TodayBoard {
	pub today: Today,
	pub date: String,
	pub honorees: Vec<HonoreeBoard>,
	pub no_birthdays: bool,
}

#[derive(Clone, PartialEq, Eq, Debug, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ConnectionStatus {
	Connected,
	Error,
}

#[derive(Clone, PartialEq, Eq, Debug, Serialize)]
pub struct DatabaseStatus {
	pub status: ConnectionStatus,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub staff_count: Option<i64>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub error: Option<String>,
}

/// The person and messages seeded by the test-birthday shortcut.
#[derive(Clone, PartialEq, Eq, Debug, Serialize)]
pub struct TestBirthday {
	pub staff: StaffMember,
	pub messages: Vec<BirthdayMessage>,
}
