//! Sticky-note decoration for birthday messages.
//!
//! Every note picks its colour and its spot on the board by cycling through fixed tables
//! with the note's index in the honoree's message list. The same list always produces the
//! same layout.
use chrono::{DateTime, Utc};
use serde::Serialize;

use super::entity::BirthdayMessage;

pub const STICKY_COLORS: [&str; 6] = [
	"bg-yellow-200 border-yellow-300",
	"bg-pink-200 border-pink-300",
	"bg-blue-200 border-blue-300",
	"bg-green-200 border-green-300",
	"bg-purple-200 border-purple-300",
	"bg-orange-200 border-orange-300",
];

/// Where a note is pinned, as CSS offsets from the board edges.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize)]
pub struct NotePosition {
	#[serde(skip_serializing_if = "Option::is_none")]
	pub top: Option<&'static str>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub left: Option<&'static str>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub right: Option<&'static str>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub bottom: Option<&'static str>,
	pub rotation: &'static str,
}

const fn top_left(
	top: &'static str,
	left: &'static str,
	rotation: &'static str,
) -> NotePosition {
	NotePosition {
		top: Some(top),
		left: Some(left),
		right: None,
		bottom: None,
		rotation,
	}
}

const fn top_right(
	top: &'static str,
	right: &'static str,
	rotation: &'static str,
) -> NotePosition {
	NotePosition {
		top: Some(top),
		left: None,
		right: Some(right),
		bottom: None,
		rotation,
	}
}

const fn bottom_left(
	bottom: &'static str,
	left: &'static str,
	rotation: &'static str,
) -> NotePosition {
	NotePosition {
		top: None,
		left: Some(left),
		right: None,
		bottom: Some(bottom),
		rotation,
	}
}

const fn bottom_right(
	bottom: &'static str,
	right: &'static str,
	rotation: &'static str,
) -> NotePosition {
	NotePosition {
		top: None,
		left: None,
		right: Some(right),
		bottom: Some(bottom),
		rotation,
	}
}

// Ordered so the first notes spread around the edges before filling the gaps.
pub const STICKY_POSITIONS: [NotePosition; 22] = [
	// top row
	top_left("0%", "0%", "-rotate-3"),
	top_left("0%", "15%", "rotate-2"),
	top_right("0%", "15%", "-rotate-2"),
	top_right("0%", "0%", "rotate-4"),
	// middle-high row
	top_left("25%", "0%", "rotate-3"),
	top_right("25%", "0%", "-rotate-1"),
	// middle-low row
	top_left("25%", "15%", "-rotate-4"),
	top_right("25%", "15%", "rotate-2"),
	// bottom row
	bottom_left("22%", "0%", "rotate-2"),
	bottom_left("1%", "32%", "-rotate-3"),
	bottom_right("22%", "15%", "rotate-4"),
	bottom_right("22%", "0%", "-rotate-2"),
	// fillers
	top_left("74%", "50%", "rotate-1"),
	top_left("50%", "15%", "-rotate-2"),
	top_left("75%", "0%", "rotate-3"),
	top_right("75%", "0%", "-rotate-1"),
	top_right("76%", "69%", "rotate-2"),
	top_right("75%", "15%", "-rotate-3"),
	top_left("10%", "10%", "rotate-1"),
	top_right("10%", "10%", "-rotate-1"),
	bottom_left("10%", "10%", "rotate-2"),
	bottom_right("10%", "10%", "-rotate-2"),
];

/// `table[index % table.len()]`, or `None` for an empty table.
pub fn cycle<T>(
	table: &[T],
	index: usize,
) -> Option<&T> {
	if table.is_empty() {
		return None;
	}
	table.get(index % table.len())
}

#[derive(Clone, PartialEq, Eq, Debug, Serialize)]
pub struct StickyNote {
	pub message_id: i64,
	pub sender_name: String,
	pub message: String,
	pub created_at: DateTime<Utc>,
	pub posted_at: String,
	pub color: &'static str,
	pub position: NotePosition,
}

/// Lays out one honoree's messages. `messages` must already be narrowed to that honoree:
/// the index driving the cycle is the position within this list.
pub fn place_notes(messages: &[&BirthdayMessage]) -> Vec<StickyNote> {
	messages
		.iter()
		.enumerate()
		.filter_map(|(index, message)| {
			Some(StickyNote {
				message_id: message.id,
				sender_name: message.sender_name.clone(),
				message: message.message.clone(),
				created_at: message.created_at,
				posted_at: message.created_at.format("%H:%M").to_string(),
				color: *cycle(&STICKY_COLORS, index)?,
				position: *cycle(&STICKY_POSITIONS, index)?,
			})
		})
		.collect()
}
