use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::services::response::ServiceError;

pub const MAX_MESSAGE_LENGTH: usize = 250;

#[derive(Clone, PartialEq, Eq, Debug, Hash, Serialize, Deserialize, sqlx::FromRow)]
pub struct BirthdayMessage {
	pub id: i64,
	pub staff_member_id: i64,
	pub sender_name: String,
	pub message: String,
	pub created_at: DateTime<Utc>,
}

#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct NewMessage {
	pub staff_member_id: i64,
	pub sender_name: String,
	pub message: String,
}

impl NewMessage {
	pub fn validate(self) -> Result<Self, ServiceError> {
		let sender_name = self.sender_name.trim();
		if sender_name.is_empty() {
			return Err(ServiceError::EmptySenderName);
		}
		let message = self.message.trim();
		if message.is_empty() {
			return Err(ServiceError::EmptyMessage);
		}
		let length = message.chars().count();
		if length > MAX_MESSAGE_LENGTH {
			return Err(ServiceError::MessageTooLong(length));
		}

		Ok(Self {
			staff_member_id: self.staff_member_id,
			sender_name: sender_name.to_string(),
			message: message.to_string(),
		})
	}
}

#[cfg(test)]
mod test {
	use super::{NewMessage, MAX_MESSAGE_LENGTH};
	use crate::services::response::ServiceError;

	fn new_message(
		sender_name: &str,
		message: &str,
	) -> NewMessage {
		NewMessage {
			staff_member_id: 1,
			sender_name: sender_name.to_string(),
			message: message.to_string(),
		}
	}

	#[test]
	fn test_validate_trims_fields() {
		let message = new_message("  Migo ", "\n Happy birthday!  ").validate().unwrap();
		assert_eq!(message.sender_name, "Migo");
		assert_eq!(message.message, "Happy birthday!");
	}

	#[test]
	fn test_validate_requires_sender_then_message() {
		assert!(matches!(new_message(" ", " ").validate(), Err(ServiceError::EmptySenderName)));
		assert!(matches!(new_message("Migo", "\t").validate(), Err(ServiceError::EmptyMessage)));
	}

	#[test]
	fn test_validate_counts_characters_not_bytes() {
		let cakes = "🎂".repeat(MAX_MESSAGE_LENGTH);
		assert!(new_message("Migo", &cakes).validate().is_ok());

		let too_long = "a".repeat(MAX_MESSAGE_LENGTH + 1);
		assert!(matches!(
			new_message("Migo", &too_long).validate(),
			Err(ServiceError::MessageTooLong(251))
		));
	}
}
