use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::services::response::ServiceError;

#[derive(Clone, PartialEq, Eq, Debug, Hash, Serialize, Deserialize, sqlx::FromRow)]
pub struct StaffMember {
	pub id: i64,
	pub name: String,
	pub birthday_month: i32,
	pub birthday_day: i32,
	pub created_at: DateTime<Utc>,
}

impl StaffMember {
	pub fn has_birthday(
		&self,
		month: i32,
		day: i32,
	) -> bool {
		self.birthday_month == month && self.birthday_day == day
	}
}

#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct NewStaffMember {
	pub name: String,
	pub birthday_month: i32,
	pub birthday_day: i32,
}

impl NewStaffMember {
	/// Trims the name and range-checks the birthday. Day 30 in February passes:
	/// the roster stores birthdays as raw month/day pairs.
	pub fn validate(self) -> Result<Self, ServiceError> {
		let name = self.name.trim();
		if name.is_empty() {
			return Err(ServiceError::EmptyStaffName);
		}
		if !(1..=12).contains(&self.birthday_month) || !(1..=31).contains(&self.birthday_day) {
			return Err(ServiceError::InvalidBirthday {
				month: self.birthday_month,
				day: self.birthday_day,
			});
		}
		Ok(Self {
			name: name.to_string(),
			..self
		})
	}
}
