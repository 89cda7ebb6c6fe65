use std::{fmt::Display, str::FromStr};

use chrono::{Datelike, Local};
use serde::Serialize;

use crate::services::response::ServiceError;

pub const MONTHS: [&str; 12] = [
	"January",
	"February",
	"March",
	"April",
	"May",
	"June",
	"July",
	"August",
	"September",
	"October",
	"November",
	"December",
];

/// The calendar day the board is rendered for.
///
/// Only the month and day matter: birthdays recur yearly, and the year is never compared.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, Serialize)]
pub struct Today {
	month: i32,
	day: i32,
}

impl Today {
	pub fn new(
		month: i32,
		day: i32,
	) -> Result<Self, ServiceError> {
		if !(1..=12).contains(&month) || !(1..=31).contains(&day) {
			return Err(ServiceError::InvalidToday(format!("{month}/{day}")));
		}
		Ok(Self { month, day })
	}

	pub fn from_date(date: impl Datelike) -> Self {
		Self {
			month: date.month() as i32,
			day: date.day() as i32,
		}
	}

	pub fn month(&self) -> i32 {
		self.month
	}

	pub fn day(&self) -> i32 {
		self.day
	}

	/// Month following this one, wrapping December to January.
	pub fn next_month(&self) -> i32 {
		if self.month == 12 {
			1
		} else {
			self.month + 1
		}
	}
}

impl Display for Today {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}/{}", self.month, self.day)
	}
}

// Accepts `MM-DD`, `M-D` and `M/D`.
impl FromStr for Today {
	type Err = ServiceError;
	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let (month, day) = s
			.trim()
			.split_once(['-', '/'])
			.ok_or_else(|| ServiceError::InvalidToday(s.to_string()))?;
		let month = month.parse::<i32>().map_err(|_| ServiceError::InvalidToday(s.to_string()))?;
		let day = day.parse::<i32>().map_err(|_| ServiceError::InvalidToday(s.to_string()))?;
		Today::new(month, day)
	}
}

/// Where the service takes "today" from when a request does not name a date.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum TodaySource {
	#[default]
	Clock,
	Fixed(Today),
}

impl TodaySource {
	pub fn today(&self) -> Today {
		match self {
			TodaySource::Clock => Today::from_date(Local::now().date_naive()),
			TodaySource::Fixed(today) => *today,
		}
	}
}

impl FromStr for TodaySource {
	type Err = ServiceError;
	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s.trim() {
			"clock" | "" => Ok(TodaySource::Clock),
			fixed => {
				let date = fixed.strip_prefix("fixed:").unwrap_or(fixed);
				Ok(TodaySource::Fixed(date.parse()?))
			}
		}
	}
}

pub fn month_name(month: i32) -> &'static str {
	usize::try_from(month - 1).ok().and_then(|i| MONTHS.get(i)).copied().unwrap_or("Unknown")
}

/// `September 20`
pub fn format_birthday(
	month: i32,
	day: i32,
) -> String {
	format!("{} {}", month_name(month), day)
}

pub fn days_label(days: i32) -> String {
	if days == 1 {
		"1 day".to_string()
	} else {
		format!("{days} days")
	}
}
