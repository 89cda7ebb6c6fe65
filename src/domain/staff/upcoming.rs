use serde::Serialize;

use crate::domain::calendar::{days_label, format_birthday, month_name, Today};

use super::entity::StaffMember;

/// At most this many next-month birthdays are listed.
pub const NEXT_MONTH_LIMIT: usize = 6;

/// The next-month panel is shown while the current month has fewer upcoming birthdays than this.
pub const SPARSE_MONTH_THRESHOLD: usize = 3;

#[derive(Clone, PartialEq, Eq, Debug)]
pub struct UpcomingEntry<'a> {
	pub staff: &'a StaffMember,
	pub days_until: i32,
}

#[derive(Clone, PartialEq, Eq, Debug)]
pub struct UpcomingPlan<'a> {
	pub current_month: Vec<UpcomingEntry<'a>>,
	pub next_month: Vec<&'a StaffMember>,
	pub next_month_index: i32,
	pub show_next_month: bool,
}

/// Remaining birthdays of the current month, plus next month's when this month is sparse.
pub fn plan<'a>(
	today: Today,
	roster: &'a [StaffMember],
) -> UpcomingPlan<'a> {
	let mut current_month: Vec<&StaffMember> = roster
		.iter()
		.filter(|staff| staff.birthday_month == today.month() && staff.birthday_day > today.day())
		.collect();
	// `sort_by_key` is stable, ties keep roster order.
	current_month.sort_by_key(|staff| staff.birthday_day);

	let next_month_index = today.next_month();
	let mut next_month: Vec<&StaffMember> =
		roster.iter().filter(|staff| staff.birthday_month == next_month_index).collect();
	next_month.sort_by_key(|staff| staff.birthday_day);
	next_month.truncate(NEXT_MONTH_LIMIT);

	let show_next_month = current_month.len() < SPARSE_MONTH_THRESHOLD;

	UpcomingPlan {
		current_month: current_month
			.into_iter()
			.map(|staff| UpcomingEntry {
				staff,
				days_until: staff.birthday_day - today.day(),
			})
			.collect(),
		next_month,
		next_month_index,
		show_next_month,
	}
}

#[derive(Clone, PartialEq, Eq, Debug, Serialize)]
pub struct UpcomingItem {
	pub id: i64,
	pub name: String,
	pub birthday_month: i32,
	pub birthday_day: i32,
	pub birthday: String,
	pub badge: String,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub days_until: Option<i32>,
}

#[derive(Clone, PartialEq, Eq, Debug, Serialize)]
pub struct UpcomingPanel {
	pub title: String,
	pub month: i32,
	pub birthdays: Vec<UpcomingItem>,
}

/// Owned rendering of an [`UpcomingPlan`].
#[derive(Clone, PartialEq, Eq, Debug, Serialize)]
pub struct UpcomingView {
	pub today: Today,
	pub current_month: UpcomingPanel,
	pub next_month: Option<UpcomingPanel>,
	pub show_next_month: bool,
	pub is_empty: bool,
}

impl UpcomingView {
	pub fn new(
		today: Today,
		plan: &UpcomingPlan<'_>,
	) -> Self {
		let current_month = UpcomingPanel {
			title: format!("Upcoming in {}", month_name(today.month())),
			month: today.month(),
			birthdays: plan
				.current_month
				.iter()
				.map(|entry| UpcomingItem {
					days_until: Some(entry.days_until),
					badge: days_label(entry.days_until),
					..UpcomingItem::from(entry.staff)
				})
				.collect(),
		};

		let next_month = plan.show_next_month.then(|| UpcomingPanel {
			title: format!("Coming in {}", month_name(plan.next_month_index)),
			month: plan.next_month_index,
			birthdays: plan.next_month.iter().map(|staff| UpcomingItem::from(*staff)).collect(),
		});

		Self {
			today,
			is_empty: plan.current_month.is_empty() && plan.next_month.is_empty(),
			show_next_month: plan.show_next_month,
			current_month,
			next_month,
		}
	}
}

impl From<&StaffMember> for UpcomingItem {
	fn from(staff: &StaffMember) -> Self {
		Self {
			id: staff.id,
			name: staff.name.clone(),
			birthday_month: staff.birthday_month,
			birthday_day: staff.birthday_day,
			birthday: format_birthday(staff.birthday_month, staff.birthday_day),
			badge: "Next month".to_string(),
			days_until: None,
		}
	}
}
