pub mod entity;
pub mod upcoming;

use crate::domain::calendar::Today;

use self::entity::StaffMember;

/// Staff whose birthday falls on `today`, in roster order.
///
/// Stored birthdays are compared as raw month/day pairs, so an impossible date such as
/// February 30 simply never matches.
pub fn todays_honorees<'a>(
	today: Today,
	roster: &'a [StaffMember],
) -> Vec<&'a StaffMember> {
	roster.iter().filter(|staff| staff.has_birthday(today.month(), today.day())).collect()
}
