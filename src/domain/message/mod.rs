pub mod entity;
pub mod notes;

use self::entity::BirthdayMessage;

/// Messages addressed to `staff_id`, in the order they were given.
pub fn messages_for(
	staff_id: i64,
	messages: &[BirthdayMessage],
) -> Vec<&BirthdayMessage> {
	messages.iter().filter(|message| message.staff_member_id == staff_id).collect()
}
