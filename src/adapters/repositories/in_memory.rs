use std::sync::{
	atomic::{AtomicBool, Ordering},
	Arc,
};

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::Mutex;

use crate::{
	domain::{
		message::entity::{BirthdayMessage, NewMessage},
		staff::entity::{NewStaffMember, StaffMember},
	},
	services::response::ServiceError,
};

use super::{MessageRepository, StaffRepository};

#[derive(Default)]
struct Tables {
	staff: Vec<StaffMember>,
	messages: Vec<BirthdayMessage>,
	last_id: i64,
}

/// Both tables held in memory, with the same ordering and cascade rules as PostgreSQL.
#[derive(Clone, Default)]
pub struct InMemoryStore {
	tables: Arc<Mutex<Tables>>,
	fail_message_inserts: Arc<AtomicBool>,
	fail_lists: Arc<AtomicBool>,
}

impl InMemoryStore {
	pub fn with_data(
		staff: Vec<StaffMember>,
		messages: Vec<BirthdayMessage>,
	) -> Self {
		let last_id = staff.iter().map(|s| s.id).chain(messages.iter().map(|m| m.id)).max().unwrap_or(0);
		Self {
			tables: Arc::new(Mutex::new(Tables {
				staff,
				messages,
				last_id,
			})),
			fail_message_inserts: Default::default(),
			fail_lists: Default::default(),
		}
	}

	/// Makes every following message insert fail with a database error.
	pub fn fail_message_inserts(&self) {
		self.fail_message_inserts.store(true, Ordering::SeqCst);
	}

	/// While set, listing either table fails with a database error. Writes still succeed.
	pub fn fail_lists(
		&self,
		fail: bool,
	) {
		self.fail_lists.store(fail, Ordering::SeqCst);
	}

	fn check_list(&self) -> Result<(), ServiceError> {
		if self.fail_lists.load(Ordering::SeqCst) {
			return Err(ServiceError::DatabaseError(sqlx::Error::PoolTimedOut));
		}
		Ok(())
	}
}

#[async_trait]
impl StaffRepository for InMemoryStore {
	async fn list(&self) -> Result<Vec<StaffMember>, ServiceError> {
		self.check_list()?;
		let mut staff = self.tables.lock().await.staff.clone();
		staff.sort_by_key(|s| (s.birthday_month, s.birthday_day, s.id));
		Ok(staff)
	}

	async fn get(
		&self,
		id: i64,
	) -> Result<Option<StaffMember>, ServiceError> {
		Ok(self.tables.lock().await.staff.iter().find(|s| s.id == id).cloned())
	}

	async fn find_by_name_and_birthday(
		&self,
		name: &str,
		month: i32,
		day: i32,
	) -> Result<Vec<StaffMember>, ServiceError> {
		Ok(self
			.tables
			.lock()
			.await
			.staff
			.iter()
			.filter(|s| s.name == name && s.has_birthday(month, day))
			.cloned()
			.collect())
	}

	async fn insert(
		&self,
		staff: NewStaffMember,
	) -> Result<StaffMember, ServiceError> {
		let mut tables = self.tables.lock().await;
		tables.last_id += 1;
		let created = StaffMember {
			id: tables.last_id,
			name: staff.name,
			birthday_month: staff.birthday_month,
			birthday_day: staff.birthday_day,
			created_at: Utc::now(),
		};
		tables.staff.push(created.clone());
		Ok(created)
	}

	async fn delete(
		&self,
		id: i64,
	) -> Result<bool, ServiceError> {
		let mut tables = self.tables.lock().await;
		let before = tables.staff.len();
		tables.staff.retain(|s| s.id != id);
		if tables.staff.len() == before {
			return Ok(false);
		}
		tables.messages.retain(|m| m.staff_member_id != id);
		Ok(true)
	}

	async fn count(&self) -> Result<i64, ServiceError> {
		Ok(self.tables.lock().await.staff.len() as i64)
	}
}

#[async_trait]
impl MessageRepository for InMemoryStore {
	async fn list(&self) -> Result<Vec<BirthdayMessage>, ServiceError> {
		self.check_list()?;
		let mut messages = self.tables.lock().await.messages.clone();
		messages.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
		Ok(messages)
	}

	async fn insert_many(
		&self,
		messages: Vec<NewMessage>,
	) -> Result<Vec<BirthdayMessage>, ServiceError> {
		if self.fail_message_inserts.load(Ordering::SeqCst) {
			return Err(ServiceError::DatabaseError(sqlx::Error::PoolClosed));
		}

		let mut tables = self.tables.lock().await;
		if let Some(orphan) = messages.iter().find(|m| !tables.staff.iter().any(|s| s.id == m.staff_member_id)) {
			return Err(ServiceError::StaffNotFound(orphan.staff_member_id));
		}

		let mut created = Vec::with_capacity(messages.len());
		for message in messages {
			tables.last_id += 1;
			let row = BirthdayMessage {
				id: tables.last_id,
				staff_member_id: message.staff_member_id,
				sender_name: message.sender_name,
				message: message.message,
				created_at: Utc::now(),
			};
			tables.messages.push(row.clone());
			created.push(row);
		}
		Ok(created)
	}

	async fn delete(
		&self,
		id: i64,
	) -> Result<bool, ServiceError> {
		let mut tables = self.tables.lock().await;
		let before = tables.messages.len();
		tables.messages.retain(|m| m.id != id);
		Ok(tables.messages.len() != before)
	}
}

#[cfg(test)]
mod test {
	use super::*;
	use crate::domain::{message::fixtures::message, staff::fixtures::staff};

	#[tokio::test]
	async fn test_staff_listed_by_birthday() {
		let store = InMemoryStore::with_data(vec![staff(1, "Oct", 10, 1), staff(2, "Jan", 1, 9), staff(3, "Jan", 1, 2)], vec![]);

		let ids: Vec<i64> = StaffRepository::list(&store).await.unwrap().iter().map(|s| s.id).collect();
		assert_eq!(ids, vec![3, 2, 1]);
	}

	#[tokio::test]
	async fn test_deleting_staff_cascades_to_messages() {
		let store = InMemoryStore::with_data(
			vec![staff(1, "A", 9, 20), staff(2, "B", 9, 21)],
			vec![message(10, 1), message(11, 2), message(12, 1)],
		);

		assert!(StaffRepository::delete(&store, 1).await.unwrap());
		assert!(!StaffRepository::delete(&store, 1).await.unwrap());

		let remaining: Vec<i64> = MessageRepository::list(&store).await.unwrap().iter().map(|m| m.id).collect();
		assert_eq!(remaining, vec![11]);
	}

	#[tokio::test]
	async fn test_inserts_get_fresh_ids_and_list_newest_first() {
		let store = InMemoryStore::with_data(vec![staff(1, "A", 9, 20)], vec![message(10, 1)]);

		let created = store
			.insert_many(vec![NewMessage {
				staff_member_id: 1,
				sender_name: "Migo".into(),
				message: "Hi".into(),
			}])
			.await
			.unwrap();
		assert_eq!(created[0].id, 11);

		let listed = MessageRepository::list(&store).await.unwrap();
		assert_eq!(listed[0].id, 11);
	}

	#[tokio::test]
	async fn test_failing_lists_leave_writes_working() {
		let store = InMemoryStore::with_data(vec![staff(1, "A", 9, 20)], vec![]);
		store.fail_lists(true);

		assert!(MessageRepository::list(&store).await.is_err());
		assert!(StaffRepository::list(&store).await.is_err());
		assert!(StaffRepository::delete(&store, 1).await.unwrap());

		store.fail_lists(false);
		assert!(StaffRepository::list(&store).await.unwrap().is_empty());
	}

	#[tokio::test]
	async fn test_insert_for_unknown_staff_is_rejected() {
		let store = InMemoryStore::default();

		let result = store
			.insert_many(vec![NewMessage {
				staff_member_id: 5,
				sender_name: "Migo".into(),
				message: "Hi".into(),
			}])
			.await;
		assert!(matches!(result, Err(ServiceError::StaffNotFound(5))));
	}
}
