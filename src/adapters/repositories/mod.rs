#[cfg(test)]
pub(crate) mod in_memory;
pub(crate) mod message_repository;
pub(crate) mod staff_repository;

use std::marker::PhantomData;

use async_trait::async_trait;
use sqlx::PgPool;

use crate::{
	domain::{
		message::entity::{BirthdayMessage, NewMessage},
		staff::entity::{NewStaffMember, StaffMember},
	},
	services::response::ServiceError,
};

#[cfg(test)]
pub use in_memory::InMemoryStore;

#[async_trait]
pub trait StaffRepository: Send + Sync {
	/// Whole roster, ordered by birthday month then day.
	async fn list(&self) -> Result<Vec<StaffMember>, ServiceError>;

	async fn get(
		&self,
		id: i64,
	) -> Result<Option<StaffMember>, ServiceError>;

	async fn find_by_name_and_birthday(
		&self,
		name: &str,
		month: i32,
		day: i32,
	) -> Result<Vec<StaffMember>, ServiceError>;

	async fn insert(
		&self,
		staff: NewStaffMember,
	) -> Result<StaffMember, ServiceError>;

	/// Returns `false` when no row matched. Messages of the removed member go with it.
	async fn delete(
		&self,
		id: i64,
	) -> Result<bool, ServiceError>;

	async fn count(&self) -> Result<i64, ServiceError>;
}

#[async_trait]
pub trait MessageRepository: Send + Sync {
	/// All messages, newest first.
	async fn list(&self) -> Result<Vec<BirthdayMessage>, ServiceError>;

	async fn insert_many(
		&self,
		messages: Vec<NewMessage>,
	) -> Result<Vec<BirthdayMessage>, ServiceError>;

	async fn delete(
		&self,
		id: i64,
	) -> Result<bool, ServiceError>;
}

/// PostgreSQL-backed repository for one entity type.
pub struct Repository<A> {
	pub pool: PgPool,
	pub _phantom: PhantomData<A>,
}

impl<A> Repository<A> {
	pub fn new(pool: PgPool) -> Self {
		Self {
			pool,
			_phantom: Default::default(),
		}
	}
}
