use async_trait::async_trait;
use tracing::{debug, instrument};

use crate::{
	domain::message::entity::{BirthdayMessage, NewMessage},
	services::response::ServiceError,
};

use super::{MessageRepository, Repository};

// Postgres `foreign_key_violation`.
const FOREIGN_KEY_VIOLATION: &str = "23503";

fn is_foreign_key_violation(err: &sqlx::Error) -> bool {
	match err {
		sqlx::Error::Database(db_err) => db_err.code().as_deref() == Some(FOREIGN_KEY_VIOLATION),
		_ => false,
	}
}

#[async_trait]
impl MessageRepository for Repository<BirthdayMessage> {
	async fn list(&self) -> Result<Vec<BirthdayMessage>, ServiceError> {
		let messages = sqlx::query_as::<_, BirthdayMessage>(
			"SELECT id, staff_member_id, sender_name, message, created_at
			 FROM birthday_messages
			 ORDER BY created_at DESC, id DESC",
		)
		.fetch_all(&self.pool)
		.await?;
		Ok(messages)
	}

	/// Inserts all messages or none of them.
	#[instrument(skip_all, fields(count = messages.len()))]
	async fn insert_many(
		&self,
		messages: Vec<NewMessage>,
	) -> Result<Vec<BirthdayMessage>, ServiceError> {
		let mut trx = self.pool.begin().await?;
		let mut created = Vec::with_capacity(messages.len());

		for message in messages {
			let staff_member_id = message.staff_member_id;
			let row = sqlx::query_as::<_, BirthdayMessage>(
				"INSERT INTO birthday_messages (staff_member_id, sender_name, message)
				 VALUES ($1, $2, $3)
				 RETURNING id, staff_member_id, sender_name, message, created_at",
			)
			.bind(staff_member_id)
			.bind(&message.sender_name)
			.bind(&message.message)
			.fetch_one(&mut *trx)
			.await
			.map_err(|err| {
				if is_foreign_key_violation(&err) {
					ServiceError::StaffNotFound(staff_member_id)
				} else {
					err.into()
				}
			})?;
			created.push(row);
		}

		trx.commit().await?;
		debug!("Birthday messages stored");
		Ok(created)
	}

	#[instrument(skip(self))]
	async fn delete(
		&self,
		id: i64,
	) -> Result<bool, ServiceError> {
		let result = sqlx::query("DELETE FROM birthday_messages WHERE id = $1").bind(id).execute(&self.pool).await?;
		Ok(result.rows_affected() > 0)
	}
}
