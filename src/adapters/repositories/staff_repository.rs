use async_trait::async_trait;
use tracing::{debug, instrument};

use crate::{
	domain::staff::entity::{NewStaffMember, StaffMember},
	services::response::ServiceError,
};

use super::{Repository, StaffRepository};

#[async_trait]
impl StaffRepository for Repository<StaffMember> {
	async fn list(&self) -> Result<Vec<StaffMember>, ServiceError> {
		let staff = sqlx::query_as::<_, StaffMember>(
			"SELECT id, name, birthday_month, birthday_day, created_at
			 FROM staff_members
			 ORDER BY birthday_month ASC, birthday_day ASC, id ASC",
		)
		.fetch_all(&self.pool)
		.await?;
		Ok(staff)
	}

	async fn get(
		&self,
		id: i64,
	) -> Result<Option<StaffMember>, ServiceError> {
		let staff = sqlx::query_as::<_, StaffMember>(
			"SELECT id, name, birthday_month, birthday_day, created_at
			 FROM staff_members
			 WHERE id = $1",
		)
		.bind(id)
		.fetch_optional(&self.pool)
		.await?;
		Ok(staff)
	}

	async fn find_by_name_and_birthday(
		&self,
		name: &str,
		month: i32,
		day: i32,
	) -> Result<Vec<StaffMember>, ServiceError> {
		let staff = sqlx::query_as::<_, StaffMember>(
			"SELECT id, name, birthday_month, birthday_day, created_at
			 FROM staff_members
			 WHERE name = $1 AND birthday_month = $2 AND birthday_day = $3
			 ORDER BY id",
		)
		.bind(name)
		.bind(month)
		.bind(day)
		.fetch_all(&self.pool)
		.await?;
		Ok(staff)
	}

	#[instrument(skip(self), fields(name = %staff.name))]
	async fn insert(
		&self,
		staff: NewStaffMember,
	) -> Result<StaffMember, ServiceError> {
		let created = sqlx::query_as::<_, StaffMember>(
			"INSERT INTO staff_members (name, birthday_month, birthday_day)
			 VALUES ($1, $2, $3)
			 RETURNING id, name, birthday_month, birthday_day, created_at",
		)
		.bind(&staff.name)
		.bind(staff.birthday_month)
		.bind(staff.birthday_day)
		.fetch_one(&self.pool)
		.await?;

		debug!(staff_id = created.id, "Staff member created in database");
		Ok(created)
	}

	#[instrument(skip(self))]
	async fn delete(
		&self,
		id: i64,
	) -> Result<bool, ServiceError> {
		let result = sqlx::query("DELETE FROM staff_members WHERE id = $1").bind(id).execute(&self.pool).await?;
		Ok(result.rows_affected() > 0)
	}

	async fn count(&self) -> Result<i64, ServiceError> {
		let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM staff_members").fetch_one(&self.pool).await?;
		Ok(count)
	}
}
