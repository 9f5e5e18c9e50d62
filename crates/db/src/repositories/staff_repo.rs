//! Repository for the `staff` table.

use payroll_core::types::DbId;
use sqlx::PgPool;

use crate::models::staff::{CreateStaff, MergedStaff, Staff, UpdateStaff};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, age, department, basic_salary, bonus_percentage";

/// Provides CRUD operations for staff records.
pub struct StaffRepo;

impl StaffRepo {
    /// Insert a new staff record, returning the created row.
    ///
    /// The stored bonus percentage is derived from `input.bonus_amount`
    /// against `input.basic_salary`.
    pub async fn create(pool: &PgPool, input: &CreateStaff) -> Result<Staff, sqlx::Error> {
        let query = format!(
            "INSERT INTO staff (name, age, department, basic_salary, bonus_percentage)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Staff>(&query)
            .bind(&input.name)
            .bind(input.age)
            .bind(&input.department)
            .bind(input.basic_salary)
            .bind(input.bonus_percentage())
            .fetch_one(pool)
            .await
    }

    /// Find a staff record by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Staff>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM staff WHERE id = $1");
        sqlx::query_as::<_, Staff>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all staff records ordered by ID.
    pub async fn list(pool: &PgPool) -> Result<Vec<Staff>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM staff ORDER BY id");
        sqlx::query_as::<_, Staff>(&query).fetch_all(pool).await
    }

    /// Apply a partial update within a transaction.
    ///
    /// Reads the current row, merges the present fields of `input` (see
    /// [`UpdateStaff::merge_into`]), and writes the merged row back with the
    /// recomputed bonus percentage. Returns `None` if no row with `id` exists.
    ///
    /// The row is not locked, so concurrent updates are last-write-wins.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateStaff,
    ) -> Result<Option<MergedStaff>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let select = format!("SELECT {COLUMNS} FROM staff WHERE id = $1");
        let Some(current) = sqlx::query_as::<_, Staff>(&select)
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?
        else {
            return Ok(None);
        };

        let merged = input.merge_into(&current);

        let update = format!(
            "UPDATE staff SET
                name = $2,
                age = $3,
                department = $4,
                basic_salary = $5,
                bonus_percentage = $6
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        let staff = sqlx::query_as::<_, Staff>(&update)
            .bind(id)
            .bind(&merged.staff.name)
            .bind(merged.staff.age)
            .bind(&merged.staff.department)
            .bind(merged.staff.basic_salary)
            .bind(merged.staff.bonus_percentage)
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;

        Ok(Some(MergedStaff {
            staff,
            bonus_amount: merged.bonus_amount,
        }))
    }

    /// Permanently delete a staff record by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM staff WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
