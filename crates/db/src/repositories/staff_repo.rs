//! Repository for the `staff` table.

use sqlx::types::Json;
use sqlx::PgPool;
use society_core::types::DbId;

use crate::models::staff::{CreateStaff, Staff, UpdateStaff};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, role, phone, shift, attendance, created_at, updated_at";

/// Provides CRUD and attendance operations for society staff.
pub struct StaffRepo;

impl StaffRepo {
    /// Insert a staff member, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateStaff) -> Result<Staff, sqlx::Error> {
        let query = format!(
            "INSERT INTO staff (name, role, phone, shift, attendance)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Staff>(&query)
            .bind(&input.name)
            .bind(&input.role)
            .bind(&input.phone)
            .bind(&input.shift)
            .bind(Json(&input.attendance))
            .fetch_one(pool)
            .await
    }

    /// Find a staff member by internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Staff>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM staff WHERE id = $1");
        sqlx::query_as::<_, Staff>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all staff by name.
    pub async fn list(pool: &PgPool) -> Result<Vec<Staff>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM staff ORDER BY name, id");
        sqlx::query_as::<_, Staff>(&query).fetch_all(pool).await
    }

    /// Update a staff member. Only non-`None` fields in `input` are applied.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateStaff,
    ) -> Result<Option<Staff>, sqlx::Error> {
        let query = format!(
            "UPDATE staff SET
                name = COALESCE($2, name),
                role = COALESCE($3, role),
                phone = COALESCE($4, phone),
                shift = COALESCE($5, shift)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Staff>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.role)
            .bind(&input.phone)
            .bind(&input.shift)
            .fetch_optional(pool)
            .await
    }

    /// Lock a staff row, let `edit` change its attendance, and store it.
    ///
    /// Returns `Ok(None)` if the staff member does not exist.
    pub async fn modify_attendance<E, F>(
        pool: &PgPool,
        id: DbId,
        edit: F,
    ) -> Result<Option<Staff>, E>
    where
        E: From<sqlx::Error>,
        F: FnOnce(&mut Staff) -> Result<(), E>,
    {
        let mut tx = pool.begin().await?;

        let query = format!("SELECT {COLUMNS} FROM staff WHERE id = $1 FOR UPDATE");
        let Some(mut staff) = sqlx::query_as::<_, Staff>(&query)
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?
        else {
            return Ok(None);
        };

        edit(&mut staff)?;

        let query = format!("UPDATE staff SET attendance = $2 WHERE id = $1 RETURNING {COLUMNS}");
        let updated = sqlx::query_as::<_, Staff>(&query)
            .bind(id)
            .bind(&staff.attendance)
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(Some(updated))
    }

    /// Delete a staff member. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM staff WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
