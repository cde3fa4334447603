//! Repository for the `emergency_contacts` table.

use sqlx::PgPool;
use society_core::types::DbId;

use crate::models::emergency::{CreateEmergencyContact, EmergencyContact, UpdateEmergencyContact};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, contact_type, phone, available_24x7, created_at, updated_at";

pub struct EmergencyRepo;

impl EmergencyRepo {
    pub async fn create(
        pool: &PgPool,
        input: &CreateEmergencyContact,
    ) -> Result<EmergencyContact, sqlx::Error> {
        let query = format!(
            "INSERT INTO emergency_contacts (name, contact_type, phone, available_24x7)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, EmergencyContact>(&query)
            .bind(&input.name)
            .bind(&input.contact_type)
            .bind(&input.phone)
            .bind(input.available_24x7)
            .fetch_one(pool)
            .await
    }

    pub async fn list(pool: &PgPool) -> Result<Vec<EmergencyContact>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM emergency_contacts ORDER BY contact_type, name");
        sqlx::query_as::<_, EmergencyContact>(&query)
            .fetch_all(pool)
            .await
    }

    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateEmergencyContact,
    ) -> Result<Option<EmergencyContact>, sqlx::Error> {
        let query = format!(
            "UPDATE emergency_contacts SET
                name = COALESCE($2, name),
                contact_type = COALESCE($3, contact_type),
                phone = COALESCE($4, phone),
                available_24x7 = COALESCE($5, available_24x7)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, EmergencyContact>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.contact_type)
            .bind(&input.phone)
            .bind(input.available_24x7)
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM emergency_contacts WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
