//! Repository for the `vendors` table.

use sqlx::PgPool;
use society_core::types::DbId;

use crate::models::vendor::{CreateVendor, UpdateVendor, Vendor};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, name, category, phone, email, address, rating, contract_end, created_at, updated_at";

/// Provides CRUD operations for the vendor directory.
pub struct VendorRepo;

impl VendorRepo {
    /// Insert a vendor. Rating defaults to 0.
    pub async fn create(pool: &PgPool, input: &CreateVendor) -> Result<Vendor, sqlx::Error> {
        let query = format!(
            "INSERT INTO vendors (name, category, phone, email, address, rating, contract_end)
             VALUES ($1, $2, $3, $4, $5, COALESCE($6, 0), $7)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Vendor>(&query)
            .bind(&input.name)
            .bind(&input.category)
            .bind(&input.phone)
            .bind(&input.email)
            .bind(&input.address)
            .bind(input.rating)
            .bind(input.contract_end)
            .fetch_one(pool)
            .await
    }

    /// Find a vendor by internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Vendor>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM vendors WHERE id = $1");
        sqlx::query_as::<_, Vendor>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all vendors by category then name.
    pub async fn list(pool: &PgPool) -> Result<Vec<Vendor>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM vendors ORDER BY category, name, id");
        sqlx::query_as::<_, Vendor>(&query).fetch_all(pool).await
    }

    /// Update a vendor. Only non-`None` fields in `input` are applied.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateVendor,
    ) -> Result<Option<Vendor>, sqlx::Error> {
        let query = format!(
            "UPDATE vendors SET
                name = COALESCE($2, name),
                category = COALESCE($3, category),
                phone = COALESCE($4, phone),
                email = COALESCE($5, email),
                address = COALESCE($6, address),
                rating = COALESCE($7, rating),
                contract_end = COALESCE($8, contract_end)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Vendor>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.category)
            .bind(&input.phone)
            .bind(&input.email)
            .bind(&input.address)
            .bind(input.rating)
            .bind(input.contract_end)
            .fetch_optional(pool)
            .await
    }

    /// Delete a vendor. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM vendors WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
