//! Repository for the `facilities` table.

use sqlx::types::Json;
use sqlx::PgPool;
use society_core::types::DbId;

use crate::models::facility::{CreateFacility, Facility, UpdateFacility};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, description, capacity, timings, amenities, rules, \
                       is_paid, price_per_hour, image, created_at, updated_at";

/// Provides CRUD operations for bookable facilities.
pub struct FacilityRepo;

impl FacilityRepo {
    /// Insert a new facility, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateFacility) -> Result<Facility, sqlx::Error> {
        let query = format!(
            "INSERT INTO facilities (name, description, capacity, timings, amenities, rules,
                                     is_paid, price_per_hour, image)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Facility>(&query)
            .bind(&input.name)
            .bind(&input.description)
            .bind(input.capacity)
            .bind(&input.timings)
            .bind(Json(&input.amenities))
            .bind(Json(&input.rules))
            .bind(input.is_paid)
            .bind(input.price_per_hour)
            .bind(&input.image)
            .fetch_one(pool)
            .await
    }

    /// Find a facility by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Facility>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM facilities WHERE id = $1");
        sqlx::query_as::<_, Facility>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all facilities by name.
    pub async fn list(pool: &PgPool) -> Result<Vec<Facility>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM facilities ORDER BY name, id");
        sqlx::query_as::<_, Facility>(&query).fetch_all(pool).await
    }

    /// Update a facility. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateFacility,
    ) -> Result<Option<Facility>, sqlx::Error> {
        let query = format!(
            "UPDATE facilities SET
                name = COALESCE($2, name),
                description = COALESCE($3, description),
                capacity = COALESCE($4, capacity),
                timings = COALESCE($5, timings),
                amenities = COALESCE($6, amenities),
                rules = COALESCE($7, rules),
                is_paid = COALESCE($8, is_paid),
                price_per_hour = COALESCE($9, price_per_hour),
                image = COALESCE($10, image)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Facility>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.description)
            .bind(input.capacity)
            .bind(&input.timings)
            .bind(input.amenities.as_ref().map(Json))
            .bind(input.rules.as_ref().map(Json))
            .bind(input.is_paid)
            .bind(input.price_per_hour)
            .bind(&input.image)
            .fetch_optional(pool)
            .await
    }

    /// Delete a facility and its bookings. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM facilities WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
