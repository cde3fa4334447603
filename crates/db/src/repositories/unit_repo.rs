//! Repository for the `units` table.

use sqlx::types::Json;
use sqlx::PgPool;
use society_core::types::DbId;

use super::{qualified, user_summary_json};
use crate::models::unit::{CreateUnit, Unit, UnitDetail, UpdateUnit};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, number, block, floor, unit_type, owner_id, tenant_id, \
                       family_members, pets, vehicles, created_at, updated_at";

/// SELECT prefix joining owner and tenant summaries.
fn detail_select() -> String {
    format!(
        "SELECT {}, {} AS owner, {} AS tenant
         FROM units u
         LEFT JOIN users o ON o.id = u.owner_id
         LEFT JOIN users t ON t.id = u.tenant_id",
        qualified("u", COLUMNS),
        user_summary_json("o"),
        user_summary_json("t"),
    )
}

/// Provides CRUD operations for units and their household lists.
pub struct UnitRepo;

impl UnitRepo {
    /// Insert a new unit, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateUnit) -> Result<Unit, sqlx::Error> {
        let query = format!(
            "INSERT INTO units (number, block, floor, unit_type, owner_id, tenant_id,
                                family_members, pets, vehicles)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Unit>(&query)
            .bind(&input.number)
            .bind(&input.block)
            .bind(input.floor)
            .bind(&input.unit_type)
            .bind(input.owner_id)
            .bind(input.tenant_id)
            .bind(Json(&input.family_members))
            .bind(Json(&input.pets))
            .bind(Json(&input.vehicles))
            .fetch_one(pool)
            .await
    }

    /// Find a unit by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Unit>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM units WHERE id = $1");
        sqlx::query_as::<_, Unit>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a unit with owner and tenant summaries.
    pub async fn find_detail(pool: &PgPool, id: DbId) -> Result<Option<UnitDetail>, sqlx::Error> {
        let query = format!("{} WHERE u.id = $1", detail_select());
        sqlx::query_as::<_, UnitDetail>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all units ordered by block then number.
    pub async fn list(pool: &PgPool) -> Result<Vec<UnitDetail>, sqlx::Error> {
        let query = format!("{} ORDER BY u.block, u.number", detail_select());
        sqlx::query_as::<_, UnitDetail>(&query).fetch_all(pool).await
    }

    /// Update a unit. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateUnit,
    ) -> Result<Option<Unit>, sqlx::Error> {
        let query = format!(
            "UPDATE units SET
                number = COALESCE($2, number),
                block = COALESCE($3, block),
                floor = COALESCE($4, floor),
                unit_type = COALESCE($5, unit_type),
                owner_id = COALESCE($6, owner_id),
                tenant_id = COALESCE($7, tenant_id)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Unit>(&query)
            .bind(id)
            .bind(&input.number)
            .bind(&input.block)
            .bind(input.floor)
            .bind(&input.unit_type)
            .bind(input.owner_id)
            .bind(input.tenant_id)
            .fetch_optional(pool)
            .await
    }

    /// Delete a unit. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM units WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Lock a unit, let `edit` change its household lists, and store them.
    ///
    /// Returns `Ok(None)` if the unit does not exist. An error from `edit`
    /// rolls the transaction back.
    pub async fn modify_household<E, F>(pool: &PgPool, id: DbId, edit: F) -> Result<Option<Unit>, E>
    where
        E: From<sqlx::Error>,
        F: FnOnce(&mut Unit) -> Result<(), E>,
    {
        let mut tx = pool.begin().await?;

        let query = format!("SELECT {COLUMNS} FROM units WHERE id = $1 FOR UPDATE");
        let Some(mut unit) = sqlx::query_as::<_, Unit>(&query)
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?
        else {
            return Ok(None);
        };

        edit(&mut unit)?;

        let query = format!(
            "UPDATE units SET family_members = $2, pets = $3, vehicles = $4
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        let updated = sqlx::query_as::<_, Unit>(&query)
            .bind(id)
            .bind(&unit.family_members)
            .bind(&unit.pets)
            .bind(&unit.vehicles)
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(Some(updated))
    }
}
