//! Estate persistence operations.

use anyhow::{Context, Result};
use chrono::Utc;
use estate_core::Estate;
use sqlx::SqlitePool;

/// Insert a new estate.
pub async fn insert_estate(pool: &SqlitePool, estate: &Estate) -> Result<()> {
    sqlx::query(
        r#"
        INSERT INTO estates (id, length, width, created_at)
        VALUES (?1, ?2, ?3, ?4)
        "#,
    )
    .bind(&estate.id)
    .bind(i64::from(estate.length))
    .bind(i64::from(estate.width))
    .bind(Utc::now().to_rfc3339())
    .execute(pool)
    .await?;

    Ok(())
}

/// Load an estate by ID.
pub async fn get_estate(pool: &SqlitePool, id: &str) -> Result<Option<Estate>> {
    let row = sqlx::query_as::<_, EstateRow>("SELECT id, length, width FROM estates WHERE id = ?1")
        .bind(id)
        .fetch_optional(pool)
        .await?;

    row.map(Estate::try_from).transpose()
}

// Internal row type for SQLx
#[derive(sqlx::FromRow)]
struct EstateRow {
    id: String,
    length: i64,
    width: i64,
}

impl TryFrom<EstateRow> for Estate {
    type Error = anyhow::Error;

    fn try_from(row: EstateRow) -> Result<Self> {
        Ok(Estate {
            length: u32::try_from(row.length)
                .with_context(|| format!("estate {} has invalid length {}", row.id, row.length))?,
            width: u32::try_from(row.width)
                .with_context(|| format!("estate {} has invalid width {}", row.id, row.width))?,
            id: row.id,
        })
    }
}
