//! Tree persistence operations.

use anyhow::{Context, Result};
use chrono::Utc;
use estate_core::Tree;
use sqlx::SqlitePool;
use tracing::debug;

/// Result of an insert attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlantOutcome {
    Planted,
    /// Another tree already stands on the coordinate
    Occupied,
}

/// Load all trees of an estate.
pub async fn load_trees(pool: &SqlitePool, estate_id: &str) -> Result<Vec<Tree>> {
    let rows = sqlx::query_as::<_, TreeRow>(
        "SELECT x, y, height FROM trees WHERE estate_id = ?1 ORDER BY y, x",
    )
    .bind(estate_id)
    .fetch_all(pool)
    .await?;

    rows.into_iter().map(Tree::try_from).collect()
}

/// Plant a tree unless its coordinate is taken.
///
/// A single autocommit insert; the `(estate_id, x, y)` unique index decides
/// which of two racing writers wins, and the loser gets `Occupied`.
pub async fn plant_tree(pool: &SqlitePool, estate_id: &str, tree: &Tree) -> Result<PlantOutcome> {
    let inserted = sqlx::query(
        r#"
        INSERT INTO trees (estate_id, x, y, height, planted_at)
        VALUES (?1, ?2, ?3, ?4, ?5)
        "#,
    )
    .bind(estate_id)
    .bind(i64::from(tree.x))
    .bind(i64::from(tree.y))
    .bind(i64::from(tree.height))
    .bind(Utc::now().to_rfc3339())
    .execute(pool)
    .await;

    match inserted {
        Ok(_) => Ok(PlantOutcome::Planted),
        Err(sqlx::Error::Database(err)) if err.is_unique_violation() => {
            debug!("Unique index rejected tree at ({}, {}) in {}", tree.x, tree.y, estate_id);
            Ok(PlantOutcome::Occupied)
        }
        Err(err) => Err(err.into()),
    }
}

// Internal row type for SQLx
#[derive(sqlx::FromRow)]
struct TreeRow {
    x: i64,
    y: i64,
    height: i64,
}

impl TryFrom<TreeRow> for Tree {
    type Error = anyhow::Error;

    fn try_from(row: TreeRow) -> Result<Self> {
        let field = |value: i64, name: &str| {
            u32::try_from(value).with_context(|| format!("tree {} out of range: {}", name, value))
        };
        Ok(Tree {
            x: field(row.x, "x")?,
            y: field(row.y, "y")?,
            height: field(row.height, "height")?,
        })
    }
}
