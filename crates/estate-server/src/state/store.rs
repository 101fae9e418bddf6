//! Shared application state: database plus an in-memory estate cache.

use anyhow::Result;
use dashmap::DashMap;
use estate_core::{Estate, EstateRules, Tree};

use crate::persistence::{Database, EstateStore, PlantOutcome};

/// Application state shared by all request handlers.
///
/// Estates never change after creation, so they are cached write-through
/// in a DashMap. Trees always come from the database.
pub struct AppState {
    db: Database,
    estates: DashMap<String, Estate>,
    rules: EstateRules,
}

impl AppState {
    pub fn with_database(db: Database) -> Self {
        Self::with_rules(db, EstateRules::default())
    }

    pub fn with_rules(db: Database, rules: EstateRules) -> Self {
        Self {
            db,
            estates: DashMap::new(),
            rules,
        }
    }

    pub fn rules(&self) -> &EstateRules {
        &self.rules
    }

    /// Number of estates currently cached.
    pub fn cached_estates(&self) -> usize {
        self.estates.len()
    }
}

impl EstateStore for AppState {
    async fn create_estate(&self, estate: &Estate) -> Result<()> {
        self.db.create_estate(estate).await?;
        self.estates.insert(estate.id.clone(), estate.clone());
        Ok(())
    }

    async fn get_estate(&self, id: &str) -> Result<Option<Estate>> {
        if let Some(estate) = self.estates.get(id) {
            return Ok(Some(estate.value().clone()));
        }

        let estate = self.db.get_estate(id).await?;
        if let Some(estate) = &estate {
            self.estates.insert(estate.id.clone(), estate.clone());
        }
        Ok(estate)
    }

    async fn get_trees(&self, estate_id: &str) -> Result<Vec<Tree>> {
        self.db.get_trees(estate_id).await
    }

    async fn insert_tree(&self, estate_id: &str, tree: &Tree) -> Result<PlantOutcome> {
        self.db.insert_tree(estate_id, tree).await
    }
}
