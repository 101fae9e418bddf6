//! Persistence layer for the estate server.
//!
//! Provides SQLite-backed storage for estates and trees behind the
//! [`EstateStore`] trait, which is all the service layer depends on.

pub mod db;
pub mod estates;
pub mod trees;

use anyhow::Result;
use estate_core::{Estate, Tree};
use std::future::Future;

pub use db::{init_database, Database};
pub use trees::PlantOutcome;

/// Storage operations the estate service needs.
pub trait EstateStore: Send + Sync {
    fn create_estate(&self, estate: &Estate) -> impl Future<Output = Result<()>> + Send;

    fn get_estate(&self, id: &str) -> impl Future<Output = Result<Option<Estate>>> + Send;

    fn get_trees(&self, estate_id: &str) -> impl Future<Output = Result<Vec<Tree>>> + Send;

    /// Insert a tree; `Occupied` when the coordinate is already planted.
    fn insert_tree(
        &self,
        estate_id: &str,
        tree: &Tree,
    ) -> impl Future<Output = Result<PlantOutcome>> + Send;
}

impl EstateStore for Database {
    async fn create_estate(&self, estate: &Estate) -> Result<()> {
        estates::insert_estate(self.pool(), estate).await
    }

    async fn get_estate(&self, id: &str) -> Result<Option<Estate>> {
        estates::get_estate(self.pool(), id).await
    }

    async fn get_trees(&self, estate_id: &str) -> Result<Vec<Tree>> {
        trees::load_trees(self.pool(), estate_id).await
    }

    async fn insert_tree(&self, estate_id: &str, tree: &Tree) -> Result<PlantOutcome> {
        trees::plant_tree(self.pool(), estate_id, tree).await
    }
}
