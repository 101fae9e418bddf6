//! Estate use cases: creation, planting, statistics and drone plans.
//!
//! Everything here goes through [`EstateStore`], so the same logic runs
//! against SQLite in production and an in-memory store in tests.

use estate_core::{
    compute_stats, plan_flight_with_rules, Estate, EstateError, EstateRules, FlightResult, Plot,
    Tree, TreeStats,
};
use thiserror::Error;
use tracing::{debug, info};
use uuid::Uuid;

use crate::persistence::{EstateStore, PlantOutcome};

#[derive(Error, Debug)]
pub enum ServiceError {
    #[error("invalid input: {0}")]
    InvalidInput(#[from] EstateError),

    #[error("estate not found")]
    EstateNotFound,

    #[error("location already filled")]
    LocationFilled,

    #[error("storage failure: {0}")]
    Storage(#[from] anyhow::Error),
}

/// Create an estate after checking the size limit. Returns the new ID.
pub async fn create_estate<S: EstateStore>(
    store: &S,
    rules: &EstateRules,
    plot: Plot,
) -> Result<String, ServiceError> {
    rules.validate_new_estate(&plot)?;

    let estate = Estate {
        id: Uuid::new_v4().to_string(),
        length: plot.length,
        width: plot.width,
    };
    store.create_estate(&estate).await?;

    info!(
        "Created estate {} ({}x{})",
        estate.id, estate.length, estate.width
    );
    Ok(estate.id)
}

/// Plant a tree on an estate. Returns the estate ID.
pub async fn plant_tree<S: EstateStore>(
    store: &S,
    rules: &EstateRules,
    estate_id: &str,
    tree: Tree,
) -> Result<String, ServiceError> {
    let estate = find_estate(store, estate_id).await?;
    rules.validate_tree(&estate.plot(), &tree)?;

    let trees = store.get_trees(estate_id).await?;
    if trees.iter().any(|t| t.x == tree.x && t.y == tree.y) {
        debug!("Location ({}, {}) already filled in {}", tree.x, tree.y, estate_id);
        return Err(ServiceError::LocationFilled);
    }

    match store.insert_tree(estate_id, &tree).await? {
        PlantOutcome::Planted => {}
        PlantOutcome::Occupied => return Err(ServiceError::LocationFilled),
    }

    info!(
        "Planted tree at ({}, {}) height {} in {}",
        tree.x, tree.y, tree.height, estate_id
    );
    Ok(estate.id)
}

/// Height statistics for an estate's trees.
pub async fn tree_stats<S: EstateStore>(
    store: &S,
    estate_id: &str,
) -> Result<TreeStats, ServiceError> {
    find_estate(store, estate_id).await?;
    let trees = store.get_trees(estate_id).await?;
    Ok(compute_stats(&trees))
}

/// Drone flight plan over an estate, optionally capped at `max_distance`.
pub async fn drone_plan<S: EstateStore>(
    store: &S,
    rules: &EstateRules,
    estate_id: &str,
    max_distance: Option<u64>,
) -> Result<FlightResult, ServiceError> {
    let estate = find_estate(store, estate_id).await?;
    let trees = store.get_trees(estate_id).await?;

    let result = plan_flight_with_rules(&estate.plot(), &trees, max_distance, rules)?;
    debug!(
        "Drone plan for {}: {} trees, distance {}, rest {:?}",
        estate_id,
        trees.len(),
        result.distance,
        result.rest_point
    );
    Ok(result)
}

async fn find_estate<S: EstateStore>(store: &S, estate_id: &str) -> Result<Estate, ServiceError> {
    store
        .get_estate(estate_id)
        .await?
        .ok_or(ServiceError::EstateNotFound)
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::{anyhow, Result};
    use dashmap::DashMap;
    use estate_core::RestPoint;
    use std::sync::atomic::{AtomicBool, Ordering};

    /// In-memory store with switchable failures.
    #[derive(Default)]
    struct MemoryStore {
        estates: DashMap<String, Estate>,
        trees: DashMap<String, Vec<Tree>>,
        fail_reads: AtomicBool,
        fail_inserts: AtomicBool,
        race_inserts: AtomicBool,
    }

    impl MemoryStore {
        fn with_estate(length: u32, width: u32) -> (Self, String) {
            let store = Self::default();
            let id = "estate-1".to_string();
            store.estates.insert(
                id.clone(),
                Estate {
                    id: id.clone(),
                    length,
                    width,
                },
            );
            (store, id)
        }
    }

    impl EstateStore for MemoryStore {
        async fn create_estate(&self, estate: &Estate) -> Result<()> {
            if self.fail_inserts.load(Ordering::SeqCst) {
                return Err(anyhow!("some error"));
            }
            self.estates.insert(estate.id.clone(), estate.clone());
            Ok(())
        }

        async fn get_estate(&self, id: &str) -> Result<Option<Estate>> {
            if self.fail_reads.load(Ordering::SeqCst) {
                return Err(anyhow!("some error"));
            }
            Ok(self.estates.get(id).map(|e| e.value().clone()))
        }

        async fn get_trees(&self, estate_id: &str) -> Result<Vec<Tree>> {
            Ok(self
                .trees
                .get(estate_id)
                .map(|t| t.value().clone())
                .unwrap_or_default())
        }

        async fn insert_tree(&self, estate_id: &str, tree: &Tree) -> Result<PlantOutcome> {
            if self.fail_inserts.load(Ordering::SeqCst) {
                return Err(anyhow!("some error"));
            }
            if self.race_inserts.load(Ordering::SeqCst) {
                return Ok(PlantOutcome::Occupied);
            }
            self.trees
                .entry(estate_id.to_string())
                .or_default()
                .push(*tree);
            Ok(PlantOutcome::Planted)
        }
    }

    #[tokio::test]
    async fn create_estate_success() {
        let store = MemoryStore::default();
        let id = create_estate(&store, &EstateRules::default(), Plot::new(5, 5))
            .await
            .unwrap();
        assert!(Uuid::parse_str(&id).is_ok());
        assert_eq!(store.estates.get(&id).map(|e| e.width), Some(5));
    }

    #[tokio::test]
    async fn create_estate_rejects_oversize() {
        let store = MemoryStore::default();
        let err = create_estate(&store, &EstateRules::default(), Plot::new(500, 500))
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            ServiceError::InvalidInput(EstateError::EstateTooLarge { .. })
        ));
        assert!(store.estates.is_empty());
    }

    #[tokio::test]
    async fn create_estate_storage_error() {
        let store = MemoryStore::default();
        store.fail_inserts.store(true, Ordering::SeqCst);
        let err = create_estate(&store, &EstateRules::default(), Plot::new(5, 5))
            .await
            .unwrap_err();
        assert!(matches!(err, ServiceError::Storage(_)));
    }

    #[tokio::test]
    async fn plant_tree_success() {
        let (store, id) = MemoryStore::with_estate(6, 3);
        let rules = EstateRules::default();
        plant_tree(&store, &rules, &id, Tree::new(2, 1, 4)).await.unwrap();

        let planted = plant_tree(&store, &rules, &id, Tree::new(3, 1, 10)).await.unwrap();
        assert_eq!(planted, id);
        assert_eq!(store.trees.get(&id).map(|t| t.len()), Some(2));
    }

    #[tokio::test]
    async fn plant_tree_errors() {
        let rules = EstateRules::default();

        let (store, _) = MemoryStore::with_estate(6, 3);
        let err = plant_tree(&store, &rules, "missing", Tree::new(3, 1, 10))
            .await
            .unwrap_err();
        assert!(matches!(err, ServiceError::EstateNotFound));

        let (store, id) = MemoryStore::with_estate(6, 3);
        store.fail_reads.store(true, Ordering::SeqCst);
        let err = plant_tree(&store, &rules, &id, Tree::new(3, 1, 10))
            .await
            .unwrap_err();
        assert!(matches!(err, ServiceError::Storage(_)));

        let (store, id) = MemoryStore::with_estate(6, 3);
        let err = plant_tree(&store, &rules, &id, Tree::new(7, 1, 10))
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            ServiceError::InvalidInput(EstateError::TreeOutOfBounds { .. })
        ));

        let (store, id) = MemoryStore::with_estate(6, 3);
        store.fail_inserts.store(true, Ordering::SeqCst);
        let err = plant_tree(&store, &rules, &id, Tree::new(3, 1, 10))
            .await
            .unwrap_err();
        assert!(matches!(err, ServiceError::Storage(_)));
    }

    #[tokio::test]
    async fn plant_tree_location_filled() {
        let (store, id) = MemoryStore::with_estate(6, 3);
        let rules = EstateRules::default();
        plant_tree(&store, &rules, &id, Tree::new(3, 1, 10)).await.unwrap();

        let err = plant_tree(&store, &rules, &id, Tree::new(3, 1, 12))
            .await
            .unwrap_err();
        assert!(matches!(err, ServiceError::LocationFilled));
        assert_eq!(store.trees.get(&id).map(|t| t.len()), Some(1));
    }

    #[tokio::test]
    async fn plant_tree_lost_race_is_location_filled() {
        let (store, id) = MemoryStore::with_estate(6, 3);
        store.race_inserts.store(true, Ordering::SeqCst);
        let err = plant_tree(&store, &EstateRules::default(), &id, Tree::new(3, 1, 10))
            .await
            .unwrap_err();
        assert!(matches!(err, ServiceError::LocationFilled));
    }

    #[tokio::test]
    async fn tree_stats_for_estate() {
        let (store, id) = MemoryStore::with_estate(6, 3);
        let rules = EstateRules::default();
        for tree in [Tree::new(1, 1, 10), Tree::new(2, 1, 5), Tree::new(3, 1, 7)] {
            plant_tree(&store, &rules, &id, tree).await.unwrap();
        }

        let stats = tree_stats(&store, &id).await.unwrap();
        assert_eq!(stats, TreeStats { count: 3, max: 10, min: 5, median: 7 });

        let err = tree_stats(&store, "missing").await.unwrap_err();
        assert!(matches!(err, ServiceError::EstateNotFound));
    }

    #[tokio::test]
    async fn drone_plan_for_sample_estate() {
        let (store, id) = MemoryStore::with_estate(6, 3);
        let rules = EstateRules::default();
        for tree in [
            Tree::new(3, 1, 10),
            Tree::new(6, 2, 5),
            Tree::new(4, 2, 7),
            Tree::new(3, 2, 15),
            Tree::new(5, 3, 30),
        ] {
            plant_tree(&store, &rules, &id, tree).await.unwrap();
        }

        let full = drone_plan(&store, &rules, &id, None).await.unwrap();
        assert_eq!(full, FlightResult::completed(242));

        let capped = drone_plan(&store, &rules, &id, Some(100)).await.unwrap();
        assert_eq!(capped.distance, 100);
        assert_eq!(capped.rest_point, Some(RestPoint { x: 4, y: 2 }));
    }

    #[tokio::test]
    async fn drone_plan_missing_estate() {
        let store = MemoryStore::default();
        let err = drone_plan(&store, &EstateRules::default(), "missing", None)
            .await
            .unwrap_err();
        assert!(matches!(err, ServiceError::EstateNotFound));
    }
}
