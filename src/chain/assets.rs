//! Asset storage behind `AssetParameters`.
//!
//! Requests with an `asset` parameter block address a project-scoped store
//! rather than a model. The store itself is a collaborator; this module
//! defines the seam plus an in-memory implementation for tests and local
//! runs.

use async_trait::async_trait;
use dashmap::DashMap;
use tracing::debug;

use crate::proto::{Artifact, AssetParameters};

#[derive(Debug, Clone, thiserror::Error)]
pub enum AssetError {
    #[error("asset '{0}' not found")]
    NotFound(String),

    #[error("project '{project}' quota exceeded: {used} + {requested} > {limit} bytes")]
    QuotaExceeded {
        project: String,
        used: u64,
        requested: u64,
        limit: u64,
    },
}

/// Project-scoped artifact storage keyed by artifact uuid.
#[async_trait]
pub trait AssetStore: Send + Sync {
    /// Stores the artifact, returning a stub artifact carrying the stored
    /// uuid and size.
    async fn put(
        &self,
        params: &AssetParameters,
        artifact: Artifact,
    ) -> Result<Artifact, AssetError>;

    async fn get(&self, params: &AssetParameters, uuid: &str) -> Result<Artifact, AssetError>;

    /// Removes and returns the artifact.
    async fn delete(&self, params: &AssetParameters, uuid: &str)
        -> Result<Artifact, AssetError>;
}

/// In-memory store with a per-project byte quota.
pub struct MemoryAssetStore {
    assets: DashMap<(String, String), Artifact>,
    quota_bytes: u64,
}

impl MemoryAssetStore {
    pub fn new(quota_bytes: u64) -> Self {
        Self {
            assets: DashMap::new(),
            quota_bytes,
        }
    }

    fn used_bytes(&self, project_id: &str) -> u64 {
        self.assets
            .iter()
            .filter(|entry| entry.key().0 == project_id)
            .map(|entry| entry.value().size)
            .sum()
    }
}

#[async_trait]
impl AssetStore for MemoryAssetStore {
    async fn put(
        &self,
        params: &AssetParameters,
        artifact: Artifact,
    ) -> Result<Artifact, AssetError> {
        let used = self.used_bytes(&params.project_id);
        if used + artifact.size > self.quota_bytes {
            return Err(AssetError::QuotaExceeded {
                project: params.project_id.clone(),
                used,
                requested: artifact.size,
                limit: self.quota_bytes,
            });
        }
        debug!(
            project = %params.project_id,
            uuid = %artifact.uuid,
            size = artifact.size,
            "asset stored"
        );
        let stub = Artifact {
            id: artifact.id,
            r#type: artifact.r#type,
            uuid: artifact.uuid.clone(),
            size: artifact.size,
            ..Default::default()
        };
        self.assets
            .insert((params.project_id.clone(), artifact.uuid.clone()), artifact);
        Ok(stub)
    }

    async fn get(&self, params: &AssetParameters, uuid: &str) -> Result<Artifact, AssetError> {
        self.assets
            .get(&(params.project_id.clone(), uuid.to_string()))
            .map(|entry| entry.value().clone())
            .ok_or_else(|| AssetError::NotFound(uuid.to_string()))
    }

    async fn delete(
        &self,
        params: &AssetParameters,
        uuid: &str,
    ) -> Result<Artifact, AssetError> {
        self.assets
            .remove(&(params.project_id.clone(), uuid.to_string()))
            .map(|(_, artifact)| artifact)
            .ok_or_else(|| AssetError::NotFound(uuid.to_string()))
    }
}
