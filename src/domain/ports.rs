use crate::domain::model::Group;
use async_trait::async_trait;
use thiserror::Error;

/// Errors surfaced by store adapters. Core components translate these into
/// the caller-facing taxonomy at their boundary.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("store unavailable: {0}")]
    Unavailable(String),

    #[error("duplicate id: {0}")]
    DuplicateId(String),
}

pub type StoreResult<T> = std::result::Result<T, StoreError>;

/// Fast key-value mapping from group id to its current token. Exclusively
/// owns the current-token-per-group relation; at most one token per group.
#[async_trait]
pub trait TokenStore: Send + Sync {
    async fn get(&self, group_id: &str) -> StoreResult<Option<String>>;

    /// Overwrites any previous token for the group.
    async fn set(&self, group_id: &str, token: &str) -> StoreResult<()>;
}

/// Durable store of group documents, enforcing group-id uniqueness.
#[async_trait]
pub trait GroupRepository: Send + Sync {
    /// Fails with [`StoreError::DuplicateId`] if the group already exists.
    async fn insert(&self, group: Group) -> StoreResult<()>;

    async fn find(&self, group_id: &str) -> StoreResult<Option<Group>>;

    /// Whole-document write; last writer wins for the same group.
    async fn save(&self, group: &Group) -> StoreResult<()>;
}

/// Opaque token generator capability: two calls for the same group id must
/// produce different, non-predictable outputs with overwhelming probability.
pub trait TokenGenerator: Send + Sync {
    fn generate(&self, group_id: &str) -> String;
}

pub trait ConfigProvider: Send + Sync {
    /// Fixed shared secret gating all token-lifecycle operations.
    fn api_key(&self) -> &str;

    fn verbose(&self) -> bool;
}
