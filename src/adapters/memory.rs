use crate::domain::model::Group;
use crate::domain::ports::{GroupRepository, StoreError, StoreResult, TokenStore};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// In-memory token store. Process-local, no persistence across restarts,
/// matching the durability boundary of the token side.
#[derive(Clone, Default)]
pub struct InMemoryTokenStore {
    tokens: Arc<RwLock<HashMap<String, String>>>,
}

impl InMemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TokenStore for InMemoryTokenStore {
    async fn get(&self, group_id: &str) -> StoreResult<Option<String>> {
        let tokens = self.tokens.read().await;
        Ok(tokens.get(group_id).cloned())
    }

    async fn set(&self, group_id: &str, token: &str) -> StoreResult<()> {
        let mut tokens = self.tokens.write().await;
        tokens.insert(group_id.to_string(), token.to_string());
        Ok(())
    }
}

/// In-memory group repository. Hands out document clones, so callers see a
/// snapshot; `save` overwrites the whole document and the last writer wins.
#[derive(Clone, Default)]
pub struct InMemoryGroupRepository {
    groups: Arc<RwLock<HashMap<String, Group>>>,
}

impl InMemoryGroupRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl GroupRepository for InMemoryGroupRepository {
    async fn insert(&self, group: Group) -> StoreResult<()> {
        let mut groups = self.groups.write().await;
        if groups.contains_key(&group.group_id) {
            return Err(StoreError::DuplicateId(group.group_id));
        }
        groups.insert(group.group_id.clone(), group);
        Ok(())
    }

    async fn find(&self, group_id: &str) -> StoreResult<Option<Group>> {
        let groups = self.groups.read().await;
        Ok(groups.get(group_id).cloned())
    }

    async fn save(&self, group: &Group) -> StoreResult<()> {
        let mut groups = self.groups.write().await;
        groups.insert(group.group_id.clone(), group.clone());
        Ok(())
    }
}
