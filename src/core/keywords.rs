use crate::domain::model::{Group, KeywordEntry};
use crate::domain::ports::GroupRepository;
use crate::utils::error::{Result, VaultError};
use std::sync::Arc;

/// CRUD over a group's keyword map. Callers are assumed to have passed the
/// access gate already; every operation fetches the group document fresh
/// from the repository, so no state is cached across requests.
///
/// Mutations are read-modify-write against a document snapshot with no
/// compare-and-swap: two concurrent writers to the same group can each
/// read the same snapshot and the later save wins, losing the earlier
/// mutation. This is a known, accepted limitation; per-group serialization
/// (a document version check in `save`) is the hardening option if lost
/// updates ever become unacceptable, at the cost of retries on contention.
pub struct KeywordMapService {
    groups: Arc<dyn GroupRepository>,
}

impl KeywordMapService {
    pub fn new(groups: Arc<dyn GroupRepository>) -> Self {
        Self { groups }
    }

    async fn fetch_group(&self, group_id: &str) -> Result<Group> {
        let group = self.groups.find(group_id).await.map_err(|err| {
            tracing::error!(group_id, "group lookup failed: {}", err);
            VaultError::StoreUnavailable
        })?;

        group.ok_or_else(|| VaultError::not_found(format!("no such group: {}", group_id)))
    }

    async fn save_group(&self, group: &Group) -> Result<()> {
        self.groups.save(group).await.map_err(|err| {
            tracing::error!(group_id = %group.group_id, "group save failed: {}", err);
            VaultError::StoreUnavailable
        })
    }

    /// Full current map, insertion order.
    pub async fn list(&self, group_id: &str) -> Result<Vec<KeywordEntry>> {
        let group = self.fetch_group(group_id).await?;
        Ok(group.keyword_map)
    }

    pub async fn get(&self, group_id: &str, keyword: &str) -> Result<String> {
        let group = self.fetch_group(group_id).await?;
        group
            .find_entry(keyword)
            .map(|entry| entry.value.clone())
            .ok_or_else(|| VaultError::not_found(format!("no such keyword: {}", keyword)))
    }

    /// Appends a new entry. Fails with `Conflict` if the keyword is taken.
    pub async fn insert(&self, group_id: &str, keyword: &str, value: &str) -> Result<()> {
        let mut group = self.fetch_group(group_id).await?;

        if group.find_entry(keyword).is_some() {
            return Err(VaultError::conflict(format!(
                "keyword already exists: {}",
                keyword
            )));
        }

        group.keyword_map.push(KeywordEntry {
            keyword: keyword.to_string(),
            value: value.to_string(),
        });
        self.save_group(&group).await?;

        tracing::debug!(group_id, keyword, "inserted keyword");
        Ok(())
    }

    /// Replaces the entry's value in place, keeping its position in the
    /// sequence, and returns the new entry.
    pub async fn update(&self, group_id: &str, keyword: &str, value: &str) -> Result<KeywordEntry> {
        let mut group = self.fetch_group(group_id).await?;

        let position = group.entry_position(keyword).ok_or_else(|| {
            VaultError::not_found(format!("no such keyword: {}", keyword))
        })?;

        let entry = KeywordEntry {
            keyword: keyword.to_string(),
            value: value.to_string(),
        };
        group.keyword_map[position] = entry.clone();
        self.save_group(&group).await?;

        tracing::debug!(group_id, keyword, "updated keyword");
        Ok(entry)
    }

    pub async fn delete(&self, group_id: &str, keyword: &str) -> Result<()> {
        let mut group = self.fetch_group(group_id).await?;

        let position = group.entry_position(keyword).ok_or_else(|| {
            VaultError::not_found(format!("no such keyword: {}", keyword))
        })?;

        group.keyword_map.remove(position);
        self.save_group(&group).await?;

        tracing::debug!(group_id, keyword, "deleted keyword");
        Ok(())
    }
}
