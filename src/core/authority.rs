use crate::domain::model::Group;
use crate::domain::ports::{GroupRepository, StoreError, TokenGenerator, TokenStore};
use crate::utils::error::{Result, VaultError};
use std::sync::Arc;

/// Orchestrates group provisioning and token rotation against the token
/// store and the group repository.
///
/// The two stores are not covered by a transaction. `provision_group`
/// writes the group document first and the token second; if the token
/// write fails, the group exists with no valid token and is unreachable
/// through authorized flows until a rotation path is added for it. This
/// window is accepted rather than requiring cross-store atomicity; an
/// outbox/compensation step is the extension point if it ever matters.
pub struct TokenAuthority {
    tokens: Arc<dyn TokenStore>,
    groups: Arc<dyn GroupRepository>,
    generator: Arc<dyn TokenGenerator>,
}

impl TokenAuthority {
    pub fn new(
        tokens: Arc<dyn TokenStore>,
        groups: Arc<dyn GroupRepository>,
        generator: Arc<dyn TokenGenerator>,
    ) -> Self {
        Self {
            tokens,
            groups,
            generator,
        }
    }

    /// Creates an empty group document, mints its first token, and returns
    /// the token. Fails with `Conflict` if the group id is taken.
    pub async fn provision_group(&self, group_id: &str) -> Result<String> {
        let token = self.generator.generate(group_id);

        match self.groups.insert(Group::new(group_id)).await {
            Ok(()) => {}
            Err(StoreError::DuplicateId(_)) => {
                return Err(VaultError::conflict(format!(
                    "group already exists: {}",
                    group_id
                )));
            }
            Err(StoreError::Unavailable(detail)) => {
                tracing::error!("group document write failed: {}", detail);
                return Err(VaultError::StoreUnavailable);
            }
        }

        if let Err(err) = self.tokens.set(group_id, &token).await {
            // Document already written; the group is now orphaned.
            tracing::error!(group_id, "token write failed after group creation: {}", err);
            return Err(VaultError::StoreUnavailable);
        }

        tracing::info!(group_id, "provisioned group");
        Ok(token)
    }

    /// Replaces the group's token. The previous token is invalid for all
    /// authorization checks as soon as the store write completes.
    pub async fn rotate_token(&self, group_id: &str) -> Result<String> {
        let current = self.tokens.get(group_id).await.map_err(|err| {
            tracing::error!(group_id, "token lookup failed: {}", err);
            VaultError::StoreUnavailable
        })?;

        if current.is_none() {
            return Err(VaultError::not_found(format!(
                "no token for group: {}",
                group_id
            )));
        }

        let token = self.generator.generate(group_id);
        self.tokens.set(group_id, &token).await.map_err(|err| {
            tracing::error!(group_id, "token write failed: {}", err);
            VaultError::StoreUnavailable
        })?;

        tracing::info!(group_id, "rotated token");
        Ok(token)
    }

    /// Returns the stored token verbatim.
    pub async fn current_token(&self, group_id: &str) -> Result<String> {
        let current = self.tokens.get(group_id).await.map_err(|err| {
            tracing::error!(group_id, "token lookup failed: {}", err);
            VaultError::StoreUnavailable
        })?;

        current.ok_or_else(|| VaultError::not_found(format!("no token for group: {}", group_id)))
    }
}
