use crate::core::authority::TokenAuthority;
use crate::core::gate::AccessGate;
use crate::core::keywords::KeywordMapService;
use crate::domain::model::KeywordEntry;
use crate::domain::ports::{GroupRepository, TokenGenerator, TokenStore};
use crate::utils::error::{Result, VaultError};
use crate::utils::validation::require_field;
use std::sync::Arc;

/// Transport-agnostic front surface for the service.
///
/// Token-lifecycle operations are gated by the fixed service credential;
/// keyword operations are gated per request by [`AccessGate`]. Input
/// validation runs before any store is touched. Each call is an
/// independent unit of work; nothing is shared between requests beyond the
/// injected store handles.
pub struct KeywordVault {
    api_key: String,
    authority: TokenAuthority,
    gate: AccessGate,
    keywords: KeywordMapService,
}

impl KeywordVault {
    pub fn new(
        api_key: impl Into<String>,
        tokens: Arc<dyn TokenStore>,
        groups: Arc<dyn GroupRepository>,
        generator: Arc<dyn TokenGenerator>,
    ) -> Self {
        Self {
            api_key: api_key.into(),
            authority: TokenAuthority::new(tokens.clone(), groups.clone(), generator),
            gate: AccessGate::new(tokens),
            keywords: KeywordMapService::new(groups),
        }
    }

    fn check_service_credential(&self, presented: &str) -> Result<()> {
        if presented != self.api_key {
            tracing::warn!("rejected token-lifecycle request with invalid api key");
            return Err(VaultError::Unauthorized);
        }
        Ok(())
    }

    // Token lifecycle (service credential required).

    pub async fn current_token(&self, api_key: &str, group_id: &str) -> Result<String> {
        self.check_service_credential(api_key)?;
        self.authority.current_token(group_id).await
    }

    pub async fn provision_group(&self, api_key: &str, group_id: &str) -> Result<String> {
        self.check_service_credential(api_key)?;
        require_field("group_id", group_id)?;
        self.authority.provision_group(group_id).await
    }

    pub async fn rotate_token(&self, api_key: &str, group_id: &str) -> Result<String> {
        self.check_service_credential(api_key)?;
        self.authority.rotate_token(group_id).await
    }

    // Keyword map (per-group token required).

    pub async fn list_keywords(&self, group_id: &str, token: &str) -> Result<Vec<KeywordEntry>> {
        self.gate.authorize(group_id, token).await?;
        self.keywords.list(group_id).await
    }

    pub async fn get_keyword(&self, group_id: &str, token: &str, keyword: &str) -> Result<String> {
        self.gate.authorize(group_id, token).await?;
        self.keywords.get(group_id, keyword).await
    }

    pub async fn insert_keyword(
        &self,
        group_id: &str,
        token: &str,
        keyword: &str,
        value: &str,
    ) -> Result<()> {
        self.gate.authorize(group_id, token).await?;
        require_field("keyword", keyword)?;
        require_field("value", value)?;
        self.keywords.insert(group_id, keyword, value).await
    }

    pub async fn update_keyword(
        &self,
        group_id: &str,
        token: &str,
        keyword: &str,
        value: &str,
    ) -> Result<KeywordEntry> {
        self.gate.authorize(group_id, token).await?;
        require_field("keyword", keyword)?;
        require_field("value", value)?;
        self.keywords.update(group_id, keyword, value).await
    }

    pub async fn delete_keyword(&self, group_id: &str, token: &str, keyword: &str) -> Result<()> {
        self.gate.authorize(group_id, token).await?;
        self.keywords.delete(group_id, keyword).await
    }
}
