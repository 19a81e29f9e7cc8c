use crate::domain::ports::TokenStore;
use crate::utils::error::{Result, VaultError};
use std::sync::Arc;

/// Stateless per-request authorization check against the token store.
///
/// Fails closed: a store error is surfaced as `StoreUnavailable`, never as
/// an allow. A missing token and a wrong token are both `Unauthorized`, so
/// callers cannot probe for group existence.
pub struct AccessGate {
    tokens: Arc<dyn TokenStore>,
}

impl AccessGate {
    pub fn new(tokens: Arc<dyn TokenStore>) -> Self {
        Self { tokens }
    }

    pub async fn authorize(&self, group_id: &str, presented_token: &str) -> Result<()> {
        let stored = self.tokens.get(group_id).await.map_err(|err| {
            tracing::error!(group_id, "token lookup failed during authorization: {}", err);
            VaultError::StoreUnavailable
        })?;

        match stored {
            Some(token) if token == presented_token => Ok(()),
            _ => {
                tracing::warn!(group_id, "denied request with invalid token");
                Err(VaultError::Unauthorized)
            }
        }
    }
}
