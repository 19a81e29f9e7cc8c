use async_trait::async_trait;
use keyword_vault::domain::ports::{GroupRepository, StoreError, StoreResult, TokenStore};
use keyword_vault::{
    HashTokenGenerator, InMemoryGroupRepository, InMemoryTokenStore, KeywordVault, VaultError,
};
use std::sync::Arc;
use tokio_test::assert_ok;

const API_KEY: &str = "service-secret";

fn vault_with_stores() -> (KeywordVault, Arc<InMemoryGroupRepository>) {
    let groups = Arc::new(InMemoryGroupRepository::new());
    let vault = KeywordVault::new(
        API_KEY,
        Arc::new(InMemoryTokenStore::new()),
        groups.clone(),
        Arc::new(HashTokenGenerator::new()),
    );
    (vault, groups)
}

fn vault() -> KeywordVault {
    vault_with_stores().0
}

#[tokio::test]
async fn test_second_provision_conflicts_and_first_token_stays_valid() {
    let vault = vault();
    let token = vault.provision_group(API_KEY, "acme").await.unwrap();

    let err = vault.provision_group(API_KEY, "acme").await.unwrap_err();
    assert!(matches!(err, VaultError::Conflict { .. }));

    // The original token still authorizes keyword operations.
    assert_ok!(vault.list_keywords("acme", &token).await);
    assert_eq!(vault.current_token(API_KEY, "acme").await.unwrap(), token);
}

#[tokio::test]
async fn test_rotation_invalidates_previous_token_immediately() {
    let vault = vault();
    let old = vault.provision_group(API_KEY, "acme").await.unwrap();
    let new = vault.rotate_token(API_KEY, "acme").await.unwrap();
    assert_ne!(old, new);

    let err = vault.list_keywords("acme", &old).await.unwrap_err();
    assert!(matches!(err, VaultError::Unauthorized));
    assert!(vault.list_keywords("acme", &new).await.is_ok());
}

#[tokio::test]
async fn test_rotate_unknown_group_is_not_found() {
    let vault = vault();
    let err = vault.rotate_token(API_KEY, "ghost").await.unwrap_err();
    assert!(matches!(err, VaultError::NotFound { .. }));
}

#[tokio::test]
async fn test_current_token_returns_stored_value_verbatim() {
    let vault = vault();
    let token = vault.provision_group(API_KEY, "acme").await.unwrap();
    assert_eq!(vault.current_token(API_KEY, "acme").await.unwrap(), token);

    let err = vault.current_token(API_KEY, "ghost").await.unwrap_err();
    assert!(matches!(err, VaultError::NotFound { .. }));
}

#[tokio::test]
async fn test_all_lifecycle_operations_require_service_credential() {
    let vault = vault();
    vault.provision_group(API_KEY, "acme").await.unwrap();

    for result in [
        vault.current_token("wrong", "acme").await,
        vault.provision_group("wrong", "beta").await,
        vault.rotate_token("wrong", "acme").await,
    ] {
        assert!(matches!(result.unwrap_err(), VaultError::Unauthorized));
    }
}

#[tokio::test]
async fn test_acme_scenario_end_to_end() {
    let vault = vault();

    let t1 = vault.provision_group(API_KEY, "acme").await.unwrap();
    vault
        .insert_keyword("acme", &t1, "color", "blue")
        .await
        .unwrap();
    assert_eq!(
        vault.get_keyword("acme", &t1, "color").await.unwrap(),
        "blue"
    );

    let t2 = vault.rotate_token(API_KEY, "acme").await.unwrap();

    let err = vault.get_keyword("acme", &t1, "color").await.unwrap_err();
    assert!(matches!(err, VaultError::Unauthorized));
    assert_eq!(
        vault.get_keyword("acme", &t2, "color").await.unwrap(),
        "blue"
    );
}

/// Token store that accepts reads but fails every write.
struct WriteFailingTokenStore {
    inner: InMemoryTokenStore,
}

#[async_trait]
impl TokenStore for WriteFailingTokenStore {
    async fn get(&self, group_id: &str) -> StoreResult<Option<String>> {
        self.inner.get(group_id).await
    }

    async fn set(&self, _group_id: &str, _token: &str) -> StoreResult<()> {
        Err(StoreError::Unavailable("write refused".to_string()))
    }
}

#[tokio::test]
async fn test_provision_window_leaves_orphaned_unauthorized_group() {
    // Document creation succeeds, then the token write fails: the group
    // document exists but no token ever did, so the group is permanently
    // unreachable through authorized flows.
    let groups = Arc::new(InMemoryGroupRepository::new());
    let vault = KeywordVault::new(
        API_KEY,
        Arc::new(WriteFailingTokenStore {
            inner: InMemoryTokenStore::new(),
        }),
        groups.clone(),
        Arc::new(HashTokenGenerator::new()),
    );

    let err = vault.provision_group(API_KEY, "acme").await.unwrap_err();
    assert!(matches!(err, VaultError::StoreUnavailable));

    // The orphaned document is there...
    assert!(groups.find("acme").await.unwrap().is_some());

    // ...but no token exists and every authorized path is closed.
    let err = vault.current_token(API_KEY, "acme").await.unwrap_err();
    assert!(matches!(err, VaultError::NotFound { .. }));
    let err = vault.list_keywords("acme", "any-token").await.unwrap_err();
    assert!(matches!(err, VaultError::Unauthorized));

    // Re-provisioning cannot recover it either: the id is taken.
    let err = vault.provision_group(API_KEY, "acme").await.unwrap_err();
    assert!(matches!(err, VaultError::Conflict { .. }));
}
