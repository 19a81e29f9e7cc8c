use clap::Parser;
use keyword_vault::utils::{logger, validation::Validate};
use keyword_vault::{
    HashTokenGenerator, InMemoryGroupRepository, InMemoryTokenStore, KeywordVault, ServiceConfig,
};
use std::sync::Arc;

/// Demo driver: wires the in-memory adapters and walks the whole operation
/// table once, so the service can be exercised without any transport.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ServiceConfig::parse();

    logger::init_logger(config.verbose);

    tracing::info!("Starting keyword-vault demo");
    if config.verbose {
        tracing::debug!("Service config: verbose={}", config.verbose);
    }

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    let vault = KeywordVault::new(
        config.api_key.clone(),
        Arc::new(InMemoryTokenStore::new()),
        Arc::new(InMemoryGroupRepository::new()),
        Arc::new(HashTokenGenerator::new()),
    );

    let api_key = config.api_key.as_str();

    let token = vault.provision_group(api_key, "demo").await?;
    tracing::info!("Provisioned group 'demo'");

    vault
        .insert_keyword("demo", &token, "color", "blue")
        .await?;
    let value = vault.get_keyword("demo", &token, "color").await?;
    tracing::info!("Inserted and read back keyword 'color' = '{}'", value);

    let entry = vault
        .update_keyword("demo", &token, "color", "green")
        .await?;
    tracing::info!("Updated keyword '{}' to '{}'", entry.keyword, entry.value);

    let rotated = vault.rotate_token(api_key, "demo").await?;
    match vault.get_keyword("demo", &token, "color").await {
        Err(e) => tracing::info!("Old token rejected after rotation: {}", e),
        Ok(_) => tracing::error!("Old token still accepted after rotation"),
    }

    let entries = vault.list_keywords("demo", &rotated).await?;
    tracing::info!("Map holds {} entr(y/ies) under the new token", entries.len());

    vault.delete_keyword("demo", &rotated, "color").await?;
    tracing::info!("✅ Demo cycle completed");
    println!("✅ Demo cycle completed");

    Ok(())
}
