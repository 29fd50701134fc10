//! Genemap — PDB-to-gene enrichment over the RCSB and UniProtKB services.
//! Entry point for the batch binary.

mod config;
mod pipeline;

use std::time::Duration;

use tracing::info;
use tracing_subscriber::EnvFilter;

use genemap_sources::rcsb::StructureClient;
use genemap_sources::uniprot::UniProtClient;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialise structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("genemap=debug,info")),
        )
        .init();

    info!("Genemap starting up...");
    info!("Version: {}", env!("CARGO_PKG_VERSION"));

    // Load configuration
    let config = match config::Config::load() {
        Ok(c) => {
            info!(
                "Configuration loaded. Input: {}, identifier column: {}",
                c.input.path, c.input.id_column
            );
            c
        }
        Err(e) => {
            tracing::warn!("Could not load genemap.toml: {e}");
            tracing::warn!("Copy genemap.example.toml to genemap.toml and edit it.");
            return Ok(());
        }
    };

    let table = genemap_report::read_table(&config.input.path)?;
    let pdb_ids = genemap_report::id_column_values(&table, &config.input.id_column)?;
    info!("Loaded {} identifiers from {}", pdb_ids.len(), config.input.path);

    let structures = StructureClient::new();
    let uniprot = UniProtClient::new();

    let records = pipeline::run_batch(
        &structures,
        &uniprot,
        &pdb_ids,
        Duration::from_millis(config.batch.delay_ms),
    )
    .await;

    let merged = genemap_report::merge_enrichment(&table, &config.input.id_column, &records)?;
    genemap_report::write_table(&config.output.path, &merged)?;

    info!("Done. Results written to {}", config.output.path);

    Ok(())
}
