//! Sequential enrichment batch.
//!
//! For each identifier: fetch the structure entry, then — when a UniProt
//! cross-reference was found — fetch the gene annotation. Every failure is
//! absorbed into null fields, so one bad identifier never stops the batch.

use std::time::Duration;

use tracing::{info, warn};

use genemap_common::EnrichmentRecord;
use genemap_sources::rcsb::StructureClient;
use genemap_sources::uniprot::UniProtClient;

/// Run the batch over the identifier list, in order, one request at a time.
/// Sleeps `delay` between identifiers to stay under the services' rate limits.
pub async fn run_batch(
    structures: &StructureClient,
    uniprot: &UniProtClient,
    pdb_ids: &[String],
    delay: Duration,
) -> Vec<EnrichmentRecord> {
    let mut records = Vec::with_capacity(pdb_ids.len());

    for (i, pdb_id) in pdb_ids.iter().enumerate() {
        info!("Processing {} ({}/{})", pdb_id, i + 1, pdb_ids.len());

        records.push(enrich_one(structures, uniprot, pdb_id).await);

        if i + 1 < pdb_ids.len() {
            tokio::time::sleep(delay).await;
        }
    }

    records
}

/// Enrich a single identifier. Errors from either service are logged and
/// collapse to null fields.
async fn enrich_one(
    structures: &StructureClient,
    uniprot: &UniProtClient,
    pdb_id: &str,
) -> EnrichmentRecord {
    let summary = match structures.fetch_summary(pdb_id).await {
        Ok(Some(summary)) => summary,
        Ok(None) => {
            warn!("No structure entry for {}", pdb_id);
            return EnrichmentRecord::empty(pdb_id);
        }
        Err(e) => {
            warn!("Structure fetch failed for {}: {e}", pdb_id);
            return EnrichmentRecord::empty(pdb_id);
        }
    };

    let mut record = EnrichmentRecord {
        pdb_id: pdb_id.to_string(),
        title: summary.title,
        uniprot_id: summary.uniprot_id,
        ..Default::default()
    };

    if let Some(ref accession) = record.uniprot_id {
        match uniprot.fetch_annotation(accession).await {
            Ok(Some(annotation)) => {
                record.gene_name = annotation.gene_name;
                record.protein_name = annotation.protein_name;
                record.organism = annotation.organism;
            }
            Ok(None) => warn!("No UniProtKB entry for {} ({})", accession, pdb_id),
            Err(e) => warn!("Annotation fetch failed for {} ({}): {e}", accession, pdb_id),
        }
    }

    record
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_empty_batch_produces_no_records() {
        let structures = StructureClient::new();
        let uniprot = UniProtClient::new();

        let records = run_batch(&structures, &uniprot, &[], Duration::from_millis(0)).await;
        assert!(records.is_empty());
    }
}
