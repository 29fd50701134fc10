//! Test the per-identifier enrichment flow against the live services.
//!
//! Requires network access. Run with:
//! ```bash
//! cargo test --package genemap-sources --test test_enrichment_e2e -- --ignored --nocapture
//! ```

use genemap_sources::rcsb::StructureClient;
use genemap_sources::uniprot::UniProtClient;

#[tokio::test(flavor = "multi_thread")]
#[ignore] // Requires network access
async fn test_enrich_p53_structure() {
    let structures = StructureClient::new();
    let uniprot = UniProtClient::new();

    // 1TUP: tumor suppressor p53 core domain bound to DNA
    let summary = structures
        .fetch_summary("1TUP")
        .await
        .expect("structure fetch failed")
        .expect("no entry for 1TUP");

    println!("Title: {:?}", summary.title);
    println!("UniProt: {:?}", summary.uniprot_id);

    assert!(summary.title.is_some());
    assert_eq!(summary.uniprot_id.as_deref(), Some("P04637"));

    let annotation = uniprot
        .fetch_annotation("P04637")
        .await
        .expect("annotation fetch failed")
        .expect("no entry for P04637");

    println!("Gene: {:?}", annotation.gene_name);
    println!("Protein: {:?}", annotation.protein_name);
    println!("Organism: {:?}", annotation.organism);

    assert_eq!(annotation.gene_name.as_deref(), Some("TP53"));
    assert_eq!(annotation.organism.as_deref(), Some("Homo sapiens"));
}

#[tokio::test(flavor = "multi_thread")]
#[ignore] // Requires network access
async fn test_unknown_identifier_yields_no_entry() {
    let structures = StructureClient::new();

    let summary = structures
        .fetch_summary("0XXX")
        .await
        .expect("structure fetch failed");

    assert!(summary.is_none());
}
