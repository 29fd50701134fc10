//! UniProtKB entry client.
//!
//! Endpoint: https://rest.uniprot.org/uniprotkb/{accession}
//!
//! Extracts from the entry JSON:
//!   gene name:    genes[0].geneName.value
//!   protein name: proteinDescription.recommendedName.fullName.value
//!   organism:     organism.scientificName

use genemap_common::sandbox::SandboxClient as Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

const UNIPROT_ENTRY_URL: &str = "https://rest.uniprot.org/uniprotkb";

/// Gene-level annotation extracted from one UniProtKB entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneAnnotation {
    pub gene_name: Option<String>,
    pub protein_name: Option<String>,
    pub organism: Option<String>,
}

/// Client for UniProtKB entry lookups.
pub struct UniProtClient {
    client: Client,
}

impl UniProtClient {
    pub fn new() -> Self {
        Self { client: Client::new().unwrap() }
    }

    /// Fetch the entry for an accession.
    #[instrument(skip(self))]
    pub async fn fetch_annotation(&self, uniprot_id: &str) -> anyhow::Result<Option<GeneAnnotation>> {
        let url = format!("{}/{}", UNIPROT_ENTRY_URL, uniprot_id);

        debug!(uniprot_id = uniprot_id, "Fetching UniProtKB entry");

        let resp = self.client.get(&url)?.send().await?;

        if !resp.status().is_success() {
            return Ok(None);
        }

        let json: serde_json::Value = resp.json().await?;
        Ok(Some(annotation_from_entry(&json)))
    }
}

impl Default for UniProtClient {
    fn default() -> Self { Self::new() }
}

/// Pull the three annotation fields out of an entry, defaulting at every level.
pub fn annotation_from_entry(json: &serde_json::Value) -> GeneAnnotation {
    GeneAnnotation {
        gene_name: json["genes"][0]["geneName"]["value"]
            .as_str().map(String::from),
        protein_name: json["proteinDescription"]["recommendedName"]["fullName"]["value"]
            .as_str().map(String::from),
        organism: json["organism"]["scientificName"]
            .as_str().map(String::from),
    }
}
