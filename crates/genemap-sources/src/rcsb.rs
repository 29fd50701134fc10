//! RCSB PDB entry client.
//!
//! Fetches the legacy-format entry text for a structure and scans it for the
//! header classification line and the first UniProt cross-reference.
//!
//! Endpoint: https://files.rcsb.org/view/{PDB_ID}.pdb
//!
//! DBREF records carry the cross-reference database code followed by the
//! accession, e.g.
//!   DBREF  1TUP A   94   312  UNP    P04637   P53_HUMAN       94    312

use genemap_common::sandbox::SandboxClient as Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

const RCSB_VIEW_URL: &str = "https://files.rcsb.org/view";

/// Title and cross-reference extracted from one structure entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StructureSummary {
    pub pdb_id: String,
    pub title: Option<String>,
    pub uniprot_id: Option<String>,
}

/// Client for the RCSB entry file service.
pub struct StructureClient {
    client: Client,
}

impl StructureClient {
    pub fn new() -> Self {
        Self { client: Client::new().unwrap() }
    }

    /// Fetch the entry text for a PDB ID and extract its summary fields.
    #[instrument(skip(self))]
    pub async fn fetch_summary(&self, pdb_id: &str) -> anyhow::Result<Option<StructureSummary>> {
        let url = format!("{}/{}.pdb", RCSB_VIEW_URL, pdb_id);

        debug!(pdb_id = pdb_id, "Fetching structure entry");

        let resp = self.client.get(&url)?.send().await?;

        if !resp.status().is_success() {
            return Ok(None);
        }

        let text = resp.text().await?;
        Ok(Some(summary_from_entry_text(pdb_id, &text)))
    }
}

impl Default for StructureClient {
    fn default() -> Self { Self::new() }
}

/// Scan entry text for the HEADER title and the first DBREF UNP accession.
///
/// The title is the HEADER line from column 10 onward; the accession is the
/// whitespace token following the UNP database code.
pub fn summary_from_entry_text(pdb_id: &str, text: &str) -> StructureSummary {
    let mut title = None;
    let mut uniprot_id = None;

    for line in text.lines() {
        if title.is_none() && line.starts_with("HEADER") {
            title = line
                .get(10..)
                .map(str::trim)
                .filter(|t| !t.is_empty())
                .map(String::from);
        }

        if uniprot_id.is_none() && line.contains("DBREF") && line.contains("UNP") {
            let parts: Vec<&str> = line.split_whitespace().collect();
            if let Some(pos) = parts.iter().position(|p| p.contains("UNP")) {
                uniprot_id = parts.get(pos + 1).map(|acc| acc.to_string());
            }
        }
    }

    StructureSummary {
        pdb_id: pdb_id.to_string(),
        title,
        uniprot_id,
    }
}
