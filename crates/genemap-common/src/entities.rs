/// Row-level result types shared between the source clients and the report
/// writer.

use serde::{Deserialize, Serialize};

/// One enrichment result per structure identifier.
///
/// Every optional stays `None` when the corresponding lookup failed or the
/// record carried no data; the report writer turns `None` into an empty cell.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EnrichmentRecord {
    pub pdb_id: String,
    pub title: Option<String>,
    pub uniprot_id: Option<String>,
    pub gene_name: Option<String>,
    pub protein_name: Option<String>,
    pub organism: Option<String>,
}

impl EnrichmentRecord {
    /// An all-null record for an identifier whose lookups produced nothing.
    pub fn empty(pdb_id: &str) -> Self {
        Self {
            pdb_id: pdb_id.to_string(),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_record_keeps_only_the_identifier() {
        let record = EnrichmentRecord::empty("1TUP");
        assert_eq!(record.pdb_id, "1TUP");
        assert!(record.title.is_none());
        assert!(record.uniprot_id.is_none());
        assert!(record.gene_name.is_none());
        assert!(record.protein_name.is_none());
        assert!(record.organism.is_none());
    }

    #[test]
    fn test_record_serialization() {
        let record = EnrichmentRecord {
            pdb_id: "1TUP".to_string(),
            title: Some("ANTITUMOR PROTEIN/DNA".to_string()),
            uniprot_id: Some("P04637".to_string()),
            gene_name: Some("TP53".to_string()),
            protein_name: Some("Cellular tumor antigen p53".to_string()),
            organism: Some("Homo sapiens".to_string()),
        };
        let json = serde_json::to_string(&record).unwrap();
        assert!(json.contains("TP53"));
        assert!(json.contains("P04637"));
    }
}
