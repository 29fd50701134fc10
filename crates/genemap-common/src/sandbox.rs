use reqwest::{Client, ClientBuilder};
use std::collections::HashSet;
use std::time::Duration;
use url::Url;
use crate::error::GenemapError;

/// An HTTP client capped to the approved enrichment services.
/// Requests to any host outside the allowlist are rejected before they leave
/// the process.
#[derive(Debug, Clone)]
pub struct SandboxClient {
    client: Client,
    allowlist: HashSet<String>,
}

impl SandboxClient {
    /// Creates a new SandboxClient allowing only the structure and protein
    /// record services.
    pub fn new() -> Result<Self, GenemapError> {
        let mut allowlist = HashSet::new();
        // Default Genemap allowlist
        let domains = vec![
            "files.rcsb.org",   // PDB entry files
            "rest.uniprot.org", // UniProtKB entries
        ];

        for d in domains {
            allowlist.insert(d.to_string());
        }

        let client = ClientBuilder::new()
            .timeout(Duration::from_secs(30))
            .build()?;

        Ok(Self { client, allowlist })
    }

    /// Appends an exact hostname to the allowlist.
    pub fn allow_domain(&mut self, domain: &str) {
        self.allowlist.insert(domain.to_string());
    }

    /// Validates if a URL is permitted under the current sandbox policy.
    pub fn is_allowed(&self, url: &str) -> bool {
        if let Ok(parsed) = Url::parse(url) {
            if let Some(host) = parsed.host_str() {
                // Check exact match or if it's a subdomain of an allowed domain
                for allowed in &self.allowlist {
                    if host == allowed || host.ends_with(&format!(".{}", allowed)) {
                        return true;
                    }
                }
            }
        }
        false
    }

    /// Exposes the inner `reqwest::Client` builder pattern safely for GET requests.
    pub fn get(&self, url: &str) -> Result<reqwest::RequestBuilder, GenemapError> {
        if !self.is_allowed(url) {
            return Err(GenemapError::Security(format!(
                "Network capabilities capped: domain not in allowlist for URL {}",
                url
            )));
        }

        Ok(self.client.get(url))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_allowlist_covers_both_services() {
        let client = SandboxClient::new().unwrap();
        assert!(client.is_allowed("https://files.rcsb.org/view/1TUP.pdb"));
        assert!(client.is_allowed("https://rest.uniprot.org/uniprotkb/P04637"));
    }

    #[test]
    fn test_unlisted_domain_is_rejected() {
        let client = SandboxClient::new().unwrap();
        assert!(!client.is_allowed("https://example.com/1TUP.pdb"));
        assert!(client.get("https://example.com/1TUP.pdb").is_err());
    }

    #[test]
    fn test_allow_domain_extends_the_allowlist() {
        let mut client = SandboxClient::new().unwrap();
        assert!(!client.is_allowed("https://alphafold.ebi.ac.uk/files/x.pdb"));
        client.allow_domain("alphafold.ebi.ac.uk");
        assert!(client.is_allowed("https://alphafold.ebi.ac.uk/files/x.pdb"));
    }
}
