//! genemap-sources — Record service clients.

pub mod rcsb;
pub mod uniprot;
