pub mod clusterer;
pub mod signature;

pub use clusterer::{Cluster, ClusterConfig, Clusterable, MatchReason, SignatureClusterer};
pub use signature::{DocumentFrequency, Signature};
