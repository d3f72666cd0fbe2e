use crate::config::Number;
use serde::{Deserialize, Serialize};

/// One record of the candidate collection. A record may carry several embeddings;
/// only the first is compared.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
pub struct CandidateEntry {
    pub index: i64,
    pub embedding: Vec<Vec<Number>>,
}

impl CandidateEntry {
    pub fn first_candidate(&self) -> Option<&[Number]> {
        self.embedding.first().map(Vec::as_slice)
    }
}

/// Reference embeddings from a named model, aligned by position with the candidate
/// collection.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Default)]
pub struct ModelEmbeddings {
    #[serde(default)]
    pub model: String,
    pub embeddings: Vec<Vec<Number>>,
}
