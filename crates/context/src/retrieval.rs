//! Retrieval sources.
//!
//! A retrieval source turns the user's query into zero or more documents
//! to be concatenated into the turn's ContextBlock. Real deployments put a
//! vector store or web fetch behind [`RetrievalSource`]; the bundled
//! [`InMemorySource`] does keyword scoring over an in-process corpus,
//! which is enough for tests and offline runs.

use tracing::debug;
use turnwise_core::{ContextBlock, Result, RetrievedDocument};

/// Produces candidate documents for a query.
pub trait RetrievalSource {
    fn retrieve(&self, query: &str) -> Result<Vec<RetrievedDocument>>;
}

/// In-process keyword retriever over a fixed document corpus.
pub struct InMemorySource {
    documents: Vec<RetrievedDocument>,
    limit: usize,
}

impl InMemorySource {
    /// Source over `documents`, returning at most `limit` hits per query.
    pub fn new(documents: Vec<RetrievedDocument>, limit: usize) -> Self {
        Self { documents, limit }
    }

    /// Build the turn's ContextBlock directly from a query.
    pub fn context_for(&self, query: &str) -> Result<ContextBlock> {
        let docs = self.retrieve(query)?;
        Ok(ContextBlock::from_documents(&docs))
    }
}

impl RetrievalSource for InMemorySource {
    fn retrieve(&self, query: &str) -> Result<Vec<RetrievedDocument>> {
        let query_lower = query.to_lowercase();
        let terms: Vec<&str> = query_lower.split_whitespace().collect();

        // Keyword relevance: term occurrences normalized by document length.
        let mut scored: Vec<(f32, &RetrievedDocument)> = self
            .documents
            .iter()
            .filter_map(|doc| {
                let content = doc.content.to_lowercase();
                let occurrences: usize =
                    terms.iter().map(|t| content.matches(t).count()).sum();
                if occurrences == 0 {
                    return None;
                }
                let score = occurrences as f32 / (content.len() as f32 / 100.0).max(1.0);
                Some((score, doc))
            })
            .collect();

        scored.sort_by(|a, b| b.0.partial_cmp(&a.0).unwrap_or(std::cmp::Ordering::Equal));
        scored.truncate(self.limit);

        debug!(query, hits = scored.len(), "Retrieved documents");
        Ok(scored.into_iter().map(|(_, doc)| doc.clone()).collect())
    }
}
