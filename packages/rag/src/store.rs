//! Embedding capability and the in-memory vector store.
//!
//! The store is built once at startup from the knowledge document chunks
//! and is read-only afterwards; retrieval is brute-force cosine similarity
//! over a few hundred chunks, which needs no index structure.

use serde::{Deserialize, Serialize};

use crate::RagError;

/// Default Ollama daemon address for embeddings.
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:11434";

/// Default embedding model.
pub const DEFAULT_MODEL: &str = "nomic-embed-text";

/// Trait for embedding providers.
#[async_trait::async_trait]
pub trait EmbeddingProvider: Send + Sync {
    /// Embeds a text into a dense vector.
    ///
    /// # Errors
    ///
    /// Returns [`RagError`] if the request fails.
    async fn embed(&self, text: &str) -> Result<Vec<f32>, RagError>;
}

/// Ollama embeddings API provider.
pub struct OllamaEmbeddings {
    base_url: String,
    model: String,
    client: reqwest::Client,
}

impl OllamaEmbeddings {
    /// Creates a new embeddings provider.
    #[must_use]
    pub fn new(base_url: String, model: String) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_owned(),
            model,
            client: reqwest::Client::new(),
        }
    }

    /// Creates an embeddings provider from `OLLAMA_BASE_URL` and
    /// `EMBEDDING_MODEL`, falling back to local defaults.
    #[must_use]
    pub fn from_env() -> Self {
        let base_url =
            std::env::var("OLLAMA_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        let model = std::env::var("EMBEDDING_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());
        Self::new(base_url, model)
    }
}

#[derive(Serialize)]
struct EmbeddingRequest<'a> {
    model: &'a str,
    prompt: &'a str,
}

#[derive(Deserialize)]
struct EmbeddingResponse {
    embedding: Vec<f32>,
}

#[async_trait::async_trait]
impl EmbeddingProvider for OllamaEmbeddings {
    async fn embed(&self, text: &str) -> Result<Vec<f32>, RagError> {
        let request = EmbeddingRequest {
            model: &self.model,
            prompt: text,
        };

        let resp = self
            .client
            .post(format!("{}/api/embeddings", self.base_url))
            .json(&request)
            .send()
            .await?
            .error_for_status()?;

        let response: EmbeddingResponse = resp.json().await?;
        Ok(response.embedding)
    }
}

/// One embedded chunk.
struct Entry {
    embedding: Vec<f32>,
    text: String,
}

/// Immutable in-memory vector store over document chunks.
pub struct VectorStore {
    entries: Vec<Entry>,
}

impl VectorStore {
    /// Embeds every chunk and builds the store.
    ///
    /// Chunks are embedded sequentially at startup; the store never
    /// changes afterwards.
    ///
    /// # Errors
    ///
    /// Returns [`RagError`] if any embedding call fails.
    pub async fn build(
        chunks: Vec<String>,
        embedder: &dyn EmbeddingProvider,
    ) -> Result<Self, RagError> {
        let mut entries = Vec::with_capacity(chunks.len());
        for text in chunks {
            let embedding = embedder.embed(&text).await?;
            entries.push(Entry { embedding, text });
        }
        log::info!("Vector store built with {} chunks", entries.len());
        Ok(Self { entries })
    }

    /// Number of stored chunks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// `true` if the store holds no chunks.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Embeds the query and returns the texts of the `top_k` most similar
    /// chunks, best first.
    ///
    /// # Errors
    ///
    /// Returns [`RagError`] if the query embedding fails.
    pub async fn search(
        &self,
        query: &str,
        embedder: &dyn EmbeddingProvider,
        top_k: usize,
    ) -> Result<Vec<&str>, RagError> {
        let query_embedding = embedder.embed(query).await?;
        Ok(self.top_k(&query_embedding, top_k))
    }

    /// Ranks stored chunks against a query embedding by cosine similarity.
    fn top_k(&self, query_embedding: &[f32], k: usize) -> Vec<&str> {
        let mut scored: Vec<(f32, &str)> = self
            .entries
            .iter()
            .map(|e| (cosine_similarity(&e.embedding, query_embedding), &*e.text))
            .collect();

        scored.sort_by(|a, b| b.0.partial_cmp(&a.0).unwrap_or(std::cmp::Ordering::Equal));
        scored.into_iter().take(k).map(|(_, text)| text).collect()
    }
}

/// Cosine similarity of two vectors; 0.0 when either has zero norm or the
/// dimensions disagree.
fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    if a.len() != b.len() {
        return 0.0;
    }

    let dot: f32 = a.iter().zip(b).map(|(x, y)| x * y).sum();
    let norm_a: f32 = a.iter().map(|x| x * x).sum::<f32>().sqrt();
    let norm_b: f32 = b.iter().map(|x| x * x).sum::<f32>().sqrt();

    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }

    dot / (norm_a * norm_b)
}
