#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Retrieval-augmented chatbot pipeline.
//!
//! At startup the knowledge document is loaded, chunked on newline
//! boundaries (1000 characters, 200 overlap), embedded, and held in an
//! in-memory vector store. Each question retrieves the closest chunks,
//! folds in the running conversation memory, and asks the LLM for an
//! answer capped near 100 words. The memory lives for the process
//! lifetime and is owned exclusively by the chatbot.

pub mod memory;
pub mod splitter;
pub mod store;

use std::path::Path;

use airaware_ai::{AiError, LlmProvider};
use thiserror::Error;

pub use memory::ConversationMemory;
pub use splitter::TextSplitter;
pub use store::{EmbeddingProvider, OllamaEmbeddings, VectorStore};

/// How many chunks are retrieved per question.
const RETRIEVAL_TOP_K: usize = 4;

/// Appended to every user question before retrieval and generation.
const BREVITY_SUFFIX: &str =
    "Be concise with your answer; it should not exceed more than 100 unique words.";

/// Errors from the chatbot pipeline.
#[derive(Debug, Error)]
pub enum RagError {
    /// HTTP request to the embeddings endpoint failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Reading the knowledge document failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// PDF text extraction failed.
    #[error("Document extraction error: {0}")]
    Extraction(String),

    /// The LLM provider failed.
    #[error(transparent)]
    Ai(#[from] AiError),
}

/// Loads the knowledge document as plain text.
///
/// PDF files go through text extraction; anything else is read as UTF-8.
///
/// # Errors
///
/// Returns [`RagError`] if the file cannot be read or extracted.
pub fn load_document_text(path: &Path) -> Result<String, RagError> {
    let is_pdf = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("pdf"));

    if is_pdf {
        let text = pdf_extract::extract_text(path)
            .map_err(|e| RagError::Extraction(format!("failed to extract text from PDF: {e}")))?;
        log::debug!("Extracted {} characters from {}", text.len(), path.display());
        Ok(text)
    } else {
        Ok(std::fs::read_to_string(path)?)
    }
}

/// The retrieval-augmented chatbot: vector store, embedder, LLM, and
/// process-wide conversation memory in one place.
pub struct Chatbot {
    store: VectorStore,
    embedder: Box<dyn EmbeddingProvider>,
    provider: Box<dyn LlmProvider>,
    memory: ConversationMemory,
}

impl Chatbot {
    /// Chunks and embeds the document text and assembles the chatbot.
    ///
    /// # Errors
    ///
    /// Returns [`RagError`] if embedding the chunks fails.
    pub async fn build(
        document_text: &str,
        embedder: Box<dyn EmbeddingProvider>,
        provider: Box<dyn LlmProvider>,
    ) -> Result<Self, RagError> {
        let chunks = TextSplitter::default().split(document_text);
        log::info!("Knowledge document split into {} chunks", chunks.len());

        let store = VectorStore::build(chunks, embedder.as_ref()).await?;

        Ok(Self {
            store,
            embedder,
            provider,
            memory: ConversationMemory::new(),
        })
    }

    /// Answers a question against the knowledge document and the running
    /// conversation, recording the exchange in memory.
    ///
    /// # Errors
    ///
    /// Returns [`RagError`] if retrieval or generation fails. A failed
    /// call records nothing.
    pub async fn ask(&mut self, message: &str) -> Result<String, RagError> {
        let question = format!("{message} {BREVITY_SUFFIX}");

        let context = self
            .store
            .search(&question, self.embedder.as_ref(), RETRIEVAL_TOP_K)
            .await?;

        let prompt = build_prompt(&context, &self.memory, &question);
        let answer = self.provider.complete(&prompt).await?;

        self.memory.record(message, &answer);
        Ok(answer)
    }

    /// Number of exchanges recorded so far.
    #[must_use]
    pub fn turn_count(&self) -> usize {
        self.memory.len()
    }
}

/// Assembles the generation prompt: retrieved context, then history, then
/// the current question.
fn build_prompt(context: &[&str], memory: &ConversationMemory, question: &str) -> String {
    let mut prompt = String::from(
        "Use the following document excerpts and conversation history to answer the question.\n\n",
    );

    prompt.push_str("Document excerpts:\n");
    for chunk in context {
        prompt.push_str(chunk);
        prompt.push_str("\n---\n");
    }

    if !memory.is_empty() {
        prompt.push_str("\nConversation so far:\n");
        prompt.push_str(&memory.transcript());
    }

    prompt.push_str("\nQuestion: ");
    prompt.push_str(question);
    prompt
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    struct UniformEmbedder;

    #[async_trait::async_trait]
    impl EmbeddingProvider for UniformEmbedder {
        async fn embed(&self, text: &str) -> Result<Vec<f32>, RagError> {
            // Direction keyed on a marker word so retrieval is predictable.
            Ok(if text.contains("pollution") {
                vec![1.0, 0.0]
            } else {
                vec![0.0, 1.0]
            })
        }
    }

    /// Echoes the prompt back so tests can inspect what was generated.
    struct EchoProvider {
        prompts: Arc<Mutex<Vec<String>>>,
    }

    #[async_trait::async_trait]
    impl LlmProvider for EchoProvider {
        async fn complete(&self, prompt: &str) -> Result<String, AiError> {
            self.prompts.lock().unwrap().push(prompt.to_string());
            Ok("an answer".to_string())
        }
    }

    async fn build_chatbot(prompts: Arc<Mutex<Vec<String>>>) -> Chatbot {
        Chatbot::build(
            "pollution sources in cities\nunrelated cooking recipes",
            Box::new(UniformEmbedder),
            Box::new(EchoProvider { prompts }),
        )
        .await
        .unwrap()
    }

    #[tokio::test]
    async fn ask_retrieves_context_and_appends_brevity_suffix() {
        let prompts = Arc::new(Mutex::new(Vec::new()));
        let mut chatbot = build_chatbot(Arc::clone(&prompts)).await;

        let answer = chatbot.ask("what causes pollution?").await.unwrap();
        assert_eq!(answer, "an answer");

        let sent = prompts.lock().unwrap();
        assert!(sent[0].contains("pollution sources in cities"));
        assert!(sent[0].contains("100 unique words"));
    }

    #[tokio::test]
    async fn memory_accumulates_across_calls() {
        let prompts = Arc::new(Mutex::new(Vec::new()));
        let mut chatbot = build_chatbot(Arc::clone(&prompts)).await;

        chatbot.ask("first question about pollution").await.unwrap();
        chatbot.ask("a follow-up").await.unwrap();
        assert_eq!(chatbot.turn_count(), 2);

        // The second prompt carries the first exchange.
        let sent = prompts.lock().unwrap();
        assert!(sent[1].contains("Human: first question about pollution"));
        assert!(sent[1].contains("Assistant: an answer"));
        assert!(!sent[0].contains("Conversation so far"));
    }
}
