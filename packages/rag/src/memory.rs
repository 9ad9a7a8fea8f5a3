//! Process-wide conversation memory.
//!
//! Created at startup, appended to by every chatbot call, torn down at
//! process exit. This state belongs to the chatbot alone; the prediction
//! endpoints never touch it.

/// One completed question/answer exchange.
#[derive(Debug, Clone)]
pub struct ConversationTurn {
    /// What the user asked.
    pub question: String,
    /// What the assistant answered.
    pub answer: String,
}

/// Append-only conversation history for the process lifetime.
#[derive(Debug, Default)]
pub struct ConversationMemory {
    turns: Vec<ConversationTurn>,
}

impl ConversationMemory {
    /// Creates an empty memory.
    #[must_use]
    pub const fn new() -> Self {
        Self { turns: Vec::new() }
    }

    /// Records a completed exchange.
    pub fn record(&mut self, question: &str, answer: &str) {
        self.turns.push(ConversationTurn {
            question: question.to_owned(),
            answer: answer.to_owned(),
        });
    }

    /// Number of recorded exchanges.
    #[must_use]
    pub fn len(&self) -> usize {
        self.turns.len()
    }

    /// `true` if nothing has been recorded yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    /// Formats the history for inclusion in a prompt, oldest first.
    #[must_use]
    pub fn transcript(&self) -> String {
        let mut output = String::new();
        for turn in &self.turns {
            output.push_str("Human: ");
            output.push_str(&turn.question);
            output.push('\n');
            output.push_str("Assistant: ");
            output.push_str(&turn.answer);
            output.push('\n');
        }
        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transcript_preserves_order() {
        let mut memory = ConversationMemory::new();
        memory.record("first?", "one");
        memory.record("second?", "two");

        let transcript = memory.transcript();
        let first = transcript.find("first?").unwrap();
        let second = transcript.find("second?").unwrap();
        assert!(first < second);
        assert_eq!(memory.len(), 2);
    }

    #[test]
    fn empty_memory_formats_to_empty_transcript() {
        let memory = ConversationMemory::new();
        assert!(memory.is_empty());
        assert!(memory.transcript().is_empty());
    }
}
