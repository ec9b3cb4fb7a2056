//! Prompt assembly for retrieval-augmented chat

use crate::retrieval::SearchResult;
use crate::session::Turn;

use super::provider::ChatMessage;

/// Builds chat-completion message lists from retrieved context and history
pub struct PromptBuilder;

impl PromptBuilder {
    /// Build the context block from search results
    pub fn build_context(results: &[SearchResult], filename: &str) -> String {
        let mut context = String::new();

        for (i, result) in results.iter().enumerate() {
            let source_ref = match result.chunk.page_number {
                Some(page) => format!("{}, Page {}", filename, page),
                None => filename.to_string(),
            };

            context.push_str(&format!(
                "[{}] {}\n\nContent:\n{}\n\n---\n\n",
                i + 1,
                source_ref,
                result.chunk.content
            ));
        }

        context
    }

    /// Build the full message list: system instructions with document
    /// context, prior conversation turns, then the current question.
    pub fn build_messages(
        question: &str,
        context: &str,
        history: &[Turn],
    ) -> Vec<ChatMessage> {
        let system = format!(
            r#"You are an assistant answering questions about an uploaded document.

INSTRUCTIONS:
1. Answer using only the context excerpts below.
2. When a fact comes from a specific excerpt, mention its page when available.
3. If the answer is not in the context, say you cannot find it in the document.

CONTEXT FROM THE DOCUMENT:
{context}"#,
        );

        let mut messages = Vec::with_capacity(history.len() * 2 + 2);
        messages.push(ChatMessage::system(system));

        for turn in history {
            messages.push(ChatMessage::user(turn.question.clone()));
            messages.push(ChatMessage::assistant(turn.answer.clone()));
        }

        messages.push(ChatMessage::user(question.to_string()));
        messages
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generation::Role;
    use crate::types::Chunk;

    fn result(content: &str, page: Option<u32>) -> SearchResult {
        SearchResult {
            chunk: Chunk::new(content.to_string(), page, 0),
            similarity: 0.9,
        }
    }

    #[test]
    fn context_includes_page_references() {
        let results = vec![result("First excerpt.", Some(3)), result("Second.", None)];
        let context = PromptBuilder::build_context(&results, "paper.pdf");

        assert!(context.contains("[1] paper.pdf, Page 3"));
        assert!(context.contains("[2] paper.pdf"));
        assert!(context.contains("First excerpt."));
    }

    #[test]
    fn messages_interleave_history_in_order() {
        let history = vec![
            Turn {
                question: "first question".to_string(),
                answer: "first answer".to_string(),
            },
            Turn {
                question: "second question".to_string(),
                answer: "second answer".to_string(),
            },
        ];

        let messages = PromptBuilder::build_messages("third question", "ctx", &history);

        assert_eq!(messages.len(), 6);
        assert_eq!(messages[0].role, Role::System);
        assert!(messages[0].content.contains("ctx"));
        assert_eq!(messages[1].content, "first question");
        assert_eq!(messages[2].role, Role::Assistant);
        assert_eq!(messages[4].content, "second answer");
        assert_eq!(messages[5].content, "third question");
    }
}
