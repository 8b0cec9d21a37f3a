use log::debug;

use crate::client::GeminiClient;
use crate::errors::GeminiResult;
use crate::types::*;

/// A multi-turn conversation with the Gemini API.
///
/// The locally held history is the authoritative record of the conversation:
/// every call to [`send_message`](ChatSession::send_message) posts the full
/// accumulated history plus the new user turn. Turns are appended only after
/// a successful reply, so a failed call leaves the history exactly as it was
/// and the turn order always matches submission order.
pub struct ChatSession {
    client: GeminiClient,
    history: Vec<Content>,
}

impl ChatSession {
    /// Start a session with an empty history
    pub fn new(client: GeminiClient) -> Self {
        Self {
            client,
            history: Vec::new(),
        }
    }

    /// Ordered, append-only view of the conversation so far
    pub fn history(&self) -> &[Content] {
        &self.history
    }

    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }

    /// Build the request for the next turn without mutating the session
    fn build_request(&self, user_message: &str) -> GenerateContentRequest {
        let mut contents = self.history.clone();
        contents.push(Content::user(user_message.to_string()));

        GenerateContentRequest {
            contents,
            system_instruction: self.client.system_instruction(),
            generation_config: Some(GenerationConfig {
                temperature: Some(0.7),
                top_p: None,
                max_output_tokens: None,
            }),
        }
    }

    /// Send one user turn and return the model's reply.
    ///
    /// On success the user turn and the reply are appended to the history, in
    /// that order. On failure nothing is recorded.
    pub async fn send_message(&mut self, user_message: &str) -> GeminiResult<String> {
        let request = self.build_request(user_message);
        debug!("Sending chat turn {} to Gemini", self.history.len() / 2 + 1);

        let response = self.client.generate_content(request).await?;
        let reply = self.client.extract_text_from_response(&response)?;

        self.history.push(Content::user(user_message.to_string()));
        self.history.push(Content::model(reply.clone()));

        Ok(reply)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GeminiConfig;

    fn test_session() -> ChatSession {
        let config = GeminiConfig {
            api_key: Some("test-key".to_string()),
            model_name: None,
            system_prompt: Some("Be mystical.".to_string()),
        };
        ChatSession::new(GeminiClient::new(config).unwrap())
    }

    #[test]
    fn new_session_has_empty_history() {
        let session = test_session();
        assert!(session.is_empty());
        assert!(session.history().is_empty());
    }

    #[test]
    fn request_appends_new_turn_after_history() {
        let mut session = test_session();
        session.history.push(Content::user("first".to_string()));
        session.history.push(Content::model("reply".to_string()));

        let request = session.build_request("second");
        let roles: Vec<_> = request
            .contents
            .iter()
            .map(|c| c.role.as_deref().unwrap())
            .collect();
        assert_eq!(roles, vec!["user", "model", "user"]);
        assert_eq!(request.contents.last().unwrap().text(), "second");

        // Building a request must not record the turn
        assert_eq!(session.history().len(), 2);
    }

    #[test]
    fn request_carries_session_system_instruction() {
        let session = test_session();
        let request = session.build_request("hello");
        assert_eq!(request.system_instruction.unwrap().text(), "Be mystical.");
    }
}
