use log::debug;
use reqwest::Client;

use crate::config::GeminiConfig;
use crate::errors::{GeminiError, GeminiResult};
use crate::types::*;

/// Client for interacting with the Gemini API
#[derive(Debug, Clone)]
pub struct GeminiClient {
    client: Client,
    config: GeminiConfig,
    model: GeminiModel,
}

impl GeminiClient {
    /// Create a new Gemini API client
    pub fn new(config: GeminiConfig) -> GeminiResult<Self> {
        let api_key = config.api_key.clone().ok_or_else(|| {
            GeminiError::ConfigError(
                "API key is required to initialize the Gemini client".to_string(),
            )
        })?;

        let model = GeminiModel::new(api_key, config.model_name.clone());

        let client = Client::new();

        Ok(Self {
            client,
            config,
            model,
        })
    }

    /// Get the base API URL
    fn get_base_url(&self) -> String {
        format!(
            "https://generativelanguage.googleapis.com/v1beta/models/{}:generateContent?key={}",
            self.model.model_name, self.model.api_key
        )
    }

    /// The configured system prompt, wrapped as a system instruction content block
    pub(crate) fn system_instruction(&self) -> Option<Content> {
        self.config.system_prompt.as_ref().map(|prompt| Content {
            parts: vec![Part::text(prompt.clone())],
            role: Some("system".to_string()),
        })
    }

    /// Generate content using the Gemini API
    pub async fn generate_content(
        &self,
        request: GenerateContentRequest,
    ) -> GeminiResult<GenerateContentResponse> {
        let url = self.get_base_url();
        debug!(
            "Posting generateContent request with {} content block(s)",
            request.contents.len()
        );

        let response = self
            .client
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(|e| GeminiError::RequestError(format!("Failed to send request: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let error_body = response.text().await.map_err(|e| {
                GeminiError::ResponseError(format!("Failed to read error response: {}", e))
            })?;

            return Err(GeminiError::HttpError {
                status_code: status.as_u16(),
                message: format!("API request failed: {}", error_body),
            });
        }

        let response_body = response
            .json::<GenerateContentResponse>()
            .await
            .map_err(|e| GeminiError::ParsingError(format!("Failed to parse response: {}", e)))?;

        Ok(response_body)
    }

    /// Creates a GenerateContentRequest for a single-turn prompt.
    ///
    /// This is the request shape used by the report generators, which carry
    /// their full context inside the prompt text itself.
    pub(crate) fn create_generate_request(&self, prompt: &str) -> GenerateContentRequest {
        GenerateContentRequest {
            contents: vec![Content::user(prompt.to_string())],
            system_instruction: self.system_instruction(),
            generation_config: Some(GenerationConfig {
                temperature: Some(0.7),
                top_p: None,
                max_output_tokens: None,
            }),
        }
    }

    /// Helper method to extract text from a response
    pub fn extract_text_from_response(
        &self,
        response: &GenerateContentResponse,
    ) -> GeminiResult<String> {
        let candidate = response
            .candidates
            .first()
            .ok_or_else(|| GeminiError::ResponseError("No candidates in response".to_string()))?;

        let content = candidate
            .content
            .as_ref()
            .ok_or_else(|| GeminiError::ResponseError("No content in candidate".to_string()))?;

        let mut combined_text = String::new();
        for part in &content.parts {
            if let Some(text) = &part.text {
                combined_text.push_str(text);
            }
        }

        if combined_text.is_empty() {
            return Err(GeminiError::ResponseError(
                "No text in response parts".to_string(),
            ));
        }

        Ok(combined_text)
    }

    /// Single-turn generation that handles creating the request and extracting the response
    pub async fn generate(&self, prompt: &str) -> GeminiResult<String> {
        let request = self.create_generate_request(prompt);
        let response = self.generate_content(request).await?;
        self.extract_text_from_response(&response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> GeminiConfig {
        GeminiConfig {
            api_key: Some("test-key".to_string()),
            model_name: Some("gemini-2.0-flash".to_string()),
            system_prompt: Some("Be mystical.".to_string()),
        }
    }

    #[test]
    fn new_requires_api_key() {
        let config = GeminiConfig {
            api_key: None,
            ..GeminiConfig::default()
        };
        assert!(matches!(
            GeminiClient::new(config),
            Err(GeminiError::ConfigError(_))
        ));
    }

    #[test]
    fn base_url_contains_model_and_key() {
        let client = GeminiClient::new(test_config()).unwrap();
        let url = client.get_base_url();
        assert!(url.contains("models/gemini-2.0-flash:generateContent"));
        assert!(url.ends_with("key=test-key"));
    }

    #[test]
    fn generate_request_carries_system_instruction() {
        let client = GeminiClient::new(test_config()).unwrap();
        let request = client.create_generate_request("Tell my fortune");

        assert_eq!(request.contents.len(), 1);
        assert_eq!(request.contents[0].role.as_deref(), Some("user"));
        assert_eq!(request.contents[0].text(), "Tell my fortune");

        let system = request.system_instruction.unwrap();
        assert_eq!(system.text(), "Be mystical.");
    }

    #[test]
    fn extract_text_concatenates_and_rejects_empty() {
        let client = GeminiClient::new(test_config()).unwrap();

        let response: GenerateContentResponse = serde_json::from_str(
            r#"{"candidates":[{"content":{"parts":[{"text":"A"},{"text":"B"}],"role":"model"}}]}"#,
        )
        .unwrap();
        assert_eq!(client.extract_text_from_response(&response).unwrap(), "AB");

        let empty: GenerateContentResponse = serde_json::from_str(r#"{"candidates":[]}"#).unwrap();
        assert!(matches!(
            client.extract_text_from_response(&empty),
            Err(GeminiError::ResponseError(_))
        ));
    }
}
