use serde::{Deserialize, Serialize};

/// Helper struct to encapsulate model details
#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct GeminiModel {
    pub api_key: String,
    pub model_name: String,
}

impl GeminiModel {
    pub fn new(api_key: String, model_name: Option<String>) -> Self {
        Self {
            api_key,
            model_name: model_name.unwrap_or_else(|| "gemini-2.0-flash".to_string()),
        }
    }
}

/// Request to Gemini API to generate content
#[derive(Serialize, Debug)]
pub struct GenerateContentRequest {
    pub contents: Vec<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system_instruction: Option<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generation_config: Option<GenerationConfig>,
}

/// Content structure for requests and responses
#[derive(Serialize, Clone, Debug, Deserialize)]
pub struct Content {
    pub parts: Vec<Part>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
}

impl Content {
    /// A single-part user turn
    pub fn user(text: String) -> Self {
        Self {
            parts: vec![Part::text(text)],
            role: Some("user".to_string()),
        }
    }

    /// A single-part model turn
    pub fn model(text: String) -> Self {
        Self {
            parts: vec![Part::text(text)],
            role: Some("model".to_string()),
        }
    }

    /// Concatenated text of all parts
    pub fn text(&self) -> String {
        self.parts.iter().map(|p| p.text.as_str()).collect()
    }
}

/// Part structure for a piece of content. This application only ever
/// exchanges text parts; there is no tool calling on this endpoint.
#[derive(Serialize, Clone, Debug, Deserialize)]
pub struct Part {
    pub text: String,
}

impl Part {
    pub fn text(text: String) -> Self {
        Self { text }
    }
}

/// Generation configuration options
#[derive(Serialize, Debug, Default)]
pub struct GenerationConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_p: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_output_tokens: Option<i32>,
}

/// Response from Gemini API
#[derive(Deserialize, Debug, Serialize)]
pub struct GenerateContentResponse {
    pub candidates: Vec<Candidate>,
}

/// Candidate in the response
#[derive(Deserialize, Debug, Serialize)]
pub struct Candidate {
    pub content: Option<ContentResponsePart>,
}

/// Content part in the response
#[derive(Deserialize, Debug, Serialize)]
pub struct ContentResponsePart {
    pub parts: Vec<PartResponse>,
    pub role: Option<String>,
}

/// Part response from the API
#[derive(Deserialize, Debug, Serialize)]
pub struct PartResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn optional_request_fields_are_omitted() {
        let request = GenerateContentRequest {
            contents: vec![Content::user("hello".to_string())],
            system_instruction: None,
            generation_config: None,
        };

        let json = serde_json::to_string(&request).unwrap();
        assert!(json.contains("\"contents\""));
        assert!(!json.contains("system_instruction"));
        assert!(!json.contains("generation_config"));
    }

    #[test]
    fn generation_config_skips_unset_options() {
        let config = GenerationConfig {
            temperature: Some(0.7),
            top_p: None,
            max_output_tokens: None,
        };

        let json = serde_json::to_string(&config).unwrap();
        assert!(json.contains("temperature"));
        assert!(!json.contains("top_p"));
        assert!(!json.contains("max_output_tokens"));
    }

    #[test]
    fn response_parses_without_role() {
        let raw = r###"{"candidates":[{"content":{"parts":[{"text":"## Aries"}],"role":"model"}}]}"###;
        let response: GenerateContentResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(response.candidates.len(), 1);
        let content = response.candidates[0].content.as_ref().unwrap();
        assert_eq!(content.parts[0].text.as_deref(), Some("## Aries"));
    }

    #[test]
    fn content_text_concatenates_parts() {
        let content = Content {
            parts: vec![
                Part::text("The stars ".to_string()),
                Part::text("align.".to_string()),
            ],
            role: Some("model".to_string()),
        };
        assert_eq!(content.text(), "The stars align.");
    }
}
