use crate::types::{ChatMessage, Role};
use anyhow::{Context, Result};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::env;
use tracing::{debug, error, warn};

const GENERATION_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta/models";
const SIMULATOR_MODEL: &str = "gemini-3-flash-preview";
const SAMPLING_TEMPERATURE: f64 = 0.7;

/// Behavior script for the simulated bot. Sent with every request; the
/// template texts mirror the seed rows in the showcased SQL schema.
const SYSTEM_INSTRUCTION: &str = r#"You are simulating a Telegram Bot that uses a specific logic and template set.
The logic is:
1. If the user hasn't started or registered, ask them to /register.
2. If the user says /start, greet them. If registered, use 'welcome_back' style. If not, use 'greeting'.
3. If the user says /register, ask for a password.
4. If the user asks for 'help', 'contact', or 'hours', use the following templates:
   - help: 'You can use this bot to check our services. Available keywords: help, contact, hours.'
   - contact: 'You can reach us at support@example.com or call +123456789.'
   - hours: 'We are open Monday to Friday, 9:00 AM - 6:00 PM.'
5. Otherwise, use: 'I am sorry, I did not understand that. Try typing "help".'

Current State Simulator:
- User is considered registered if they have completed the /register flow in this chat history.
- Always respond as the bot would (concise, Telegram-style)."#;

// ============================================
// Error Types
// ============================================

#[derive(Debug, thiserror::Error)]
pub enum ChatError {
    #[error("GEMINI_API_KEY is not set")]
    MissingCredential,

    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("generation API error {status}: {body}")]
    Api {
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("malformed generation response: {0}")]
    Json(#[from] serde_json::Error),

    #[error("model returned no text")]
    EmptyReply,
}

pub type ChatResult<T> = Result<T, ChatError>;

// ============================================
// Wire Types
// ============================================

#[derive(Serialize)]
struct GenerateRequest {
    contents: Vec<Content>,
    #[serde(rename = "systemInstruction")]
    system_instruction: Content,
    #[serde(rename = "generationConfig")]
    generation_config: GenerationConfig,
}

#[derive(Debug, PartialEq, Serialize)]
struct Content {
    #[serde(skip_serializing_if = "Option::is_none")]
    role: Option<&'static str>,
    parts: Vec<Part>,
}

#[derive(Debug, PartialEq, Serialize)]
struct Part {
    text: String,
}

#[derive(Serialize)]
struct GenerationConfig {
    temperature: f64,
}

#[derive(Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    #[serde(default)]
    content: Option<CandidateContent>,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Deserialize)]
struct CandidatePart {
    #[serde(default)]
    text: String,
}

fn wire_role(role: Role) -> &'static str {
    match role {
        Role::User => "user",
        Role::Bot => "model",
    }
}

/// Prior transcript plus the new input, in conversation order, with the
/// new input as the final user turn.
fn build_contents(history: &[ChatMessage], input: &str) -> Vec<Content> {
    let mut contents: Vec<Content> = history
        .iter()
        .map(|msg| Content {
            role: Some(wire_role(msg.role)),
            parts: vec![Part {
                text: msg.text.clone(),
            }],
        })
        .collect();
    contents.push(Content {
        role: Some("user"),
        parts: vec![Part {
            text: input.to_string(),
        }],
    });
    contents
}

fn extract_text(response: GenerateResponse) -> Option<String> {
    let candidate = response.candidates.into_iter().next()?;
    let text: String = candidate
        .content?
        .parts
        .into_iter()
        .map(|part| part.text)
        .collect();
    if text.trim().is_empty() { None } else { Some(text) }
}

// ============================================
// Client
// ============================================

/// Thin wrapper over the generateContent endpoint. Holds the credential
/// and the pinned model; everything request-shaped is built per call.
pub struct SimulatorClient {
    http: reqwest::Client,
    api_key: String,
    model: String,
}

impl SimulatorClient {
    /// Create the client from environment configuration.
    pub fn from_env() -> Result<Self> {
        let api_key = env::var("GEMINI_API_KEY").context("GEMINI_API_KEY is not set")?;
        Ok(Self {
            http: reqwest::Client::new(),
            api_key,
            model: SIMULATOR_MODEL.to_string(),
        })
    }

    /// One simulated bot turn: the transcript so far plus the new user
    /// text, answered with the generated reply.
    pub async fn simulate(&self, input: &str, history: &[ChatMessage]) -> ChatResult<String> {
        let request = GenerateRequest {
            contents: build_contents(history, input),
            system_instruction: Content {
                role: None,
                parts: vec![Part {
                    text: SYSTEM_INSTRUCTION.to_string(),
                }],
            },
            generation_config: GenerationConfig {
                temperature: SAMPLING_TEMPERATURE,
            },
        };

        let url = format!(
            "{}/{}:generateContent?key={}",
            GENERATION_BASE_URL, self.model, self.api_key
        );
        debug!(
            model = %self.model,
            turns = request.contents.len(),
            "dispatching generateContent"
        );

        let response = self.http.post(&url).json(&request).send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            error!(%status, "generation API rejected the request");
            return Err(ChatError::Api { status, body });
        }

        let parsed: GenerateResponse = serde_json::from_str(&body)?;
        match extract_text(parsed) {
            Some(text) => Ok(text),
            None => {
                warn!("generation response carried no text");
                Err(ChatError::EmptyReply)
            }
        }
    }
}

// ============================================
// Public API Functions
// ============================================

static SIMULATOR: Lazy<Result<SimulatorClient>> = Lazy::new(SimulatorClient::from_env);

/// Run one chat turn against the process-wide client. The credential is
/// read once, on first use; a missing credential surfaces as a normal
/// [`ChatError`] so callers handle it like any other failure.
pub async fn simulate_reply(input: &str, history: &[ChatMessage]) -> ChatResult<String> {
    match SIMULATOR.as_ref() {
        Ok(client) => client.simulate(input, history).await,
        Err(_) => Err(ChatError::MissingCredential),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::OffsetDateTime;

    fn message(id: u64, role: Role, text: &str) -> ChatMessage {
        ChatMessage {
            id,
            role,
            text: text.to_string(),
            timestamp: OffsetDateTime::UNIX_EPOCH,
        }
    }

    #[test]
    fn roles_map_to_the_two_wire_roles() {
        assert_eq!(wire_role(Role::User), "user");
        assert_eq!(wire_role(Role::Bot), "model");
    }

    #[test]
    fn contents_preserve_order_and_end_with_the_new_turn() {
        let history = vec![
            message(0, Role::Bot, "hello"),
            message(1, Role::User, "/start"),
            message(2, Role::Bot, "welcome"),
        ];

        let contents = build_contents(&history, "help");

        assert_eq!(contents.len(), 4);
        assert_eq!(contents[0].role, Some("model"));
        assert_eq!(contents[1].role, Some("user"));
        assert_eq!(contents[2].role, Some("model"));
        assert_eq!(contents[3].role, Some("user"));
        assert_eq!(contents[3].parts[0].text, "help");
    }

    #[test]
    fn request_serializes_with_camel_case_keys() {
        let request = GenerateRequest {
            contents: build_contents(&[], "hi"),
            system_instruction: Content {
                role: None,
                parts: vec![Part {
                    text: SYSTEM_INSTRUCTION.to_string(),
                }],
            },
            generation_config: GenerationConfig {
                temperature: SAMPLING_TEMPERATURE,
            },
        };

        let value = serde_json::to_value(&request).expect("request serializes");
        assert!(value.get("systemInstruction").is_some());
        assert_eq!(
            value["generationConfig"]["temperature"],
            serde_json::json!(0.7)
        );
        // The system instruction carries no role field.
        assert!(value["systemInstruction"].get("role").is_none());
        assert_eq!(value["contents"][0]["role"], "user");
    }

    #[test]
    fn reply_text_is_extracted_from_the_first_candidate() {
        let body = r#"{
            "candidates": [
                { "content": { "parts": [ { "text": "Hello! " }, { "text": "Welcome." } ], "role": "model" } }
            ]
        }"#;

        let parsed: GenerateResponse = serde_json::from_str(body).expect("response parses");
        assert_eq!(extract_text(parsed).as_deref(), Some("Hello! Welcome."));
    }

    #[test]
    fn missing_candidates_yield_no_text() {
        let parsed: GenerateResponse = serde_json::from_str("{}").expect("response parses");
        assert_eq!(extract_text(parsed), None);
    }

    #[test]
    fn blank_candidate_text_yields_no_text() {
        let body = r#"{ "candidates": [ { "content": { "parts": [ { "text": "   " } ] } } ] }"#;
        let parsed: GenerateResponse = serde_json::from_str(body).expect("response parses");
        assert_eq!(extract_text(parsed), None);
    }
}
