//! Story generation via the hosted text-generation service.
//!
//! One stateless request per story: an opaque prompt goes out, Markdown
//! prose comes back. By contract the caller only learns "generation
//! failed" on any error; details go to the log.

use gloo::net::http::Request;
use serde::{Deserialize, Serialize};

pub const STORY_MODEL: &str = "gemini-2.5-flash";
const API_ROOT: &str = "https://generativelanguage.googleapis.com/v1beta/models";
const TEMPERATURE: f64 = 0.8;
const TOP_P: f64 = 0.95;

/// API key injected at build time, as the hosting environment does.
const API_KEY: Option<&str> = option_env!("GEMINI_API_KEY");

#[derive(Debug, thiserror::Error)]
pub enum GenerateError {
    #[error("story generation failed")]
    Failed,
}

/// The exact prompt sent to the generator for one story. The prompt is
/// persisted verbatim alongside the story it produced.
#[must_use]
pub fn build_story_prompt(genre: &str, country_name: &str, personal_target: f64) -> String {
    format!(
        "You are a {genre} author. Write a short story (around 300-400 words) set in \
         {country_name}. The story must reflect a world where the average person's lifestyle \
         has a carbon footprint of {personal_target:.1} tonnes. The story should be engaging \
         and subtly incorporate details specific to {country_name}'s culture or geography. \
         The story must reveal what this society is like through its characters, setting, and \
         plot, exploring aspects like how they travel, what they eat, what they value, and \
         their relationship with technology and community. Do not explicitly mention \
         \"carbon footprints\", \"tonnes of CO2\", or climate change jargon. Show, don't tell \
         the reader about this lifestyle."
    )
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateRequest<'a> {
    contents: Vec<Content<'a>>,
    generation_config: GenerationConfig,
}

#[derive(Serialize)]
struct Content<'a> {
    parts: Vec<Part<'a>>,
}

#[derive(Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    temperature: f64,
    top_p: f64,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: CandidateContent,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<TextPart>,
}

#[derive(Debug, Deserialize)]
struct TextPart {
    #[serde(default)]
    text: String,
}

fn response_text(response: GenerateResponse) -> Option<String> {
    let text: String = response
        .candidates
        .into_iter()
        .next()?
        .content
        .parts
        .into_iter()
        .map(|part| part.text)
        .collect();
    if text.is_empty() { None } else { Some(text) }
}

/// Request one story for `prompt`.
///
/// # Errors
///
/// Returns [`GenerateError::Failed`] on any failure: missing key, network
/// error, non-success status, or an unusable response body.
#[allow(clippy::future_not_send)] // Wasm futures rely on browser fetch, which is not `Send`.
pub async fn generate_story(prompt: &str) -> Result<String, GenerateError> {
    let Some(key) = API_KEY else {
        log::error!("story generation unavailable: no API key configured at build time");
        return Err(GenerateError::Failed);
    };

    let body = GenerateRequest {
        contents: vec![Content {
            parts: vec![Part { text: prompt }],
        }],
        generation_config: GenerationConfig {
            temperature: TEMPERATURE,
            top_p: TOP_P,
        },
    };

    let url = format!("{API_ROOT}/{STORY_MODEL}:generateContent?key={key}");
    let response = Request::post(&url)
        .json(&body)
        .map_err(|err| {
            log::error!("failed to encode generation request: {err}");
            GenerateError::Failed
        })?
        .send()
        .await
        .map_err(|err| {
            log::error!("generation request failed: {err}");
            GenerateError::Failed
        })?;

    if !response.ok() {
        log::error!("generator returned HTTP {}", response.status());
        return Err(GenerateError::Failed);
    }

    let parsed: GenerateResponse = response.json().await.map_err(|err| {
        log::error!("generator response unreadable: {err}");
        GenerateError::Failed
    })?;

    response_text(parsed).ok_or_else(|| {
        log::error!("generator response contained no text");
        GenerateError::Failed
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_carries_genre_country_and_rounded_target() {
        let prompt = build_story_prompt("Hopeful Solarpunk", "Sweden", 1.2345);
        assert!(prompt.starts_with("You are a Hopeful Solarpunk author."));
        assert!(prompt.contains("set in Sweden"));
        assert!(prompt.contains("carbon footprint of 1.2 tonnes"));
        assert!(prompt.contains("Show, don't tell"));
    }

    #[test]
    fn request_body_matches_the_service_schema() {
        let body = GenerateRequest {
            contents: vec![Content {
                parts: vec![Part { text: "hello" }],
            }],
            generation_config: GenerationConfig {
                temperature: TEMPERATURE,
                top_p: TOP_P,
            },
        };
        let value = serde_json::to_value(&body).unwrap();
        assert_eq!(value["contents"][0]["parts"][0]["text"], "hello");
        assert!(value["generationConfig"]["topP"].is_number());
    }

    #[test]
    fn response_text_joins_parts_of_the_first_candidate() {
        let parsed: GenerateResponse = serde_json::from_str(
            r#"{
                "candidates": [
                    { "content": { "parts": [ { "text": "One. " }, { "text": "Two." } ] } },
                    { "content": { "parts": [ { "text": "ignored" } ] } }
                ]
            }"#,
        )
        .unwrap();
        assert_eq!(response_text(parsed).unwrap(), "One. Two.");
    }

    #[test]
    fn empty_or_missing_candidates_yield_no_text() {
        let empty: GenerateResponse = serde_json::from_str("{}").unwrap();
        assert!(response_text(empty).is_none());

        let blank: GenerateResponse = serde_json::from_str(
            r#"{ "candidates": [ { "content": { "parts": [] } } ] }"#,
        )
        .unwrap();
        assert!(response_text(blank).is_none());
    }
}
