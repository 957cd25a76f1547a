//! Non-streaming chat-completion call and JSON reply parsing.

use reqwest::Client;
use serde_json::json;
use tracing::debug;

use crate::config::LlmConfig;
use studyforge_core::{Error, Result};
use studyforge_nlp::ArtifactBundle;

const SYSTEM_PROMPT: &str = "You are a helpful educational AI tutor.";

fn build_prompt(text: &str) -> String {
    format!(
        r#"You are an expert teacher. Based on the below text, generate:
1. A summary (max 5 lines).
2. 4 key points.
3. 3 fill-in-the-blank questions (with answers).
4. 3 meaningful multiple-choice questions based on the topic.

Make sure all content is relevant to the given text.
Each MCQ must have 4 options, one correct answer, and a short explanation.

Format response strictly as JSON:
{{
    "summary": "string",
    "key_points": ["string", "string"],
    "quiz": [{{"question": "string", "answer": "string"}}],
    "mcqs": [
        {{
            "question": "string",
            "options": ["string", "string", "string", "string"],
            "answer": "string",
            "explanation": "string"
        }}
    ]
}}

Text:
{text}"#
    )
}

/// Strip Markdown code fences some models wrap around JSON replies.
fn strip_code_fences(content: &str) -> &str {
    let content = content.trim();
    let content = content
        .strip_prefix("```json")
        .or_else(|| content.strip_prefix("```"))
        .unwrap_or(content);
    content.strip_suffix("```").unwrap_or(content).trim()
}

/// Ask the configured model for an artifact bundle.
pub async fn generate_bundle(
    client: &Client,
    config: &LlmConfig,
    text: &str,
) -> Result<ArtifactBundle> {
    let api_key = config
        .api_key
        .as_ref()
        .ok_or_else(|| Error::Llm("no API key configured".into()))?;

    let url = format!(
        "{}/chat/completions",
        config.base_url.trim_end_matches('/')
    );
    let body = json!({
        "model": config.model,
        "messages": [
            {"role": "system", "content": SYSTEM_PROMPT},
            {"role": "user", "content": build_prompt(text)},
        ],
        "temperature": config.temperature,
    });

    debug!("Requesting artifact bundle from {} ({})", url, config.model);

    let response = client
        .post(&url)
        .header("Authorization", format!("Bearer {}", api_key))
        .header("Content-Type", "application/json")
        .json(&body)
        .send()
        .await
        .map_err(|e| Error::Llm(format!("request failed: {}", e)))?;

    if !response.status().is_success() {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        return Err(Error::Llm(format!("API error {}: {}", status, body)));
    }

    let reply: serde_json::Value = response
        .json()
        .await
        .map_err(|e| Error::Llm(format!("invalid response body: {}", e)))?;

    let content = reply["choices"][0]["message"]["content"]
        .as_str()
        .ok_or_else(|| Error::Llm("reply has no message content".into()))?;

    let bundle: ArtifactBundle = serde_json::from_str(strip_code_fences(content))
        .map_err(|e| Error::Llm(format!("reply is not a valid bundle: {}", e)))?;
    Ok(bundle)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_code_fences() {
        assert_eq!(strip_code_fences("{\"a\":1}"), "{\"a\":1}");
        assert_eq!(strip_code_fences("```json\n{\"a\":1}\n```"), "{\"a\":1}");
        assert_eq!(strip_code_fences("```\n{\"a\":1}\n```"), "{\"a\":1}");
    }

    #[test]
    fn test_reply_parses_into_bundle() {
        let content = r#"```json
        {
            "summary": "Plants make food from light.",
            "key_points": ["Light is absorbed", "Glucose is produced"],
            "quiz": [{"question": "_____ absorbs light.", "answer": "chlorophyll"}],
            "mcqs": [{
                "question": "Fill in the blank: _____ absorbs light.",
                "options": ["chlorophyll", "carotene", "glucose", "stomata"],
                "answer": "chlorophyll",
                "explanation": "Chlorophyll is the light-absorbing pigment."
            }]
        }
        ```"#;
        let bundle: ArtifactBundle =
            serde_json::from_str(strip_code_fences(content)).unwrap();
        assert_eq!(bundle.quiz.len(), 1);
        assert_eq!(bundle.mcqs[0].options.len(), 4);
        assert_eq!(bundle.mcqs[0].answer, "chlorophyll");
    }

    #[test]
    fn test_prompt_embeds_source_text() {
        let prompt = build_prompt("The mitochondria is the powerhouse.");
        assert!(prompt.contains("The mitochondria is the powerhouse."));
        assert!(prompt.contains("strictly as JSON"));
    }
}
