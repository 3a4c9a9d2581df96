use async_trait::async_trait;
use serde_json::json;

use super::{
    split_style_tags, ConsultantError, ConsultantProvider, InlineImage, StyleAdvice,
    ADVICE_SYSTEM_PROMPT,
};

const API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";

/// Hosted text+image vendor. One model answers advice requests, another
/// renders the styled portrait.
pub struct GeminiConsultant {
    api_key: String,
    text_model: String,
    image_model: String,
    client: reqwest::Client,
}

impl GeminiConsultant {
    pub fn new(api_key: String, text_model: String, image_model: String) -> Self {
        Self {
            api_key,
            text_model,
            image_model,
            client: reqwest::Client::new(),
        }
    }

    async fn generate(
        &self,
        model: &str,
        body: serde_json::Value,
    ) -> Result<serde_json::Value, ConsultantError> {
        let resp = self
            .client
            .post(format!("{API_BASE}/{model}:generateContent"))
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| ConsultantError::Upstream(format!("failed to call Gemini API: {e}")))?;

        let status = resp.status();
        let data: serde_json::Value = resp
            .json()
            .await
            .map_err(|e| ConsultantError::Upstream(format!("failed to parse Gemini response: {e}")))?;

        match status.as_u16() {
            401 | 403 => Err(ConsultantError::MissingCredential),
            429 => Err(ConsultantError::RateLimited),
            s if !status.is_success() => Err(ConsultantError::Upstream(format!(
                "Gemini API error ({s}): {data}"
            ))),
            _ => Ok(data),
        }
    }
}

fn inline_part(image: &InlineImage) -> serde_json::Value {
    json!({
        "inlineData": {
            "mimeType": image.mime_type,
            "data": image.data,
        }
    })
}

#[async_trait]
impl ConsultantProvider for GeminiConsultant {
    async fn generate_advice(
        &self,
        image: Option<&InlineImage>,
        prompt: &str,
    ) -> Result<StyleAdvice, ConsultantError> {
        let mut parts = vec![json!({"text": ADVICE_SYSTEM_PROMPT})];
        if let Some(image) = image {
            parts.push(inline_part(image));
        }
        if !prompt.trim().is_empty() {
            parts.push(json!({"text": format!("Additional customer notes: {prompt}")}));
        }

        let body = json!({"contents": [{"parts": parts}]});
        let data = self.generate(&self.text_model, body).await?;

        let text: String = data["candidates"][0]["content"]["parts"]
            .as_array()
            .map(|parts| {
                parts
                    .iter()
                    .filter_map(|p| p["text"].as_str())
                    .collect::<Vec<_>>()
                    .join("")
            })
            .unwrap_or_default();

        if text.is_empty() {
            return Err(ConsultantError::Upstream(
                "missing text in Gemini response".to_string(),
            ));
        }

        let (text, suggested_styles) = split_style_tags(&text);
        Ok(StyleAdvice {
            text,
            suggested_styles,
        })
    }

    async fn generate_styled_image(
        &self,
        image: &InlineImage,
        style: &str,
    ) -> Result<InlineImage, ConsultantError> {
        let body = json!({
            "contents": [{
                "parts": [
                    inline_part(image),
                    {"text": format!(
                        "Edit this portrait photo so the person wears a \"{style}\" haircut, \
                         applied as naturally and stylishly as possible."
                    )},
                ]
            }]
        });

        let data = self.generate(&self.image_model, body).await?;

        let parts = data["candidates"][0]["content"]["parts"]
            .as_array()
            .cloned()
            .unwrap_or_default();

        for part in &parts {
            if let Some(inline) = part.get("inlineData") {
                return Ok(InlineImage {
                    mime_type: inline["mimeType"].as_str().unwrap_or("image/png").to_string(),
                    data: inline["data"].as_str().unwrap_or_default().to_string(),
                });
            }
        }

        Err(ConsultantError::Upstream(
            "missing image in Gemini response".to_string(),
        ))
    }
}
