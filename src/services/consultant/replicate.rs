use async_trait::async_trait;
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use serde_json::json;

use super::{
    split_style_tags, ConsultantError, ConsultantProvider, InlineImage, StyleAdvice,
    ADVICE_SYSTEM_PROMPT,
};

const API_BASE: &str = "https://api.replicate.com/v1/models";
const ADVICE_MODEL: &str = "yorickvp/llava-13b";
const IMAGE_MODEL: &str = "stability-ai/sdxl";

/// Hosted diffusion vendor. Predictions run synchronously via `Prefer: wait`;
/// a vision model covers advice, an image-to-image model the simulation.
pub struct ReplicateConsultant {
    api_token: String,
    client: reqwest::Client,
}

impl ReplicateConsultant {
    pub fn new(api_token: String) -> Self {
        Self {
            api_token,
            client: reqwest::Client::new(),
        }
    }

    async fn predict(
        &self,
        model: &str,
        input: serde_json::Value,
    ) -> Result<serde_json::Value, ConsultantError> {
        let resp = self
            .client
            .post(format!("{API_BASE}/{model}/predictions"))
            .bearer_auth(&self.api_token)
            .header("Prefer", "wait=60")
            .json(&json!({ "input": input }))
            .send()
            .await
            .map_err(|e| {
                ConsultantError::Upstream(format!("failed to call Replicate API: {e}"))
            })?;

        let status = resp.status();
        let data: serde_json::Value = resp.json().await.map_err(|e| {
            ConsultantError::Upstream(format!("failed to parse Replicate response: {e}"))
        })?;

        match status.as_u16() {
            401 | 403 => return Err(ConsultantError::MissingCredential),
            429 => return Err(ConsultantError::RateLimited),
            s if !status.is_success() => {
                return Err(ConsultantError::Upstream(format!(
                    "Replicate API error ({s}): {data}"
                )))
            }
            _ => {}
        }

        if data["status"] == "failed" || data["error"].is_string() {
            return Err(ConsultantError::Upstream(format!(
                "Replicate prediction failed: {}",
                data["error"].as_str().unwrap_or("unknown error")
            )));
        }

        Ok(data)
    }

    /// Pulls the result image back down and inlines it, since predictions
    /// return hosted URLs rather than payloads.
    async fn fetch_image(&self, url: &str) -> Result<InlineImage, ConsultantError> {
        let resp = self.client.get(url).send().await.map_err(|e| {
            ConsultantError::Upstream(format!("failed to fetch generated image: {e}"))
        })?;

        let mime_type = resp
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or("image/png")
            .to_string();

        let bytes = resp.bytes().await.map_err(|e| {
            ConsultantError::Upstream(format!("failed to read generated image: {e}"))
        })?;

        Ok(InlineImage {
            mime_type,
            data: BASE64.encode(&bytes),
        })
    }
}

fn data_url(image: &InlineImage) -> String {
    format!("data:{};base64,{}", image.mime_type, image.data)
}

#[async_trait]
impl ConsultantProvider for ReplicateConsultant {
    async fn generate_advice(
        &self,
        image: Option<&InlineImage>,
        prompt: &str,
    ) -> Result<StyleAdvice, ConsultantError> {
        let mut full_prompt = ADVICE_SYSTEM_PROMPT.to_string();
        if !prompt.trim().is_empty() {
            full_prompt.push_str("\n\nAdditional customer notes: ");
            full_prompt.push_str(prompt);
        }

        let mut input = json!({ "prompt": full_prompt });
        if let Some(image) = image {
            input["image"] = json!(data_url(image));
        }

        let data = self.predict(ADVICE_MODEL, input).await?;

        // llava streams its reply as an array of string chunks.
        let text: String = match &data["output"] {
            serde_json::Value::Array(chunks) => {
                chunks.iter().filter_map(|c| c.as_str()).collect()
            }
            serde_json::Value::String(s) => s.clone(),
            _ => String::new(),
        };

        if text.is_empty() {
            return Err(ConsultantError::Upstream(
                "missing text in Replicate response".to_string(),
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
        let input = json!({
            "image": data_url(image),
            "prompt": format!(
                "a portrait photo of the same person with a {style} haircut, photorealistic, \
                 natural lighting"
            ),
            "prompt_strength": 0.6,
        });

        let data = self.predict(IMAGE_MODEL, input).await?;

        let url = match &data["output"] {
            serde_json::Value::Array(outputs) => outputs.first().and_then(|o| o.as_str()),
            serde_json::Value::String(s) => Some(s.as_str()),
            _ => None,
        };

        match url {
            Some(url) => self.fetch_image(url).await,
            None => Err(ConsultantError::Upstream(
                "missing image in Replicate response".to_string(),
            )),
        }
    }
}
