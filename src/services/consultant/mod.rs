pub mod gemini;
pub mod replicate;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Inline image payload: base64 data plus its mime type.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InlineImage {
    pub mime_type: String,
    pub data: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct StyleAdvice {
    pub text: String,
    /// Style names the model tagged as best fits, offered back to the client
    /// as one-tap simulation buttons.
    pub suggested_styles: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct StylePreset {
    pub id: &'static str,
    pub name: &'static str,
    pub prompt: &'static str,
}

pub const STYLE_PRESETS: &[StylePreset] = &[
    StylePreset {
        id: "buzz",
        name: "Buzz Cut",
        prompt: "Give the person in the photo a very short, masculine buzz cut in a marine style.",
    },
    StylePreset {
        id: "undercut",
        name: "Undercut",
        prompt: "Give the person in the photo an undercut: shaved sides, top slicked back with a glossy finish.",
    },
    StylePreset {
        id: "korean_sidepart",
        name: "Korean Side Part",
        prompt: "Give the person in the photo a Korean-style side part with natural fall and light volume, youthful and romantic.",
    },
    StylePreset {
        id: "sidepart",
        name: "Side Part",
        prompt: "Give the person in the photo a classic 7/3 side part, elegant and gentlemanly.",
    },
    StylePreset {
        id: "mullet",
        name: "Mullet",
        prompt: "Give the person in the photo a modern mullet with a stylish long nape, artist vibes.",
    },
    StylePreset {
        id: "mohawk",
        name: "Mohawk",
        prompt: "Give the person in the photo a bold mohawk, spiked up the middle with shaved sides.",
    },
];

/// Loose failure classification; it only picks the user-facing message and
/// HTTP status. There is no retry policy and no offline fallback.
#[derive(Debug, thiserror::Error)]
pub enum ConsultantError {
    #[error("consultant credential is missing or was rejected")]
    MissingCredential,
    #[error("the stylist is taking a breather, try again in a minute")]
    RateLimited,
    #[error("consultant request failed: {0}")]
    Upstream(String),
}

/// The capability surface the rest of the application depends on. Vendors
/// come and go behind it.
#[async_trait]
pub trait ConsultantProvider: Send + Sync {
    /// Produces styling advice from an uploaded portrait and/or a free-text
    /// prompt. At least one of the two is expected to be present.
    async fn generate_advice(
        &self,
        image: Option<&InlineImage>,
        prompt: &str,
    ) -> Result<StyleAdvice, ConsultantError>;

    /// Renders the uploaded portrait wearing the named style.
    async fn generate_styled_image(
        &self,
        image: &InlineImage,
        style: &str,
    ) -> Result<InlineImage, ConsultantError>;
}

pub(crate) const ADVICE_SYSTEM_PROMPT: &str = "You are the resident stylist of a barbershop. \
Analyze the customer's face and give sharp, professional styling advice. \
IMPORTANT: end your answer with the best-fitting styles (at most three) in the exact form \
[TAGS: Style One, Style Two, Style Three]. Do not skip the [TAGS: ...] part; the app turns it into buttons.";

/// Splits a `[TAGS: a, b, c]` marker out of a model reply, returning the
/// cleaned text and the tag list. Replies without the marker pass through
/// untouched.
pub(crate) fn split_style_tags(text: &str) -> (String, Vec<String>) {
    let Some(start) = text.find("[TAGS:") else {
        return (text.trim().to_string(), Vec::new());
    };
    let Some(end) = text[start..].find(']') else {
        return (text.trim().to_string(), Vec::new());
    };

    let inner = &text[start + "[TAGS:".len()..start + end];
    let tags = inner
        .split(',')
        .map(|t| t.trim().to_string())
        .filter(|t| !t.is_empty())
        .collect();

    let mut cleaned = String::with_capacity(text.len());
    cleaned.push_str(&text[..start]);
    cleaned.push_str(&text[start + end + 1..]);
    (cleaned.trim().to_string(), tags)
}
