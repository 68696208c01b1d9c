//! Message content: plain text or an ordered list of text and image parts.

use grok_error::{GrokError, GrokResult};
use serde::{Deserialize, Serialize};

/// How closely the model should inspect an image.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum DetailLevel {
    #[default]
    Auto,
    Low,
    High,
}

/// Where an image comes from. Exactly one of inline bytes or a remote URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ImageSource {
    /// Base64-encoded bytes with their MIME subtype (e.g. `png`)
    Inline {
        /// MIME subtype, placed after `image/`
        mime_subtype: String,
        /// Base64 payload
        data: String,
    },
    /// Image fetched by the API from this URL
    Url(String),
}

impl ImageSource {
    /// Renders the source as the URL the API expects.
    ///
    /// # Examples
    ///
    /// ```
    /// use grok_core::ImageSource;
    ///
    /// let inline = ImageSource::Inline {
    ///     mime_subtype: "png".to_string(),
    ///     data: "iVBORw0KGgo=".to_string(),
    /// };
    /// assert_eq!(inline.to_url(), "data:image/png;base64,iVBORw0KGgo=");
    /// ```
    pub fn to_url(&self) -> String {
        match self {
            ImageSource::Inline { mime_subtype, data } => {
                format!("data:image/{};base64,{}", mime_subtype, data)
            }
            ImageSource::Url(url) => url.clone(),
        }
    }
}

/// One unit of a message's content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ContentPart {
    /// Text span
    Text {
        /// The text
        text: String,
    },
    /// Image reference with a detail hint
    Image {
        /// Image origin
        source: ImageSource,
        /// Detail hint
        #[serde(default)]
        detail: DetailLevel,
    },
}

impl ContentPart {
    /// Creates a text part.
    pub fn text(text: impl Into<String>) -> Self {
        ContentPart::Text { text: text.into() }
    }

    /// Creates an image part.
    pub fn image(source: ImageSource, detail: DetailLevel) -> Self {
        ContentPart::Image { source, detail }
    }
}

/// Content of a message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_more::From)]
#[serde(untagged)]
pub enum MessageContent {
    /// Plain text
    Text(String),
    /// Ordered, non-empty list of parts
    Parts(Vec<ContentPart>),
}

impl MessageContent {
    /// Builds part-list content, refusing an empty list.
    #[track_caller]
    pub fn from_parts(parts: Vec<ContentPart>) -> GrokResult<Self> {
        if parts.is_empty() {
            return Err(GrokError::invalid_argument(
                "message content must contain at least one part",
            ));
        }
        Ok(MessageContent::Parts(parts))
    }

    /// Returns the text if this is plain-text content.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            MessageContent::Text(text) => Some(text),
            MessageContent::Parts(_) => None,
        }
    }
}

impl From<&str> for MessageContent {
    fn from(text: &str) -> Self {
        MessageContent::Text(text.to_string())
    }
}
