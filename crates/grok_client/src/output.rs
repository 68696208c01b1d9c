//! Decoding of the heterogeneous `output` array of stored responses.
//!
//! The array mixes assistant messages, reasoning items and item types this
//! adapter does not use. Only the first assistant message and the first
//! reasoning item are read; later items of the same kind are ignored.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// One item of a stored response's `output` array.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum OutputItem {
    /// A chat message
    Message {
        /// Author role
        #[serde(default)]
        role: Option<String>,
        /// Content parts
        #[serde(default)]
        content: Vec<MessagePart>,
    },
    /// Reasoning trace
    Reasoning {
        /// Summary parts
        #[serde(default)]
        summary: Vec<SummaryPart>,
    },
    /// Any other item type (tool calls, search calls, ...)
    #[serde(other)]
    Other,
}

/// A content part inside a message item.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum MessagePart {
    /// Generated text
    OutputText {
        /// The text
        #[serde(default)]
        text: String,
    },
    /// Refusals, annotations and future part types
    #[serde(other)]
    Other,
}

/// A part of a reasoning item's summary.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SummaryPart {
    /// Summary text
    SummaryText {
        /// The text
        #[serde(default)]
        text: String,
    },
    /// Future part types
    #[serde(other)]
    Other,
}

/// Answer and reasoning summary extracted from an output array.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedOutput {
    /// First text part of the first assistant message, or empty
    pub content: String,
    /// First summary text of the first reasoning item
    pub reasoning: Option<String>,
}

/// Decodes an `output` array item by item.
///
/// An item that fails to decode (no `type`, unexpected field shapes) becomes
/// [`OutputItem::Other`] instead of failing the whole response.
pub(crate) fn lenient_items<'de, D>(deserializer: D) -> Result<Vec<OutputItem>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<Vec<Value>>::deserialize(deserializer)?.unwrap_or_default();
    Ok(raw
        .into_iter()
        .map(|item| serde_json::from_value(item).unwrap_or(OutputItem::Other))
        .collect())
}

/// Extracts the answer and reasoning summary.
///
/// First match wins: the first assistant message item supplies the content
/// from its first `output_text` part, and the first reasoning item supplies
/// the summary from its first `summary_text` part.
pub fn parse_output(items: &[OutputItem]) -> ParsedOutput {
    let content = items
        .iter()
        .find_map(|item| match item {
            OutputItem::Message { role, content } if role.as_deref() == Some("assistant") => {
                Some(content)
            }
            _ => None,
        })
        .and_then(|parts| {
            parts.iter().find_map(|part| match part {
                MessagePart::OutputText { text } => Some(text.clone()),
                MessagePart::Other => None,
            })
        })
        .unwrap_or_default();

    let reasoning = items
        .iter()
        .find_map(|item| match item {
            OutputItem::Reasoning { summary } => Some(summary),
            _ => None,
        })
        .and_then(|parts| {
            parts.iter().find_map(|part| match part {
                SummaryPart::SummaryText { text } => Some(text.clone()),
                SummaryPart::Other => None,
            })
        });

    ParsedOutput { content, reasoning }
}
