//! Reasoning effort levels.

use grok_error::{GrokError, GrokResult};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// How hard a reasoning model should think before answering.
///
/// # Examples
///
/// ```
/// use grok_core::ReasoningEffort;
///
/// assert_eq!(ReasoningEffort::parse("high").unwrap(), ReasoningEffort::High);
/// assert!(ReasoningEffort::parse("medium").is_err());
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ReasoningEffort {
    Low,
    High,
}

impl ReasoningEffort {
    /// Parses a caller-supplied effort, rejecting anything but `low` or `high`.
    #[track_caller]
    pub fn parse(value: &str) -> GrokResult<Self> {
        Self::from_str(value).map_err(|_| {
            GrokError::invalid_argument(format!(
                "reasoning_effort must be 'low' or 'high', got '{}'",
                value
            ))
        })
    }
}
