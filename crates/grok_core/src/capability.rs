//! Model capability lookup.
//!
//! Capabilities decide which optional request fields the dispatcher may
//! attach for a model. Lookup is a fixed membership table; identifiers the
//! table does not know have no capabilities, so capability-gated fields are
//! simply left off rather than rejected.

use std::time::Duration;

/// Models that accept reasoning parameters and return reasoning content.
pub const REASONING_MODELS: &[&str] = &[
    "grok-4",
    "grok-3-mini",
    "grok-3-mini-fast",
    "grok-4-1-fast-reasoning",
];

/// Models that accept image content parts.
pub const VISION_MODELS: &[&str] = &["grok-4-0709", "grok-4", "grok-4-fast"];

/// Models served by the image generation endpoint.
pub const IMAGE_GENERATION_MODELS: &[&str] = &["grok-2-image-1212"];

/// Timeout for models that are not reasoning-capable.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(120);

/// Timeout for reasoning-capable models.
pub const REASONING_TIMEOUT: Duration = Duration::from_secs(600);

/// The single reasoning model that rejects `reasoning_effort`.
const EFFORT_REJECTING_MODEL: &str = "grok-4";

/// A capability class a model can belong to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, strum::Display)]
#[strum(serialize_all = "snake_case")]
pub enum Capability {
    Reasoning,
    Vision,
    ImageGeneration,
}

/// The set of capabilities a model has.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct CapabilitySet {
    reasoning: bool,
    vision: bool,
    image_generation: bool,
}

impl CapabilitySet {
    /// Returns true if the set contains `capability`.
    pub fn contains(&self, capability: Capability) -> bool {
        match capability {
            Capability::Reasoning => self.reasoning,
            Capability::Vision => self.vision,
            Capability::ImageGeneration => self.image_generation,
        }
    }

    /// Returns true if the model has no known capabilities.
    pub fn is_empty(&self) -> bool {
        !(self.reasoning || self.vision || self.image_generation)
    }

    /// Lists the capabilities in the set.
    pub fn to_vec(&self) -> Vec<Capability> {
        [
            Capability::Reasoning,
            Capability::Vision,
            Capability::ImageGeneration,
        ]
        .into_iter()
        .filter(|c| self.contains(*c))
        .collect()
    }
}

/// Looks up the capability classes of a model.
///
/// # Examples
///
/// ```
/// use grok_core::{Capability, capability_class};
///
/// let caps = capability_class("grok-4");
/// assert!(caps.contains(Capability::Reasoning));
/// assert!(caps.contains(Capability::Vision));
/// assert!(capability_class("some-future-model").is_empty());
/// ```
pub fn capability_class(model: &str) -> CapabilitySet {
    CapabilitySet {
        reasoning: REASONING_MODELS.contains(&model),
        vision: VISION_MODELS.contains(&model),
        image_generation: IMAGE_GENERATION_MODELS.contains(&model),
    }
}

/// Returns true if the model is reasoning-capable.
pub fn is_reasoning_model(model: &str) -> bool {
    capability_class(model).contains(Capability::Reasoning)
}

/// Returns true for the reasoning model that refuses `reasoning_effort`.
pub fn rejects_reasoning_effort(model: &str) -> bool {
    model == EFFORT_REJECTING_MODEL
}

/// Request timeout for a model: reasoning models get the long one.
pub fn default_timeout(model: &str) -> Duration {
    if is_reasoning_model(model) {
        REASONING_TIMEOUT
    } else {
        DEFAULT_TIMEOUT
    }
}
