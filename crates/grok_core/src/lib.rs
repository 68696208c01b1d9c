//! Core data types for the Grok MCP adapter.
//!
//! This crate holds the message model shared by every tool, the per-session
//! conversation object, search source descriptors, and the capability
//! classifier that decides which optional request fields a model accepts.

mod capability;
mod content;
mod conversation;
mod message;
mod reasoning;
mod role;
mod search;

pub use capability::{
    Capability, CapabilitySet, DEFAULT_TIMEOUT, IMAGE_GENERATION_MODELS, REASONING_MODELS,
    REASONING_TIMEOUT, VISION_MODELS, capability_class, default_timeout, is_reasoning_model,
    rejects_reasoning_effort,
};
pub use content::{ContentPart, DetailLevel, ImageSource, MessageContent};
pub use conversation::Conversation;
pub use message::{Message, MessageBuilder};
pub use reasoning::ReasoningEffort;
pub use role::Role;
pub use search::SearchSource;
