//! Client for the xAI Grok API.
//!
//! [`GrokClient`] turns typed parameters into API requests, applying the
//! capability rules from [`grok_core`] to decide which optional fields a model
//! may receive, and reshapes responses into small result types. All network
//! traffic goes through the [`XaiTransport`] trait; [`ReqwestTransport`] is
//! the production implementation.

mod client;
mod config;
mod conversions;
mod dto;
mod models;
mod output;
mod params;
mod results;
mod transport;
mod vision;

pub use client::{GrokClient, STORED_RESPONSE_RETENTION_DAYS, stored_until};
pub use config::{DEFAULT_BASE_URL, DEFAULT_STATE_BASE_URL, XaiConfig, XaiConfigBuilder};
pub use dto::{
    ChatCompletionRequest, ChatCompletionRequestBuilder, ReasoningOptions, ResponsesRequest,
    ResponsesRequestBuilder, SearchParameters, SearchParametersBuilder,
    WireContent, WireImageUrl, WireMessage, WirePart,
};
pub use output::{MessagePart, OutputItem, ParsedOutput, SummaryPart, parse_output};
pub use params::{
    ChatParams, DEFAULT_CHAT_MODEL, DEFAULT_IMAGE_MODEL, DEFAULT_MAX_SEARCH_RESULTS,
    DEFAULT_REASONING_MODEL, ChatParamsBuilder, ImageParams, ImageParamsBuilder, ReasoningParams,
    ReasoningParamsBuilder, SearchParams, SearchParamsBuilder, StatefulChatParams,
    StatefulChatParamsBuilder, VisionParams, VisionParamsBuilder,
};
pub use results::{
    DeletedResponse, ImageGeneration, ReasoningReply, SearchReply, StatefulReply, StoredResponse,
};
pub use transport::{ApiBase, HttpMethod, ReqwestTransport, XaiRequest, XaiTransport};
pub use vision::{SUPPORTED_IMAGE_EXTENSIONS, encode_local_image, image_subtype};
