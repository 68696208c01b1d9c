//! Request dispatcher for the xAI API.

use crate::conversions::to_wire_messages;
use crate::dto::{
    ChatCompletionRequest, ChatCompletionResponse, ChoiceMessage, DeleteResponseBody,
    ImageGenerationRequest, ImageGenerationResponse, ModelList, ReasoningOptions,
    ResponsesRequest, SearchParameters, StoredResponseBody,
};
use crate::models::format_model_list;
use crate::output::parse_output;
use crate::params::{
    ChatParams, DEFAULT_MAX_SEARCH_RESULTS, ImageParams, ReasoningParams, SearchParams,
    StatefulChatParams, VisionParams,
};
use crate::results::{
    DeletedResponse, ImageGeneration, ReasoningReply, SearchReply, StatefulReply, StoredResponse,
};
use crate::transport::{ApiBase, ReqwestTransport, XaiRequest, XaiTransport};
use crate::vision::{encode_local_image, image_subtype};
use crate::XaiConfig;
use chrono::{DateTime, NaiveDate, TimeDelta, Utc};
use grok_core::{
    Capability, ContentPart, Conversation, DEFAULT_TIMEOUT, ImageSource, Message, MessageContent,
    REASONING_MODELS, ReasoningEffort, Role, SearchSource, capability_class, default_timeout,
    is_reasoning_model, rejects_reasoning_effort,
};
use grok_error::{GrokError, GrokErrorKind, GrokResult};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Value, json};
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, instrument, warn};

/// Days the API keeps a stored response.
pub const STORED_RESPONSE_RETENTION_DAYS: i64 = 30;

const RESPONSES_PATH: &str = "/v1/responses";

/// Date until which a response stored at `now` is assumed to be kept.
///
/// Computed locally; the API does not report it.
///
/// # Examples
///
/// ```
/// use chrono::{NaiveDate, TimeZone, Utc};
/// use grok_client::stored_until;
///
/// let now = Utc.with_ymd_and_hms(2025, 1, 15, 12, 0, 0).unwrap();
/// assert_eq!(stored_until(now), NaiveDate::from_ymd_opt(2025, 2, 14).unwrap());
/// ```
pub fn stored_until(now: DateTime<Utc>) -> NaiveDate {
    (now + TimeDelta::days(STORED_RESPONSE_RETENTION_DAYS)).date_naive()
}

/// Client for the xAI Grok API.
///
/// Each operation validates its parameters locally, makes exactly one API
/// call through the transport, and maps the response. Invalid parameters
/// fail before anything is sent.
#[derive(Debug, Clone)]
pub struct GrokClient {
    transport: Arc<dyn XaiTransport>,
}

impl GrokClient {
    /// Creates a client that talks to the API over HTTPS.
    pub fn new(config: XaiConfig) -> Self {
        Self::with_transport(Arc::new(ReqwestTransport::new(config)))
    }

    /// Creates a client configured from the environment.
    pub fn from_env() -> GrokResult<Self> {
        Ok(Self::new(XaiConfig::from_env()?))
    }

    /// Creates a client over a custom transport.
    pub fn with_transport(transport: Arc<dyn XaiTransport>) -> Self {
        Self { transport }
    }

    /// Lists available models, one per line.
    #[instrument(skip(self))]
    pub async fn list_models(&self) -> GrokResult<String> {
        let body = self
            .transport
            .send(XaiRequest::get(ApiBase::Stateless, "/models", DEFAULT_TIMEOUT))
            .await?;
        let list: ModelList = decode(body)?;
        debug!(models = list.data.len(), "Listed models");
        Ok(format_model_list(&list))
    }

    /// Basic chat completion.
    ///
    /// Without history retention the request carries only the optional
    /// system prompt and the user prompt, and the conversation is cleared
    /// once the call succeeds. With history retention the stored turns are
    /// replayed (the system prompt is sent only while the conversation is
    /// empty) and the new exchange is appended on success.
    #[instrument(
        skip(self, conversation, params),
        fields(model = %params.model(), history = *params.use_conversation_history())
    )]
    pub async fn chat(
        &self,
        conversation: &mut Conversation,
        params: &ChatParams,
    ) -> GrokResult<String> {
        require_text("prompt", params.prompt())?;
        let model = params.model();
        let reasoning = is_reasoning_model(model);
        let effort = if reasoning {
            validate_effort(model, params.reasoning_effort().as_deref())?
        } else {
            None
        };

        let use_history = *params.use_conversation_history();
        let history: &[Message] = if use_history {
            conversation.messages()
        } else {
            &[]
        };

        let mut messages = Vec::with_capacity(history.len() + 2);
        if let Some(system) = params.system_prompt() {
            if history.is_empty() {
                messages.push(Message::system(system));
            }
        }
        messages.extend(history.iter().cloned());
        messages.push(Message::user(params.prompt()));

        let mut builder = ChatCompletionRequest::builder();
        builder
            .model(model)
            .messages(to_wire_messages(&messages))
            .temperature(*params.temperature())
            .max_tokens(*params.max_tokens())
            .top_p(*params.top_p());
        if reasoning {
            builder.reasoning_effort(effort);
        } else {
            builder
                .presence_penalty(*params.presence_penalty())
                .frequency_penalty(*params.frequency_penalty())
                .stop(params.stop().clone());
        }
        let request = builder
            .build()
            .map_err(|e| GrokError::new(GrokErrorKind::Builder(e.to_string())))?;

        debug!(message_count = messages.len(), reasoning, "Sending chat");

        let response = self.post_chat(model, &request).await?;
        let reply = first_message(&response)?.content.clone().unwrap_or_default();

        if use_history {
            conversation.record_turn(params.prompt().as_str(), reply.as_str());
        } else {
            conversation.clear();
        }

        Ok(reply)
    }

    /// Chat about local and remote images.
    ///
    /// Every local path's extension is checked before any file is read. The
    /// prompt becomes a trailing text part unless it is blank.
    #[instrument(
        skip(self, params),
        fields(
            model = %params.model(),
            paths = params.image_paths().len(),
            urls = params.image_urls().len()
        )
    )]
    pub async fn chat_with_vision(&self, params: &VisionParams) -> GrokResult<String> {
        let model = params.model();
        let subtypes = params
            .image_paths()
            .iter()
            .map(|path| image_subtype(Path::new(path)))
            .collect::<GrokResult<Vec<_>>>()?;
        debug!(?subtypes, "Image paths accepted");

        let prompt = params.prompt().trim();
        if prompt.is_empty() && params.image_paths().is_empty() && params.image_urls().is_empty() {
            return Err(GrokError::invalid_argument(
                "Vision chat needs a prompt or at least one image",
            ));
        }

        if !capability_class(model).contains(Capability::Vision) {
            warn!(model = %model, capability = %Capability::Vision, "Model lacks capability");
        }

        let detail = *params.detail();
        let mut parts = Vec::new();
        for path in params.image_paths() {
            let source = encode_local_image(Path::new(path)).await?;
            parts.push(ContentPart::image(source, detail));
        }
        for url in params.image_urls() {
            parts.push(ContentPart::image(ImageSource::Url(url.clone()), detail));
        }
        if !prompt.is_empty() {
            parts.push(ContentPart::text(params.prompt().as_str()));
        }

        let content = MessageContent::from_parts(parts)?;
        let messages = vec![Message::new(Role::User, content)];

        let request = ChatCompletionRequest::builder()
            .model(model)
            .messages(to_wire_messages(&messages))
            .build()
            .map_err(|e| GrokError::new(GrokErrorKind::Builder(e.to_string())))?;

        let response = self.post_chat(model, &request).await?;
        Ok(first_message(&response)?.content.clone().unwrap_or_default())
    }

    /// Generates images from a prompt.
    #[instrument(skip(self, params), fields(model = %params.model(), n = *params.n()))]
    pub async fn generate_image(&self, params: &ImageParams) -> GrokResult<ImageGeneration> {
        require_text("prompt", params.prompt())?;
        let model = params.model();
        if !capability_class(model).contains(Capability::ImageGeneration) {
            warn!(model = %model, capability = %Capability::ImageGeneration, "Model lacks capability");
        }

        let request = ImageGenerationRequest {
            model,
            prompt: params.prompt(),
            n: *params.n(),
            response_format: params.response_format(),
        };
        let body = self
            .transport
            .send(XaiRequest::post(
                ApiBase::Stateless,
                "/images/generations",
                encode(&request)?,
                default_timeout(model),
            ))
            .await?;
        let response: ImageGenerationResponse = decode(body)?;

        let revised_prompt = response
            .data
            .first()
            .and_then(|image| image.get("revised_prompt"))
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string();

        debug!(images = response.data.len(), "Generated images");
        Ok(ImageGeneration {
            images: response.data,
            revised_prompt,
        })
    }

    /// Chat with a reasoning model, returning its reasoning trace too.
    #[instrument(skip(self, params), fields(model = %params.model()))]
    pub async fn chat_with_reasoning(&self, params: &ReasoningParams) -> GrokResult<ReasoningReply> {
        require_text("prompt", params.prompt())?;
        let model = params.model();
        if !REASONING_MODELS.contains(&model.as_str()) {
            return Err(GrokError::invalid_argument(format!(
                "Model {} isn't a reasoning model. Use one of: {}",
                model,
                REASONING_MODELS.join(", ")
            )));
        }
        let effort = validate_effort(model, params.reasoning_effort().as_deref())?;

        let mut messages = Vec::with_capacity(2);
        if let Some(system) = params.system_prompt() {
            messages.push(Message::system(system));
        }
        messages.push(Message::user(params.prompt()));

        let request = ChatCompletionRequest::builder()
            .model(model)
            .messages(to_wire_messages(&messages))
            .temperature(*params.temperature())
            .max_tokens(*params.max_tokens())
            .top_p(*params.top_p())
            .reasoning_effort(effort)
            .build()
            .map_err(|e| GrokError::new(GrokErrorKind::Builder(e.to_string())))?;

        let response = self.post_chat(model, &request).await?;
        let message = first_message(&response)?;

        Ok(ReasoningReply {
            content: message.content.clone().unwrap_or_default(),
            reasoning_content: message.reasoning_content.clone().unwrap_or_default(),
            usage: usage_or_empty(&response.usage),
        })
    }

    /// Chat grounded in live web, news, X and RSS results.
    #[instrument(skip(self, params), fields(model = %params.model(), mode = %params.mode()))]
    pub async fn live_search(&self, params: &SearchParams) -> GrokResult<SearchReply> {
        require_text("prompt", params.prompt())?;
        let model = params.model();

        let mut messages = Vec::with_capacity(2);
        if let Some(system) = params.system_prompt() {
            messages.push(Message::system(system));
        }
        messages.push(Message::user(params.prompt()));

        let sources = search_sources(
            params.sources().as_deref(),
            params.country().as_deref(),
            params.rss_links(),
        )?;
        let max_results = *params.max_search_results();

        let search_parameters = SearchParameters::builder()
            .mode(params.mode())
            .return_citations(*params.return_citations())
            .from_date(params.from_date().clone())
            .to_date(params.to_date().clone())
            .max_search_results((max_results != DEFAULT_MAX_SEARCH_RESULTS).then_some(max_results))
            .sources(sources)
            .build()
            .map_err(|e| GrokError::new(GrokErrorKind::Builder(e.to_string())))?;

        let request = ChatCompletionRequest::builder()
            .model(model)
            .messages(to_wire_messages(&messages))
            .search_parameters(search_parameters)
            .build()
            .map_err(|e| GrokError::new(GrokErrorKind::Builder(e.to_string())))?;

        let response = self.post_chat(model, &request).await?;
        let message = first_message(&response)?;

        let citations = if *params.return_citations() {
            message
                .citations
                .clone()
                .or_else(|| response.citations.clone())
        } else {
            None
        };
        let num_sources_used = response
            .usage
            .as_ref()
            .and_then(|usage| usage.get("num_sources_used"))
            .cloned();

        Ok(SearchReply {
            content: message.content.clone().unwrap_or_default(),
            usage: usage_or_empty(&response.usage),
            citations,
            num_sources_used,
        })
    }

    /// One turn of a conversation stored server-side.
    ///
    /// The system prompt is only sent when starting a new thread.
    #[instrument(
        skip(self, params),
        fields(model = %params.model(), continued = params.response_id().is_some())
    )]
    pub async fn stateful_chat(&self, params: &StatefulChatParams) -> GrokResult<StatefulReply> {
        require_text("prompt", params.prompt())?;
        let model = params.model();
        let previous = params
            .response_id()
            .as_deref()
            .filter(|id| !id.trim().is_empty());

        let mut input = Vec::with_capacity(2);
        if let (Some(system), None) = (params.system_prompt(), previous) {
            input.push(Message::system(system));
        }
        input.push(Message::user(params.prompt()));

        let reasoning = (*params.include_reasoning()).then(|| ReasoningOptions {
            include: vec!["encrypted_content".to_string()],
        });

        let request = ResponsesRequest::builder()
            .model(model)
            .input(to_wire_messages(&input))
            .store(true)
            .previous_response_id(previous.map(str::to_string))
            .temperature(*params.temperature())
            .max_output_tokens(*params.max_tokens())
            .reasoning(reasoning)
            .build()
            .map_err(|e| GrokError::new(GrokErrorKind::Builder(e.to_string())))?;

        let body = self
            .transport
            .send(XaiRequest::post(
                ApiBase::Stateful,
                RESPONSES_PATH,
                encode(&request)?,
                default_timeout(model),
            ))
            .await?;
        let stored: StoredResponseBody = decode(body)?;
        let parsed = parse_output(&stored.output);

        debug!(response_id = ?stored.id, status = ?stored.status, "Stored response created");

        Ok(StatefulReply {
            content: parsed.content,
            response_id: stored.id,
            status: stored.status,
            model: stored.model,
            usage: usage_or_empty(&stored.usage),
            stored_until: stored_until(Utc::now()).format("%Y-%m-%d").to_string(),
            continued_from: previous.map(str::to_string),
            reasoning: parsed.reasoning.filter(|r| !r.is_empty()),
        })
    }

    /// Fetches a stored response by id.
    #[instrument(skip(self))]
    pub async fn retrieve_stateful_response(&self, response_id: &str) -> GrokResult<StoredResponse> {
        require_text("response_id", response_id)?;
        let body = self
            .transport
            .send(XaiRequest::get(
                ApiBase::Stateful,
                format!("{}/{}", RESPONSES_PATH, response_id),
                DEFAULT_TIMEOUT,
            ))
            .await?;
        let stored: StoredResponseBody = decode(body)?;
        let parsed = parse_output(&stored.output);

        Ok(StoredResponse {
            response_id: stored.id,
            model: stored.model,
            created_at: stored
                .created_at
                .and_then(|ts| DateTime::from_timestamp(ts, 0))
                .map(|dt| dt.to_rfc3339()),
            status: stored.status,
            content: parsed.content,
            reasoning: parsed.reasoning,
            usage: usage_or_empty(&stored.usage),
            previous_response_id: stored.previous_response_id,
            store: stored.store.unwrap_or(false),
        })
    }

    /// Deletes a stored response by id.
    #[instrument(skip(self))]
    pub async fn delete_stateful_response(&self, response_id: &str) -> GrokResult<DeletedResponse> {
        require_text("response_id", response_id)?;
        let body = self
            .transport
            .send(XaiRequest::delete(
                ApiBase::Stateful,
                format!("{}/{}", RESPONSES_PATH, response_id),
                DEFAULT_TIMEOUT,
            ))
            .await?;
        let deleted: DeleteResponseBody = decode(body)?;

        Ok(DeletedResponse {
            response_id: deleted.id,
            deleted: deleted.deleted,
            message: format!("Response {} deleted from xAI servers", response_id),
        })
    }

    async fn post_chat(
        &self,
        model: &str,
        request: &ChatCompletionRequest,
    ) -> GrokResult<ChatCompletionResponse> {
        let body = self
            .transport
            .send(XaiRequest::post(
                ApiBase::Stateless,
                "/chat/completions",
                encode(request)?,
                default_timeout(model),
            ))
            .await?;
        decode(body)
    }
}

/// Checks `reasoning_effort` for a reasoning-capable model.
#[track_caller]
fn validate_effort(model: &str, effort: Option<&str>) -> GrokResult<Option<ReasoningEffort>> {
    let Some(effort) = effort else {
        return Ok(None);
    };
    if rejects_reasoning_effort(model) {
        return Err(GrokError::invalid_argument(format!(
            "Model {} does not accept reasoning_effort",
            model
        )));
    }
    ReasoningEffort::parse(effort).map(Some)
}

/// Picks the `sources` field for a live search.
///
/// Explicit sources win unchanged; otherwise defaults are synthesized from
/// the country and RSS links, or the field is left off.
fn search_sources(
    explicit: Option<&[Value]>,
    country: Option<&str>,
    rss_links: &[String],
) -> GrokResult<Option<Vec<Value>>> {
    if let Some(sources) = explicit.filter(|s| !s.is_empty()) {
        return Ok(Some(sources.to_vec()));
    }
    SearchSource::defaults_for(country, rss_links)
        .map(|sources| sources.iter().map(encode).collect::<GrokResult<Vec<_>>>())
        .transpose()
}

#[track_caller]
fn require_text(name: &str, value: &str) -> GrokResult<()> {
    if value.trim().is_empty() {
        return Err(GrokError::invalid_argument(format!("'{}' must not be empty", name)));
    }
    Ok(())
}

fn first_message(response: &ChatCompletionResponse) -> GrokResult<&ChoiceMessage> {
    response
        .choices
        .first()
        .map(|choice| &choice.message)
        .ok_or_else(|| {
            GrokError::new(GrokErrorKind::ResponseParsing(
                "No choices in response".to_string(),
            ))
        })
}

fn usage_or_empty(usage: &Option<Value>) -> Value {
    usage.clone().unwrap_or_else(|| json!({}))
}

fn encode<T: Serialize>(value: &T) -> GrokResult<Value> {
    serde_json::to_value(value).map_err(|e| {
        GrokError::new(GrokErrorKind::Builder(format!(
            "Failed to serialize request: {}",
            e
        )))
    })
}

fn decode<T: DeserializeOwned>(body: Value) -> GrokResult<T> {
    serde_json::from_value(body).map_err(|e| {
        GrokError::new(GrokErrorKind::ResponseParsing(format!(
            "Unexpected response shape: {}",
            e
        )))
    })
}
