mod test_utils;

use grok_client::{
    ApiBase, ChatParams, HttpMethod, ImageParams, ReasoningParams, SearchParams,
    StatefulChatParams, VisionParams, stored_until,
};
use grok_core::{Conversation, DetailLevel, REASONING_TIMEOUT, DEFAULT_TIMEOUT};
use grok_error::GrokErrorKind;
use serde_json::json;
use std::time::Duration;
use test_utils::{MockReply, RecordingTransport, chat_reply, client_with};

#[tokio::test]
async fn test_list_models_formats_entries() {
    let transport = RecordingTransport::always(json!({
        "data": [
            {"id": "grok-4", "created": 1752019200, "owned_by": "xai"},
            {"id": "grok-3-mini", "owned_by": "xai"}
        ]
    }));
    let client = client_with(&transport);

    let listing = client.list_models().await.expect("listing succeeds");

    assert_eq!(
        listing,
        "Available Grok Models:\n\
         - grok-4 (Owner: xai, Created: 2025-07-09)\n\
         - grok-3-mini (Owner: xai, Created: )"
    );
    let requests = transport.requests();
    let request = &requests[0];
    assert_eq!(*request.method(), HttpMethod::Get);
    assert_eq!(*request.base(), ApiBase::Stateless);
    assert_eq!(request.path(), "/models");
}

#[tokio::test]
async fn test_chat_without_history_ignores_prior_turns() {
    let transport = RecordingTransport::always(chat_reply("hello"));
    let client = client_with(&transport);
    let mut conversation = Conversation::new();

    let retained = ChatParams::builder()
        .prompt("first")
        .use_conversation_history(true)
        .build()
        .unwrap();
    client.chat(&mut conversation, &retained).await.unwrap();
    assert_eq!(conversation.len(), 2);

    let params = ChatParams::builder()
        .prompt("second")
        .system_prompt("be brief")
        .build()
        .unwrap();
    let reply = client.chat(&mut conversation, &params).await.unwrap();

    assert_eq!(reply, "hello");
    let body = transport.last_body();
    assert_eq!(
        body["messages"],
        json!([
            {"role": "system", "content": "be brief"},
            {"role": "user", "content": "second"}
        ])
    );

    let params = ChatParams::builder().prompt("third").build().unwrap();
    client.chat(&mut conversation, &params).await.unwrap();
    assert_eq!(
        transport.last_body()["messages"],
        json!([{"role": "user", "content": "third"}])
    );
}

#[tokio::test]
async fn test_chat_with_history_replays_turns_in_order() {
    let transport = RecordingTransport::with_replies([
        MockReply::Json(chat_reply("answer one")),
        MockReply::Json(chat_reply("answer two")),
    ]);
    let client = client_with(&transport);
    let mut conversation = Conversation::new();

    for prompt in ["question one", "question two"] {
        let params = ChatParams::builder()
            .prompt(prompt)
            .system_prompt("you are terse")
            .use_conversation_history(true)
            .build()
            .unwrap();
        client.chat(&mut conversation, &params).await.unwrap();
    }

    let requests = transport.requests();
    assert_eq!(
        requests[0].body().as_ref().unwrap()["messages"],
        json!([
            {"role": "system", "content": "you are terse"},
            {"role": "user", "content": "question one"}
        ])
    );
    assert_eq!(
        requests[1].body().as_ref().unwrap()["messages"],
        json!([
            {"role": "user", "content": "question one"},
            {"role": "assistant", "content": "answer one"},
            {"role": "user", "content": "question two"}
        ])
    );
    assert_eq!(conversation.len(), 4);
}

#[tokio::test]
async fn test_chat_failure_leaves_conversation_untouched() {
    let transport = RecordingTransport::with_replies([
        MockReply::Json(chat_reply("kept")),
        MockReply::Status(500, "boom".to_string()),
    ]);
    let client = client_with(&transport);
    let mut conversation = Conversation::new();

    let params = ChatParams::builder()
        .prompt("remember me")
        .use_conversation_history(true)
        .build()
        .unwrap();
    client.chat(&mut conversation, &params).await.unwrap();

    let err = client
        .chat(&mut conversation, &params)
        .await
        .expect_err("upstream failure propagates");
    assert_eq!(
        err.kind,
        GrokErrorKind::Upstream {
            status: 500,
            message: "boom".to_string()
        }
    );
    assert_eq!(conversation.len(), 2);
}

#[tokio::test]
async fn test_chat_gates_fields_by_model() {
    let transport = RecordingTransport::always(chat_reply("ok"));
    let client = client_with(&transport);
    let mut conversation = Conversation::new();

    let params = ChatParams::builder()
        .prompt("hi")
        .model("grok-3-mini")
        .reasoning_effort("high")
        .presence_penalty(0.5)
        .stop(vec!["END".to_string()])
        .build()
        .unwrap();
    client.chat(&mut conversation, &params).await.unwrap();
    let body = transport.last_body();
    assert_eq!(body["reasoning_effort"], "high");
    assert!(body.get("presence_penalty").is_none());
    assert!(body.get("stop").is_none());
    assert_eq!(*transport.requests()[0].timeout(), REASONING_TIMEOUT);

    let params = ChatParams::builder()
        .prompt("hi")
        .reasoning_effort("high")
        .presence_penalty(0.5)
        .build()
        .unwrap();
    client.chat(&mut conversation, &params).await.unwrap();
    let body = transport.last_body();
    assert!(body.get("reasoning_effort").is_none());
    assert_eq!(body["presence_penalty"], 0.5);
    assert_eq!(*transport.requests()[1].timeout(), DEFAULT_TIMEOUT);
}

#[tokio::test]
async fn test_bad_reasoning_effort_makes_no_call() {
    let transport = RecordingTransport::always(chat_reply("unused"));
    let client = client_with(&transport);
    let mut conversation = Conversation::new();

    let params = ChatParams::builder()
        .prompt("hi")
        .model("grok-3-mini")
        .reasoning_effort("medium")
        .build()
        .unwrap();
    let err = client.chat(&mut conversation, &params).await.unwrap_err();
    assert!(matches!(err.kind, GrokErrorKind::InvalidArgument(_)));

    let params = ChatParams::builder()
        .prompt("hi")
        .model("grok-4")
        .reasoning_effort("low")
        .build()
        .unwrap();
    let err = client.chat(&mut conversation, &params).await.unwrap_err();
    assert!(matches!(err.kind, GrokErrorKind::InvalidArgument(_)));

    let params = ReasoningParams::builder()
        .prompt("hi")
        .reasoning_effort("extreme")
        .build()
        .unwrap();
    let err = client.chat_with_reasoning(&params).await.unwrap_err();
    assert!(matches!(err.kind, GrokErrorKind::InvalidArgument(_)));

    assert_eq!(transport.call_count(), 0);
}

#[tokio::test]
async fn test_reasoning_rejects_unlisted_model() {
    let transport = RecordingTransport::always(chat_reply("unused"));
    let client = client_with(&transport);

    let params = ReasoningParams::builder()
        .prompt("prove it")
        .model("grok-4-fast")
        .build()
        .unwrap();
    let err = client.chat_with_reasoning(&params).await.unwrap_err();

    assert!(matches!(err.kind, GrokErrorKind::InvalidArgument(_)));
    assert_eq!(transport.call_count(), 0);
}

#[tokio::test]
async fn test_reasoning_returns_trace_and_usage() {
    let transport = RecordingTransport::always(json!({
        "choices": [{"message": {
            "content": "42",
            "reasoning_content": "six times seven"
        }}],
        "usage": {"reasoning_tokens": 12}
    }));
    let client = client_with(&transport);

    let params = ReasoningParams::builder()
        .prompt("what is six times seven")
        .reasoning_effort("low")
        .build()
        .unwrap();
    let reply = client.chat_with_reasoning(&params).await.unwrap();

    assert_eq!(reply.content, "42");
    assert_eq!(reply.reasoning_content, "six times seven");
    assert_eq!(reply.usage, json!({"reasoning_tokens": 12}));
    let requests = transport.requests();
    let request = &requests[0];
    assert_eq!(request.body().as_ref().unwrap()["reasoning_effort"], "low");
    assert_eq!(*request.timeout(), Duration::from_secs(600));
}

#[tokio::test]
async fn test_vision_rejects_bmp_before_reading() {
    let transport = RecordingTransport::always(chat_reply("unused"));
    let client = client_with(&transport);

    let params = VisionParams::builder()
        .prompt("what is this")
        .image_paths(vec!["/definitely/not/here.bmp".to_string()])
        .build()
        .unwrap();
    let err = client.chat_with_vision(&params).await.unwrap_err();

    match err.kind {
        GrokErrorKind::InvalidArgument(message) => assert!(message.contains("bmp")),
        other => panic!("unexpected error: {other}"),
    }
    assert_eq!(transport.call_count(), 0);
}

#[tokio::test]
async fn test_vision_inlines_files_and_keeps_urls() {
    let path = std::env::temp_dir().join(format!("grok-vision-{}.png", std::process::id()));
    tokio::fs::write(&path, b"\x89PNG").await.unwrap();

    let transport = RecordingTransport::always(chat_reply("a tiny png"));
    let client = client_with(&transport);
    let params = VisionParams::builder()
        .prompt("describe")
        .image_paths(vec![path.display().to_string()])
        .image_urls(vec!["https://example.com/cat.jpg".to_string()])
        .detail(DetailLevel::High)
        .model("grok-4")
        .build()
        .unwrap();
    let reply = client.chat_with_vision(&params).await.unwrap();
    tokio::fs::remove_file(&path).await.ok();

    assert_eq!(reply, "a tiny png");
    assert_eq!(
        transport.last_body()["messages"],
        json!([{
            "role": "user",
            "content": [
                {"type": "image_url", "image_url": {"url": "data:image/png;base64,iVBORw==", "detail": "high"}},
                {"type": "image_url", "image_url": {"url": "https://example.com/cat.jpg", "detail": "high"}},
                {"type": "text", "text": "describe"}
            ]
        }])
    );
}

#[tokio::test]
async fn test_generate_image_returns_revised_prompt() {
    let transport = RecordingTransport::with_replies([
        MockReply::Json(json!({
            "data": [
                {"url": "https://img/1.png", "revised_prompt": "a fluffy cat"},
                {"url": "https://img/2.png"}
            ]
        })),
        MockReply::Json(json!({"data": [{"b64_json": "AAAA"}]})),
    ]);
    let client = client_with(&transport);

    let params = ImageParams::builder().prompt("a cat").n(2u32).build().unwrap();
    let generated = client.generate_image(&params).await.unwrap();
    assert_eq!(generated.images.len(), 2);
    assert_eq!(generated.revised_prompt, "a fluffy cat");
    assert_eq!(
        transport.last_body(),
        json!({"model": "grok-2-image-1212", "prompt": "a cat", "n": 2, "response_format": "url"})
    );
    assert_eq!(transport.requests()[0].path(), "/images/generations");

    let params = ImageParams::builder()
        .prompt("a dog")
        .response_format("b64_json")
        .build()
        .unwrap();
    let generated = client.generate_image(&params).await.unwrap();
    assert_eq!(generated.revised_prompt, "");
}

#[tokio::test]
async fn test_search_synthesizes_country_sources() {
    let transport = RecordingTransport::always(chat_reply("news"));
    let client = client_with(&transport);

    let params = SearchParams::builder()
        .prompt("headlines")
        .country("US")
        .build()
        .unwrap();
    client.live_search(&params).await.unwrap();

    let search = &transport.last_body()["search_parameters"];
    assert_eq!(
        search["sources"],
        json!([
            {"type": "web", "country": "US"},
            {"type": "news", "country": "US"},
            {"type": "x"}
        ])
    );
    assert_eq!(search["mode"], "on");
    assert_eq!(search["return_citations"], true);
    assert!(search.get("max_search_results").is_none());
}

#[tokio::test]
async fn test_search_rss_and_explicit_sources() {
    let transport = RecordingTransport::always(chat_reply("feeds"));
    let client = client_with(&transport);

    let params = SearchParams::builder()
        .prompt("feeds")
        .rss_links(vec!["https://example.com/rss".to_string()])
        .max_search_results(5u32)
        .build()
        .unwrap();
    client.live_search(&params).await.unwrap();
    let search = &transport.last_body()["search_parameters"];
    assert_eq!(
        search["sources"],
        json!([
            {"type": "web"},
            {"type": "news"},
            {"type": "x"},
            {"type": "rss", "links": ["https://example.com/rss"]}
        ])
    );
    assert_eq!(search["max_search_results"], 5);

    let explicit = vec![json!({"type": "x", "x_handles": ["xai"]})];
    let params = SearchParams::builder()
        .prompt("posts")
        .country("US")
        .sources(explicit.clone())
        .build()
        .unwrap();
    client.live_search(&params).await.unwrap();
    assert_eq!(
        transport.last_body()["search_parameters"]["sources"],
        json!(explicit)
    );

    let params = SearchParams::builder().prompt("plain").build().unwrap();
    client.live_search(&params).await.unwrap();
    assert!(
        transport.last_body()["search_parameters"]
            .get("sources")
            .is_none()
    );
}

#[tokio::test]
async fn test_search_citations_follow_flag() {
    let body = json!({
        "choices": [{"message": {"content": "cited"}}],
        "citations": ["https://a.example"],
        "usage": {"num_sources_used": 3}
    });
    let transport = RecordingTransport::always(body);
    let client = client_with(&transport);

    let params = SearchParams::builder().prompt("q").build().unwrap();
    let reply = client.live_search(&params).await.unwrap();
    assert_eq!(reply.citations, Some(json!(["https://a.example"])));
    assert_eq!(reply.num_sources_used, Some(json!(3)));

    let params = SearchParams::builder()
        .prompt("q")
        .return_citations(false)
        .build()
        .unwrap();
    let reply = client.live_search(&params).await.unwrap();
    assert_eq!(reply.citations, None);
}

fn stored_response(id: &str, previous: Option<&str>) -> serde_json::Value {
    json!({
        "id": id,
        "model": "grok-4-1-fast-non-reasoning",
        "status": "completed",
        "created_at": 1735689600,
        "previous_response_id": previous,
        "store": true,
        "usage": {"total_tokens": 10},
        "output": [
            {"type": "reasoning", "summary": [{"type": "summary_text", "text": "thought"}]},
            {"type": "message", "role": "assistant", "content": [
                {"type": "output_text", "text": "stored answer"}
            ]}
        ]
    })
}

#[tokio::test]
async fn test_stateful_chat_starts_and_continues_thread() {
    let transport = RecordingTransport::with_replies([
        MockReply::Json(stored_response("resp_1", None)),
        MockReply::Json(stored_response("resp_2", Some("resp_1"))),
    ]);
    let client = client_with(&transport);

    let before = chrono::Utc::now();
    let params = StatefulChatParams::builder()
        .prompt("start")
        .system_prompt("be kind")
        .include_reasoning(true)
        .build()
        .unwrap();
    let reply = client.stateful_chat(&params).await.unwrap();
    let after = chrono::Utc::now();

    assert_eq!(reply.content, "stored answer");
    assert_eq!(reply.reasoning.as_deref(), Some("thought"));
    assert_eq!(reply.response_id.as_deref(), Some("resp_1"));
    assert_eq!(reply.continued_from, None);
    let expected: Vec<String> = [before, after]
        .iter()
        .map(|t| stored_until(*t).format("%Y-%m-%d").to_string())
        .collect();
    assert!(expected.contains(&reply.stored_until));

    let requests = transport.requests();
    let first = &requests[0];
    assert_eq!(*first.base(), ApiBase::Stateful);
    assert_eq!(first.path(), "/v1/responses");
    let body = first.body().clone().unwrap();
    assert_eq!(body["store"], true);
    assert_eq!(body["reasoning"], json!({"include": ["encrypted_content"]}));
    assert_eq!(
        body["input"],
        json!([
            {"role": "system", "content": "be kind"},
            {"role": "user", "content": "start"}
        ])
    );

    let params = StatefulChatParams::builder()
        .prompt("go on")
        .response_id("resp_1")
        .system_prompt("ignored")
        .build()
        .unwrap();
    let reply = client.stateful_chat(&params).await.unwrap();
    assert_eq!(reply.continued_from.as_deref(), Some("resp_1"));

    let body = transport.last_body();
    assert_eq!(body["previous_response_id"], "resp_1");
    assert_eq!(body["input"], json!([{"role": "user", "content": "go on"}]));
    assert!(body.get("reasoning").is_none());
}

#[tokio::test]
async fn test_retrieve_and_delete_stored_response() {
    let transport = RecordingTransport::with_replies([
        MockReply::Json(stored_response("resp_9", Some("resp_8"))),
        MockReply::Json(json!({"id": "resp_9", "object": "response", "deleted": true})),
    ]);
    let client = client_with(&transport);

    let stored = client.retrieve_stateful_response("resp_9").await.unwrap();
    assert_eq!(stored.content, "stored answer");
    assert_eq!(stored.created_at.as_deref(), Some("2025-01-01T00:00:00+00:00"));
    assert_eq!(stored.previous_response_id.as_deref(), Some("resp_8"));
    assert!(stored.store);

    let deleted = client.delete_stateful_response("resp_9").await.unwrap();
    assert!(deleted.deleted);
    assert_eq!(deleted.message, "Response resp_9 deleted from xAI servers");

    let requests = transport.requests();
    assert_eq!(*requests[0].method(), HttpMethod::Get);
    assert_eq!(requests[0].path(), "/v1/responses/resp_9");
    assert_eq!(*requests[1].method(), HttpMethod::Delete);
    assert_eq!(requests[1].path(), "/v1/responses/resp_9");
}

#[tokio::test]
async fn test_upstream_status_propagates_unchanged() {
    let transport = RecordingTransport::with_replies([MockReply::Status(
        404,
        "{\"error\":\"not found\"}".to_string(),
    )]);
    let client = client_with(&transport);

    let err = client.retrieve_stateful_response("missing").await.unwrap_err();
    assert_eq!(
        err.kind,
        GrokErrorKind::Upstream {
            status: 404,
            message: "{\"error\":\"not found\"}".to_string()
        }
    );
    assert_eq!(transport.call_count(), 1);
}

#[tokio::test]
#[cfg_attr(not(feature = "api"), ignore)]
async fn test_live_list_models() {
    dotenvy::dotenv().ok();
    let client = grok_client::GrokClient::from_env().expect("client from env");
    let listing = client.list_models().await.expect("API call succeeded");
    assert!(listing.starts_with("Available Grok Models:"));
    println!("{listing}");
}

#[tokio::test]
async fn test_vision_without_prompt_or_images_makes_no_call() {
    let transport = RecordingTransport::always(chat_reply("unused"));
    let client = client_with(&transport);

    let params = VisionParams::builder().prompt("").build().unwrap();
    let err = client.chat_with_vision(&params).await.unwrap_err();

    assert!(matches!(err.kind, GrokErrorKind::InvalidArgument(_)));
    assert_eq!(transport.call_count(), 0);
}

#[tokio::test]
async fn test_vision_blank_prompt_sends_images_only() {
    let transport = RecordingTransport::always(chat_reply("a cat"));
    let client = client_with(&transport);

    let params = VisionParams::builder()
        .prompt(" ")
        .image_urls(vec!["https://example.com/cat.jpg".to_string()])
        .build()
        .unwrap();
    client.chat_with_vision(&params).await.unwrap();

    assert_eq!(
        transport.last_body()["messages"][0]["content"],
        json!([
            {"type": "image_url", "image_url": {"url": "https://example.com/cat.jpg", "detail": "auto"}}
        ])
    );
}

#[tokio::test]
async fn test_search_blank_country_sends_no_sources() {
    let transport = RecordingTransport::always(chat_reply("news"));
    let client = client_with(&transport);

    let params = SearchParams::builder()
        .prompt("headlines")
        .country("")
        .build()
        .unwrap();
    client.live_search(&params).await.unwrap();

    assert!(
        transport.last_body()["search_parameters"]
            .get("sources")
            .is_none()
    );
}

#[tokio::test]
async fn test_retrieve_tolerates_untyped_output_items() {
    let transport = RecordingTransport::always(json!({
        "id": "resp_3",
        "output": [
            {"id": "mystery"},
            {"type": "message", "role": "assistant", "content": [
                {"type": "output_text", "text": "still here"}
            ]}
        ]
    }));
    let client = client_with(&transport);

    let stored = client.retrieve_stateful_response("resp_3").await.unwrap();
    assert_eq!(stored.content, "still here");
    assert_eq!(stored.reasoning, None);
}
