//! API integration tests.
//!
//! The external model service is a wiremock server; each test drives the
//! router directly with `oneshot`.

use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;
use wiremock::matchers::{method, path_regex};
use wiremock::{Mock, MockServer, ResponseTemplate};

use sforge_api::{create_router, ApiConfig, AppState};
use sforge_genai::GenAiConfig;

fn test_router(server: &MockServer) -> Router {
    let state = AppState::new(
        ApiConfig::default(),
        GenAiConfig {
            api_key: "test-key".to_string(),
            model: "gemini-2.5-flash".to_string(),
            base_url: server.uri(),
        },
    );
    create_router(state, None)
}

/// Wrap a contract payload in the model's response envelope.
fn envelope(payload: &Value) -> Value {
    json!({
        "candidates": [{
            "content": {
                "parts": [{ "text": payload.to_string() }]
            }
        }]
    })
}

async fn mount_model_response(server: &MockServer, payload: &Value) {
    Mock::given(method("POST"))
        .and(path_regex(r"/v1beta/models/.*:generateContent"))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(payload)))
        .mount(server)
        .await;
}

async fn post_json(router: Router, uri: &str, body: Value) -> (StatusCode, Value) {
    let response = router
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header("Content-Type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };
    (status, value)
}

async fn get_json(router: Router, uri: &str) -> (StatusCode, Value) {
    let response = router
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap_or(Value::Null))
}

#[tokio::test]
async fn test_health_endpoint() {
    let server = MockServer::start().await;
    let (status, body) = get_json(test_router(&server), "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], json!("healthy"));
}

#[tokio::test]
async fn test_analyze_round_trip() {
    let server = MockServer::start().await;

    let payload = json!({
        "summary": "A cooking tutorial.",
        "viralMoments": [{
            "timestamp": "0:45",
            "duration": "12",
            "description": "knife trick",
            "hookReason": "surprising",
            "viralScore": 9.0
        }],
        "keyQuotes": ["Sharp knives are safe knives."],
        "visualHighlights": [{ "timestamp": "1:02", "description": "slow-motion chop" }],
        "targetAudience": {
            "demographic": "home cooks, 25-40",
            "recommendedDuration": "30s",
            "hashtags": ["#cooking", "#knifeskills"]
        }
    });
    mount_model_response(&server, &payload).await;

    let (status, body) = post_json(
        test_router(&server),
        "/api/analyze",
        json!({ "videoUrl": "https://youtu.be/abc123" }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    // Every field of the mocked response comes back
    assert_eq!(body, payload);
    assert_eq!(body["viralMoments"][0]["viralScore"], json!(9.0));
}

#[tokio::test]
async fn test_script_round_trip() {
    let server = MockServer::start().await;

    let payload = json!({
        "title": "The knife trick pros don't share",
        "description": "A 15-second breakdown of the safest way to dice.",
        "hook": "You've been holding your knife wrong.",
        "script": [{
            "timestamp": "0:00",
            "narration": "Stop. Look at your grip.",
            "textOverlay": "WRONG GRIP?",
            "visualDirection": "zoom in on hands",
            "audioNote": "record scratch"
        }],
        "callToAction": "Follow for part two.",
        "engagementQuestions": ["What's your go-to knife?"],
        "suggestedMusic": "upbeat",
        "estimatedViews": "50K-100K"
    });
    mount_model_response(&server, &payload).await;

    let (status, body) = post_json(
        test_router(&server),
        "/api/script",
        json!({
            "videoUrl": "https://youtu.be/abc123",
            "startTime": "0:45",
            "endTime": "0:57",
            "category": "cooking",
            "duration": "15"
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, payload);
}

#[tokio::test]
async fn test_optimize_round_trip() {
    let server = MockServer::start().await;

    let payload = json!({
        "trendingTopics": ["air fryers"],
        "optimizedTitles": ["The air fryer mistake everyone makes"],
        "thumbnailText": ["STOP DOING THIS"],
        "description": "The one air fryer habit ruining your food.",
        "hashtags": ["#airfryer", "#kitchenhacks"],
        "postingTime": "Weekdays 6pm EST",
        "trendingMusic": ["upbeat kitchen pop"],
        "uniqueAngles": ["test against a convection oven"]
    });
    mount_model_response(&server, &payload).await;

    let (status, body) = post_json(
        test_router(&server),
        "/api/optimize",
        json!({
            "shortDetails": "A 30-second air fryer demo with quick cuts.",
            "category": "cooking"
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, payload);
}

#[tokio::test]
async fn test_series_round_trip() {
    let server = MockServer::start().await;

    let payload = json!({
        "seriesTitle": "Knife Skills Week",
        "shorts": [{
            "episodeNumber": 1,
            "title": "The grip",
            "startTime": "0:30",
            "endTime": "1:00",
            "hook": "Your grip is the problem.",
            "mainPoint": "Pinch grip basics",
            "cliffhanger": "Tomorrow: the cut that ruins onions.",
            "postingDateTime": "Monday 9am"
        }],
        "brandingElements": {
            "colorScheme": "black and steel blue",
            "fontStyle": "bold condensed sans",
            "introStyle": "3-frame logo sting"
        },
        "engagementTactics": ["Pin a poll after each episode"]
    });
    mount_model_response(&server, &payload).await;

    let (status, body) = post_json(
        test_router(&server),
        "/api/series",
        json!({
            "videoUrl": "https://youtu.be/abc123",
            "duration": "25:47"
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, payload);
}

#[tokio::test]
async fn test_competitors_round_trip() {
    let server = MockServer::start().await;

    let payload = json!({
        "contentGaps": ["Nobody covers left-handed technique"],
        "successPatterns": ["Hooks under 2 seconds"],
        "uniqueAngles": ["Film from the cutting board's view"],
        "audienceInsights": ["Comments ask for slower demos"],
        "recommendations": [{
            "category": "editing",
            "suggestion": "Cut dead air between steps",
            "priority": "high"
        }]
    });
    mount_model_response(&server, &payload).await;

    let (status, body) = post_json(
        test_router(&server),
        "/api/competitors",
        json!({
            "competitorUrls": ["https://youtu.be/rival1", "https://youtu.be/rival2"],
            "myVideoUrl": "https://youtu.be/mine"
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, payload);
}

#[tokio::test]
async fn test_repurpose_round_trip() {
    let server = MockServer::start().await;

    let payload = json!({
        "keyTakeaways": ["Starters need a feeding schedule"],
        "videoIdeas": [{
            "title": "Your sourdough starter is starving",
            "format": "Myth Busting",
            "hook": "That jar in your fridge? It's dying.",
            "contentAngle": "The feeding schedule section"
        }]
    });
    mount_model_response(&server, &payload).await;

    let (status, body) = post_json(
        test_router(&server),
        "/api/repurpose",
        json!({ "contentText": "Ten tips for sourdough starters." }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, payload);
}

#[tokio::test]
async fn test_ideas_round_trip() {
    let server = MockServer::start().await;

    let payload = json!({
        "ideas": [{
            "title": "Bees on a balcony: month one",
            "concept": "Time-lapse of a starter hive settling in.",
            "hook": "I put 10,000 bees on my balcony.",
            "viralPotential": 8.0,
            "suitabilityScore": 9.0
        }]
    });
    mount_model_response(&server, &payload).await;

    let (status, body) = post_json(
        test_router(&server),
        "/api/ideas",
        json!({
            "topic": "urban beekeeping",
            "targetAudience": "apartment gardeners",
            "style": "educational"
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, payload);
}

#[tokio::test]
async fn test_accessibility_round_trip() {
    let server = MockServer::start().await;

    let payload = json!({
        "captions": [{
            "startTime": "0:00",
            "endTime": "0:03",
            "text": "[upbeat music] Welcome back to the hive."
        }],
        "targetLanguages": ["Spanish", "Portuguese"],
        "accessibilityScore": 72.0,
        "recommendations": ["Increase caption contrast"]
    });
    mount_model_response(&server, &payload).await;

    let (status, body) = post_json(
        test_router(&server),
        "/api/accessibility",
        json!({ "shortContent": "A quick tour of my balcony beehive setup." }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, payload);
}

#[tokio::test]
async fn test_ideas_validation_short_circuit() {
    let server = MockServer::start().await;

    // Any upstream call would be a bug
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let (status, body) = post_json(
        test_router(&server),
        "/api/ideas",
        json!({
            "topic": "a",
            "targetAudience": "b",
            "style": "Comedy"
        }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], json!("validation"));
    let fields = body["fields"].as_object().unwrap();
    assert_eq!(fields.len(), 2);
    assert!(fields.contains_key("topic"));
    assert!(fields.contains_key("targetAudience"));
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_invalid_url_is_an_inline_field_error() {
    let server = MockServer::start().await;

    let (status, body) = post_json(
        test_router(&server),
        "/api/analyze",
        json!({ "videoUrl": "not a url" }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["fields"].as_object().unwrap().contains_key("videoUrl"));
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_missing_required_field_never_reaches_model() {
    let server = MockServer::start().await;

    let (status, _) = post_json(test_router(&server), "/api/script", json!({})).await;

    assert!(status.is_client_error());
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_repurpose_precondition_failure() {
    let server = MockServer::start().await;

    let (status, body) = post_json(test_router(&server), "/api/repurpose", json!({})).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], json!("precondition"));
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_contract_mismatch_shows_generic_notice() {
    let server = MockServer::start().await;

    // Response is missing the required `summary` field
    let payload = json!({
        "viralMoments": [],
        "keyQuotes": [],
        "visualHighlights": [],
        "targetAudience": {
            "demographic": "home cooks",
            "recommendedDuration": "30s",
            "hashtags": []
        }
    });
    mount_model_response(&server, &payload).await;

    let (status, body) = post_json(
        test_router(&server),
        "/api/analyze",
        json!({ "videoUrl": "https://youtu.be/abc123" }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert_eq!(body["code"], json!("generation_failed"));
    assert_eq!(
        body["detail"],
        json!("The AI request failed. Please try again.")
    );
    // No partial result leaks through
    assert!(body.get("viralMoments").is_none());
}

#[tokio::test]
async fn test_transport_failure_shows_generic_notice() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&server)
        .await;

    let (status, body) = post_json(
        test_router(&server),
        "/api/analyze",
        json!({ "videoUrl": "https://youtu.be/abc123" }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert_eq!(body["code"], json!("generation_failed"));
    // The upstream cause is never exposed
    assert!(!body["detail"].as_str().unwrap().contains("boom"));
}

#[tokio::test]
async fn test_script_prefill_hand_off() {
    let server = MockServer::start().await;

    let (status, body) = get_json(
        test_router(&server),
        "/api/script/prefill?videoUrl=https%3A%2F%2Fyoutu.be%2Fabc123&startTime=0%3A45&duration=12&category=cooking",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["videoUrl"], json!("https://youtu.be/abc123"));
    assert_eq!(body["startTime"], json!("0:45"));
    assert_eq!(body["endTime"], json!("0:57"));
    assert_eq!(body["category"], json!("cooking"));
    assert_eq!(body["duration"], json!("12"));
}

#[tokio::test]
async fn test_security_headers_present() {
    let server = MockServer::start().await;

    let response = test_router(&server)
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    let headers = response.headers();
    assert_eq!(headers.get("X-Content-Type-Options").unwrap(), "nosniff");
    assert_eq!(headers.get("X-Frame-Options").unwrap(), "DENY");
    assert!(headers.get("X-Request-ID").is_some());
}
