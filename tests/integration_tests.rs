//! Integration tests for the welfare assistant
//!
//! These tests drive the HTTP router end to end (without binding a socket
//! where possible), load catalogs and care directories from disk, and run
//! the remote chat client against mocked and real servers.

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use std::io::Write;
use std::time::Duration;
use tempfile::NamedTempFile;
use tower::ServiceExt;
use wiremock::{
    matchers::{body_json, method, path},
    Mock, MockServer, ResponseTemplate,
};

use welfare_assistant::{
    care::CareDirectory,
    catalog::Catalog,
    client::ChatClient,
    i18n::{Language, LanguageStrings},
    matcher::{IntentMatcher, MatcherConfig, Stage},
    retry::RetryConfig,
    server::{create_router, AppState},
};

// ==================== Test Helpers ====================

fn app() -> Router {
    create_router(AppState::new(Catalog::builtin(), IntentMatcher::default()))
}

fn faq_catalog() -> Catalog {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/data/faq_catalog.json");
    Catalog::from_file(path).expect("bundled FAQ catalog loads")
}

async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.expect("router responds");
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body readable");
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

fn post_json(uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn fast_retry() -> RetryConfig {
    RetryConfig::new(3, Duration::from_millis(10))
}

// ==================== Chat API ====================

#[tokio::test]
async fn test_chat_answers_documents_question() {
    let catalog = Catalog::builtin();
    let expected = catalog
        .get(Language::ENGLISH)
        .and_then(|t| t.intent("required_documents"))
        .unwrap()
        .response()
        .to_string();

    let (status, body) = send(
        app(),
        post_json("/api/chat", &json!({"message": "what documents are required?", "language": "en"})),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["response"], expected);
}

#[tokio::test]
async fn test_chat_defaults_to_english() {
    let (status, body) = send(app(), post_json("/api/chat", &json!({"message": "xyzzy quux plugh"}))).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["response"], LanguageStrings::for_language(Language::ENGLISH).fallback);
}

#[tokio::test]
async fn test_chat_unsupported_language_uses_english_fallback() {
    let (_, body) = send(
        app(),
        post_json("/api/chat", &json!({"message": "", "language": "fr"})),
    )
    .await;

    assert_eq!(body["success"], true);
    assert_eq!(body["response"], LanguageStrings::for_language(Language::ENGLISH).fallback);
}

#[tokio::test]
async fn test_chat_sinhala() {
    let (_, body) = send(
        app(),
        post_json("/api/chat", &json!({"message": "", "language": "si"})),
    )
    .await;

    assert_eq!(body["response"], LanguageStrings::for_language(Language::SINHALA).fallback);
}

#[tokio::test]
async fn test_chat_malformed_json() {
    let request = Request::builder()
        .method("POST")
        .uri("/api/chat")
        .header("content-type", "application/json")
        .body(Body::from("{ not json"))
        .unwrap();

    let (status, body) = send(app(), request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn test_chat_missing_message() {
    let (status, body) = send(app(), post_json("/api/chat", &json!({"language": "en"}))).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);
}

#[tokio::test]
async fn test_chat_message_not_a_string() {
    let (status, body) = send(app(), post_json("/api/chat", &json!({"message": 42}))).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);
}

#[tokio::test]
async fn test_chat_wrong_content_type() {
    let request = Request::builder()
        .method("POST")
        .uri("/api/chat")
        .header("content-type", "text/plain")
        .body(Body::from(r#"{"message": "hello"}"#))
        .unwrap();

    let (status, body) = send(app(), request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);
}

#[tokio::test]
async fn test_chat_explain_reports_stage() {
    let (status, body) = send(
        app(),
        post_json("/api/chat/explain", &json!({"message": "How do I apply?"})),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["language"], "en");
    assert_eq!(body["intent"], "how_to_apply");
    assert_eq!(body["stage"], "phrase");
    assert!(body["score"].as_f64().unwrap() > 0.0);
}

#[tokio::test]
async fn test_chat_explain_fallback() {
    let (_, body) = send(
        app(),
        post_json("/api/chat/explain", &json!({"message": "xyzzy quux plugh", "language": "si"})),
    )
    .await;

    assert_eq!(body["language"], "si");
    assert!(body["intent"].is_null());
    assert!(body["stage"].is_null());
}

// ==================== Info Endpoints ====================

#[tokio::test]
async fn test_health() {
    let (status, body) = send(app(), get("/api/health")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["intents"], 41);
    assert_eq!(body["languages"], json!(["en", "si"]));
}

#[tokio::test]
async fn test_languages() {
    let (status, body) = send(app(), get("/api/languages")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["default"], "en");
    assert_eq!(body["languages"][0]["code"], "en");
    assert_eq!(body["languages"][0]["intents"], 31);
    assert_eq!(body["languages"][1]["nativeName"], "සිංහල");
}

#[tokio::test]
async fn test_metrics_count_outcomes() {
    let state = AppState::new(Catalog::builtin(), IntentMatcher::default());
    let router = create_router(state.clone());

    send(router.clone(), post_json("/api/chat", &json!({"message": "hello"}))).await;
    send(router.clone(), post_json("/api/chat", &json!({"message": "xyzzy quux plugh"}))).await;
    send(router.clone(), post_json("/api/chat", &json!({"nope": true}))).await;

    let (status, body) = send(router, get("/api/metrics")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["requests"], 3);
    assert_eq!(body["phrase_matches"], 1);
    assert_eq!(body["fallbacks"], 1);
    assert_eq!(body["rejected"], 1);
    assert_eq!(state.metrics.matched(Stage::Phrase), 1);
}

// ==================== Catalogs ====================

#[tokio::test]
async fn test_custom_catalog_from_file() {
    let mut file = NamedTempFile::new().unwrap();
    write!(
        file,
        r#"{{
            "languages": [
                {{
                    "language": "en",
                    "fallback": "Ask me about opening hours.",
                    "intents": [
                        {{ "name": "hours", "triggers": ["opening hours", "open"], "response": "We are open 8:30 to 16:15." }}
                    ]
                }}
            ]
        }}"#
    )
    .unwrap();

    let catalog = Catalog::from_file(file.path()).unwrap();
    let router = create_router(AppState::new(catalog, IntentMatcher::default()));

    let (_, body) = send(router.clone(), post_json("/api/chat", &json!({"message": "When are you open?"}))).await;
    assert_eq!(body["response"], "We are open 8:30 to 16:15.");

    let (_, body) = send(router, post_json("/api/chat", &json!({"message": "weather?", "language": "si"}))).await;
    assert_eq!(body["response"], "Ask me about opening hours.");
}

#[test]
fn test_faq_catalog_loads() {
    let catalog = faq_catalog();
    assert_eq!(catalog.default_language(), Language::ENGLISH);
    assert_eq!(catalog.intent_count(), 50);
}

#[test]
fn test_faq_catalog_scenarios() {
    let catalog = faq_catalog();
    let matcher = IntentMatcher::default();
    let english = catalog.default_catalog();

    let expectations = [
        ("How do I reset my forgot password?", "forgot_password"),
        ("Can I apply online?", "online_application"),
        ("Is it free?", "platform_free"),
        ("Does it work without wifi?", "internet_required"),
        ("tamil", "language_tamil"),
    ];
    for (question, intent) in expectations {
        let found = matcher.find_match(english, question);
        assert_eq!(found.intent.map(|i| i.name()), Some(intent), "{}", question);
    }

    // misspelling falls through to similarity
    let found = matcher.find_match(english, "delet");
    assert_eq!(found.intent.map(|i| i.name()), Some("delete_account"));
    assert_eq!(found.stage, Some(Stage::Fuzzy));

    assert!(matcher.respond(&catalog, "xyzzy quux plugh", None).starts_with("I'm sorry"));
}

#[test]
fn test_matcher_config_changes_http_answers() {
    let strict = IntentMatcher::new(MatcherConfig {
        fuzzy_floor: 0.99,
        ..MatcherConfig::default()
    });
    let catalog = faq_catalog();
    assert!(strict.find_match(catalog.default_catalog(), "delet").intent.is_none());
}

// ==================== Recommendations ====================

#[tokio::test]
async fn test_care_recommend_from_csv() {
    let mut doctors = NamedTempFile::new().unwrap();
    writeln!(doctors, "Specialist,Diseases_Treated").unwrap();
    writeln!(doctors, "Cardiologist,\"Heart disease, hypertension, chest pain\"").unwrap();
    writeln!(doctors, "Dermatologist,\"Eczema, skin infections\"").unwrap();

    let mut hospitals = NamedTempFile::new().unwrap();
    writeln!(hospitals, "Hospital,District,Type").unwrap();
    writeln!(hospitals, "National Hospital,Colombo,Government").unwrap();
    writeln!(hospitals, "Asiri Central,Colombo,Private").unwrap();

    let care = CareDirectory::load(Some(doctors.path()), Some(hospitals.path())).unwrap();
    let router = create_router(AppState::new(Catalog::builtin(), IntentMatcher::default()).with_care(care));

    let (status, body) = send(
        router,
        post_json(
            "/api/care-recommend",
            &json!({
                "medicalCondition": "Hypertension",
                "symptoms": "chest pain",
                "district": "colombo",
                "prioritizeGovernment": true
            }),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    let recommendations = &body["recommendations"];
    assert_eq!(recommendations["specialists"][0]["specialist"], "Cardiologist");
    assert_eq!(recommendations["specialists"][0]["matchScore"], 3);
    assert_eq!(recommendations["hospitals"][0]["type"], "Government");
    assert_eq!(recommendations["treatments"].as_array().unwrap().len(), 6);
}

fn portal_health_form(monthly_income: &str) -> Value {
    json!({
        "fullName": "Nimal Perera",
        "age": "42",
        "gender": "male",
        "phone": "0771234567",
        "email": "nimal@example.com",
        "district": "colombo",
        "familySize": "4",
        "monthlyIncome": monthly_income,
        "educationLevel": "secondary",
        "employmentStatus": "employed",
        "medicalCondition": "Diabetes",
        "symptoms": "",
        "symptomsDescription": "frequent thirst"
    })
}

fn portal_care_router() -> Router {
    let mut hospitals = NamedTempFile::new().unwrap();
    writeln!(hospitals, "Hospital,District,Type").unwrap();
    writeln!(hospitals, "Asiri Central,Colombo,Private").unwrap();
    writeln!(hospitals, "Nawaloka,Colombo,Private").unwrap();
    writeln!(hospitals, "National Hospital,Colombo,Government").unwrap();

    let care = CareDirectory::load(None, Some(hospitals.path())).unwrap();
    create_router(AppState::new(Catalog::builtin(), IntentMatcher::default()).with_care(care))
}

#[tokio::test]
async fn test_portal_form_low_income_lists_government_first() {
    let (status, body) = send(
        portal_care_router(),
        post_json("/api/recommend", &portal_health_form("below-25000")),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    let recommendations = &body["recommendations"];
    assert_eq!(recommendations["hospitals"][0]["name"], "National Hospital");
    assert_eq!(recommendations["hospitals"][0]["type"], "Government");
    assert_eq!(recommendations["treatments"][0], "Blood sugar monitoring and HbA1c tests");
}

#[tokio::test]
async fn test_portal_form_higher_income_keeps_directory_order() {
    let (status, body) = send(
        portal_care_router(),
        post_json("/api/recommend", &portal_health_form("100000-200000")),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["recommendations"]["hospitals"][0]["name"], "Asiri Central");
    assert_eq!(body["recommendations"]["hospitals"].as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn test_care_recommend_without_directories() {
    let (status, body) = send(app(), post_json("/api/care-recommend", &json!({}))).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body["recommendations"]["specialists"][0]["specialist"],
        "General Practitioner"
    );
    assert_eq!(
        body["recommendations"]["hospitals"][0]["name"],
        "District General Hospital"
    );
}

#[tokio::test]
async fn test_investment_recommend() {
    let (status, body) = send(
        app(),
        post_json(
            "/api/investment-recommend",
            &json!({
                "monthlyIncome": 150000,
                "riskTolerance": "aggressive",
                "investmentDuration": "long",
                "investmentGoal": "retirement"
            }),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let recommendations = &body["recommendations"];
    assert_eq!(recommendations["segment"], "Growth Investor");
    assert_eq!(recommendations["cluster"], 2);
    assert_eq!(recommendations["suggested_monthly_investment"], 52_500);
    assert_eq!(recommendations["investment_options"].as_array().unwrap().len(), 5);
    assert_eq!(recommendations["risk_profile"], "Aggressive");
}

#[tokio::test]
async fn test_investment_rejects_negative_income() {
    let (status, body) = send(
        app(),
        post_json("/api/investment-recommend", &json!({"monthlyIncome": -5})),
    )
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["success"], false);
}

#[tokio::test]
async fn test_investment_accepts_portal_form_strings() {
    let (status, body) = send(
        app(),
        post_json(
            "/api/investment-recommend",
            &json!({
                "age": "35",
                "monthlyIncome": "75000",
                "savingsAmount": "200000",
                "investmentGoal": "retirement",
                "riskTolerance": "moderate",
                "investmentDuration": "long"
            }),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    let recommendations = &body["recommendations"];
    assert_eq!(recommendations["segment"], "Balanced Investor");
    assert_eq!(recommendations["monthly_income"], 75_000.0);
    assert_eq!(recommendations["current_savings"], 200_000.0);
    assert_eq!(recommendations["suggested_monthly_investment"], 18_750);
}

#[tokio::test]
async fn test_investment_rejects_non_numeric_text() {
    let (status, body) = send(
        app(),
        post_json("/api/investment-recommend", &json!({"monthlyIncome": "lots"})),
    )
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], "monthlyIncome must be a number");
}

#[tokio::test]
async fn test_investment_rejects_wrong_types() {
    let (status, body) = send(
        app(),
        post_json("/api/investment-recommend", &json!({"monthlyIncome": true})),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);
}

// ==================== Remote Chat Client ====================

#[tokio::test]
async fn test_client_sends_message() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/chat"))
        .and(body_json(json!({"message": "hello", "language": "si"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"success": true, "response": "ආයුබෝවන්"})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = ChatClient::new(&mock_server.uri()).unwrap();
    let reply = client.send("hello", Some("si")).await.unwrap();

    assert_eq!(reply, "ආයුබෝවන්");
}

#[tokio::test]
async fn test_client_retries_server_errors() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/chat"))
        .respond_with(ResponseTemplate::new(503))
        .up_to_n_times(1)
        .mount(&mock_server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/chat"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"success": true, "response": "Hello!"})))
        .mount(&mock_server)
        .await;

    let client = ChatClient::new(&mock_server.uri()).unwrap().with_retry(fast_retry());
    assert_eq!(client.send("hi", None).await.unwrap(), "Hello!");
}

#[tokio::test]
async fn test_client_does_not_retry_client_errors() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/chat"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({"success": false, "error": "bad"})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = ChatClient::new(&mock_server.uri()).unwrap().with_retry(fast_retry());
    assert!(client.send("hi", None).await.is_err());
}

#[tokio::test]
async fn test_client_reports_unsuccessful_envelope() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/chat"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"success": false, "error": "down for maintenance"})))
        .mount(&mock_server)
        .await;

    let client = ChatClient::new(&mock_server.uri()).unwrap();
    let err = client.send("hi", None).await.unwrap_err();
    assert!(err.to_string().contains("down for maintenance"));
}

#[tokio::test]
async fn test_client_unreachable_server() {
    let client = ChatClient::new("http://127.0.0.1:9")
        .unwrap()
        .with_retry(RetryConfig::none());
    assert!(client.send("hi", None).await.is_err());
}

#[tokio::test]
async fn test_client_against_real_server() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let address = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app()).await.unwrap();
    });

    let client = ChatClient::new(&format!("http://{}", address)).unwrap();
    client.health().await.unwrap();

    let reply = client.send("What documents are required?", Some("en")).await.unwrap();
    let catalog = Catalog::builtin();
    let expected = catalog.default_catalog().intent("required_documents").unwrap().response();
    assert_eq!(reply, expected);
}
