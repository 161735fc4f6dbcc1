use std::{
    collections::HashMap,
    io::Cursor,
    sync::{
        Arc, Mutex,
        atomic::{AtomicBool, AtomicUsize, Ordering},
    },
};

use axum::{
    Json, Router,
    extract::{Query, State},
    http::{HeaderMap, StatusCode},
    routing::{get, post},
};
use axum_test::TestServer;
use clap::Parser;
use image::{ImageFormat, Rgb, RgbImage};
use letaicook_api::{
    application::http::server::http_server::{router, state},
    args::Args,
};
use serde_json::{Value, json};
use test_context::AsyncTestContext;
use tokio::{net::TcpListener, task::JoinHandle};

pub const INGREDIENTS: &str = "eggs, milk";
pub const DISH: &str = "Banana Pancakes";
pub const RECIPE: &str = "Mash the banana, whisk it with the eggs and milk, then fry.";

/// Knobs and recordings shared with the fake Gemini and Bing endpoints.
#[derive(Default)]
pub struct ProviderScript {
    pub failing_dish_calls: AtomicUsize,
    pub no_image: AtomicBool,
    pub dish_prompts: Mutex<Vec<String>>,
    pub image_queries: Mutex<Vec<String>>,
}

pub struct ApiContext {
    pub server: TestServer,
    pub script: Arc<ProviderScript>,
    providers: JoinHandle<()>,
}

fn gemini_text(text: &str) -> Value {
    json!({ "candidates": [{ "content": { "parts": [{ "text": text }] } }] })
}

async fn generate_content(
    State(script): State<Arc<ProviderScript>>,
    Json(body): Json<Value>,
) -> (StatusCode, Json<Value>) {
    let parts = body["contents"][0]["parts"]
        .as_array()
        .cloned()
        .unwrap_or_default();
    let prompt = parts
        .first()
        .and_then(|part| part["text"].as_str())
        .unwrap_or_default()
        .to_string();

    if parts.iter().any(|part| part.get("inline_data").is_some()) {
        return (StatusCode::OK, Json(gemini_text(INGREDIENTS)));
    }

    if prompt.starts_with("Suggest a dish") {
        script.dish_prompts.lock().unwrap().push(prompt);

        let pending = script.failing_dish_calls.load(Ordering::SeqCst);
        if pending > 0 {
            script.failing_dish_calls.store(pending - 1, Ordering::SeqCst);
            return (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(json!({ "error": { "message": "model overloaded" } })),
            );
        }

        return (StatusCode::OK, Json(gemini_text(DISH)));
    }

    (StatusCode::OK, Json(gemini_text(RECIPE)))
}

async fn image_search(
    State(script): State<Arc<ProviderScript>>,
    headers: HeaderMap,
    Query(query): Query<HashMap<String, String>>,
) -> (StatusCode, Json<Value>) {
    if headers.get("Ocp-Apim-Subscription-Key").is_none() {
        return (StatusCode::UNAUTHORIZED, Json(json!({})));
    }

    let q = query.get("q").cloned().unwrap_or_default();
    script.image_queries.lock().unwrap().push(q.clone());

    if script.no_image.load(Ordering::SeqCst) {
        return (StatusCode::OK, Json(json!({ "value": [] })));
    }

    let url = format!("https://images.test/{}.jpg", q.replace(' ', "-"));
    (StatusCode::OK, Json(json!({ "value": [{ "contentUrl": url }] })))
}

fn providers(script: Arc<ProviderScript>) -> Router {
    Router::new()
        .route("/models/{call}", post(generate_content))
        .route("/images/search", get(image_search))
        .with_state(script)
}

impl AsyncTestContext for ApiContext {
    async fn setup() -> Self {
        let script = Arc::new(ProviderScript::default());

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let app = providers(script.clone());
        let providers = tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        let gemini_base_url = format!("http://{addr}");
        let bing_endpoint = format!("http://{addr}/images/search");
        let args = Args::try_parse_from([
            "letaicook",
            "--gemini-api-key",
            "test-gemini-key",
            "--gemini-model",
            "gemini-test",
            "--gemini-base-url",
            gemini_base_url.as_str(),
            "--bing-api-key",
            "test-bing-key",
            "--bing-endpoint",
            bing_endpoint.as_str(),
            "--max-image-bytes",
            "1048576",
            "--metrics-disabled",
        ])
        .unwrap();

        let app_state = state(Arc::new(args)).await.unwrap();
        let server = TestServer::new(router(app_state).unwrap()).unwrap();

        Self {
            server,
            script,
            providers,
        }
    }

    async fn teardown(self) {
        self.providers.abort();
    }
}

pub fn fridge_png() -> Vec<u8> {
    let image = RgbImage::from_pixel(16, 12, Rgb([240, 240, 235]));
    let mut bytes = Cursor::new(Vec::new());
    image.write_to(&mut bytes, ImageFormat::Png).unwrap();
    bytes.into_inner()
}

pub fn breakfast(addendum: Option<&str>) -> Value {
    json!({
        "diet": "Vegan",
        "meal_type": "Breakfast",
        "calories": 400,
        "dietary_restriction": "No preference",
        "hungry": true,
        "additions": "banana",
        "ingredient_addendum": addendum
    })
}
