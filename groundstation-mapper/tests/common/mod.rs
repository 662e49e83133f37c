//! Local fake services for integration tests.
//!
//! Each fake is an axum router bound to an ephemeral port on localhost.

#![allow(dead_code)]

use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::extract::{Path, Query, State};
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{Value, json};

pub const TOKEN: &str = "test-token";

/// Serve a router on an ephemeral port and return its base URL.
pub async fn serve(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{addr}")
}

/// A base URL nothing is listening on.
pub async fn closed_url() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}")
}

/// Directory payload for `(id, name, latitude, longitude)` tuples.
pub fn stations_body(stations: &[(&str, &str, f64, f64)]) -> String {
    let stations: Vec<Value> = stations
        .iter()
        .map(|(id, name, lat, lng)| {
            json!({
                "Id": id,
                "Name": name,
                "Location": {"Latitude": lat, "Longitude": lng},
                "Agency": "NASA",
            })
        })
        .collect();
    json!({ "GroundStation": stations }).to_string()
}

/// Fake station directory answering with a fixed status and body.
#[derive(Clone)]
pub struct DirectoryFake {
    pub status: StatusCode,
    pub body: String,
    pub user_agents: Arc<Mutex<Vec<String>>>,
}

impl DirectoryFake {
    pub fn new(status: StatusCode, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
            user_agents: Arc::default(),
        }
    }

    pub fn router(&self) -> Router {
        Router::new()
            .route("/groundStations", get(directory_handler))
            .with_state(self.clone())
    }
}

async fn directory_handler(State(fake): State<DirectoryFake>, headers: HeaderMap) -> Response {
    let agent = headers
        .get(header::USER_AGENT)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();
    fake.user_agents.lock().unwrap().push(agent);
    (fake.status, fake.body.clone()).into_response()
}

/// Geocoder reply for one `latlng` value.
#[derive(Clone)]
pub enum GeoReply {
    Country(&'static str),
    Delayed(Duration, &'static str),
    Status(StatusCode),
}

/// Geocoder response body naming a country in its last component.
pub fn country_body(code: &str) -> String {
    json!({
        "results": [{
            "address_components": [
                {"long_name": "Somewhere", "short_name": "Somewhere", "types": ["locality"]},
                {"long_name": format!("Country {code}"), "short_name": code, "types": ["country", "political"]}
            ]
        }],
        "status": "OK"
    })
    .to_string()
}

/// Fake geocoder keyed by the raw `latlng` query value.
#[derive(Clone, Default)]
pub struct GeocodeFake {
    pub replies: Arc<HashMap<String, GeoReply>>,
    pub queries: Arc<Mutex<Vec<HashMap<String, String>>>>,
}

impl GeocodeFake {
    pub fn new(replies: &[(&str, GeoReply)]) -> Self {
        Self {
            replies: Arc::new(
                replies
                    .iter()
                    .map(|(k, v)| (k.to_string(), v.clone()))
                    .collect(),
            ),
            queries: Arc::default(),
        }
    }

    pub fn router(&self) -> Router {
        Router::new()
            .route("/geocode/json", get(geocode_handler))
            .with_state(self.clone())
    }
}

async fn geocode_handler(
    State(fake): State<GeocodeFake>,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    fake.queries.lock().unwrap().push(params.clone());
    let key = params.get("latlng").cloned().unwrap_or_default();

    match fake.replies.get(&key).cloned() {
        Some(GeoReply::Country(code)) => country_body(code).into_response(),
        Some(GeoReply::Delayed(delay, code)) => {
            tokio::time::sleep(delay).await;
            country_body(code).into_response()
        }
        Some(GeoReply::Status(status)) => (status, "error").into_response(),
        None => r#"{"results": [], "status": "ZERO_RESULTS"}"#.into_response(),
    }
}

/// Fake map service recording created maps and features.
#[derive(Clone, Default)]
pub struct MapsFake {
    pub fail_create: bool,
    pub reject_titles: Arc<HashSet<String>>,
    pub maps: Arc<Mutex<Vec<Value>>>,
    pub features: Arc<Mutex<Vec<(String, Value)>>>,
}

impl MapsFake {
    pub fn rejecting(titles: &[&str]) -> Self {
        Self {
            reject_titles: Arc::new(titles.iter().map(|t| t.to_string()).collect()),
            ..Self::default()
        }
    }

    pub fn router(&self) -> Router {
        Router::new()
            .route("/maps", post(create_map))
            .route("/maps/:id/features", post(create_feature))
            .with_state(self.clone())
    }

    pub fn feature_titles(&self) -> Vec<String> {
        self.features
            .lock()
            .unwrap()
            .iter()
            .map(|(_, body)| body["title"].as_str().unwrap_or_default().to_string())
            .collect()
    }
}

fn authorized(headers: &HeaderMap) -> bool {
    headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v == format!("Bearer {TOKEN}"))
}

async fn create_map(
    State(fake): State<MapsFake>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Response {
    if !authorized(&headers) {
        return StatusCode::UNAUTHORIZED.into_response();
    }
    if fake.fail_create {
        return (StatusCode::BAD_REQUEST, "map quota exceeded").into_response();
    }

    let mut maps = fake.maps.lock().unwrap();
    maps.push(body);
    Json(json!({ "id": format!("m{}", maps.len()) })).into_response()
}

async fn create_feature(
    State(fake): State<MapsFake>,
    Path(map_id): Path<String>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Response {
    if !authorized(&headers) {
        return StatusCode::UNAUTHORIZED.into_response();
    }

    let title = body["title"].as_str().unwrap_or_default();
    if fake.reject_titles.contains(title) {
        return (StatusCode::CONFLICT, "rejected").into_response();
    }

    let mut features = fake.features.lock().unwrap();
    features.push((map_id, body));
    Json(json!({ "id": format!("f{}", features.len()) })).into_response()
}
