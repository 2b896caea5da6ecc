#![allow(dead_code)]
use http_client::{Error, HttpClient, Request, Response};
use http_types::StatusCode;
use jukejam_client::{ClientConfig, JukeJamClientImpl};
use std::sync::{Arc, Mutex};

/// One request as seen by [`StubHttpClient`].
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedRequest {
    pub method: String,
    pub path: String,
    pub query: Option<String>,
    pub body: String,
    pub accept: Option<String>,
    pub content_type: Option<String>,
    pub user_agent: Option<String>,
}

impl RecordedRequest {
    pub fn json_body(&self) -> serde_json::Value {
        serde_json::from_str(&self.body).expect("request body is not JSON")
    }
}

#[derive(Debug, Clone)]
struct Route {
    method: String,
    path: String,
    status: u16,
    body: String,
}

/// In-memory backend: answers requests from canned routes and records what
/// it was sent. Unrouted requests fail like a refused connection.
#[derive(Debug, Clone, Default)]
pub struct StubHttpClient {
    routes: Arc<Mutex<Vec<Route>>>,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl StubHttpClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn route(self, method: &str, path: &str, status: u16, body: &str) -> Self {
        self.routes.lock().unwrap().push(Route {
            method: method.to_string(),
            path: path.to_string(),
            status,
            body: body.to_string(),
        });
        self
    }

    pub fn get(self, path: &str, body: &str) -> Self {
        self.route("GET", path, 200, body)
    }

    pub fn post(self, path: &str, body: &str) -> Self {
        self.route("POST", path, 200, body)
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn last_request(&self) -> RecordedRequest {
        self.requests()
            .pop()
            .expect("no request reached the stub")
    }
}

#[async_trait::async_trait]
impl HttpClient for StubHttpClient {
    async fn send(&self, mut req: Request) -> Result<Response, Error> {
        let header = |name: &str| {
            req.header(name)
                .and_then(|values| values.get(0))
                .map(|value| value.as_str().to_string())
        };
        let mut recorded = RecordedRequest {
            method: req.method().to_string(),
            path: req.url().path().to_string(),
            query: req.url().query().map(str::to_string),
            body: String::new(),
            accept: header("Accept"),
            content_type: header("Content-Type"),
            user_agent: header("User-Agent"),
        };
        recorded.body = req.body_string().await?;
        self.requests.lock().unwrap().push(recorded.clone());

        let route = self
            .routes
            .lock()
            .unwrap()
            .iter()
            .find(|r| r.method == recorded.method && r.path == recorded.path)
            .cloned();

        match route {
            Some(route) => {
                let status = StatusCode::try_from(route.status)?;
                let mut response = Response::new(status);
                response.set_body(route.body);
                Ok(response)
            }
            None => Err(Error::from_str(
                StatusCode::BadGateway,
                format!("connection refused: {} {}", recorded.method, recorded.path),
            )),
        }
    }
}

/// Client wired to `stub` at the default base URL.
pub fn client_with(stub: &StubHttpClient) -> JukeJamClientImpl {
    JukeJamClientImpl::new(Box::new(stub.clone()), ClientConfig::new())
}

pub const SONG_JSON: &str = r#"{
    "track_id": "3n3Ppam7vgaVa1iaRUc9Lp",
    "title": "Mr. Brightside",
    "artist_name": "The Killers",
    "album_name": "Hot Fuss",
    "genre": "rock",
    "duration_ms": 222973,
    "popularity": 87,
    "mood_bucket": "hype",
    "energy_label": "energetic",
    "mood_label": "happy",
    "tempo_label": "fast",
    "danceability": 0.352,
    "energy": 0.911,
    "valence": 0.236,
    "score": 0.91
}"#;
