use std::{sync::Arc, net::SocketAddr};

use axum::{Router, extract::State, response::{IntoResponse, Response}, body::StreamBody, routing::get, http::StatusCode, Json};
use serde_json::Value;
use tokio::{sync::RwLock, task::JoinHandle};
use tokio_util::io::ReaderStream;

/// What the mock upstream answers with.
pub struct AppState {
    pub status: StatusCode,
    pub members: Option<Value>,
    pub clubs: Option<Value>,
    pub invalid_body: bool,
    pub failing_route: Option<&'static str>,
    pub calls: usize,
}

pub struct ExternalServer {
    addr: Option<SocketAddr>,
    handle: Option<JoinHandle<()>>,
    pub state: Arc<RwLock<AppState>>,
}

impl Drop for ExternalServer {
    fn drop(&mut self) {
        if let Some(handle) = &self.handle {
            handle.abort();
        }
    }
}

impl ExternalServer {
    pub fn new() -> ExternalServer {
        let state = AppState { status: StatusCode::OK, members: None, clubs: None, invalid_body: false, failing_route: None, calls: 0 };
        ExternalServer { addr: None, handle: None, state: Arc::new(RwLock::new(state)) }
    }

    pub async fn start(&mut self) {
        let app = Router::new()
            .route("/members/stats", get(ExternalServer::get_members))
            .route("/clubs/search", get(ExternalServer::get_clubs))
            .with_state(self.state.clone());

        let server = axum::Server::bind(&SocketAddr::from(([127, 0, 0, 1], 0)))
            .serve(app.into_make_service());
        self.addr = Some(server.local_addr());
        self.handle = Some(tokio::spawn(async move {
            server.await.expect("mock upstream to run");
        }));
    }

    pub fn get_url(&self) -> String {
        format!("http://{}", self.addr.expect("server to be started"))
    }

    pub async fn set_status(&self, status: StatusCode) {
        self.state.write().await.status = status;
    }

    pub async fn set_members(&self, members: Value) {
        self.state.write().await.members = Some(members);
    }

    pub async fn set_clubs(&self, clubs: Value) {
        self.state.write().await.clubs = Some(clubs);
    }

    /// Answer 200 with a body that isn't json.
    pub async fn set_invalid_body(&self) {
        self.state.write().await.invalid_body = true;
    }

    /// Only `route` ("members" or "clubs") answers with a 503.
    pub async fn fail_route(&self, route: &'static str) {
        self.state.write().await.failing_route = Some(route);
    }

    pub async fn calls(&self) -> usize {
        self.state.read().await.calls
    }

    async fn get_members(State(state): State<Arc<RwLock<AppState>>>) -> Response {
        ExternalServer::respond(state, "members", |e| e.members.clone(), "./tests/fixtures/members.json").await
    }

    async fn get_clubs(State(state): State<Arc<RwLock<AppState>>>) -> Response {
        ExternalServer::respond(state, "clubs", |e| e.clubs.clone(), "./tests/fixtures/clubs.json").await
    }

    async fn respond<F>(state: Arc<RwLock<AppState>>, route: &str, get_override: F, fixture: &str) -> Response
    where
        F: Fn(&AppState) -> Option<Value>,
    {
        let mut state = state.write().await;
        state.calls += 1;
        if state.status != StatusCode::OK {
            return (state.status, "upstream unavailable").into_response();
        }
        if state.failing_route == Some(route) {
            return (StatusCode::SERVICE_UNAVAILABLE, "upstream unavailable").into_response();
        }
        if state.invalid_body {
            return (StatusCode::OK, "<html>maintenance</html>").into_response();
        }
        match get_override(&*state) {
            Some(value) => Json(value).into_response(),
            None => ExternalServer::get_file_from(fixture).await.into_response(),
        }
    }

    async fn get_file_from(path: &str) -> impl IntoResponse {
        let file = match tokio::fs::File::open(path).await {
            Ok(file) => file,
            Err(err) => return Err((StatusCode::NOT_FOUND, format!("File not found: {}", err))),
        };
        let stream = ReaderStream::new(file);
        let body = StreamBody::new(stream);
        Ok(([(axum::http::header::CONTENT_TYPE, "application/json")], body))
    }
}
