//! In-process fake timer service for integration tests
#![allow(dead_code)]

use std::{
    net::SocketAddr,
    sync::{Arc, Mutex, MutexGuard},
    time::Duration,
};
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde_json::json;
use tokio::{net::TcpListener, task::JoinHandle};

use pomodoro_client::{Session, TimerClient};

/// How `GET /timer/elapsed` misbehaves
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryFault {
    None,
    ServerError,
    NotJson,
    WrongShape,
}

#[derive(Debug)]
struct FakeTimer {
    elapsed: String,
    running: bool,
    query_fault: QueryFault,
    command_fault: bool,
    queries: usize,
    commands: Vec<String>,
}

type Shared = Arc<Mutex<FakeTimer>>;

pub struct FakeService {
    pub addr: SocketAddr,
    state: Shared,
    server: JoinHandle<()>,
}

impl FakeService {
    pub async fn spawn() -> Self {
        let state: Shared = Arc::new(Mutex::new(FakeTimer {
            elapsed: "00:00:00".to_string(),
            running: false,
            query_fault: QueryFault::None,
            command_fault: false,
            queries: 0,
            commands: Vec::new(),
        }));

        let app = Router::new()
            .route("/", get(root_handler))
            .route("/timer/elapsed", get(elapsed_handler))
            .route("/timer/start", post(start_handler))
            .route("/timer/pause", post(pause_handler))
            .route("/timer/reset", post(reset_handler))
            .with_state(Arc::clone(&state));

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let server = tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self { addr, state, server }
    }

    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    pub fn client(&self) -> TimerClient {
        TimerClient::new(&self.base_url(), Some(Duration::from_secs(2))).unwrap()
    }

    pub fn session(&self, interval: Duration) -> Session {
        Session::new(self.client(), interval)
    }

    /// Overwrite the authoritative timer
    pub fn set(&self, elapsed: &str, running: bool) {
        let mut timer = self.state.lock().unwrap();
        timer.elapsed = elapsed.to_string();
        timer.running = running;
    }

    pub fn fail_queries(&self, fault: QueryFault) {
        self.state.lock().unwrap().query_fault = fault;
    }

    pub fn fail_commands(&self, fail: bool) {
        self.state.lock().unwrap().command_fault = fail;
    }

    pub fn query_count(&self) -> usize {
        self.state.lock().unwrap().queries
    }

    pub fn commands(&self) -> Vec<String> {
        self.state.lock().unwrap().commands.clone()
    }
}

impl Drop for FakeService {
    fn drop(&mut self) {
        self.server.abort();
    }
}

/// Base URL on which nothing is listening
pub fn unreachable_base_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}", addr)
}

async fn root_handler() -> Json<serde_json::Value> {
    Json(json!({ "message": "Pomodoro Timer API" }))
}

async fn elapsed_handler(State(state): State<Shared>) -> Response {
    let mut timer = state.lock().unwrap();
    timer.queries += 1;

    match timer.query_fault {
        QueryFault::None => Json(json!({
            "is_running": timer.running,
            "elapsed_seconds": 0.0,
            "elapsed_formatted": timer.elapsed,
        }))
        .into_response(),
        QueryFault::ServerError => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
        QueryFault::NotJson => (StatusCode::OK, "<html>oops</html>").into_response(),
        QueryFault::WrongShape => Json(json!({ "elapsed": 5 })).into_response(),
    }
}

fn record<'a>(state: &'a Shared, name: &str) -> Result<MutexGuard<'a, FakeTimer>, Response> {
    let mut timer = state.lock().unwrap();
    timer.commands.push(name.to_string());
    if timer.command_fault {
        return Err(StatusCode::SERVICE_UNAVAILABLE.into_response());
    }
    Ok(timer)
}

async fn start_handler(State(state): State<Shared>) -> Response {
    let mut timer = match record(&state, "start") {
        Ok(timer) => timer,
        Err(response) => return response,
    };
    if timer.running {
        return Json(json!({ "error": "Timer is already running" })).into_response();
    }
    timer.running = true;
    Json(json!({ "status": "started" })).into_response()
}

async fn pause_handler(State(state): State<Shared>) -> Response {
    let mut timer = match record(&state, "pause") {
        Ok(timer) => timer,
        Err(response) => return response,
    };
    if !timer.running {
        return Json(json!({ "error": "Timer is not running" })).into_response();
    }
    timer.running = false;
    Json(json!({ "status": "paused" })).into_response()
}

async fn reset_handler(State(state): State<Shared>) -> Response {
    let mut timer = match record(&state, "reset") {
        Ok(timer) => timer,
        Err(response) => return response,
    };
    timer.elapsed = "00:00:00".to_string();
    timer.running = false;
    Json(json!({ "status": "reset", "elapsed_seconds": 0 })).into_response()
}

/// Listener that accepts connections and never answers them.
///
/// Returns the base URL and a counter of accepted connections.
pub async fn silent_service() -> (String, Arc<std::sync::atomic::AtomicUsize>, JoinHandle<()>) {
    use std::sync::atomic::{AtomicUsize, Ordering};

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let accepted = Arc::new(AtomicUsize::new(0));

    let counter = Arc::clone(&accepted);
    let handle = tokio::spawn(async move {
        let mut held = Vec::new();
        while let Ok((stream, _)) = listener.accept().await {
            counter.fetch_add(1, Ordering::SeqCst);
            held.push(stream);
        }
    });

    (format!("http://{}", addr), accepted, handle)
}
