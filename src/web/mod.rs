mod assets;

use std::{
    convert::Infallible,
    net::SocketAddr,
    sync::{Arc, Mutex},
    time::Duration,
};

use anyhow::Result;
use axum::{
    body::Body,
    extract::State,
    http::{header, StatusCode},
    response::{
        sse::{Event, KeepAlive, Sse},
        Html, IntoResponse, Response,
    },
    routing::{get, post, put},
    Json, Router,
};
use serde::Serialize;
use tokio::{net::TcpListener, sync::broadcast};
use tokio_stream::{wrappers::BroadcastStream, Stream, StreamExt};

use crate::{
    allocation::AllocationReport,
    intake::{DistrictInput, IntakeError, ResourceInput},
    registry::{DistrictView, Registry, RegistrySnapshot, RegistrySummary},
};

struct Shared {
    registry: Registry,
    last_report: Option<AllocationReport>,
}

struct AppState {
    shared: Mutex<Shared>,
    broadcaster: broadcast::Sender<String>,
}

impl AppState {
    fn snapshot(&self) -> RegistrySnapshot {
        let shared = self.shared.lock().expect("state lock poisoned");
        shared.registry.snapshot(shared.last_report.as_ref())
    }

    fn publish(&self) {
        if let Ok(payload) = serde_json::to_string(&self.snapshot()) {
            let _ = self.broadcaster.send(payload);
        }
    }
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

/// Constraint violations come back as 422 with the violated constraint
/// spelled out; the registry is untouched in that case.
struct Rejection(IntakeError);

impl IntoResponse for Rejection {
    fn into_response(self) -> Response {
        (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(ErrorBody {
                error: self.0.to_string(),
            }),
        )
            .into_response()
    }
}

pub struct WebServerConfig {
    pub host: String,
    pub port: u16,
    pub registry: Registry,
}

pub async fn run(config: WebServerConfig) -> Result<()> {
    let WebServerConfig {
        host,
        port,
        registry,
    } = config;

    let (tx, _) = broadcast::channel::<String>(512);
    let state = Arc::new(AppState {
        shared: Mutex::new(Shared {
            registry,
            last_report: None,
        }),
        broadcaster: tx,
    });

    let router = Router::new()
        .route("/", get(index))
        .route("/styles.css", get(styles))
        .route("/app.js", get(script))
        .route("/api/state", get(current_state))
        .route("/api/districts", post(add_district))
        .route("/api/resources", put(set_resources))
        .route("/api/allocate", post(run_allocation))
        .route("/api/events", get(stream_events))
        .with_state(state);

    let addr: SocketAddr = format!("{}:{}", host, port)
        .parse()
        .expect("invalid address");

    println!("aidgrid UI live at http://{}:{} (Ctrl+C to stop)", host, port);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
    println!("Shutting down web UI...");
}

async fn index() -> Html<&'static str> {
    Html(assets::INDEX_HTML)
}

async fn styles() -> impl IntoResponse {
    Response::builder()
        .header(header::CONTENT_TYPE, "text/css; charset=utf-8")
        .body(Body::from(assets::STYLES_CSS))
        .unwrap()
}

async fn script() -> impl IntoResponse {
    Response::builder()
        .header(
            header::CONTENT_TYPE,
            "application/javascript; charset=utf-8",
        )
        .body(Body::from(assets::APP_JS))
        .unwrap()
}

async fn current_state(State(state): State<Arc<AppState>>) -> Json<RegistrySnapshot> {
    Json(state.snapshot())
}

async fn add_district(
    State(state): State<Arc<AppState>>,
    Json(input): Json<DistrictInput>,
) -> Result<impl IntoResponse, Rejection> {
    let draft = input.validate().map_err(Rejection)?;
    let view = {
        let mut shared = state.shared.lock().expect("state lock poisoned");
        let id = shared.registry.add_district(draft);
        let district = shared
            .registry
            .district(id)
            .expect("district just admitted");
        DistrictView::new(district, shared.last_report.as_ref())
    };
    state.publish();
    Ok((StatusCode::CREATED, Json(view)))
}

async fn set_resources(
    State(state): State<Arc<AppState>>,
    Json(input): Json<ResourceInput>,
) -> Result<Json<RegistrySummary>, Rejection> {
    let total = input.validate().map_err(Rejection)?;
    let summary = {
        let mut shared = state.shared.lock().expect("state lock poisoned");
        shared.registry.set_resource_pool(total);
        shared.registry.summary()
    };
    state.publish();
    Ok(Json(summary))
}

async fn run_allocation(State(state): State<Arc<AppState>>) -> Json<RegistrySnapshot> {
    let snapshot = {
        let mut shared = state.shared.lock().expect("state lock poisoned");
        let report = shared.registry.allocate();
        shared.last_report = Some(report);
        shared.registry.snapshot(shared.last_report.as_ref())
    };
    state.publish();
    Json(snapshot)
}

async fn stream_events(
    State(state): State<Arc<AppState>>,
) -> Sse<impl Stream<Item = Result<Event, Infallible>>> {
    let rx = state.broadcaster.subscribe();
    let stream = BroadcastStream::new(rx).filter_map(|msg| match msg {
        Ok(payload) => Some(Ok(Event::default().data(payload))),
        Err(_) => None,
    });
    Sse::new(stream).keep_alive(
        KeepAlive::new()
            .interval(Duration::from_secs(2))
            .text("keep-alive"),
    )
}
