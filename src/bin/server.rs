use axum::{
    Json, Router,
    http::StatusCode,
    routing::{get, post},
};
use serde::{Deserialize, Serialize};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;
use tube_cutter::export;
use tube_cutter::packer::Packer;
use tube_cutter::types::{
    CutRecord, LengthCounts, TubeAssignment, deserialize_u32_from_number,
};

#[derive(Deserialize, Serialize)]
struct OptimizeRequest {
    tubes: Vec<StockEntry>,
    cuts: Vec<StockEntry>,
}

#[derive(Deserialize, Serialize)]
struct StockEntry {
    #[serde(deserialize_with = "deserialize_u32_from_number")]
    length: u32,
    #[serde(deserialize_with = "deserialize_u32_from_number")]
    qty: u32,
}

#[derive(Serialize)]
struct OptimizeResponse {
    tubes: Vec<TubeAssignment>,
    cuts: Vec<CutRecord>,
    leftover: Vec<LeftoverEntry>,
    fulfilled: bool,
    tube_count: usize,
    total_remaining_space: u64,
    csv: String,
}

#[derive(Serialize)]
struct LeftoverEntry {
    length: u32,
    qty: u32,
}

async fn optimize(
    Json(req): Json<OptimizeRequest>,
) -> Result<Json<OptimizeResponse>, (StatusCode, String)> {
    tracing::info!(
        body = serde_json::to_string(&req).unwrap_or_default(),
        "POST /optimize"
    );

    let inventory = LengthCounts::from_pairs(req.tubes.iter().map(|e| (e.length, e.qty)));
    let demand = LengthCounts::from_pairs(req.cuts.iter().map(|e| (e.length, e.qty)));

    let plan = Packer::new(inventory, demand)
        .pack()
        .map_err(|e| (StatusCode::BAD_REQUEST, e.to_string()))?;

    let records = plan.flatten();
    let response = OptimizeResponse {
        csv: export::to_csv(&records),
        cuts: records,
        leftover: plan
            .leftover
            .iter()
            .map(|(length, qty)| LeftoverEntry { length, qty })
            .collect(),
        fulfilled: plan.is_fulfilled(),
        tube_count: plan.tube_count(),
        total_remaining_space: plan.total_remaining_space(),
        tubes: plan.assignments,
    };

    Ok(Json(response))
}

#[tokio::main]
async fn main() {
    let _sentry = std::env::var("SENTRY_DSN").ok().map(|dsn| {
        sentry::init((
            dsn,
            sentry::ClientOptions {
                release: sentry::release_name!(),
                ..Default::default()
            },
        ))
    });

    let log_file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open("development.log")
        .expect("failed to open development.log");

    tracing_subscriber::fmt()
        .with_writer(log_file)
        .with_target(false)
        .with_ansi(false)
        .with_max_level(Level::INFO)
        .init();

    let port = std::env::var("PORT").unwrap_or_else(|_| "3001".to_string());
    let addr = format!("0.0.0.0:{port}");

    let app = Router::new()
        .route("/up", get(|| async { "ok" }))
        .route("/optimize", post(optimize))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        );

    let listener = tokio::net::TcpListener::bind(&addr).await.unwrap();
    eprintln!("Listening on {addr}");
    axum::serve(listener, app).await.unwrap();
}
