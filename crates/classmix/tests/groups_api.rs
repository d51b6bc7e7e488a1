use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::http::StatusCode;
use serde_json::{json, Value};
use tower::ServiceExt;

use classmix::config::RosterConfig;
use classmix::roster::{
    roster_router, GroupingRecord, GroupingRepository, GroupingService, RepositoryError, SessionId,
};

#[derive(Default, Clone)]
struct MemoryStore {
    records: Arc<Mutex<HashMap<SessionId, GroupingRecord>>>,
}

impl GroupingRepository for MemoryStore {
    fn store(&self, session: SessionId, record: GroupingRecord) -> Result<(), RepositoryError> {
        self.records
            .lock()
            .expect("store mutex poisoned")
            .insert(session, record);
        Ok(())
    }

    fn fetch(&self, session: &SessionId) -> Result<Option<GroupingRecord>, RepositoryError> {
        Ok(self
            .records
            .lock()
            .expect("store mutex poisoned")
            .get(session)
            .cloned())
    }

    fn clear(&self, session: &SessionId) -> Result<(), RepositoryError> {
        self.records
            .lock()
            .expect("store mutex poisoned")
            .remove(session);
        Ok(())
    }
}

fn router() -> axum::Router {
    let service = GroupingService::new(Arc::new(MemoryStore::default()), RosterConfig::default());
    roster_router(Arc::new(service))
}

async fn post_json(router: &axum::Router, body: Value) -> axum::response::Response {
    router
        .clone()
        .oneshot(
            axum::http::Request::post("/api/v1/roster/groups")
                .header(axum::http::header::CONTENT_TYPE, "application/json")
                .body(axum::body::Body::from(serde_json::to_vec(&body).unwrap()))
                .unwrap(),
        )
        .await
        .expect("route executes")
}

async fn json_body(response: axum::response::Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}

#[tokio::test]
async fn generate_then_fetch_round_trips_the_grouping() {
    let router = router();

    let response = post_json(
        &router,
        json!({
            "session": "period-3",
            "names_text": "Ann\nBo\nCas\nDag\nEli\nFin",
            "group_size": 3,
            "seed": 42,
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let generated = json_body(response).await;
    assert_eq!(generated["group_count"], json!(2));
    assert_eq!(generated["student_count"], json!(6));

    let response = router
        .clone()
        .oneshot(
            axum::http::Request::get("/api/v1/roster/groups/period-3")
                .body(axum::body::Body::empty())
                .unwrap(),
        )
        .await
        .expect("route executes");
    assert_eq!(response.status(), StatusCode::OK);
    let fetched = json_body(response).await;
    assert_eq!(fetched["groups"], generated["groups"]);
}

#[tokio::test]
async fn infeasible_generate_clears_the_held_grouping() {
    let router = router();

    let ok = post_json(
        &router,
        json!({
            "session": "period-3",
            "names_text": "Ann\nBo\nCas\nDag\nEli\nFin",
            "group_size": 3,
            "seed": 42,
        }),
    )
    .await;
    assert_eq!(ok.status(), StatusCode::OK);

    let failed = post_json(
        &router,
        json!({
            "session": "period-3",
            "names_text": "Ann\nBo\nCas\nDag\nEli\nFin",
            "separation_text": "Ann,Bo,Cas",
            "group_size": 3,
            "seed": 42,
        }),
    )
    .await;
    assert_eq!(failed.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let response = router
        .clone()
        .oneshot(
            axum::http::Request::get("/api/v1/roster/groups/period-3")
                .body(axum::body::Body::empty())
                .unwrap(),
        )
        .await
        .expect("route executes");
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn identical_seeds_return_identical_payloads() {
    let router = router();
    let body = json!({
        "session": "period-3",
        "names_text": "Ann\nBo\nCas\nDag\nEli\nFin\nGro",
        "separation_text": "Ann;Bo",
        "group_size": 3,
        "seed": 7,
    });

    let first = json_body(post_json(&router, body.clone()).await).await;
    let second = json_body(post_json(&router, body).await).await;

    assert_eq!(first["groups"], second["groups"]);
}
