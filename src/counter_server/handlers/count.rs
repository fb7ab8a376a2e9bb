//! Request count handler.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use super::super::types::SharedCounter;

/// Reports how many requests the echo path has handled. Does not count itself.
pub async fn count_handler(State(counter): State<SharedCounter>) -> Response {
    let count = counter.get().await;
    (StatusCode::OK, format!("Total request count is {count}")).into_response()
}
