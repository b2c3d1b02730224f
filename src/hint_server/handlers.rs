use std::convert::Infallible;

use warp::http::StatusCode;
use warp::hyper::body::Bytes;
use warp::reject::Rejection;
use warp::reply::{json, with_status, Reply};

use crate::hint_server::definitions::*;
use crate::hint_server::logic::suggest;

pub async fn health_handler() -> Result<impl Reply, Infallible> {
    Ok(json(&HealthStatus::healthy()))
}

pub async fn suggest_move_handler(body: Bytes) -> Result<impl Reply, Infallible> {
    let result = serde_json::from_slice(&body)
        .map_err(|err| HintError::InvalidJson(err.to_string()))
        .and_then(|body| suggest(&body));
    let reply = match result {
        Ok(response) => {
            debug!("Suggesting hole {}", response.suggested_hole);
            with_status(json(&response), StatusCode::OK)
        }
        Err(err) => {
            if err.status().is_server_error() {
                error!("Failed to suggest a move: {}", err);
            } else {
                warn!("Rejected hint request: {}", err);
            }
            with_status(json(&ErrorBody::from(&err)), err.status())
        }
    };
    Ok(reply)
}

/// Turns routing rejections into the same `{"error": ...}` shape the endpoints use.
pub async fn rejection_handler(rejection: Rejection) -> Result<impl Reply, Infallible> {
    let (status, message) = if rejection.is_not_found() {
        (StatusCode::NOT_FOUND, "Not found".to_owned())
    } else if rejection
        .find::<warp::reject::PayloadTooLarge>()
        .is_some()
    {
        (
            StatusCode::PAYLOAD_TOO_LARGE,
            format!("Request body exceeds {} bytes", MAX_BODY_BYTES),
        )
    } else if rejection
        .find::<warp::reject::LengthRequired>()
        .is_some()
    {
        (StatusCode::LENGTH_REQUIRED, "Content-Length required".to_owned())
    } else if rejection
        .find::<warp::reject::MethodNotAllowed>()
        .is_some()
    {
        (StatusCode::METHOD_NOT_ALLOWED, "Method not allowed".to_owned())
    } else {
        error!("Unhandled rejection: {:?}", rejection);
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            "Internal server error".to_owned(),
        )
    };
    Ok(with_status(json(&ErrorBody { error: message }), status))
}
