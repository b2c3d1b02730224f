pub mod definitions;
pub mod handlers;
pub mod logic;

use warp::{reject::Rejection, reply::Reply, Filter};

use definitions::MAX_BODY_BYTES;
use handlers::{health_handler, rejection_handler, suggest_move_handler};

/// Every route of the service, with CORS open to any origin.
pub fn routes() -> impl Filter<Extract = (impl Reply,), Error = Rejection> + Clone {
    let health = warp::path!("health")
        .and(warp::get())
        .and_then(health_handler);

    let suggest_move = warp::path!("suggest-move")
        .and(warp::post())
        .and(warp::body::content_length_limit(MAX_BODY_BYTES))
        .and(warp::body::bytes())
        .and_then(suggest_move_handler);

    let cors = warp::cors()
        .allow_any_origin()
        .allow_methods(vec!["GET", "POST", "OPTIONS"])
        .allow_headers(vec!["content-type"]);

    health
        .or(suggest_move)
        .recover(rejection_handler)
        .with(cors)
        .with(warp::log("gebeta_hint::access"))
}
