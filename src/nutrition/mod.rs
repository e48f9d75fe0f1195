pub mod calculator;
pub mod dto;
mod handlers;
pub mod suggestions;
pub mod validation;

use crate::state::AppState;
use axum::Router;

pub fn router() -> Router<AppState> {
    Router::new().merge(handlers::nutrition_routes())
}
