mod dto;
mod handlers;
pub mod nutrients;
pub mod ranker;
pub mod repo;
pub mod repo_types;
pub mod topons;

use crate::state::AppState;
use axum::Router;

pub fn router() -> Router<AppState> {
    Router::new().merge(handlers::search_routes())
}
