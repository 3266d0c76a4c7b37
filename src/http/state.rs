//! Shared state handed to every handler.

use std::sync::Arc;

use crate::db::repository::FullRepository;

/// Application state cloned into each request handler.
///
/// Holds the repository behind an `Arc` so the whole state stays cheap to
/// clone.
#[derive(Clone)]
pub struct AppState {
    pub repository: Arc<dyn FullRepository>,
}

impl AppState {
    pub fn new(repository: Arc<dyn FullRepository>) -> Self {
        Self { repository }
    }
}
