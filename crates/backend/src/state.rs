use std::sync::Arc;

use crate::shared::remote_api::ItemSource;

/// Общее состояние обработчиков
#[derive(Clone)]
pub struct AppState {
    pub source: Arc<dyn ItemSource>,
}

impl AppState {
    pub fn new(source: Arc<dyn ItemSource>) -> Self {
        Self { source }
    }
}
