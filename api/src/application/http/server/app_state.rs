use std::sync::Arc;

use letaicook_core::application::LetaicookService;

use crate::args::Args;

#[derive(Clone)]
pub struct AppState {
    pub args: Arc<Args>,
    pub service: LetaicookService,
}

impl AppState {
    pub fn new(args: Arc<Args>, service: LetaicookService) -> Self {
        Self { args, service }
    }
}
