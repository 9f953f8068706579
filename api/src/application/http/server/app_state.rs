use std::sync::Arc;

use carparts_core::application::CarPartsService;

use crate::args::Args;

#[derive(Clone)]
pub struct AppState {
    pub args: Arc<Args>,
    pub service: CarPartsService,
}

impl AppState {
    pub fn new(args: Arc<Args>, service: CarPartsService) -> Self {
        Self { args, service }
    }
}
