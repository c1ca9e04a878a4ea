use std::sync::Arc;

use fridgechef_core::application::FridgeChefService;

use crate::args::Args;

#[derive(Clone)]
pub struct AppState {
    pub args: Arc<Args>,
    pub service: FridgeChefService,
}

impl AppState {
    pub fn new(args: Arc<Args>, service: FridgeChefService) -> Self {
        Self { args, service }
    }
}
