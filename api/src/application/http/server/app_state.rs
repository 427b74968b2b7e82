use std::sync::Arc;

use foodlytic_core::application::FoodlyticService;

use crate::args::Args;

#[derive(Clone)]
pub struct AppState {
    pub args: Arc<Args>,
    pub service: FoodlyticService,
}

impl AppState {
    pub fn new(args: Arc<Args>, service: FoodlyticService) -> Self {
        Self { args, service }
    }
}
