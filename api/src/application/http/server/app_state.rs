use std::sync::Arc;

use skinscan_core::application::SkinScanService;

use crate::args::Args;

#[derive(Clone)]
pub struct AppState {
    pub args: Arc<Args>,
    pub service: SkinScanService,
}

impl AppState {
    pub fn new(args: Arc<Args>, service: SkinScanService) -> Self {
        Self { args, service }
    }
}
