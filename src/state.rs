use std::sync::Arc;

use crate::config::ApiConfig;
use crate::fixtures::{DataSource, FixtureSet};

pub type SharedState = Arc<ApiState>;

pub struct ApiState {
    pub config: ApiConfig,
    pub data: Box<dyn DataSource>,
}

impl ApiState {
    pub fn new(config: ApiConfig) -> Self {
        Self {
            config,
            data: Box::new(FixtureSet::demo()),
        }
    }

    /// Build state over an alternate data source. Used by tests.
    pub fn with_data(config: ApiConfig, data: Box<dyn DataSource>) -> Self {
        Self { config, data }
    }
}
