use std::sync::Arc;

use mxsec_api::config::ApiConfig;
use mxsec_api::fixtures::{DataSource, FixtureSet};
use mxsec_api::state::ApiState;

fn test_config() -> ApiConfig {
    ApiConfig {
        port: 8000,
        bind: "127.0.0.1".to_string(),
    }
}

#[test]
fn test_state_holds_demo_fixtures() {
    let state = ApiState::new(test_config());

    assert_eq!(state.data.user().id, "u_123");
    assert_eq!(state.data.user().email, "mxdev@example.de");
    assert_eq!(state.data.user().plan, "pro");
    assert_eq!(state.data.websites().len(), 4);
    assert_eq!(state.data.alerts().len(), 4);
}

#[test]
fn test_state_accepts_alternate_data_source() {
    let state = ApiState::with_data(test_config(), Box::new(FixtureSet::demo()));
    assert_eq!(state.data.websites().len(), 4);
}

#[test]
fn test_state_is_shareable_across_handlers() {
    let state = Arc::new(ApiState::new(test_config()));
    let clone = state.clone();
    assert_eq!(state.data.user().id, clone.data.user().id);
}

#[test]
fn test_repeated_reads_are_identical() {
    let state = ApiState::new(test_config());

    let first: Vec<String> = state.data.alerts().iter().map(|a| a.id.clone()).collect();
    let second: Vec<String> = state.data.alerts().iter().map(|a| a.id.clone()).collect();
    assert_eq!(first, second);

    let overview_a = state.data.overview();
    let overview_b = state.data.overview();
    assert_eq!(overview_a.overall_score, overview_b.overall_score);
    assert_eq!(overview_a.uptime_percent, overview_b.uptime_percent);
}
