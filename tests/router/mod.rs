use axum::Router;
use holocron::server::router;
use holocron_test_utils::TestContext;

use crate::TestContextExt;

mod access_token;
mod cors;
mod flow;

const TEST_BACKEND_URL: &str = "http://localhost:3000";

/// Builds the full application against the test context's database
fn test_app(test: &TestContext) -> Router {
    router::app(test.into_app_state(), TEST_BACKEND_URL)
}
