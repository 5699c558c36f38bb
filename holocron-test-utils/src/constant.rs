//! Test configuration constants.
//!
//! These mirror the values the server reads from its environment, scaled down so
//! tests stay fast: the bcrypt cost is the lowest the algorithm accepts.

/// Secret used to sign access tokens in tests.
pub static TEST_JWT_SECRET: &str = "holocron-test-secret";

/// Access token lifetime in seconds, matching the server default.
pub const TEST_TOKEN_LIFETIME_SECS: i64 = 900;

/// Minimum bcrypt work factor.
pub const TEST_PASSWORD_HASH_COST: u32 = 4;

/// Plaintext password given to every fixture user.
pub static TEST_PASSWORD: &str = "password";
