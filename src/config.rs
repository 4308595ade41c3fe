//! # config
//!
//! Runtime configuration resolved from the process environment, with
//! fallback defaults so a bare `cargo run` works out of the box.
//!
//! | Variable             | Default        | Description                        |
//! |----------------------|----------------|------------------------------------|
//! | `BIND_ADDR`          | `0.0.0.0:5000` | Address Axum listens on            |
//! | `JWT_SECRET`         | `dev_secret`   | HS256 signing key for bearer tokens|
//! | `JWT_TTL_HOURS`      | `24`           | Token lifetime in hours            |
//! | `SEED_DEMO_ACCOUNTS` | `true`         | Create the demo logins at startup  |

#[derive(Debug, Clone)]
pub struct Config {
    pub bind_addr: String,
    /// HS256 signing key. The `dev_secret` default is for local development
    /// only; `main` logs a warning when it is in effect.
    pub jwt_secret: String,
    pub jwt_ttl_hours: i64,
    pub seed_demo_accounts: bool,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            bind_addr:          env_str("BIND_ADDR", "0.0.0.0:5000"),
            jwt_secret:         env_str("JWT_SECRET", "dev_secret"),
            jwt_ttl_hours:      env_i64("JWT_TTL_HOURS", 24),
            seed_demo_accounts: env_bool("SEED_DEMO_ACCOUNTS", true),
        }
    }
}

fn env_str(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

fn env_i64(key: &str, default: i64) -> i64 {
    std::env::var(key).ok().and_then(|v| v.parse().ok()).unwrap_or(default)
}

fn env_bool(key: &str, default: bool) -> bool {
    std::env::var(key).ok().and_then(|v| v.parse().ok()).unwrap_or(default)
}
