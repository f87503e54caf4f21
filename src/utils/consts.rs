use dotenvy::dotenv;
use lazy_static::lazy_static;
use std::env as std_env;

// Define a lazily evaluated static. lazy_static is needed because std_env::var is not a const function.
lazy_static! {
    pub static ref BASE_URL: String = set_base_url();
}

fn set_base_url() -> String {
    dotenv().ok(); // Load environment variables
    std_env::var(env::AUTH_SERVICE_URL_ENV_VAR)
        .unwrap_or_else(|_| "http://localhost:8000".to_owned())
}

pub mod env {
    pub const AUTH_SERVICE_URL_ENV_VAR: &str = "AUTH_SERVICE_URL";
}

pub const ACCESS_TOKEN_COOKIE_NAME: &str = "ACCESS_TOKEN";
pub const REFRESH_TOKEN_COOKIE_NAME: &str = "REFRESH_TOKEN";
