pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: i64 = 8080;
pub const DEFAULT_RUST_LOG: &str = "info,tower_http=info";
pub const DEFAULT_STORE_PATH: &str = "database.json";

// Development placeholders; rejected by validation in release builds.
pub const DEV_JWT_SECRET: &str = "super-secret-change-me";
pub const DEV_POLKA_API_KEY: &str = "polka-dev-key";
