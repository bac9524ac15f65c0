pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: i64 = 3000;
pub const DEFAULT_RUST_LOG: &str = "info,tower_http=info";
pub const DEFAULT_DB_HOST: &str = "localhost";
pub const DEFAULT_DB_PORT: i64 = 5432;
pub const DEFAULT_DB_SSLMODE: &str = "disable";
pub const DEFAULT_DB_MAX_CONNECTIONS: i64 = 10;
pub const DEFAULT_DB_MIN_IDLE: i64 = 2;

/// Pre-nesting variable names, consulted when the `APP_*__*` form is unset.
pub const LEGACY_ENV_KEYS: &[(&str, &str)] = &[
    ("DB_HOST", "database.host"),
    ("DB_USER", "database.user"),
    ("DB_PASSWORD", "database.password"),
    ("DB_NAME", "database.name"),
    ("APP_HOST", "general.host"),
    ("APP_PORT", "general.port"),
];
