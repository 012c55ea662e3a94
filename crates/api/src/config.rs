use std::path::PathBuf;

/// Server configuration loaded from environment variables.
///
/// All fields have defaults suitable for local use. Override via
/// environment variables or a `.env` file.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// SQLite database file (default: `instance/tailbook.db`).
    pub database_path: PathBuf,
    /// Flat directory holding uploaded photos (default: `uploads`).
    pub upload_dir: PathBuf,
    /// Maximum accepted request body on admin routes, in bytes.
    pub max_upload_bytes: usize,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Mark the session cookie `Secure` (default: `false`).
    pub session_secure_cookie: bool,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                 | Default                |
    /// |-------------------------|------------------------|
    /// | `HOST`                  | `0.0.0.0`              |
    /// | `PORT`                  | `3000`                 |
    /// | `DATABASE_PATH`         | `instance/tailbook.db` |
    /// | `UPLOAD_DIR`            | `uploads`              |
    /// | `MAX_UPLOAD_BYTES`      | `16777216`             |
    /// | `REQUEST_TIMEOUT_SECS`  | `30`                   |
    /// | `SESSION_SECURE_COOKIE` | `false`                |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let database_path = std::env::var("DATABASE_PATH")
            .unwrap_or_else(|_| "instance/tailbook.db".into())
            .into();

        let upload_dir = std::env::var("UPLOAD_DIR")
            .unwrap_or_else(|_| "uploads".into())
            .into();

        let max_upload_bytes: usize = std::env::var("MAX_UPLOAD_BYTES")
            .unwrap_or_else(|_| (16 * 1024 * 1024).to_string())
            .parse()
            .expect("MAX_UPLOAD_BYTES must be a valid usize");

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let session_secure_cookie: bool = std::env::var("SESSION_SECURE_COOKIE")
            .unwrap_or_else(|_| "false".into())
            .parse()
            .expect("SESSION_SECURE_COOKIE must be true or false");

        Self {
            host,
            port,
            database_path,
            upload_dir,
            max_upload_bytes,
            request_timeout_secs,
            session_secure_cookie,
        }
    }
}
