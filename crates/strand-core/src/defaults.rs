//! Centralized default constants for strand.
//!
//! Crates reference these constants instead of defining their own magic
//! values.

// =============================================================================
// SERVER
// =============================================================================

/// Default bind address for the HTTP server.
pub const SERVER_HOST: &str = "0.0.0.0";

/// Default HTTP port.
pub const SERVER_PORT: u16 = 8000;

/// Default comma-separated CORS origin whitelist.
pub const ALLOWED_ORIGINS: &str = "http://localhost:3000";

/// Maximum accepted request body size in bytes (1 MiB).
pub const MAX_BODY_BYTES: usize = 1024 * 1024;

/// CORS preflight cache lifetime in seconds.
pub const CORS_MAX_AGE_SECS: u64 = 3600;

// =============================================================================
// LOGGING
// =============================================================================

/// Default `RUST_LOG` directive when none is set.
pub const LOG_FILTER: &str = "strand_api=debug,strand_store=debug,strand_query=debug,tower_http=debug";

/// Default log file name when `LOG_FILE` names only a directory.
pub const LOG_FILE_NAME: &str = "strand-api.log";

// =============================================================================
// MESSAGES
// =============================================================================

/// Body of the root liveness endpoint.
pub const ROOT_MESSAGE: &str = "String Analyzer API is running";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_body_limit_is_one_mebibyte() {
        assert_eq!(MAX_BODY_BYTES, 1_048_576);
    }

    #[test]
    fn test_log_filter_covers_api() {
        assert!(LOG_FILTER.contains("strand_api="));
        assert!(LOG_FILTER.contains("tower_http="));
    }
}
