//! Structured logging schema and field name constants for strand.
//!
//! All crates use these names for structured `tracing` fields so log
//! aggregation can query by the same keys across every subsystem.
//!
//! ## Log Level Contract
//!
//! | Level | Usage |
//! |-------|-------|
//! | ERROR | Degraded service, requires operator attention |
//! | WARN  | Recoverable issue, automatic fallback applied |
//! | INFO  | Lifecycle events (startup, shutdown), record creation/removal |
//! | DEBUG | Decision points, interpreted filters, result counts |
//! | TRACE | Per-record and per-rule evaluation |

// ─── Identity fields ───────────────────────────────────────────────────────

/// Correlation ID propagated from the `x-request-id` header.
/// Format: UUIDv7 (time-ordered).
pub const REQUEST_ID: &str = "request_id";

/// Subsystem originating the log event.
/// Values: "api", "store", "query"
pub const SUBSYSTEM: &str = "subsystem";

/// Component within a subsystem.
/// Examples: "memory_store", "interpreter", "strings"
pub const COMPONENT: &str = "component";

/// Logical operation name.
/// Examples: "put", "delete", "interpret", "list"
pub const OPERATION: &str = "op";

// ─── Entity fields ─────────────────────────────────────────────────────────

/// Content hash of the record being operated on.
pub const RECORD_ID: &str = "record_id";

/// Natural-language query text.
pub const QUERY: &str = "query";

// ─── Measurement fields ────────────────────────────────────────────────────

/// Number of records returned by a list or filter.
pub const RESULT_COUNT: &str = "result_count";

/// Number of records held by the store.
pub const STORE_SIZE: &str = "store_size";

/// Number of active constraints in a filter set.
pub const CONSTRAINT_COUNT: &str = "constraint_count";

/// Names of interpreter rules that fired for a query.
pub const RULES: &str = "rules";

// ─── Outcome fields ────────────────────────────────────────────────────────

/// Error variant name when an operation fails.
pub const ERROR_KIND: &str = "error_kind";

/// Error message when an operation fails.
pub const ERROR_MSG: &str = "error";
