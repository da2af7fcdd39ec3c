// ABOUTME: HTTP middleware for request tracing, CORS and request correlation
// ABOUTME: Provides request ID propagation, span creation, and cross-origin configuration

/// Cross-origin configuration
pub mod cors;
/// Request correlation identifiers
pub mod request_id;
/// Request span helpers
pub mod tracing;

// CORS configuration
pub use cors::setup_cors;

// Request correlation
pub use request_id::{request_id_middleware, RequestId};

// Request tracing
pub use self::tracing::{create_request_span, make_request_span, record_response};
