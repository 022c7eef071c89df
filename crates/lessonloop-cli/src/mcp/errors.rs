//! Error handling utilities for MCP server

use lessonloop_core::SchedulingError;
use rmcp::ErrorData;

/// Helper to convert scheduling errors to MCP errors
///
/// Problems with the caller's arguments become `invalid_params` so the
/// assistant can correct them; everything else is an internal error.
pub fn to_mcp_error(message: &str, error: &SchedulingError) -> ErrorData {
    let text = format!("{message}: {error}");
    match error {
        SchedulingError::InvalidInput { .. } | SchedulingError::ClosureNotFound { .. } => {
            ErrorData::invalid_params(text, None)
        }
        _ => ErrorData::internal_error(text, None),
    }
}
