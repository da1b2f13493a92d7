//! Error handling utilities for MCP server

use prompt_store_core::StoreError;
use rmcp::ErrorData;

/// Helper to convert unclassified store errors to MCP errors
pub fn to_mcp_error(message: &str, error: &StoreError) -> ErrorData {
    ErrorData::internal_error(format!("{message}: {error}"), None)
}

/// Helper to report a payload that could not be encoded
pub fn serialization_error(error: &serde_json::Error) -> ErrorData {
    ErrorData::internal_error(format!("Failed to serialize result: {error}"), None)
}
