//! MCP tool handlers implementation

use log::debug;
use prompt_store_core::{params as core, PromptStore};
use rmcp::{
    handler::server::wrapper::Parameters,
    model::{CallToolResult, Content},
    ErrorData,
};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::errors::{serialization_error, to_mcp_error};

// ============================================================================
// Generic Parameter Wrapper Implementation
// ============================================================================
//
// Core parameter types only derive JsonSchema behind a feature flag and carry
// no rmcp dependency. This transparent wrapper adds the derives the tool
// router needs while deserializing straight into the wrapped core type.

/// Generic MCP wrapper for core parameter types with serde integration
#[derive(Debug, Deserialize)]
#[serde(transparent)]
pub struct McpParams<T>(T)
where
    T: JsonSchema;

impl<T> JsonSchema for McpParams<T>
where
    T: JsonSchema,
{
    fn schema_name() -> std::borrow::Cow<'static, str> {
        T::schema_name()
    }

    fn json_schema(g: &mut schemars::SchemaGenerator) -> schemars::Schema {
        T::json_schema(g)
    }
}

impl<T> AsRef<T> for McpParams<T>
where
    T: JsonSchema,
{
    fn as_ref(&self) -> &T {
        &self.0
    }
}

// Type aliases for cleaner usage in function signatures
pub type Id = McpParams<core::Id>;
pub type AddPrompt = McpParams<core::AddPrompt>;
pub type UpdatePrompt = McpParams<core::UpdatePrompt>;
pub type ListPrompts = McpParams<core::ListPrompts>;
pub type SearchPrompts = McpParams<core::SearchPrompts>;
pub type FilterByTags = McpParams<core::FilterByTags>;

pub type McpResult = Result<CallToolResult, ErrorData>;

/// Handler implementations for the MCP server
pub struct McpHandlers {
    store: PromptStore,
}

impl McpHandlers {
    pub fn new(store: PromptStore) -> Self {
        Self { store }
    }

    pub async fn add_prompt(&self, Parameters(params): Parameters<AddPrompt>) -> McpResult {
        debug!("add_prompt: {:?}", params);
        tool_result(self.store.add_prompt(params.as_ref()).await)
    }

    pub async fn get_prompt(&self, Parameters(params): Parameters<Id>) -> McpResult {
        debug!("get_prompt: {:?}", params);
        tool_result(self.store.get_prompt(params.as_ref()).await)
    }

    pub async fn update_prompt(&self, Parameters(params): Parameters<UpdatePrompt>) -> McpResult {
        debug!("update_prompt: {:?}", params);
        tool_result(self.store.update_prompt(params.as_ref()).await)
    }

    pub async fn delete_prompt(&self, Parameters(params): Parameters<Id>) -> McpResult {
        debug!("delete_prompt: {:?}", params);
        tool_result(self.store.delete_prompt(params.as_ref()).await)
    }

    pub async fn list_prompts(&self, Parameters(params): Parameters<ListPrompts>) -> McpResult {
        debug!("list_prompts: {:?}", params);
        tool_result(self.store.list_prompts(params.as_ref()).await)
    }

    pub async fn search_prompts(
        &self,
        Parameters(params): Parameters<SearchPrompts>,
    ) -> McpResult {
        debug!("search_prompts: {:?}", params);
        tool_result(self.store.search_prompts(params.as_ref()).await)
    }

    pub async fn filter_by_tags(
        &self,
        Parameters(params): Parameters<FilterByTags>,
    ) -> McpResult {
        debug!("filter_by_tags: {:?}", params);
        tool_result(self.store.filter_by_tags(params.as_ref()).await)
    }

    pub async fn list_tags(&self) -> McpResult {
        debug!("list_tags");
        tool_result(self.store.list_tags().await)
    }
}

/// Converts an operation outcome into a tool result.
///
/// Success payloads and typed errors are both returned as JSON text, the
/// latter with the error flag set. Unclassified failures become protocol
/// errors.
pub fn tool_result<T: Serialize>(result: prompt_store_core::Result<T>) -> McpResult {
    match result {
        Ok(value) => {
            let json = serde_json::to_string(&value).map_err(|e| serialization_error(&e))?;
            Ok(CallToolResult::success(vec![Content::text(json)]))
        }
        Err(e) => match e.to_response() {
            Some(response) => {
                let json =
                    serde_json::to_string(&response).map_err(|e| serialization_error(&e))?;
                Ok(CallToolResult::error(vec![Content::text(json)]))
            }
            None => Err(to_mcp_error("Prompt store operation failed", &e)),
        },
    }
}

#[cfg(test)]
mod tests {
    use prompt_store_core::{DeletedPrompt, StoreError};
    use serde_json::Value;

    use super::*;

    /// The tool result as it goes over the wire.
    fn wire(result: &CallToolResult) -> Value {
        serde_json::to_value(result).unwrap()
    }

    fn payload(result: &CallToolResult) -> Value {
        let text = wire(result)["content"][0]["text"]
            .as_str()
            .expect("text content")
            .to_string();
        serde_json::from_str(&text).unwrap()
    }

    #[test]
    fn test_success_is_json_payload() {
        let result = tool_result(Ok(DeletedPrompt {
            deleted: true,
            id: "abc".to_string(),
        }))
        .unwrap();

        assert_ne!(wire(&result)["isError"], true);
        let value = payload(&result);
        assert_eq!(value["deleted"], true);
        assert_eq!(value["id"], "abc");
    }

    #[test]
    fn test_typed_error_sets_error_flag() {
        let result = tool_result::<DeletedPrompt>(Err(StoreError::NotFound {
            id: "missing".to_string(),
        }))
        .unwrap();

        assert_eq!(wire(&result)["isError"], true);
        let value = payload(&result);
        assert_eq!(value["error"]["code"], "NOT_FOUND");
        assert_eq!(value["error"]["message"], "Prompt not found");
    }

    #[test]
    fn test_fatal_error_is_protocol_error() {
        let result = tool_result::<DeletedPrompt>(Err(StoreError::Configuration {
            message: "boom".to_string(),
        }));
        assert!(result.is_err());
    }

    #[test]
    fn test_wrapper_schema_matches_core_type() {
        let wrapped = schemars::schema_for!(AddPrompt);
        let core = schemars::schema_for!(core::AddPrompt);
        assert_eq!(wrapped, core);
    }
}
