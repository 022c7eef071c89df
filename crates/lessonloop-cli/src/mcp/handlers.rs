//! MCP tool handlers implementation

use std::sync::Arc;

use lessonloop_core::{
    display::{format_closure_conflicts, CreateResult, DeleteResult},
    params as core, Scheduler,
};
use log::debug;
use rmcp::{
    handler::server::tool::Parameters,
    model::{CallToolResult, Content},
    ErrorData,
};
use schemars::JsonSchema;
use serde::Deserialize;

use super::errors::to_mcp_error;

/// Generic MCP wrapper for core parameter types with serde integration
///
/// `#[serde(transparent)]` passes deserialization straight through to the
/// wrapped core type, while the `JsonSchema` impl forwards to the core
/// type's schema.
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
pub type CreateClosure = McpParams<core::CreateClosure>;
pub type ListClosures = McpParams<core::ListClosures>;
pub type ClosuresOnDate = McpParams<core::ClosuresOnDate>;
pub type CheckSeries = McpParams<core::CheckSeries>;
pub type SetBlockScheduling = McpParams<core::SetBlockScheduling>;
pub type FormatConflicts = McpParams<core::FormatConflicts>;

pub type McpResult = Result<CallToolResult, ErrorData>;

fn text_result(text: impl Into<String>) -> McpResult {
    Ok(CallToolResult::success(vec![Content::text(text.into())]))
}

/// Handler implementations for the MCP server
pub struct McpHandlers {
    scheduler: Arc<Scheduler>,
}

impl McpHandlers {
    pub fn new(scheduler: Arc<Scheduler>) -> Self {
        Self { scheduler }
    }

    pub async fn list_closures(&self, Parameters(params): Parameters<ListClosures>) -> McpResult {
        debug!("list_closures: {:?}", params);

        let inner_params = params.as_ref();
        let closures = self
            .scheduler
            .list_closures(inner_params)
            .await
            .map_err(|e| to_mcp_error("Failed to list closure dates", &e))?;

        text_result(format!(
            "# Closure dates {} to {}\n\n{closures}",
            inner_params.from, inner_params.to
        ))
    }

    pub async fn closures_on_date(
        &self,
        Parameters(params): Parameters<ClosuresOnDate>,
    ) -> McpResult {
        debug!("closures_on_date: {:?}", params);

        let closures = self
            .scheduler
            .closures_for_date(params.as_ref())
            .await
            .map_err(|e| to_mcp_error("Failed to look up closure dates", &e))?;

        text_result(format!("# Closures on {}\n\n{closures}", params.as_ref().date))
    }

    pub async fn add_closure(&self, Parameters(params): Parameters<CreateClosure>) -> McpResult {
        debug!("add_closure: {:?}", params);

        let closure = self
            .scheduler
            .create_closure(params.as_ref())
            .await
            .map_err(|e| to_mcp_error("Failed to add closure date", &e))?;

        text_result(CreateResult::new(closure).to_string())
    }

    pub async fn remove_closure(&self, Parameters(params): Parameters<Id>) -> McpResult {
        debug!("remove_closure: {:?}", params);

        let closure = self
            .scheduler
            .delete_closure(params.as_ref())
            .await
            .map_err(|e| to_mcp_error("Failed to remove closure date", &e))?;

        text_result(DeleteResult::new(closure).to_string())
    }

    pub async fn check_series(&self, Parameters(params): Parameters<CheckSeries>) -> McpResult {
        debug!("check_series: {:?}", params);

        let check = self
            .scheduler
            .check_series(params.as_ref())
            .await
            .map_err(|e| to_mcp_error("Failed to check lesson series", &e))?;

        text_result(format!("# Closure check\n\n{check}"))
    }

    pub async fn set_block_scheduling(
        &self,
        Parameters(params): Parameters<SetBlockScheduling>,
    ) -> McpResult {
        debug!("set_block_scheduling: {:?}", params);

        let settings = self
            .scheduler
            .set_block_scheduling(params.as_ref())
            .await
            .map_err(|e| to_mcp_error("Failed to update organisation settings", &e))?;

        text_result(settings.to_string())
    }

    pub async fn format_conflicts(
        &self,
        Parameters(params): Parameters<FormatConflicts>,
    ) -> McpResult {
        debug!("format_conflicts: {:?}", params);

        let records = params
            .as_ref()
            .to_records()
            .map_err(|e| to_mcp_error("Failed to read conflicts", &e))?;

        text_result(format_closure_conflicts(&records))
    }
}

#[cfg(test)]
mod tests {
    use lessonloop_core::SchedulerBuilder;
    use rmcp::model::{ErrorCode, RawContent};
    use tempfile::TempDir;

    use super::*;

    async fn create_test_handlers() -> (TempDir, McpHandlers) {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let scheduler = SchedulerBuilder::new()
            .with_database_path(Some(temp_dir.path().join("test.db")))
            .build()
            .await
            .expect("Failed to create scheduler");
        (temp_dir, McpHandlers::new(Arc::new(scheduler)))
    }

    fn text_of(result: &CallToolResult) -> String {
        result
            .content
            .iter()
            .filter_map(|content| match &content.raw {
                RawContent::Text(text) => Some(text.text.clone()),
                _ => None,
            })
            .collect()
    }

    #[tokio::test]
    async fn test_add_closure_then_check_series() {
        let (_temp_dir, handlers) = create_test_handlers().await;

        let created = handlers
            .add_closure(Parameters(McpParams(core::CreateClosure {
                date: "2025-01-13".to_string(),
                reason: "Staff training".to_string(),
                location_id: None,
                all_locations: true,
            })))
            .await
            .unwrap();
        assert!(text_of(&created).starts_with("Created closure date with ID: 1"));

        let checked = handlers
            .check_series(Parameters(McpParams(core::CheckSeries {
                start_date: Some("2025-01-06".to_string()),
                interval_weeks: 1,
                total_lessons: 4,
                location_id: Some("hall-a".to_string()),
            })))
            .await
            .unwrap();
        let text = text_of(&checked);
        assert!(text.contains("1 lesson falls on a closure date (Staff training)"));
        assert!(text.contains("• Lesson 2 on 13/01/2025: Staff training"));
    }

    #[tokio::test]
    async fn test_remove_missing_closure_is_invalid_params() {
        let (_temp_dir, handlers) = create_test_handlers().await;

        let error = handlers
            .remove_closure(Parameters(McpParams(core::Id { id: 42 })))
            .await
            .unwrap_err();
        assert_eq!(error.code, ErrorCode::INVALID_PARAMS);
    }

    #[tokio::test]
    async fn test_format_conflicts_empty_list() {
        let (_temp_dir, handlers) = create_test_handlers().await;

        let result = handlers
            .format_conflicts(Parameters(McpParams(core::FormatConflicts::default())))
            .await
            .unwrap();
        assert_eq!(text_of(&result), "");
    }
}
