use std::sync::Arc;

use async_trait::async_trait;
use dashmap::{mapref::entry::Entry, DashMap};
use thiserror::Error;

use crate::tools::{FunctionSchema, ToolError, ToolResult, ToolSchema};

#[async_trait]
pub trait Tool: Send + Sync {
    fn name(&self) -> &str;
    fn description(&self) -> &str;
    fn parameters_schema(&self) -> serde_json::Value;
    async fn execute(&self, args: serde_json::Value) -> Result<ToolResult, ToolError>;

    fn to_schema(&self) -> ToolSchema {
        ToolSchema {
            schema_type: "function".to_string(),
            function: FunctionSchema {
                name: self.name().to_string(),
                description: self.description().to_string(),
                parameters: self.parameters_schema(),
            },
        }
    }
}

pub type SharedTool = Arc<dyn Tool>;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistryError {
    #[error("tool with name '{0}' already registered")]
    DuplicateTool(String),

    #[error("invalid tool: {0}")]
    InvalidTool(String),
}

/// Tools keyed by their bare name; lookups ignore any `ns::` prefix
#[derive(Default)]
pub struct ToolRegistry {
    tools: DashMap<String, SharedTool>,
}

impl ToolRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register<T>(&self, tool: T) -> Result<(), RegistryError>
    where
        T: Tool + 'static,
    {
        let name = tool.name().trim().to_string();
        if name.is_empty() {
            return Err(RegistryError::InvalidTool(
                "tool name cannot be empty".to_string(),
            ));
        }
        // Calls are normalized before lookup, so a namespaced key is unreachable.
        if name.contains("::") {
            return Err(RegistryError::InvalidTool(format!(
                "tool name '{}' cannot contain '::'",
                name
            )));
        }

        match self.tools.entry(name) {
            Entry::Occupied(entry) => Err(RegistryError::DuplicateTool(entry.key().clone())),
            Entry::Vacant(entry) => {
                log::debug!("Registered tool '{}'", entry.key());
                entry.insert(Arc::new(tool));
                Ok(())
            }
        }
    }

    pub fn get(&self, name: &str) -> Option<SharedTool> {
        self.tools
            .get(normalize_tool_name(name.trim()))
            .map(|entry| Arc::clone(entry.value()))
    }

    /// Schemas sorted by tool name
    pub fn list_tools(&self) -> Vec<ToolSchema> {
        let mut tools: Vec<ToolSchema> = self
            .tools
            .iter()
            .map(|entry| entry.value().to_schema())
            .collect();
        tools.sort_by(|left, right| left.function.name.cmp(&right.function.name));
        tools
    }

    pub async fn execute(
        &self,
        name: &str,
        args: serde_json::Value,
    ) -> Result<ToolResult, ToolError> {
        let tool = self.get(name).ok_or_else(|| {
            ToolError::NotFound(format!(
                "Tool '{}' not found",
                normalize_tool_name(name.trim())
            ))
        })?;
        tool.execute(args).await
    }
}

/// `"tasks::add_task"` -> `"add_task"`
pub fn normalize_tool_name(name: &str) -> &str {
    name.split("::").last().unwrap_or(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    use serde_json::json;

    struct EchoTool {
        name: &'static str,
    }

    #[async_trait]
    impl Tool for EchoTool {
        fn name(&self) -> &str {
            self.name
        }

        fn description(&self) -> &str {
            "echoes its arguments"
        }

        fn parameters_schema(&self) -> serde_json::Value {
            json!({
                "type": "object",
                "properties": {}
            })
        }

        async fn execute(&self, args: serde_json::Value) -> Result<ToolResult, ToolError> {
            Ok(ToolResult::ok(args.to_string()))
        }
    }

    #[test]
    fn register_and_get() {
        let registry = ToolRegistry::new();

        assert!(registry.register(EchoTool { name: "echo" }).is_ok());
        assert!(registry.get("echo").is_some());
        assert!(registry.get("tasks::echo").is_some());
        assert!(registry.get("unknown").is_none());
    }

    #[test]
    fn duplicate_tool_registration() {
        let registry = ToolRegistry::new();
        registry.register(EchoTool { name: "dup" }).unwrap();

        let duplicate = registry.register(EchoTool { name: " dup " });

        assert!(matches!(duplicate, Err(RegistryError::DuplicateTool(name)) if name == "dup"));
        assert_eq!(registry.list_tools().len(), 1);
    }

    #[test]
    fn register_rejects_empty_tool_name() {
        let registry = ToolRegistry::new();

        let result = registry.register(EchoTool { name: "  " });

        assert!(
            matches!(result, Err(RegistryError::InvalidTool(reason)) if reason == "tool name cannot be empty")
        );
        assert!(registry.list_tools().is_empty());
    }

    #[test]
    fn register_rejects_namespaced_tool_name() {
        let registry = ToolRegistry::new();

        let result = registry.register(EchoTool { name: "tasks::echo" });

        assert!(matches!(result, Err(RegistryError::InvalidTool(_))));
        assert!(registry.get("echo").is_none());
    }

    #[test]
    fn list_tools_is_sorted_by_name() {
        let registry = ToolRegistry::new();
        registry.register(EchoTool { name: "tool_b" }).unwrap();
        registry.register(EchoTool { name: "tool_a" }).unwrap();

        let tools = registry.list_tools();

        assert_eq!(tools.len(), 2);
        assert_eq!(tools[0].function.name, "tool_a");
        assert_eq!(tools[1].function.name, "tool_b");
        assert_eq!(tools[0].schema_type, "function");
    }

    #[tokio::test]
    async fn execute_dispatches_by_normalized_name() {
        let registry = ToolRegistry::new();
        registry.register(EchoTool { name: "echo" }).unwrap();

        let result = registry
            .execute("tasks::echo", json!({"x": 1}))
            .await
            .unwrap();

        assert!(result.success);
        assert_eq!(result.result, r#"{"x":1}"#);
    }

    #[tokio::test]
    async fn execute_unknown_tool_is_not_found() {
        let registry = ToolRegistry::new();

        let err = registry.execute("missing", json!({})).await.unwrap_err();

        assert_eq!(err, ToolError::NotFound("Tool 'missing' not found".to_string()));
    }

    #[test]
    fn normalize_tool_name_handles_namespaced_inputs() {
        assert_eq!(normalize_tool_name("add_task"), "add_task");
        assert_eq!(normalize_tool_name("tasks::add_task"), "add_task");
        assert_eq!(normalize_tool_name("a::b::add_task"), "add_task");
    }
}
