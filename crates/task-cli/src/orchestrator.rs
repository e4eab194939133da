//! Scripted orchestrator
//!
//! Drives the task tools the way an agent would: every step is a `ToolCall`
//! with JSON arguments, and only the text result is kept.

use std::path::Path;

use serde::Deserialize;
use serde_json::json;
use task_core::{ToolCall, ToolExecutor};
use task_tools::render::{is_error_text, ERROR_PREFIX};
use task_tools::{SharedTaskManager, TaskToolExecutor};
use thiserror::Error;
use uuid::Uuid;

#[derive(Error, Debug)]
pub enum ScriptError {
    #[error("failed to read script {path:?}: {source}")]
    Io {
        path: std::path::PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse script: {0}")]
    Parse(#[from] serde_yaml::Error),
}

/// A list of tool calls, read from YAML or JSON
#[derive(Debug, Clone, Deserialize)]
pub struct Script {
    pub steps: Vec<ScriptStep>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ScriptStep {
    pub tool: String,
    #[serde(default)]
    pub args: serde_json::Value,
}

impl Script {
    pub fn parse(content: &str) -> Result<Self, ScriptError> {
        Ok(serde_yaml::from_str(content)?)
    }

    pub fn load(path: &Path) -> Result<Self, ScriptError> {
        let content = std::fs::read_to_string(path).map_err(|source| ScriptError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&content)
    }
}

#[derive(Debug, Clone)]
pub struct StepOutcome {
    pub call: ToolCall,
    pub output: String,
}

impl StepOutcome {
    pub fn is_error(&self) -> bool {
        is_error_text(&self.output)
    }
}

pub struct Orchestrator<'a> {
    executor: &'a dyn ToolExecutor,
    manager: SharedTaskManager,
    transcript: Vec<StepOutcome>,
}

impl<'a> Orchestrator<'a> {
    pub fn new(executor: &'a TaskToolExecutor) -> Self {
        Self::with_executor(executor, executor.manager())
    }

    /// `manager` must be the one the executor's task tools are bound to
    pub fn with_executor(executor: &'a dyn ToolExecutor, manager: SharedTaskManager) -> Self {
        Self {
            executor,
            manager,
            transcript: Vec::new(),
        }
    }

    /// Issue one tool call and record its text result
    pub async fn invoke(&mut self, tool: &str, args: serde_json::Value) -> String {
        let args = if args.is_null() { json!({}) } else { args };
        let call = ToolCall::new(format!("call_{}", Uuid::new_v4().simple()), tool, &args);

        let output = match self.executor.execute(&call).await {
            Ok(result) => result.result,
            Err(error) => format!("{ERROR_PREFIX} {error}"),
        };

        self.transcript.push(StepOutcome {
            call,
            output: output.clone(),
        });
        output
    }

    pub async fn run_script(&mut self, script: &Script) {
        for step in &script.steps {
            self.invoke(&step.tool, step.args.clone()).await;
        }
    }

    /// Break a goal into tasks, work through them, then summarise
    pub async fn run_demo(&mut self, goal: &str, tasks: &[String]) {
        self.invoke("create_task_list", json!({ "description": goal }))
            .await;
        for task in tasks {
            self.invoke("add_task", json!({ "description": task })).await;
        }
        self.invoke("get_task_list", json!({})).await;

        loop {
            let next = {
                let manager = self.manager.read().await;
                manager
                    .next_pending()
                    .map(|task| (task.id(), task.description().to_string()))
            };
            let Some((id, description)) = next else {
                break;
            };

            self.invoke("get_next_pending_task", json!({})).await;
            let started = self
                .invoke(
                    "update_task_status",
                    json!({ "task_id": id, "status": "IN_PROGRESS" }),
                )
                .await;
            if is_error_text(&started) {
                log::warn!("Stopping demo: task #{} could not be started", id);
                break;
            }

            let completed = self
                .invoke(
                    "complete_task",
                    json!({ "task_id": id, "result": format!("Finished: {}", description) }),
                )
                .await;
            if is_error_text(&completed) {
                log::warn!("Stopping demo: task #{} could not be completed", id);
                break;
            }
        }

        self.invoke("get_progress", json!({})).await;
    }

    pub fn transcript(&self) -> &[StepOutcome] {
        &self.transcript
    }

    pub fn into_transcript(self) -> Vec<StepOutcome> {
        self.transcript
    }
}
