//! Request pipeline
//!
//! Task submission -> completion -> descriptor validation -> materialization
//! -> execution -> captured output. Strictly sequential within one request;
//! concurrent requests share the store safely through filename uniqueness
//! alone. Every failure is terminal for the request - nothing is retried.

use crate::descriptor::ScriptDescriptor;
use crate::executor::ScriptExecutor;
use crate::store::ScriptStore;
use scriptforge_foundation::{Error, Result};
use scriptforge_provider::{CompletionProvider, SYSTEM_PROMPT};
use std::sync::Arc;

/// The request-to-execution pipeline
pub struct TaskPipeline {
    provider: Arc<dyn CompletionProvider>,
    store: ScriptStore,
    executor: Arc<dyn ScriptExecutor>,
}

impl TaskPipeline {
    /// Wire a pipeline from its collaborators
    pub fn new(
        provider: Arc<dyn CompletionProvider>,
        store: ScriptStore,
        executor: Arc<dyn ScriptExecutor>,
    ) -> Self {
        Self {
            provider,
            store,
            executor,
        }
    }

    /// Run a natural-language task end to end, returning the script output.
    pub async fn run_task(&self, task: &str) -> Result<String> {
        if task.trim().is_empty() {
            return Err(Error::InvalidInput("task must not be empty".to_string()));
        }

        tracing::info!(task, "Processing task");

        let raw = self
            .provider
            .complete(SYSTEM_PROMPT, task)
            .await
            .map_err(Error::from)?;

        self.execute_raw(&raw).await
    }

    /// Validate, materialize, and execute a raw completion text.
    ///
    /// Validation happens before materialization, so a malformed descriptor
    /// leaves the store untouched.
    pub async fn execute_raw(&self, raw: &str) -> Result<String> {
        let descriptor = ScriptDescriptor::parse(raw)?;
        let path = self.store.materialize(&descriptor)?;
        self.executor.run(&path, descriptor.language()).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::executor::LocalExecutor;
    use async_trait::async_trait;
    use scriptforge_provider::ProviderError;

    /// Provider that replays a canned completion without any network
    struct ScriptedProvider(std::result::Result<String, ProviderError>);

    #[async_trait]
    impl CompletionProvider for ScriptedProvider {
        async fn complete(
            &self,
            _system_prompt: &str,
            _task: &str,
        ) -> std::result::Result<String, ProviderError> {
            self.0.clone()
        }
    }

    fn pipeline(reply: std::result::Result<String, ProviderError>) -> (tempfile::TempDir, TaskPipeline) {
        let dir = tempfile::tempdir().unwrap();
        let store = ScriptStore::new(dir.path()).unwrap();
        let pipeline = TaskPipeline::new(
            Arc::new(ScriptedProvider(reply)),
            store,
            Arc::new(LocalExecutor::new()),
        );
        (dir, pipeline)
    }

    fn artifact_count(dir: &tempfile::TempDir) -> usize {
        std::fs::read_dir(dir.path()).unwrap().count()
    }

    #[tokio::test]
    async fn test_roundtrip_python_task() {
        let (_dir, pipeline) = pipeline(Ok(
            r#"{"code":"print('x')","language":"python","exec":"ignored"}"#.to_string(),
        ));
        assert_eq!(pipeline.run_task("print x").await.unwrap(), "x");
    }

    #[tokio::test]
    async fn test_empty_task_rejected() {
        let (dir, pipeline) = pipeline(Ok("unused".to_string()));
        let err = pipeline.run_task("   ").await.unwrap_err();
        assert!(matches!(err, Error::InvalidInput(_)));
        assert_eq!(artifact_count(&dir), 0);
    }

    #[tokio::test]
    async fn test_malformed_completion_writes_nothing() {
        let (dir, pipeline) = pipeline(Ok("not json at all".to_string()));
        let err = pipeline.run_task("do something").await.unwrap_err();
        assert!(matches!(err, Error::InvalidDescriptor(_)));
        assert_eq!(artifact_count(&dir), 0);
    }

    #[tokio::test]
    async fn test_missing_fields_write_nothing() {
        let (dir, pipeline) = pipeline(Ok(r#"{"code":"print('x')"}"#.to_string()));
        let err = pipeline.run_task("do something").await.unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("language"));
        assert!(msg.contains("exec"));
        assert_eq!(artifact_count(&dir), 0);
    }

    #[tokio::test]
    async fn test_provider_failure_propagates() {
        let (dir, pipeline) = pipeline(Err(ProviderError::InvalidResponse(
            "No choices in response".to_string(),
        )));
        let err = pipeline.run_task("do something").await.unwrap_err();
        assert!(matches!(err, Error::Provider(_)));
        assert!(err.to_string().contains("No choices"));
        assert_eq!(artifact_count(&dir), 0);
    }

    #[tokio::test]
    async fn test_failing_script_surfaces_stderr() {
        let (_dir, pipeline) = pipeline(Ok(
            r#"{"code":"raise RuntimeError('bad input')","language":"python","exec":"ignored"}"#
                .to_string(),
        ));
        let err = pipeline.run_task("explode").await.unwrap_err();
        match err {
            Error::Execution { stderr, .. } => assert!(stderr.contains("bad input")),
            other => panic!("expected execution error, got {other:?}"),
        }
    }
}
