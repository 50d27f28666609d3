//! Command-backed menu generator
//!
//! Runs a configured external program (any LLM CLI that reads a prompt on
//! stdin and prints the completion on stdout) once per generation request.

use async_trait::async_trait;
use planner_application::{GeneratorError, MenuGenerator};
use std::process::Stdio;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;
use tracing::{debug, warn};

/// Separator placed between the system prompt and the user prompt on stdin
const PROMPT_SEPARATOR: &str = "\n\n---\n\n";

/// [`MenuGenerator`] adapter that shells out to an external command
#[derive(Debug, Clone)]
pub struct CommandMenuGenerator {
    program: String,
    args: Vec<String>,
}

impl CommandMenuGenerator {
    /// Create from an argv list (`["llm", "-m", "gpt-4o"]`).
    ///
    /// Fails with [`GeneratorError::Unavailable`] when the list is empty or
    /// the program name is blank.
    pub fn from_argv(argv: &[String]) -> Result<Self, GeneratorError> {
        let (program, args) = argv
            .split_first()
            .ok_or_else(|| GeneratorError::Unavailable("no generator command configured".into()))?;
        if program.trim().is_empty() {
            return Err(GeneratorError::Unavailable(
                "generator program name is empty".into(),
            ));
        }
        Ok(Self {
            program: program.clone(),
            args: args.to_vec(),
        })
    }

    pub fn program(&self) -> &str {
        &self.program
    }
}

#[async_trait]
impl MenuGenerator for CommandMenuGenerator {
    async fn generate(&self, system_prompt: &str, prompt: &str) -> Result<String, GeneratorError> {
        debug!("Spawning generator: {} {:?}", self.program, self.args);

        let mut child = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .map_err(|e| GeneratorError::Unavailable(format!("{}: {}", self.program, e)))?;

        let mut stdin = child
            .stdin
            .take()
            .ok_or_else(|| GeneratorError::Other("Failed to capture stdin".into()))?;
        let input = format!("{}{}{}", system_prompt, PROMPT_SEPARATOR, prompt);

        // Feed stdin concurrently so a chatty child cannot block on a full stdout pipe
        let writer = tokio::spawn(async move {
            let result = stdin.write_all(input.as_bytes()).await;
            drop(stdin);
            result
        });

        let output = child
            .wait_with_output()
            .await
            .map_err(|e| GeneratorError::RequestFailed(e.to_string()))?;

        match writer.await {
            Ok(Ok(())) => {}
            // Programs that exit without reading all input close the pipe early
            Ok(Err(e)) => debug!("Generator stdin closed early: {}", e),
            Err(e) => warn!("Generator stdin writer panicked: {}", e),
        }

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            let detail = stderr.trim();
            return Err(GeneratorError::RequestFailed(if detail.is_empty() {
                format!("{} exited with {}", self.program, output.status)
            } else {
                format!("{} exited with {}: {}", self.program, output.status, detail)
            }));
        }

        let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
        debug!("Generator returned {} bytes", stdout.len());
        Ok(stdout)
    }

    fn name(&self) -> &str {
        &self.program
    }
}
