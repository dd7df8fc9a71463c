use crate::core::prompt::{PROMPT_SUMMARY, Prompt, PromptAction};

pub const APP_NAME: &str = "Task Tracker";

#[derive(Debug, thiserror::Error)]
pub enum NotifyError {
    #[error("failed to run {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },
    #[error("{program} exited with {status}: {stderr}")]
    Failed {
        program: String,
        status: std::process::ExitStatus,
        stderr: String,
    },
}

/// Shows prompts through `notify-send`, which blocks until the user picks an
/// action or dismisses the notification and prints the chosen action key.
#[derive(Debug, Clone)]
pub struct NotifySend {
    program: String,
}

impl NotifySend {
    pub fn new(program: impl Into<String>) -> Self {
        Self { program: program.into() }
    }

    pub fn args(&self, prompt: &Prompt) -> Vec<String> {
        let mut args = vec![
            format!("--app-name={}", APP_NAME),
            "--urgency=critical".to_string(),
            "--expire-time=0".to_string(),
            "--wait".to_string(),
        ];
        for action in prompt.actions() {
            args.push(format!("--action={}={}", action.key(), action.label()));
        }
        args.push(PROMPT_SUMMARY.to_string());
        args.push(prompt.body());
        args
    }

    /// Resolves once the notification is gone. `None` means it was dismissed without an action.
    pub async fn show(&self, prompt: &Prompt) -> Result<Option<PromptAction>, NotifyError> {
        log::debug!("Showing prompt {:?}", prompt);
        let output = tokio::process::Command::new(&self.program)
            .args(self.args(prompt))
            .output()
            .await
            .map_err(|source| NotifyError::Spawn {
                program: self.program.clone(),
                source,
            })?;

        if !output.status.success() {
            return Err(NotifyError::Failed {
                program: self.program.clone(),
                status: output.status,
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }
        Ok(parse_action(&String::from_utf8_lossy(&output.stdout), prompt))
    }
}

/// The action named on stdout, if the prompt offers it.
pub fn parse_action(stdout: &str, prompt: &Prompt) -> Option<PromptAction> {
    let key = stdout.lines().map(str::trim).find(|line| !line.is_empty())?;
    PromptAction::from_key(key).filter(|action| prompt.offers(*action))
}
