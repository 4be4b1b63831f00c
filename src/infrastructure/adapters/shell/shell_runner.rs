//! Shell Command Runner - 通过平台 shell 执行命令
//!
//! 实现 CommandRunnerPort trait，命令文本作为一个整体交给 shell：
//! - Unix: `sh -c <command>`
//! - Windows: `cmd /C <command>`
//!
//! shell 元字符（`&&`、`;`、`|`、`$()` 等）全部按 shell 语义解释。

use async_trait::async_trait;
use std::process::{ExitStatus, Stdio};
use tokio::process::Command;

use crate::application::ports::{CommandError, CommandOutput, CommandRunnerPort};

/// Shell Runner 配置
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellCommandRunnerConfig {
    /// shell 可执行文件
    pub program: String,
    /// 让 shell 执行后续字符串的参数
    pub command_flag: String,
}

impl Default for ShellCommandRunnerConfig {
    #[cfg(unix)]
    fn default() -> Self {
        Self {
            program: "sh".to_string(),
            command_flag: "-c".to_string(),
        }
    }

    #[cfg(not(unix))]
    fn default() -> Self {
        Self {
            program: "cmd".to_string(),
            command_flag: "/C".to_string(),
        }
    }
}

/// Shell Command Runner
pub struct ShellCommandRunner {
    config: ShellCommandRunnerConfig,
}

impl ShellCommandRunner {
    pub fn new(config: ShellCommandRunnerConfig) -> Self {
        tracing::debug!(
            program = %config.program,
            flag = %config.command_flag,
            "ShellCommandRunner initialized"
        );
        Self { config }
    }

    /// 使用平台默认 shell 创建
    pub fn with_defaults() -> Self {
        Self::new(ShellCommandRunnerConfig::default())
    }
}

impl Default for ShellCommandRunner {
    fn default() -> Self {
        Self::with_defaults()
    }
}

#[async_trait]
impl CommandRunnerPort for ShellCommandRunner {
    async fn run(&self, command: &str) -> Result<CommandOutput, CommandError> {
        let output = Command::new(&self.config.program)
            .arg(&self.config.command_flag)
            .arg(command)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .await?;

        check_status(command, output.status)?;

        Ok(CommandOutput {
            stdout: String::from_utf8(output.stdout)?,
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}

fn check_status(command: &str, status: ExitStatus) -> Result<(), CommandError> {
    if status.success() {
        return Ok(());
    }

    if let Some(code) = status.code() {
        return Err(CommandError::NonZeroExit {
            command: command.to_string(),
            code,
        });
    }

    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return Err(CommandError::Signaled {
                command: command.to_string(),
                signal,
            });
        }
    }

    Err(CommandError::Terminated {
        command: command.to_string(),
    })
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = ShellCommandRunnerConfig::default();
        assert_eq!(config.program, "sh");
        assert_eq!(config.command_flag, "-c");
    }

    #[tokio::test]
    async fn test_captures_stdout() {
        let runner = ShellCommandRunner::with_defaults();
        let output = runner.run(r#"echo "hello""#).await.unwrap();
        assert_eq!(output.stdout, "hello\n");
    }

    #[tokio::test]
    async fn test_shell_metacharacters_are_interpreted() {
        let runner = ShellCommandRunner::with_defaults();
        let output = runner
            .run(r#"echo "first" && echo "second"; printf '%s' "$(echo third)""#)
            .await
            .unwrap();
        assert_eq!(output.stdout, "first\nsecond\nthird");
    }

    #[tokio::test]
    async fn test_stderr_is_kept_apart() {
        let runner = ShellCommandRunner::with_defaults();
        let output = runner.run("echo out; echo err 1>&2").await.unwrap();
        assert_eq!(output.stdout, "out\n");
        assert_eq!(output.stderr, "err\n");
    }

    #[tokio::test]
    async fn test_non_zero_exit() {
        let runner = ShellCommandRunner::with_defaults();
        let err = runner.run("false").await.unwrap_err();
        assert!(matches!(err, CommandError::NonZeroExit { code: 1, .. }));
        assert_eq!(
            err.to_string(),
            "Command 'false' returned non-zero exit status 1."
        );
    }

    #[tokio::test]
    async fn test_missing_executable_is_exit_127() {
        let runner = ShellCommandRunner::with_defaults();
        let err = runner
            .run("invalid_command_that_does_not_exist")
            .await
            .unwrap_err();
        assert!(matches!(err, CommandError::NonZeroExit { code: 127, .. }));
        assert!(err.is_execution_failure());
    }

    #[tokio::test]
    async fn test_killed_by_signal() {
        let runner = ShellCommandRunner::with_defaults();
        let err = runner.run("kill -9 $$").await.unwrap_err();
        assert!(matches!(err, CommandError::Signaled { signal: 9, .. }));
    }

    #[tokio::test]
    async fn test_invalid_utf8_output() {
        let runner = ShellCommandRunner::with_defaults();
        let err = runner.run(r"printf '\377\376'").await.unwrap_err();
        assert!(matches!(err, CommandError::InvalidOutput(_)));
    }

    #[tokio::test]
    async fn test_missing_shell_is_spawn_error() {
        let runner = ShellCommandRunner::new(ShellCommandRunnerConfig {
            program: "/nonexistent/shell".to_string(),
            command_flag: "-c".to_string(),
        });
        let err = runner.run("echo hi").await.unwrap_err();
        assert!(matches!(err, CommandError::Spawn(_)));
    }
}
