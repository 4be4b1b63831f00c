//! Shell Adapter - 通过平台 shell 执行命令

mod shell_runner;

pub use shell_runner::{ShellCommandRunner, ShellCommandRunnerConfig};
