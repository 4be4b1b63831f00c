//! Datatap - 命令注入演示服务
//!
//! 启动流程：命令行参数 -> 配置 -> 日志 -> Tokio 运行时 -> HTTP 服务器

use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;

use datatap::config::{load_config, print_config, AppConfig};
use datatap::infrastructure::http::{shutdown_signal, AppState, HttpServer, ServerConfig};
use datatap::infrastructure::ShellCommandRunner;

/// Datatap: health check and data processing API
#[derive(Parser, Debug)]
#[command(name = "datatap", version, about)]
struct Args {
    /// Path to a TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Log the effective configuration and exit
    #[arg(long)]
    print_config: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // 加载配置（优先级：PORT/DEBUG > DATATAP_* > 配置文件 > 默认值）
    let config = load_config(args.config.as_deref())
        .map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;

    init_tracing(&config);
    print_config(&config);

    if args.print_config {
        return Ok(());
    }

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(config.server.workers)
        .thread_name("datatap-worker")
        .enable_all()
        .build()?;

    runtime.block_on(serve(config))
}

/// 初始化日志，`RUST_LOG` 优先于配置
fn init_tracing(config: &AppConfig) {
    let level = config.effective_log_level();
    let log_filter = format!("{},datatap={},tower_http={}", level, level, level);
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&log_filter));

    if config.log.json {
        tracing_subscriber::fmt().json().with_env_filter(filter).init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}

async fn serve(config: AppConfig) -> anyhow::Result<()> {
    tracing::warn!(
        "POST /data executes the `command` field through the system shell without validation; \
         run only in an isolated environment"
    );

    let runner = Arc::new(ShellCommandRunner::with_defaults());
    let state = AppState::new(runner, config.service.name.clone());

    let server_config = ServerConfig::new(&config.server.host, config.server.port);
    let server = HttpServer::new(server_config, state);

    tracing::info!("Starting HTTP server...");

    server.run_with_shutdown(shutdown_signal()).await?;

    tracing::info!("Server shutdown complete");

    Ok(())
}
