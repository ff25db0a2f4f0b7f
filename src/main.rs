use clap::Parser;
use std::process::ExitCode;
use tracing::error;

use update_label::cli::Cli;
use update_label::{logger, App};

#[tokio::main]
async fn main() -> ExitCode {
    // 初始化日志
    logger::init();

    let cli = Cli::parse();

    match run(&cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("✗ ERROR: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: &Cli) -> anyhow::Result<()> {
    // 加载配置
    let config = cli.resolve_config()?;

    // 初始化并运行应用；单条记录失败不影响退出码
    App::initialize(config)?.run().await?;

    Ok(())
}
