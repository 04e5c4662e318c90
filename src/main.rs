use anyhow::Result;
use clap::Parser;
use timed_quiz::utils::logging;
use timed_quiz::{App, Cli, Config};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // 加载配置
    let config = Config::load(&cli)?;

    // 初始化日志
    logging::init(config.verbose_logging);

    // 初始化并运行应用
    let _summary = App::initialize(config)?.run().await?;

    Ok(())
}
