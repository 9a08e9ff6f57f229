use anyhow::Result;
use tracing::error;

use fragen_trainer::{logger, App, Config};

#[tokio::main]
async fn main() -> Result<()> {
    // 初始化日志
    logger::init();

    // 加载配置，缺少 API Key 时拒绝启动
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("❌ 配置加载失败: {}", e);
            eprintln!(
                "OpenAI API-Key nicht gefunden. Bitte die Umgebungsvariable OPENAI_API_KEY setzen."
            );
            std::process::exit(1);
        }
    };

    // 运行应用
    App::new(config).run().await?;

    Ok(())
}
