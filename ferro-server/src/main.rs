use ferro_server::{Config, Server, ServerState, print_banner};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. 环境 (dotenv, 日志)
    dotenv::dotenv().ok();
    ferro_server::init_logger();

    print_banner();

    tracing::info!("Ferro back-office server starting...");

    // 2. 加载配置
    let config = Config::from_env();

    // 3. 初始化状态 (确保工作目录与快照文档存在)
    let state = ServerState::initialize(&config)?;

    // 4. 启动 HTTP 服务器
    let server = Server::with_state(config, state);
    if let Err(e) = server.run().await {
        tracing::error!("Server error: {}", e);
        return Err(e.into());
    }

    Ok(())
}
