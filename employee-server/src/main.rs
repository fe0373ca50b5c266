use employee_server::{Server, ServerState, setup_environment};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. 设置环境 (dotenv, 日志) 并加载配置
    let config = setup_environment();

    tracing::info!(
        environment = %config.environment,
        database = %config.database_path,
        "Employee directory server starting..."
    );

    // 2. 初始化服务器状态 (数据库 + 建表)
    let state = ServerState::initialize(&config).await?;

    // 3. 启动 HTTP 服务器, Ctrl-C / SIGTERM 时优雅关闭
    let server = Server::with_state(config, state);
    if let Err(e) = server.run().await {
        tracing::error!("Server error: {e}");
        return Err(e.into());
    }

    Ok(())
}
