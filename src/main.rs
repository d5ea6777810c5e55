//! resemble-mcp - Resemble AI 语音工具服务
//!
//! 默认以 MCP stdio 方式运行；`server.transport = "http"` 时改为 REST 宿主

use std::sync::Arc;

use resemble_mcp::application::ToolService;
use resemble_mcp::config::{load_config, print_config, AppConfig, Transport};
use resemble_mcp::infrastructure::adapters::{ResembleClient, ResembleClientConfig};
use resemble_mcp::infrastructure::credential::{CredentialProvider, API_KEY_ENV};
use resemble_mcp::infrastructure::http::{AppState, HttpServer, ServerConfig};
use resemble_mcp::infrastructure::mcp::SpeechToolServer;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // .env 不存在时忽略
    let dotenv = dotenvy::dotenv();

    // 加载配置（优先级：环境变量 > 配置文件 > 默认值）
    let config = load_config().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;

    init_tracing(&config);

    if let Ok(path) = dotenv {
        tracing::debug!(path = %path.display(), "Loaded .env");
    }

    tracing::info!("resemble-mcp v{}", env!("CARGO_PKG_VERSION"));
    print_config(&config);

    let credential = CredentialProvider::from_env();
    if !credential.is_configured() {
        tracing::warn!(
            env = API_KEY_ENV,
            "API key not set, every tool call will report a configuration error"
        );
    }

    let client_config = ResembleClientConfig::from(&config.resemble);
    let client = Arc::new(ResembleClient::new(client_config)?);

    let tool_service = Arc::new(ToolService::new(
        credential.get_api_key(),
        config.resemble.project_uuid.clone(),
        client,
    ));

    match config.server.transport {
        Transport::Stdio => {
            SpeechToolServer::new(tool_service).serve_stdio().await?;
        }
        Transport::Http => {
            let server_config = ServerConfig::new(&config.server.host, config.server.port);
            let state = AppState::new(tool_service, credential.is_configured());

            HttpServer::new(server_config, state)
                .run_with_shutdown(async {
                    if let Err(e) = tokio::signal::ctrl_c().await {
                        tracing::error!(error = %e, "Failed to listen for ctrl-c");
                        return;
                    }
                    tracing::info!("Received shutdown signal");
                })
                .await?;
        }
    }

    tracing::info!("Shutdown complete");
    Ok(())
}

/// 日志写到 stderr，stdout 留给 MCP 协议
fn init_tracing(config: &AppConfig) {
    let log_filter = format!(
        "{},resemble_mcp={},tower_http=debug",
        config.log.level, config.log.level
    );
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&log_filter));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(false);

    if config.log.json {
        builder.json().init();
    } else {
        builder.init();
    }
}
