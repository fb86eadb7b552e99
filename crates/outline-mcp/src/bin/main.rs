//! Outline MCP Server CLI

use anyhow::{Context, anyhow};
use clap::{Parser, ValueEnum};
use outline_mcp::OutlineMcpServer;
use outline_mcp_core::{DEFAULT_API_URL, FeatureFlags, OutlineConfig, SizePolicy, parse_flag};
use turbomcp_server::observability::ObservabilityConfig;

/// Log output for network transports; STDIO always logs JSON to stderr
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum LogFormat {
    Json,
    Human,
}

/// Outline MCP Server - the Outline knowledge base for AI agents
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Outline API token
    #[arg(long, env = "OUTLINE_API_KEY", hide_env_values = true)]
    api_key: Option<String>,

    /// Outline API base URL (self-hosted instances end in /api)
    #[arg(long, env = "OUTLINE_API_URL", default_value = DEFAULT_API_URL)]
    api_url: String,

    /// Enable response size warnings and truncation (true/1/yes)
    #[arg(long, env = "OUTLINE_RESPONSE_LIMITS", default_value = "false")]
    response_limits: String,

    /// Attach structured data to tool responses (true/1/yes)
    #[arg(long, env = "OUTLINE_STRUCTURED_OUTPUT", default_value = "false")]
    structured_output: String,

    #[arg(long, env = "OUTLINE_RESPONSE_SOFT_LIMIT_TOKENS", default_value_t = 5000)]
    soft_limit_tokens: usize,

    #[arg(long, env = "OUTLINE_RESPONSE_HARD_LIMIT_TOKENS", default_value_t = 22500)]
    hard_limit_tokens: usize,

    #[arg(long, env = "OUTLINE_RESPONSE_CHARS_PER_TOKEN", default_value_t = 4)]
    chars_per_token: usize,

    /// Refuse delete_document (true/1/yes)
    #[arg(long, env = "OUTLINE_DISABLE_DELETE", default_value = "false")]
    disable_delete: String,

    /// Refuse ask_ai_about_documents (true/1/yes)
    #[arg(long, env = "OUTLINE_DISABLE_AI_TOOLS", default_value = "false")]
    disable_ai_tools: String,

    /// Per-request timeout for Outline API calls, in seconds
    #[arg(long, env = "OUTLINE_REQUEST_TIMEOUT_SECS", default_value_t = 30)]
    request_timeout_secs: u64,

    /// Transport mode (stdio, http, websocket, tcp, unix; sse and streamable-http mean http)
    #[arg(short, long, env = "MCP_TRANSPORT", default_value = "stdio")]
    transport: String,

    /// Port for network transports
    #[arg(long, default_value = "3001")]
    port: u16,

    /// Log format for non-STDIO transports
    #[arg(long, value_enum, default_value_t = LogFormat::Json)]
    log_format: LogFormat,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    log_level: String,
}

/// Canonical transport name, or `None` for an unrecognised value
fn normalize_transport(raw: &str) -> Option<&'static str> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "stdio" => Some("stdio"),
        "http" | "sse" | "streamable-http" => Some("http"),
        "websocket" => Some("websocket"),
        "tcp" => Some("tcp"),
        "unix" => Some("unix"),
        _ => None,
    }
}

fn build_config(args: &Args) -> anyhow::Result<OutlineConfig> {
    let size_policy = SizePolicy::builder()
        .chars_per_token(args.chars_per_token)
        .soft_limit_tokens(args.soft_limit_tokens)
        .hard_limit_tokens(args.hard_limit_tokens)
        .limits_enabled(parse_flag(&args.response_limits))
        .structured_output_enabled(parse_flag(&args.structured_output))
        .build()?;

    let features = FeatureFlags {
        delete_enabled: !parse_flag(&args.disable_delete),
        ai_tools_enabled: !parse_flag(&args.disable_ai_tools),
    };

    let config = OutlineConfig::builder(args.api_key.clone().unwrap_or_default())
        .api_url(args.api_url.clone())
        .size_policy(size_policy)
        .features(features)
        .request_timeout_secs(args.request_timeout_secs)
        .build()?;
    Ok(config)
}

fn observability(log_level: &str) -> ObservabilityConfig {
    ObservabilityConfig::default()
        .with_service_name("outline-mcp")
        .with_service_version(env!("CARGO_PKG_VERSION"))
        .with_log_level(log_level.to_string())
        .enable_security_auditing()
        .enable_performance_monitoring()
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let requested = args.transport.clone();
    let transport = normalize_transport(&requested).unwrap_or("stdio");

    // STDIO: stdout carries the protocol, so logs go to stderr as structured JSON
    let log_format = if transport == "stdio" {
        LogFormat::Json
    } else {
        args.log_format
    };

    let _observability_guard = match log_format {
        LogFormat::Json => Some(
            observability(&args.log_level)
                .init()
                .map_err(|e| anyhow!("Failed to initialize observability: {}", e))?,
        ),
        LogFormat::Human => {
            use simple_logger::SimpleLogger;

            let level = args
                .log_level
                .parse::<log::LevelFilter>()
                .unwrap_or(log::LevelFilter::Info);
            SimpleLogger::new()
                .with_level(level)
                .with_utc_timestamps()
                .init()
                .map_err(|e| anyhow!("Failed to initialize logger: {}", e))?;
            None
        }
    };

    if normalize_transport(&requested).is_none() {
        log::error!(
            "Invalid transport mode: {}. Valid options: stdio, sse, streamable-http, http, websocket, tcp, unix. Falling back to stdio",
            requested
        );
    }

    log::info!("Outline MCP Server v{}", env!("CARGO_PKG_VERSION"));
    log::info!("Transport: {} | Log format: {:?}", transport, log_format);

    let config = build_config(&args).inspect_err(|e| log::error!("{}", e))?;
    log::info!(
        "Outline API: {} | response limits: {} | structured output: {}",
        config.api_url,
        config.size_policy.limits_enabled,
        config.size_policy.structured_output_enabled
    );
    if !config.features.delete_enabled {
        log::info!("delete_document disabled");
    }
    if !config.features.ai_tools_enabled {
        log::info!("ask_ai_about_documents disabled");
    }

    let server = OutlineMcpServer::new(config).context("Failed to create MCP server")?;

    match transport {
        "stdio" => {
            log::info!("Running in STDIO mode for MCP protocol");
            server
                .run_stdio()
                .await
                .map_err(|e| anyhow!("STDIO server failed: {}", e))?;
        }
        #[cfg(feature = "http")]
        "http" => {
            let addr = format!("127.0.0.1:{}", args.port);
            log::info!("Running HTTP server on {}", addr);
            server
                .run_http(&addr)
                .await
                .map_err(|e| anyhow!("HTTP server failed: {}", e))?;
        }
        #[cfg(feature = "websocket")]
        "websocket" => {
            let addr = format!("127.0.0.1:{}", args.port);
            log::info!("Running WebSocket server on {}", addr);
            server
                .run_websocket(&addr)
                .await
                .map_err(|e| anyhow!("WebSocket server failed: {}", e))?;
        }
        #[cfg(feature = "tcp")]
        "tcp" => {
            let addr = format!("127.0.0.1:{}", args.port);
            log::info!("Running TCP server on {}", addr);
            server
                .run_tcp(&addr)
                .await
                .map_err(|e| anyhow!("TCP server failed: {}", e))?;
        }
        #[cfg(feature = "unix")]
        "unix" => {
            let socket_path = "/tmp/outline-mcp.sock".to_string();
            log::info!("Running Unix socket server on {}", socket_path);
            server
                .run_unix(&socket_path)
                .await
                .map_err(|e| anyhow!("Unix socket server failed: {}", e))?;
        }
        other => {
            let feature = match other {
                "http" => "HTTP transport not enabled. Rebuild with --features http",
                "websocket" => "WebSocket transport not enabled. Rebuild with --features websocket",
                "tcp" => "TCP transport not enabled. Rebuild with --features tcp",
                _ => "Unix socket transport not enabled. Rebuild with --features unix",
            };
            return Err(anyhow!(feature));
        }
    }

    Ok(())
}
