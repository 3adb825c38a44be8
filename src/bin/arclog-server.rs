//! arclog-server - ArcTool 로그 업로드 변환 서버
//!
//! `POST /csv`, `POST /json` 으로 업로드된 로그를 보고서로 변환합니다.

use anyhow::{Context, Result};
use clap::Parser;

use arclog::{
    cli::ServeArgs,
    config::{BuildInfo, ServerConfig},
    logging, server,
};

#[tokio::main]
async fn main() -> Result<()> {
    let args = ServeArgs::parse();

    logging::init_logging(logging::server_level(args.verbose))?;

    let config = ServerConfig::from(&args);
    let app = server::router(&config, BuildInfo::current());

    let listener = tokio::net::TcpListener::bind(config.addr)
        .await
        .with_context(|| format!("주소에 바인드할 수 없습니다: {}", config.addr))?;

    tracing::info!(
        addr = %config.addr,
        max_upload_bytes = config.max_upload_bytes,
        "arclog-server 시작"
    );

    axum::serve(listener, app).await.context("서버 실행 실패")?;

    Ok(())
}
