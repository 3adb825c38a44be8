//! 로깅 초기화 모듈
//!
//! `tracing-subscriber` 로그는 표준 에러로 출력합니다. 표준 출력은 보고서
//! 데이터 전용입니다. `RUST_LOG` 가 설정되어 있으면 지정한 레벨보다 우선합니다.

use anyhow::Result;
use tracing::Level;
use tracing_subscriber::EnvFilter;

/// 상세 모드 여부에 따른 CLI 기본 로그 레벨
pub fn cli_level(verbose: bool) -> Level {
    if verbose {
        Level::DEBUG
    } else {
        Level::WARN
    }
}

/// 상세 모드 여부에 따른 서버 기본 로그 레벨
pub fn server_level(verbose: bool) -> Level {
    if verbose {
        Level::DEBUG
    } else {
        Level::INFO
    }
}

/// 전역 로거 초기화
pub fn init_logging(level: Level) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(build_env_filter(level))
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("로깅 초기화 실패: {}", e))
}

/// `RUST_LOG` 를 우선하는 필터 생성
///
/// 외부 크레이트는 warn 레벨로 유지합니다.
fn build_env_filter(level: Level) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        let level = level.as_str().to_lowercase();
        EnvFilter::new(format!(
            "warn,arclog={level},arclog_server={level},tower_http={level}"
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_levels() {
        assert_eq!(cli_level(false), Level::WARN);
        assert_eq!(cli_level(true), Level::DEBUG);
        assert_eq!(server_level(false), Level::INFO);
        assert_eq!(server_level(true), Level::DEBUG);
    }
}
