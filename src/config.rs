//! 실행 설정 모듈
//!
//! 빌드 정보와 서버 설정을 명시적인 구조체로 전달합니다.

use std::fmt;
use std::net::SocketAddr;
use std::time::Duration;

use crate::cli::ServeArgs;

/// 업로드 최대 크기 기본값 (1 MiB)
pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 1024 * 1024;

/// 빌드 시점 정보
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildInfo {
    pub version: String,
    pub git_ref: String,
    pub build_time: String,
}

impl BuildInfo {
    pub fn new(
        version: impl Into<String>,
        git_ref: impl Into<String>,
        build_time: impl Into<String>,
    ) -> Self {
        Self {
            version: version.into(),
            git_ref: git_ref.into(),
            build_time: build_time.into(),
        }
    }

    /// 현재 바이너리의 빌드 정보
    ///
    /// `ARCLOG_GIT_REF`, `ARCLOG_BUILD_TIME` 은 컴파일 시 환경 변수로 전달합니다.
    pub fn current() -> Self {
        Self::new(
            env!("CARGO_PKG_VERSION"),
            option_env!("ARCLOG_GIT_REF").unwrap_or("unknown"),
            option_env!("ARCLOG_BUILD_TIME").unwrap_or("unknown"),
        )
    }
}

impl fmt::Display for BuildInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Version: {}", self.version)?;
        writeln!(f, "GitRef: {}", self.git_ref)?;
        writeln!(f, "Build Time: {}", self.build_time)
    }
}

/// 업로드 서버 설정
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub addr: SocketAddr,
    pub max_upload_bytes: usize,
    pub request_timeout: Duration,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            addr: SocketAddr::from(([0, 0, 0, 0], 8085)),
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
            request_timeout: Duration::from_secs(1),
        }
    }
}

impl ServerConfig {
    /// 업로드 최대 크기 설정
    pub fn with_max_upload_bytes(mut self, max_upload_bytes: usize) -> Self {
        self.max_upload_bytes = max_upload_bytes;
        self
    }

    /// 요청 제한 시간 설정
    pub fn with_request_timeout(mut self, request_timeout: Duration) -> Self {
        self.request_timeout = request_timeout;
        self
    }
}

impl From<&ServeArgs> for ServerConfig {
    fn from(args: &ServeArgs) -> Self {
        Self {
            addr: args.addr,
            max_upload_bytes: args.max_upload_bytes,
            request_timeout: Duration::from_secs(args.timeout_secs),
        }
    }
}
