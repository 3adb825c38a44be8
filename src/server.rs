//! 업로드 서버 모듈
//!
//! multipart 폼 필드 `file` 로 업로드된 ArcTool 로그를 CSV 또는 JSON
//! 보고서로 변환해 응답합니다. 요청 사이에 공유하는 가변 상태는 없습니다.

use axum::{
    extract::{
        multipart::{Multipart, MultipartError, MultipartRejection},
        DefaultBodyLimit, State,
    },
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use std::sync::Arc;
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};
use tracing::{debug, warn};

use crate::cli::OutputFormat;
use crate::config::{BuildInfo, ServerConfig};
use crate::error::ArcError;
use crate::processor::process_report;

/// 업로드 파일이 담기는 폼 필드 이름
pub const UPLOAD_FIELD: &str = "file";

struct AppState {
    build: BuildInfo,
}

/// 업로드 서버 라우터 생성
pub fn router(config: &ServerConfig, build: BuildInfo) -> Router {
    let state = Arc::new(AppState { build });

    Router::new()
        .route("/csv", post(csv_report))
        .route("/json", post(json_report))
        .route("/health", get(health_check))
        .layer(DefaultBodyLimit::max(config.max_upload_bytes))
        .layer(TimeoutLayer::new(config.request_timeout))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// CSV 보고서 반환
async fn csv_report(
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Response, AppError> {
    render_upload(multipart, OutputFormat::Csv).await
}

/// JSON 보고서 반환
async fn json_report(
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Response, AppError> {
    render_upload(multipart, OutputFormat::Json).await
}

/// 상태 확인
async fn health_check(State(state): State<Arc<AppState>>) -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "healthy",
        "service": "arclog-server",
        "version": state.build.version,
    }))
}

/// 업로드된 파일을 변환
///
/// 보고서를 메모리에 모두 만든 뒤 응답하므로 실패 시 부분 본문은 전송하지
/// 않습니다.
async fn render_upload(
    multipart: Result<Multipart, MultipartRejection>,
    format: OutputFormat,
) -> Result<Response, AppError> {
    let mut multipart = multipart.map_err(|e| AppError::BadUpload(e.body_text()))?;

    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some(UPLOAD_FIELD) {
            continue;
        }
        let data = field.bytes().await?;

        let mut body = Vec::new();
        let stats = process_report(&data[..], &mut body, format).map_err(AppError::Report)?;
        debug!(
            records = stats.records,
            bytes_in = stats.bytes_read,
            bytes_out = stats.bytes_written,
            %format,
            "업로드 변환 완료"
        );

        return Ok(([(header::CONTENT_TYPE, format.content_type())], body).into_response());
    }

    Err(AppError::MissingFile)
}

/// 업로드 처리 에러
#[derive(Debug)]
pub enum AppError {
    /// 업로드 크기 제한 초과
    TooLarge,
    /// 잘못된 multipart 요청
    BadUpload(String),
    /// `file` 필드 없음
    MissingFile,
    /// 보고서 변환 실패
    Report(ArcError),
}

impl AppError {
    /// 응답 상태 코드
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::TooLarge | AppError::BadUpload(_) | AppError::MissingFile => {
                StatusCode::BAD_REQUEST
            }
            AppError::Report(e) if e.is_input_error() => StatusCode::BAD_REQUEST,
            AppError::Report(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn message(&self) -> String {
        match self {
            AppError::TooLarge => "report file is too big".to_string(),
            AppError::BadUpload(msg) => msg.clone(),
            AppError::MissingFile => format!("missing form field `{}`", UPLOAD_FIELD),
            AppError::Report(e) => e.to_string(),
        }
    }
}

impl From<MultipartError> for AppError {
    fn from(e: MultipartError) -> Self {
        if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
            AppError::TooLarge
        } else {
            AppError::BadUpload(e.body_text())
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = self.message();
        warn!(status = %status, error = %message, "업로드 요청 거부");

        (status, message).into_response()
    }
}
