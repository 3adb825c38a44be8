//! arclog - ARCTOOL LOG CONVERTER
//!
//! ArcTool 로더 로그에서 레코드 줄을 추출하여 CSV 또는 JSON 보고서로 변환하는
//! CLI 도구 및 업로드 서버입니다.
//!
//! # 주요 기능
//!
//! - 🔍 **레코드 추출**: `Sr.No = ..; WPRN = ..; PremiseID = ..` 줄만 골라 파싱
//! - 📄 **CSV / JSON 출력**: 고정 헤더 CSV 또는 압축 JSON 배열
//! - 📚 **다중 입력**: 여러 로그 파일을 인자 순서대로 이어 붙여 하나의 보고서로
//! - 🌐 **업로드 서버**: multipart 업로드를 받아 같은 변환을 수행
//! - 📈 **처리 통계**: 읽은 줄, 레코드 수, 입출력 용량 표시
//!
//! 형식이 맞지 않는 레코드 줄이 하나라도 있거나 레코드가 하나도 없으면 변환은
//! 실패하며 부분 보고서는 출력하지 않습니다.
//!
//! # 예제
//!
//! ```bash
//! # 기본 사용법 (CSV)
//! arclog LoaderLogs_19-02-2020.log > report.csv
//!
//! # 여러 파일을 JSON으로
//! arclog --format json file1.log file2.log > report.json
//!
//! # 업로드 서버
//! arclog-server --addr 0.0.0.0:8085
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod extract;
pub mod logging;
pub mod processor;
pub mod serialize;
pub mod server;
pub mod stats;

// Re-exports for convenient access
pub use cli::{Args, OutputFormat, ServeArgs};
pub use config::{BuildInfo, ServerConfig};
pub use error::{ArcError, Result, ScanError};
pub use extract::{parse_record_line, parse_report, Record, Report};
pub use processor::{open_inputs, process_report, process_report_to_path};
pub use serialize::{write_csv, write_json, write_report};
pub use stats::{format_bytes, Statistics};
