//! CLI 인자 파싱 모듈
//!
//! clap을 사용한 명령줄 인자 정의 및 파싱을 담당합니다.

use clap::{Parser, ValueEnum};
use std::net::SocketAddr;
use std::path::PathBuf;

/// 보고서 출력 형식
#[derive(Debug, Clone, Copy, ValueEnum, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// `Sr.No,WPRN,PremiseID` 헤더를 가진 CSV
    #[default]
    Csv,
    /// `sr_no`, `wprn`, `premise_id` 키를 가진 객체의 JSON 배열
    Json,
}

impl OutputFormat {
    /// HTTP 응답 Content-Type
    pub fn content_type(self) -> &'static str {
        match self {
            OutputFormat::Csv => "text/csv",
            OutputFormat::Json => "application/json",
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Csv => write!(f, "csv"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

/// arclog CLI 인자 구조체
#[derive(Parser, Debug)]
#[command(
    name = "arclog",
    author = "YourName <your@email.com>",
    disable_version_flag = true,
    about = "ARCTOOL LOG CONVERTER - ArcTool 로더 로그를 CSV/JSON 보고서로 변환",
    long_about = r#"
ARCTOOL LOG CONVERTER
=====================

ArcTool 로더 로그에서 `Sr.No = ..; WPRN = ..; PremiseID = ..` 줄을 추출하여
CSV 또는 JSON 보고서로 출력합니다.

여러 파일을 지정하면 인자 순서대로 이어 붙여 하나의 입력으로 처리합니다.
파일을 지정하지 않으면 표준 입력을 읽습니다.

예제:
  arclog LoaderLogs_19-02-2020.log > report.csv
  arclog file1.log file2.log file3.log > report.csv
  arclog --format json < LoaderLogs_19-02-2020.log > report.json
  arclog -f json -o report.json file1.log file2.log
"#
)]
pub struct Args {
    /// ArcTool 로그 파일 경로 (없으면 표준 입력)
    #[arg(value_name = "FILE")]
    pub files: Vec<PathBuf>,

    /// 출력 형식
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Csv)]
    pub format: OutputFormat,

    /// 출력 파일 경로 (없으면 표준 출력)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// 버전 정보 출력
    #[arg(short = 'v', long)]
    pub version: bool,

    /// 상세 로그 및 처리 통계 출력
    #[arg(long)]
    pub verbose: bool,
}

/// arclog-server 인자 구조체
#[derive(Parser, Debug)]
#[command(
    name = "arclog-server",
    version,
    about = "ArcTool 로그 업로드를 받아 CSV/JSON 보고서를 반환하는 HTTP 서버",
    long_about = r#"
ARCTOOL LOG CONVERTER SERVER
============================

multipart 폼 필드 `file` 로 업로드된 로그를 변환합니다.

  POST /csv     CSV 보고서 반환
  POST /json    JSON 보고서 반환
  GET  /health  상태 확인

예제:
  arclog-server --addr 0.0.0.0:8085
  curl -F file=@LoaderLogs_19-02-2020.log http://localhost:8085/csv
"#
)]
pub struct ServeArgs {
    /// 바인드 주소
    #[arg(long, default_value = "0.0.0.0:8085")]
    pub addr: SocketAddr,

    /// 업로드 최대 크기 (바이트)
    #[arg(long, default_value_t = 1024 * 1024)]
    pub max_upload_bytes: usize,

    /// 요청 처리 제한 시간 (초)
    #[arg(long, default_value_t = 1)]
    pub timeout_secs: u64,

    /// 상세 로그 출력
    #[arg(long)]
    pub verbose: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_defaults() {
        let args = Args::try_parse_from(["arclog"]).unwrap();
        assert!(args.files.is_empty());
        assert_eq!(args.format, OutputFormat::Csv);
        assert!(args.output.is_none());
        assert!(!args.version);
    }

    #[test]
    fn test_args_files_in_order() {
        let args = Args::try_parse_from(["arclog", "-f", "json", "a.log", "b.log"]).unwrap();
        assert_eq!(args.format, OutputFormat::Json);
        assert_eq!(
            args.files,
            vec![PathBuf::from("a.log"), PathBuf::from("b.log")]
        );
    }

    #[test]
    fn test_args_version_flag() {
        assert!(Args::try_parse_from(["arclog", "-v"]).unwrap().version);
        assert!(Args::try_parse_from(["arclog", "--version"]).unwrap().version);
    }

    #[test]
    fn test_args_rejects_unknown_flag() {
        assert!(Args::try_parse_from(["arclog", "-w"]).is_err());
    }

    #[test]
    fn test_serve_args_defaults() {
        let args = ServeArgs::try_parse_from(["arclog-server"]).unwrap();
        assert_eq!(args.addr, "0.0.0.0:8085".parse::<SocketAddr>().unwrap());
        assert_eq!(args.max_upload_bytes, 1024 * 1024);
        assert_eq!(args.timeout_secs, 1);
    }

    #[test]
    fn test_content_type() {
        assert_eq!(OutputFormat::Csv.content_type(), "text/csv");
        assert_eq!(OutputFormat::Json.content_type(), "application/json");
    }
}
