//! 에러 타입 정의 모듈
//!
//! arclog에서 발생할 수 있는 모든 에러 타입을 정의합니다.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// arclog에서 발생할 수 있는 에러 타입
#[derive(Error, Debug)]
pub enum ArcError {
    /// 입력 파일 열기 실패
    #[error("입력 파일을 열 수 없습니다 ({path}): {source}")]
    InputOpen { path: PathBuf, source: io::Error },

    /// 입력 스트림 읽기 실패
    #[error("입력을 읽을 수 없습니다: {0}")]
    Read(#[source] io::Error),

    /// `Sr.No`로 시작하지만 형식이 맞지 않는 줄
    #[error("로그 줄 {line_no} 처리 실패: {line}: {reason}")]
    MalformedRecord {
        line_no: usize,
        line: String,
        reason: ScanError,
    },

    /// 추출된 레코드 없음
    #[error("입력에 처리할 데이터가 없습니다")]
    NoData,

    /// 출력 파일 생성 실패
    #[error("출력 파일을 만들 수 없습니다 ({path}): {source}")]
    OutputCreate { path: PathBuf, source: io::Error },

    /// 출력 쓰기 실패
    #[error("출력 쓰기 실패: {0}")]
    Write(#[source] io::Error),

    /// CSV 직렬화 실패
    #[error("CSV 직렬화 실패: {0}")]
    Csv(#[from] csv::Error),

    /// JSON 직렬화 실패
    #[error("JSON 직렬화 실패: {0}")]
    Json(#[from] serde_json::Error),
}

impl ArcError {
    /// 입력 내용 때문에 발생한 에러인지 여부
    ///
    /// 업로드 서버는 이 값으로 400과 500 응답을 구분합니다.
    pub fn is_input_error(&self) -> bool {
        matches!(self, ArcError::MalformedRecord { .. } | ArcError::NoData)
    }
}

/// 레코드 줄 스캔 실패 원인
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScanError {
    /// 기대한 라벨 또는 `=` 가 없음
    #[error("`{expected}` 이(가) 필요합니다")]
    Expected { expected: &'static str },

    /// 라벨 뒤에 값이 없음
    #[error("`{label}` 값이 없습니다")]
    MissingValue { label: &'static str },
}

/// arclog 결과 타입 별칭
pub type Result<T> = std::result::Result<T, ArcError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_error_classification() {
        assert!(ArcError::NoData.is_input_error());
        assert!(ArcError::MalformedRecord {
            line_no: 3,
            line: "Sr.No = A WPRM = B".to_string(),
            reason: ScanError::Expected { expected: "WPRN" },
        }
        .is_input_error());
        assert!(!ArcError::Read(io::Error::new(io::ErrorKind::Other, "boom")).is_input_error());
    }

    #[test]
    fn test_malformed_record_message_contains_line() {
        let err = ArcError::MalformedRecord {
            line_no: 4,
            line: "Sr.No = X WPRM = 1 PremiseID = 2".to_string(),
            reason: ScanError::Expected { expected: "WPRN" },
        };
        let message = err.to_string();
        assert!(message.contains("Sr.No = X WPRM = 1 PremiseID = 2"));
        assert!(message.contains("WPRN"));
        assert!(message.contains('4'));
    }
}
