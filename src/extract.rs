//! 레코드 추출 모듈
//!
//! ArcTool 로더 로그에서 `Sr.No = ..; WPRN = ..; PremiseID = ..` 형식의 줄을
//! 찾아 레코드로 변환합니다.

use serde::{Deserialize, Serialize};
use std::io::{BufRead, BufReader, Read};
use std::slice;
use tracing::debug;

use crate::error::{ArcError, Result, ScanError};
use crate::stats::Statistics;

/// 후보 줄 접두사
pub const RECORD_PREFIX: &str = "Sr.No";

/// CSV 헤더
pub const CSV_HEADER: [&str; 3] = ["Sr.No", "WPRN", "PremiseID"];

/// 로그에서 추출한 레코드 한 건
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// 일련 번호 (예: `SKSZPUB0257-1`)
    #[serde(rename = "sr_no")]
    pub serial_number: String,
    /// WPRN (예: `2607303`)
    pub wprn: String,
    /// 건물 ID (예: `2306982`)
    #[serde(rename = "premise_id")]
    pub premise_id: String,
}

impl Record {
    /// 새 레코드 생성
    pub fn new(
        serial_number: impl Into<String>,
        wprn: impl Into<String>,
        premise_id: impl Into<String>,
    ) -> Self {
        Self {
            serial_number: serial_number.into(),
            wprn: wprn.into(),
            premise_id: premise_id.into(),
        }
    }

    /// CSV 필드 순서대로 반환
    pub fn fields(&self) -> [&str; 3] {
        [&self.serial_number, &self.wprn, &self.premise_id]
    }
}

/// 입력 순서를 유지하는 레코드 목록
///
/// 비어 있는 보고서는 만들 수 없습니다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Report(Vec<Record>);

impl Report {
    /// 레코드 목록으로 보고서 생성
    ///
    /// 레코드가 없으면 `ArcError::NoData`를 반환합니다.
    pub fn new(records: Vec<Record>) -> Result<Self> {
        if records.is_empty() {
            return Err(ArcError::NoData);
        }
        Ok(Self(records))
    }

    pub fn records(&self) -> &[Record] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// 보고서는 비어 있을 수 없으므로 항상 `false`
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> slice::Iter<'_, Record> {
        self.0.iter()
    }

    pub fn into_records(self) -> Vec<Record> {
        self.0
    }
}

impl<'a> IntoIterator for &'a Report {
    type Item = &'a Record;
    type IntoIter = slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// 레코드 데이터를 담은 줄인지 확인
pub fn is_candidate_line(line: &str) -> bool {
    line.starts_with(RECORD_PREFIX)
}

/// 후보 줄 하나를 레코드로 변환
///
/// 세미콜론을 모두 제거한 뒤 `Sr.No = %s WPRN = %s PremiseID = %s` 패턴으로
/// 스캔합니다. 라벨과 `=` 주변 공백은 없어도 되고 여러 개여도 됩니다.
/// 세 번째 값 뒤의 내용은 무시합니다.
pub fn parse_record_line(line: &str) -> std::result::Result<Record, ScanError> {
    let cleaned = line.replace(';', "");
    scan_fields(&cleaned)
}

fn scan_fields(line: &str) -> std::result::Result<Record, ScanError> {
    let mut scanner = LineScanner::new(line);

    let serial_number = scanner.labeled_value("Sr.No")?;
    let wprn = scanner.labeled_value("WPRN")?;
    let premise_id = scanner.labeled_value("PremiseID")?;

    Ok(Record::new(serial_number, wprn, premise_id))
}

/// 공백 구분 토큰 스캐너
struct LineScanner<'a> {
    rest: &'a str,
}

impl<'a> LineScanner<'a> {
    fn new(line: &'a str) -> Self {
        Self { rest: line }
    }

    /// `<label> = <value>` 를 읽고 값을 반환
    fn labeled_value(&mut self, label: &'static str) -> std::result::Result<&'a str, ScanError> {
        self.literal(label)?;
        self.literal("=")?;
        self.token().ok_or(ScanError::MissingValue { label })
    }

    fn literal(&mut self, expected: &'static str) -> std::result::Result<(), ScanError> {
        let rest = self.rest.trim_start();
        match rest.strip_prefix(expected) {
            Some(after) => {
                self.rest = after;
                Ok(())
            }
            None => Err(ScanError::Expected { expected }),
        }
    }

    fn token(&mut self) -> Option<&'a str> {
        let rest = self.rest.trim_start();
        let end = rest.find(char::is_whitespace).unwrap_or(rest.len());
        if end == 0 {
            return None;
        }
        let (token, after) = rest.split_at(end);
        self.rest = after;
        Some(token)
    }
}

/// 리더에서 보고서를 추출
///
/// 형식이 맞지 않는 후보 줄이 하나라도 있으면 즉시 실패하며 부분 결과는
/// 반환하지 않습니다.
pub fn parse_report<R: Read>(reader: R) -> Result<Report> {
    let mut stats = Statistics::new();
    scan_report(reader, &mut stats)
}

/// 통계를 함께 수집하며 보고서를 추출
pub fn scan_report<R: Read>(reader: R, stats: &mut Statistics) -> Result<Report> {
    let mut reader = BufReader::new(reader);
    let mut records = Vec::new();
    let mut buf = Vec::new();
    let mut line_no = 0;

    loop {
        buf.clear();
        let n = reader.read_until(b'\n', &mut buf).map_err(ArcError::Read)?;
        if n == 0 {
            break;
        }
        line_no += 1;
        stats.record_line(n);

        let line = String::from_utf8_lossy(trim_line_ending(&buf));
        if !is_candidate_line(&line) {
            continue;
        }
        stats.increment_candidates();

        let record = parse_record_line(&line).map_err(|reason| ArcError::MalformedRecord {
            line_no,
            line: line.replace(';', ""),
            reason,
        })?;
        records.push(record);
        stats.increment_records();
    }

    debug!(
        lines = stats.lines_read,
        records = records.len(),
        "로그 스캔 완료"
    );

    Report::new(records)
}

/// 줄 끝의 `\n` 또는 `\r\n` 제거
fn trim_line_ending(line: &[u8]) -> &[u8] {
    let line = line.strip_suffix(b"\n").unwrap_or(line);
    line.strip_suffix(b"\r").unwrap_or(line)
}
