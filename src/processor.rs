//! 보고서 처리 모듈
//!
//! 입력 스트림 구성과 읽기 → 추출 → 직렬화 파이프라인을 담당합니다.

use std::fs::File;
use std::io::{self, BufWriter, Read, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::cli::OutputFormat;
use crate::error::{ArcError, Result};
use crate::extract::scan_report;
use crate::serialize::write_report;
use crate::stats::Statistics;

/// 입력 파일들을 하나의 스트림으로 연결
///
/// 모든 파일을 먼저 열고, 하나라도 실패하면 읽기 전에 에러를 반환합니다.
/// 파일은 인자 순서대로 바이트 단위로 이어 붙여지며, 경로가 없으면 표준
/// 입력을 사용합니다.
pub fn open_inputs(paths: &[PathBuf]) -> Result<Box<dyn Read>> {
    if paths.is_empty() {
        debug!("표준 입력에서 읽습니다");
        return Ok(Box::new(io::stdin()));
    }

    let mut files = Vec::with_capacity(paths.len());
    for path in paths {
        let file = File::open(path).map_err(|source| ArcError::InputOpen {
            path: path.clone(),
            source,
        })?;
        debug!(path = %path.display(), "입력 파일 열기");
        files.push(file);
    }

    let input = files
        .into_iter()
        .fold(Box::new(io::empty()) as Box<dyn Read>, |acc, file| -> Box<dyn Read> {
            Box::new(acc.chain(file))
        });
    Ok(input)
}

/// 입력을 읽어 보고서를 출력에 기록
///
/// 입력 전체를 먼저 추출하므로 추출에 실패하면 출력에는 아무것도 쓰지
/// 않습니다.
pub fn process_report<R: Read, W: Write>(
    input: R,
    output: W,
    format: OutputFormat,
) -> Result<Statistics> {
    let mut stats = Statistics::new();
    let report = scan_report(input, &mut stats)?;

    let mut counting = CountingWriter::new(output);
    write_report(&report, format, &mut counting)?;
    stats.add_bytes_written(counting.written);

    info!(records = report.len(), %format, "보고서 생성 완료");
    Ok(stats)
}

/// 입력을 읽어 보고서를 파일로 저장
///
/// 추출에 성공한 뒤에만 출력 파일을 생성합니다.
pub fn process_report_to_path<R: Read>(
    input: R,
    path: &Path,
    format: OutputFormat,
) -> Result<Statistics> {
    let mut stats = Statistics::new();
    let report = scan_report(input, &mut stats)?;

    let file = File::create(path).map_err(|source| ArcError::OutputCreate {
        path: path.to_path_buf(),
        source,
    })?;
    let mut counting = CountingWriter::new(BufWriter::new(file));
    write_report(&report, format, &mut counting)?;
    stats.add_bytes_written(counting.written);

    info!(
        records = report.len(),
        %format,
        path = %path.display(),
        "보고서 저장 완료"
    );
    Ok(stats)
}

/// 기록한 바이트 수를 세는 라이터
struct CountingWriter<W> {
    inner: W,
    written: u64,
}

impl<W: Write> CountingWriter<W> {
    fn new(inner: W) -> Self {
        Self { inner, written: 0 }
    }
}

impl<W: Write> Write for CountingWriter<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let n = self.inner.write(buf)?;
        self.written += n as u64;
        Ok(n)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    const VALID: &str = "banner\n\
                         Sr.No = A-1; WPRN = 1; PremiseID = 2\n\
                         Total number of records to be processed 1\n";

    #[test]
    fn test_process_report_counts_bytes() {
        let mut out = Vec::new();
        let stats = process_report(VALID.as_bytes(), &mut out, OutputFormat::Csv).unwrap();

        assert_eq!(out, b"Sr.No,WPRN,PremiseID\nA-1,1,2\n");
        assert_eq!(stats.records, 1);
        assert_eq!(stats.lines_read, 3);
        assert_eq!(stats.bytes_written, out.len() as u64);
    }

    #[test]
    fn test_process_report_writes_nothing_on_failure() {
        let input = "Sr.No = A-1; WPRN = 1; PremiseID = 2\nSr.No = A-2; WPRN = 3\n";
        let mut out = Vec::new();
        let err = process_report(input.as_bytes(), &mut out, OutputFormat::Json).unwrap_err();

        assert!(matches!(err, ArcError::MalformedRecord { line_no: 2, .. }));
        assert!(out.is_empty());
    }

    #[test]
    fn test_open_inputs_concatenates_in_order() {
        let temp_dir = TempDir::new().unwrap();
        let first = temp_dir.path().join("first.log");
        let second = temp_dir.path().join("second.log");
        fs::write(&first, "one\n").unwrap();
        fs::write(&second, "two\n").unwrap();

        let mut content = String::new();
        open_inputs(&[first, second])
            .unwrap()
            .read_to_string(&mut content)
            .unwrap();

        assert_eq!(content, "one\ntwo\n");
    }

    #[test]
    fn test_open_inputs_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let existing = temp_dir.path().join("exists.log");
        fs::write(&existing, VALID).unwrap();
        let missing = temp_dir.path().join("missing.log");

        let err = open_inputs(&[existing, missing.clone()]).err().unwrap();
        match err {
            ArcError::InputOpen { path, .. } => assert_eq!(path, missing),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_process_report_to_path() {
        let temp_dir = TempDir::new().unwrap();
        let output = temp_dir.path().join("report.json");

        process_report_to_path(VALID.as_bytes(), &output, OutputFormat::Json).unwrap();

        assert_eq!(
            fs::read_to_string(&output).unwrap(),
            r#"[{"sr_no":"A-1","wprn":"1","premise_id":"2"}]"#
        );
    }

    #[test]
    fn test_process_report_to_path_skips_file_on_failure() {
        let temp_dir = TempDir::new().unwrap();
        let output = temp_dir.path().join("report.csv");

        let err = process_report_to_path(&b"no records here\n"[..], &output, OutputFormat::Csv)
            .unwrap_err();

        assert!(matches!(err, ArcError::NoData));
        assert!(!output.exists());
    }
}
