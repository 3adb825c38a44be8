//! 보고서 직렬화 모듈
//!
//! 추출된 보고서를 CSV 또는 JSON으로 출력합니다. 같은 보고서는 항상 같은
//! 바이트열로 직렬화됩니다.

use std::io::{self, Write};

use crate::cli::OutputFormat;
use crate::error::{ArcError, Result};
use crate::extract::{Report, CSV_HEADER};

/// 지정한 형식으로 보고서 출력
pub fn write_report<W: Write>(report: &Report, format: OutputFormat, writer: W) -> Result<()> {
    match format {
        OutputFormat::Csv => write_csv(report, writer),
        OutputFormat::Json => write_json(report, writer),
    }
}

/// CSV 형식으로 보고서 출력
///
/// 헤더 `Sr.No,WPRN,PremiseID` 다음에 레코드를 한 줄씩 씁니다. 쉼표, 따옴표,
/// 줄바꿈이 포함된 필드만 따옴표로 감쌉니다.
pub fn write_csv<W: Write>(report: &Report, writer: W) -> Result<()> {
    let mut csv_writer = csv::WriterBuilder::new()
        .terminator(csv::Terminator::Any(b'\n'))
        .quote_style(csv::QuoteStyle::Necessary)
        .from_writer(writer);

    csv_writer.write_record(CSV_HEADER).map_err(csv_error)?;
    for record in report {
        csv_writer.write_record(record.fields()).map_err(csv_error)?;
    }
    csv_writer.flush().map_err(ArcError::Write)
}

/// JSON 형식으로 보고서 출력
///
/// 압축 형식이며 마지막 줄바꿈을 붙이지 않습니다.
pub fn write_json<W: Write>(report: &Report, mut writer: W) -> Result<()> {
    serde_json::to_writer(&mut writer, report).map_err(|e| {
        if e.is_io() {
            ArcError::Write(e.into())
        } else {
            ArcError::Json(e)
        }
    })?;
    writer.flush().map_err(ArcError::Write)
}

/// 출력 쓰기 실패는 `ArcError::Write` 로 통일
fn csv_error(e: csv::Error) -> ArcError {
    if e.is_io_error() {
        ArcError::Write(io::Error::from(e))
    } else {
        ArcError::Csv(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extract::Record;

    fn sample_report() -> Report {
        Report::new(vec![
            Record::new("SKSZPUB0257-1", "2607303", "2306982"),
            Record::new("SKSZPUB0257-2", "2607304", "3104983"),
        ])
        .unwrap()
    }

    /// 항상 실패하는 라이터
    struct ErrWriter;

    impl Write for ErrWriter {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::Other, "writer error"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Err(io::Error::new(io::ErrorKind::Other, "writer error"))
        }
    }

    #[test]
    fn test_write_csv() {
        let mut out = Vec::new();
        write_csv(&sample_report(), &mut out).unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Sr.No,WPRN,PremiseID\n\
             SKSZPUB0257-1,2607303,2306982\n\
             SKSZPUB0257-2,2607304,3104983\n"
        );
    }

    #[test]
    fn test_write_csv_quotes_special_fields() {
        let report = Report::new(vec![Record::new("A,1", "say \"hi\"", "7")]).unwrap();
        let mut out = Vec::new();
        write_csv(&report, &mut out).unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Sr.No,WPRN,PremiseID\n\"A,1\",\"say \"\"hi\"\"\",7\n"
        );
    }

    #[test]
    fn test_write_json() {
        let mut out = Vec::new();
        write_json(&sample_report(), &mut out).unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            r#"[{"sr_no":"SKSZPUB0257-1","wprn":"2607303","premise_id":"2306982"},{"sr_no":"SKSZPUB0257-2","wprn":"2607304","premise_id":"3104983"}]"#
        );
    }

    #[test]
    fn test_json_decodes_back_in_order() {
        let report = sample_report();
        let mut out = Vec::new();
        write_json(&report, &mut out).unwrap();

        let decoded: Vec<Record> = serde_json::from_slice(&out).unwrap();
        assert_eq!(decoded, report.into_records());
    }

    #[test]
    fn test_output_is_deterministic() {
        let report = sample_report();
        for format in [OutputFormat::Csv, OutputFormat::Json] {
            let mut first = Vec::new();
            let mut second = Vec::new();
            write_report(&report, format, &mut first).unwrap();
            write_report(&report, format, &mut second).unwrap();
            assert_eq!(first, second, "format: {format}");
        }
    }

    #[test]
    fn test_write_error_is_reported() {
        let report = sample_report();
        assert!(matches!(
            write_csv(&report, ErrWriter),
            Err(ArcError::Write(_))
        ));
        assert!(matches!(
            write_json(&report, ErrWriter),
            Err(ArcError::Write(_))
        ));
    }
}
