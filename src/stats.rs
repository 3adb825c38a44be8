//! 통계 및 유틸리티 모듈
//!
//! 한 번의 변환 실행에 대한 통계 수집 및 포맷팅을 담당합니다.

use colored::Colorize;
use std::time::{Duration, Instant};

/// 변환 실행 통계 구조체
///
/// 파이프라인은 단일 스레드로 동작하므로 카운터는 일반 정수입니다.
#[derive(Debug, Default, Clone)]
pub struct Statistics {
    /// 읽은 전체 줄 수
    pub lines_read: usize,
    /// `Sr.No`로 시작하는 후보 줄 수
    pub candidate_lines: usize,
    /// 추출된 레코드 수
    pub records: usize,
    /// 읽은 총 바이트
    pub bytes_read: u64,
    /// 쓴 총 바이트
    pub bytes_written: u64,
    /// 처리 시작 시간
    start_time: Option<Instant>,
}

impl Statistics {
    /// 새 통계 인스턴스 생성
    pub fn new() -> Self {
        Self {
            start_time: Some(Instant::now()),
            ..Default::default()
        }
    }

    /// 읽은 줄 기록
    pub fn record_line(&mut self, bytes: usize) {
        self.lines_read += 1;
        self.bytes_read += bytes as u64;
    }

    /// 후보 줄 카운트 증가
    pub fn increment_candidates(&mut self) {
        self.candidate_lines += 1;
    }

    /// 레코드 카운트 증가
    pub fn increment_records(&mut self) {
        self.records += 1;
    }

    /// 쓴 바이트 추가
    pub fn add_bytes_written(&mut self, bytes: u64) {
        self.bytes_written += bytes;
    }

    /// 건너뛴 (후보가 아닌) 줄 수
    pub fn skipped_lines(&self) -> usize {
        self.lines_read - self.candidate_lines
    }

    /// 경과 시간 반환
    pub fn elapsed(&self) -> Duration {
        self.start_time
            .map(|t| t.elapsed())
            .unwrap_or(Duration::ZERO)
    }

    /// 처리 통계 요약 출력
    ///
    /// 표준 출력은 보고서 전용이므로 요약은 표준 에러로 출력합니다.
    pub fn print_summary(&self) {
        eprintln!("\n{}", "═".repeat(50).bright_blue());
        eprintln!("{}", " 📊 처리 통계".bright_white().bold());
        eprintln!("{}", "═".repeat(50).bright_blue());

        eprintln!(
            "  {} 읽은 줄:      {}",
            "📄".bright_cyan(),
            self.lines_read
        );
        eprintln!(
            "  {} 건너뛴 줄:    {}",
            "⏭️".bright_white(),
            self.skipped_lines()
        );
        eprintln!(
            "  {} 레코드:       {}",
            "✅".bright_green(),
            self.records.to_string().green()
        );
        eprintln!(
            "  {} 입력 용량:    {}",
            "📥".bright_yellow(),
            format_bytes(self.bytes_read)
        );
        eprintln!(
            "  {} 출력 용량:    {}",
            "📤".bright_magenta(),
            format_bytes(self.bytes_written)
        );
        eprintln!(
            "  {} 처리 시간:    {}",
            "⏱️".bright_cyan(),
            format_duration(self.elapsed())
        );

        eprintln!("{}", "═".repeat(50).bright_blue());
    }
}

/// 바이트를 읽기 쉬운 형식으로 변환
///
/// # Examples
/// ```
/// use arclog::stats::format_bytes;
///
/// assert_eq!(format_bytes(500), "500 B");
/// assert_eq!(format_bytes(1024), "1.00 KB");
/// assert_eq!(format_bytes(1048576), "1.00 MB");
/// ```
pub fn format_bytes(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    const GB: u64 = MB * 1024;

    if bytes >= GB {
        format!("{:.2} GB", bytes as f64 / GB as f64)
    } else if bytes >= MB {
        format!("{:.2} MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.2} KB", bytes as f64 / KB as f64)
    } else {
        format!("{} B", bytes)
    }
}

/// 경과 시간을 읽기 쉬운 형식으로 변환
pub fn format_duration(duration: Duration) -> String {
    let secs = duration.as_secs();
    let millis = duration.subsec_millis();

    if secs >= 60 {
        format!("{}분 {}초", secs / 60, secs % 60)
    } else if secs > 0 {
        format!("{}.{:03}초", secs, millis)
    } else {
        format!("{}ms", millis)
    }
}
