//! arclog - ARCTOOL LOG CONVERTER
//!
//! 메인 엔트리포인트

use anyhow::{Context, Result};
use clap::Parser;
use std::io::{self, Write};

use arclog::{
    cli::Args,
    config::BuildInfo,
    logging,
    processor::{open_inputs, process_report, process_report_to_path},
    stats::Statistics,
};

fn main() -> Result<()> {
    let args = Args::parse();

    logging::init_logging(logging::cli_level(args.verbose))?;

    let stdout = io::stdout();
    let stats = run(&args, &BuildInfo::current(), stdout.lock())?;

    if let Some(stats) = stats {
        if args.verbose {
            stats.print_summary();
        }
    }

    Ok(())
}

/// 인자에 따라 버전을 출력하거나 보고서를 생성
///
/// 보고서를 생성한 경우 처리 통계를 반환합니다.
fn run<W: Write>(args: &Args, build: &BuildInfo, mut stdout: W) -> Result<Option<Statistics>> {
    if args.version {
        write!(stdout, "{}", build).context("버전 출력 실패")?;
        return Ok(None);
    }

    let input = open_inputs(&args.files)?;

    let stats = match args.output {
        Some(ref path) => process_report_to_path(input, path, args.format)
            .with_context(|| format!("보고서 저장 실패: {:?}", path))?,
        None => process_report(input, &mut stdout, args.format).context("보고서 생성 실패")?,
    };

    Ok(Some(stats))
}
