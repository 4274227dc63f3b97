use clap::Parser;

use mattespel::cli::{Cli, LogLevel};
use mattespel::summary::SummaryFormat;
use mattespel::types::Mode;

#[test]
fn cli_parses_all_flags() {
    let cli = Cli::try_parse_from([
        "mattespel",
        "--mode",
        "hard",
        "--seed",
        "42",
        "--log-file",
        "/tmp/mattespel.log",
        "--log-level",
        "debug",
        "--summary",
        "json",
    ])
    .unwrap();

    assert_eq!(cli.mode, Mode::Hard);
    assert_eq!(cli.seed, Some(42));
    assert_eq!(
        cli.log_file.as_deref(),
        Some(std::path::Path::new("/tmp/mattespel.log"))
    );
    assert_eq!(cli.log_level, LogLevel::Debug);
    assert_eq!(cli.summary, SummaryFormat::Json);
}

#[test]
fn cli_rejects_unknown_mode() {
    let err = Cli::try_parse_from(["mattespel", "--mode", "extreme"]).unwrap_err();
    assert!(err.to_string().contains("extreme"));
}

#[test]
fn cli_rejects_non_numeric_seed() {
    assert!(Cli::try_parse_from(["mattespel", "--seed", "abc"]).is_err());
}

#[test]
fn cli_accepts_summary_none() {
    let cli = Cli::try_parse_from(["mattespel", "--summary", "none"]).unwrap();
    assert_eq!(cli.summary, SummaryFormat::None);
}
