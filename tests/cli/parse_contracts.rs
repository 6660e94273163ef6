use clap::{CommandFactory, Parser};
use torview::tooling::cli::{Cli, Commands};

#[test]
fn parse_valid_command_matrix() {
    let cases: Vec<Vec<&str>> = vec![
        vec!["torview", "show", "meta.json"],
        vec!["torview", "show", "meta.json", "--sort", "size", "--descending"],
        vec!["torview", "show", "meta.json", "--format", "json"],
        vec!["torview", "files", "meta.json", "--sort", "name"],
        vec!["torview", "trackers", "meta.json", "--format", "json"],
        vec!["torview", "config"],
        vec!["torview", "--log-level", "debug", "files", "meta.json"],
        vec!["torview", "files", "meta.json", "--config", "custom.toml"],
    ];

    for args in cases {
        let parsed = Cli::try_parse_from(args.clone());
        assert!(parsed.is_ok(), "expected valid parse for args: {args:?}");
    }
}

#[test]
fn parse_rejects_unknown_sort_and_format() {
    assert!(Cli::try_parse_from(["torview", "files", "m.json", "--sort", "mtime"]).is_err());
    assert!(Cli::try_parse_from(["torview", "show", "m.json", "--format", "yaml"]).is_err());
    assert!(Cli::try_parse_from(["torview", "--log-format", "xml", "config"]).is_err());
    assert!(Cli::try_parse_from(["torview", "files"]).is_err());
}

#[test]
fn parse_show_fields() {
    let cli = Cli::try_parse_from(["torview", "show", "m.json", "--sort", "size", "--descending"])
        .unwrap();
    match cli.command {
        Commands::Show {
            file,
            sort,
            descending,
            format,
        } => {
            assert_eq!(file.to_str(), Some("m.json"));
            assert_eq!(sort.as_deref(), Some("size"));
            assert!(descending);
            assert_eq!(format, "text");
        }
        _ => panic!("expected show command"),
    }
}

#[test]
fn logging_flags_override_config() {
    let cli = Cli::try_parse_from([
        "torview",
        "--verbose",
        "--log-output",
        "stdout",
        "--log-format",
        "json",
        "config",
    ])
    .unwrap();
    let logging = cli.logging_overrides(&torview::logging::LoggingConfig::default());
    assert_eq!(logging.level, "debug");
    assert_eq!(logging.output, "stdout");
    assert_eq!(logging.format, "json");
}

#[test]
fn log_file_flag_stays_out_of_logging_config() {
    let cli = Cli::try_parse_from(["torview", "--log-file", "/tmp/cli.log", "config"]).unwrap();
    let base = torview::logging::LoggingConfig {
        file: Some(std::path::PathBuf::from("/tmp/config.log")),
        ..torview::logging::LoggingConfig::default()
    };
    let logging = cli.logging_overrides(&base);
    assert_eq!(logging.file, Some(std::path::PathBuf::from("/tmp/config.log")));
    assert_eq!(cli.log_file, Some(std::path::PathBuf::from("/tmp/cli.log")));
}

#[test]
fn cli_definition_is_consistent() {
    Cli::command().debug_assert();
}
