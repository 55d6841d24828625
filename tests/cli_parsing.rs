//! CLI parsing tests.

use clap::Parser;
use sslprobe::cli::{Cli, Commands};

#[test]
fn test_parse_check() {
    let cli = Cli::try_parse_from(vec!["sslprobe", "check", "example.com"]).unwrap();
    assert!(!cli.json);
    match cli.command {
        Commands::Check(args) => {
            assert_eq!(args.target, "example.com");
            assert!(args.field.is_none());
        }
        _ => panic!("Wrong top-level command"),
    }
}

#[test]
fn test_parse_check_with_field_and_json() {
    let cli = Cli::try_parse_from(vec![
        "sslprobe",
        "check",
        "example.com",
        "--field",
        "certificate",
        "--json",
    ])
    .unwrap();
    assert!(cli.json);
    match cli.command {
        Commands::Check(args) => {
            assert_eq!(args.field.as_deref(), Some("certificate"));
        }
        _ => panic!("Wrong top-level command"),
    }
}

#[test]
fn test_parse_scan_overrides() {
    let cli = Cli::try_parse_from(vec![
        "sslprobe",
        "scan",
        "example.com",
        "--max-age",
        "4",
        "--poll-interval",
        "3",
    ])
    .unwrap();
    match cli.command {
        Commands::Scan(args) => {
            assert_eq!(args.target, "example.com");
            assert_eq!(args.max_age, Some(4));
            assert_eq!(args.poll_interval, Some(3));
        }
        _ => panic!("Wrong top-level command"),
    }
}

#[test]
fn test_parse_endpoint() {
    let cli = Cli::try_parse_from(vec![
        "sslprobe",
        "endpoint",
        "example.com",
        "93.184.216.34",
    ])
    .unwrap();
    match cli.command {
        Commands::Endpoint(args) => {
            assert_eq!(args.target, "example.com");
            assert_eq!(args.endpoint_ip, "93.184.216.34");
        }
        _ => panic!("Wrong top-level command"),
    }
}

#[test]
fn test_parse_register_flags() {
    let cli = Cli::try_parse_from(vec![
        "sslprobe",
        "register",
        "--organization",
        "Acme",
        "--first-name",
        "Jo",
        "--last-name",
        "Doe",
        "--email",
        "jo@example.com",
    ])
    .unwrap();
    match cli.command {
        Commands::Register(args) => {
            assert_eq!(args.organization.as_deref(), Some("Acme"));
            assert_eq!(args.email.as_deref(), Some("jo@example.com"));
        }
        _ => panic!("Wrong top-level command"),
    }
}

#[test]
fn test_global_config_flag() {
    let cli = Cli::try_parse_from(vec![
        "sslprobe",
        "check",
        "example.com",
        "--config",
        "/tmp/sslprobe.yaml",
    ])
    .unwrap();
    assert_eq!(
        cli.config.as_deref(),
        Some(std::path::Path::new("/tmp/sslprobe.yaml"))
    );
}

#[test]
fn test_missing_target_is_an_error() {
    assert!(Cli::try_parse_from(vec!["sslprobe", "check"]).is_err());
    assert!(Cli::try_parse_from(vec!["sslprobe", "endpoint", "example.com"]).is_err());
}
