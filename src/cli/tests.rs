//! Unit tests for CLI commands

use crate::cli::{Cli, Commands};
use clap::Parser;

#[test]
fn test_generate_command_parses() {
    let cli = Cli::try_parse_from(["wheelwright-gen", "generate", "types.yaml"]).unwrap();

    match cli.command {
        Commands::Generate {
            input,
            namespace,
            out,
            options,
        } => {
            assert_eq!(input.to_string_lossy(), "types.yaml");
            assert_eq!(namespace, "");
            assert!(out.is_none());
            assert!(options.is_none());
        }
        _ => panic!("Expected Generate command"),
    }
}

#[test]
fn test_generate_command_with_flags() {
    let cli = Cli::try_parse_from([
        "wheelwright-gen",
        "generate",
        "types.yaml",
        "-n",
        "geo",
        "-o",
        "types.hpp",
        "--options",
        "wheelwright.toml",
    ])
    .unwrap();

    match cli.command {
        Commands::Generate {
            input,
            namespace,
            out,
            options,
        } => {
            assert_eq!(input.to_string_lossy(), "types.yaml");
            assert_eq!(namespace, "geo");
            assert_eq!(out.unwrap().to_string_lossy(), "types.hpp");
            assert_eq!(options.unwrap().to_string_lossy(), "wheelwright.toml");
        }
        _ => panic!("Expected Generate command"),
    }
}

#[test]
fn test_lint_command_with_flags() {
    let cli = Cli::try_parse_from([
        "wheelwright-gen",
        "lint",
        "types.yaml",
        "--fail-on-error",
        "--errors-only",
    ])
    .unwrap();

    match cli.command {
        Commands::Lint {
            input,
            fail_on_error,
            errors_only,
        } => {
            assert_eq!(input.to_string_lossy(), "types.yaml");
            assert!(fail_on_error);
            assert!(errors_only);
        }
        _ => panic!("Expected Lint command"),
    }
}

#[test]
fn test_missing_input_is_an_error() {
    assert!(Cli::try_parse_from(["wheelwright-gen", "generate"]).is_err());
    assert!(Cli::try_parse_from(["wheelwright-gen"]).is_err());
}
