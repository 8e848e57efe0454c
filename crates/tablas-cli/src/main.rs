// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

mod config;

use anyhow::{Context, Result};
use config::Config;
use std::env;
use std::path::PathBuf;
use tablas_app::{Range, Session, SessionCommand};
use tablas_tui::UiOptions;

/// The pinned start tab, when one is configured: the classic times table.
const START_RANGE: Range = Range {
    min_col: 1,
    max_col: 10,
    min_row: 1,
    max_row: 10,
};

fn main() {
    if let Err(error) = run() {
        eprintln!("{error:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let options = parse_cli_args(env::args().skip(1), Config::default_path()?)?;
    if options.show_help {
        print_help();
        return Ok(());
    }

    if options.print_config_path {
        println!("{}", options.config_path.display());
        return Ok(());
    }

    if options.print_example {
        print!("{}", Config::example_config(&options.config_path));
        return Ok(());
    }

    let config = Config::load(&options.config_path).with_context(|| {
        format!(
            "load config {}; run `tablas --print-example-config` to generate a template",
            options.config_path.display()
        )
    })?;

    let ui_options = UiOptions {
        debounce: config.debounce()?,
        status_ttl: config.status_ttl()?,
    };
    if options.check_only {
        return Ok(());
    }

    let mut session = build_session(&config, options.demo);
    tablas_tui::run_app(&mut session, &ui_options)
}

fn build_session(config: &Config, demo: bool) -> Session {
    let mut session = if config.pinned_start_tab() {
        Session::with_pinned_tab(START_RANGE)
    } else {
        Session::new()
    };
    if demo {
        for range in tablas_testkit::demo_ranges() {
            session.dispatch(SessionCommand::AddTab(range));
        }
    }
    session
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct CliOptions {
    config_path: PathBuf,
    print_config_path: bool,
    demo: bool,
    print_example: bool,
    check_only: bool,
    show_help: bool,
}

fn parse_cli_args<I, S>(args: I, default_config_path: PathBuf) -> Result<CliOptions>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut options = CliOptions {
        config_path: default_config_path,
        print_config_path: false,
        demo: false,
        print_example: false,
        check_only: false,
        show_help: false,
    };

    let mut iter = args.into_iter();
    while let Some(arg) = iter.next() {
        match arg.as_ref() {
            "--config" => {
                let value = iter
                    .next()
                    .ok_or_else(|| anyhow::anyhow!("--config requires a file path"))?;
                options.config_path = PathBuf::from(value.as_ref());
            }
            "--print-config-path" => {
                options.print_config_path = true;
            }
            "--print-example-config" => {
                options.print_example = true;
            }
            "--demo" => {
                options.demo = true;
            }
            "--check" => {
                options.check_only = true;
            }
            "--help" | "-h" => {
                options.show_help = true;
            }
            unknown => {
                return Err(anyhow::anyhow!(
                    "unknown argument {unknown:?}; run with --help to see supported options"
                ));
            }
        }
    }

    Ok(options)
}

fn print_help() {
    println!("tablas");
    println!("  --config <path>          Use a specific config path");
    println!("  --print-config-path      Print resolved config path");
    println!("  --print-example-config   Print a config template");
    println!("  --demo                   Launch with a few sample tables");
    println!("  --check                  Validate config and exit");
    println!("  --help                   Show this help");
}

#[cfg(test)]
mod tests {
    use super::{CliOptions, START_RANGE, build_session, parse_cli_args};
    use anyhow::Result;
    use std::path::PathBuf;

    fn default_options_path() -> PathBuf {
        PathBuf::from("/tmp/tablas-config.toml")
    }

    #[test]
    fn start_range_upholds_the_range_invariants() {
        assert!(START_RANGE.is_valid());
    }

    #[test]
    fn parse_cli_args_defaults_to_provided_config_path() -> Result<()> {
        let options = parse_cli_args(Vec::<String>::new(), default_options_path())?;
        assert_eq!(
            options,
            CliOptions {
                config_path: default_options_path(),
                print_config_path: false,
                demo: false,
                print_example: false,
                check_only: false,
                show_help: false,
            }
        );
        Ok(())
    }

    #[test]
    fn parse_cli_args_sets_config_path_override() -> Result<()> {
        let options = parse_cli_args(
            vec!["--config", "/custom/config.toml"],
            default_options_path(),
        )?;
        assert_eq!(options.config_path, PathBuf::from("/custom/config.toml"));
        Ok(())
    }

    #[test]
    fn parse_cli_args_errors_for_missing_config_value() {
        let error = parse_cli_args(vec!["--config"], default_options_path())
            .expect_err("missing config value should fail");
        assert!(error.to_string().contains("--config requires a file path"));
    }

    #[test]
    fn parse_cli_args_errors_for_unknown_argument() {
        let error = parse_cli_args(vec!["--wat"], default_options_path())
            .expect_err("unknown arg should fail");
        let message = error.to_string();
        assert!(message.contains("unknown argument"));
        assert!(message.contains("--help"));
    }

    #[test]
    fn parse_cli_args_sets_print_check_and_demo_flags() -> Result<()> {
        let options = parse_cli_args(
            vec![
                "--print-config-path",
                "--print-example-config",
                "--check",
                "--demo",
            ],
            default_options_path(),
        )?;
        assert!(options.print_config_path);
        assert!(options.print_example);
        assert!(options.check_only);
        assert!(options.demo);
        assert!(!options.show_help);
        Ok(())
    }

    #[test]
    fn parse_cli_args_sets_help_flag_for_long_and_short_variants() -> Result<()> {
        let long = parse_cli_args(vec!["--help"], default_options_path())?;
        assert!(long.show_help);

        let short = parse_cli_args(vec!["-h"], default_options_path())?;
        assert!(short.show_help);
        Ok(())
    }

    #[test]
    fn build_session_without_flags_starts_empty() {
        let session = build_session(&super::Config::default(), false);
        assert_eq!(session.tab_count(), 0);
    }

    #[test]
    fn build_session_with_demo_seeds_sample_tabs() {
        let session = build_session(&super::Config::default(), true);
        assert_eq!(session.tab_count(), tablas_testkit::demo_ranges().len());
        assert_eq!(
            session.delete_candidates().len(),
            tablas_testkit::demo_ranges().len()
        );
    }

    #[test]
    fn build_session_with_pinned_start_tab_excludes_it_from_delete_candidates() {
        let mut config = super::Config::default();
        config.ui.pinned_start_tab = Some(true);
        let session = build_session(&config, false);
        assert_eq!(session.tab_count(), 1);
        assert!(session.delete_candidates().is_empty());
        assert_eq!(session.tabs()[0].label, "(1 to 10) by (1 to 10)");
    }
}
