//! tabman CLI.

use std::io::{self, IsTerminal};

use clap::{ColorChoice, Parser};
use tabman_cli::cli::{Cli, ColumnsCommand, Command, LogFormatArg, LogLevelArg, ThemeCommand};
use tabman_cli::commands::{
    AppContext, CommandOutput, columns_add, columns_list, columns_toggle, run_check, run_export,
    run_script, run_view, theme_show, theme_toggle,
};
use tabman_cli::logging::{LogConfig, LogFormat, init_logging};
use tabman_cli::render::{columns_table, print_issues, print_page};
use tabman_cli::settings::Settings;
use tabman_core::ActionOutcome;
use tabman_ingest::ImportOutcome;
use tabman_persist::PersistError;
use tracing::level_filters::LevelFilter;

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let exit_code = match run(cli) {
        Ok(code) => code,
        Err(error) => {
            report_error(&error);
            1
        }
    };
    std::process::exit(exit_code);
}

fn run(cli: Cli) -> anyhow::Result<i32> {
    let settings = Settings::load(cli.config.as_deref())?;
    let ctx = AppContext::new(settings, cli.prefs);

    let code = match cli.command {
        Command::View(args) => match run_view(&ctx, &args)? {
            CommandOutput::Done(page) => {
                print_page(&page);
                0
            }
            CommandOutput::ImportRejected(issues) => {
                print_issues(&issues);
                1
            }
        },
        Command::Export(args) => match run_export(&ctx, &args)? {
            CommandOutput::Done(summary) => {
                println!("Exported {} rows to {}", summary.rows, summary.path.display());
                0
            }
            CommandOutput::ImportRejected(issues) => {
                print_issues(&issues);
                1
            }
        },
        Command::Check(args) => match run_check(&args.csv)? {
            ImportOutcome::Accepted { records } => {
                println!("{}: {} valid rows", args.csv.display(), records.len());
                0
            }
            ImportOutcome::Rejected { issues } => {
                print_issues(&issues);
                1
            }
        },
        Command::Run(args) => match run_script(&ctx, &args)? {
            CommandOutput::Done(result) => {
                for (idx, outcome) in result.outcomes.iter().enumerate() {
                    print_outcome(idx + 1, outcome);
                }
                print_page(&result.page);
                if result.prefs_saved {
                    println!("Preferences saved to {}", ctx.prefs_path.display());
                }
                0
            }
            CommandOutput::ImportRejected(issues) => {
                print_issues(&issues);
                1
            }
        },
        Command::Columns(ColumnsCommand::List) => {
            println!("{}", columns_table(&columns_list(&ctx)?));
            0
        }
        Command::Columns(ColumnsCommand::Add { label, column_type }) => {
            let (columns, added) = columns_add(&ctx, &label, column_type)?;
            if !added {
                println!("A column with that id already exists.");
            }
            println!("{}", columns_table(&columns));
            0
        }
        Command::Columns(ColumnsCommand::Toggle { id }) => {
            let (columns, changed) = columns_toggle(&ctx, &id)?;
            if !changed {
                println!("Column {id} is required or unknown; nothing changed.");
            }
            println!("{}", columns_table(&columns));
            0
        }
        Command::Theme(ThemeCommand::Show) => {
            println!("{}", theme_show(&ctx)?.as_str());
            0
        }
        Command::Theme(ThemeCommand::Toggle) => {
            println!("{}", theme_toggle(&ctx)?.as_str());
            0
        }
    };
    Ok(code)
}

fn print_outcome(step: usize, outcome: &ActionOutcome) {
    match outcome {
        ActionOutcome::Applied => println!("{step}: applied"),
        ActionOutcome::Ignored => println!("{step}: ignored"),
        ActionOutcome::Added { id } => println!("{step}: added record {id}"),
        ActionOutcome::Imported { count } => println!("{step}: imported {count} records"),
        ActionOutcome::ImportRejected { issues } => {
            println!("{step}: import rejected");
            print_issues(issues);
        }
        ActionOutcome::Exported { csv } => {
            println!("{step}: exported");
            print!("{csv}");
        }
    }
}

fn report_error(error: &anyhow::Error) {
    match error.downcast_ref::<PersistError>() {
        Some(persist) => {
            eprintln!("error: {}", persist.user_message());
            if let Some(hint) = persist.suggestion() {
                eprintln!("hint: {hint}");
            }
        }
        None => eprintln!("error: {error:#}"),
    }
}

/// Build logging configuration from CLI flags with consistent precedence.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    let mut config = LogConfig {
        level_filter: cli.verbosity.tracing_level_filter(),
        ..LogConfig::default()
    };
    config.use_env_filter = !(cli.verbosity.is_present() || cli.log_level.is_some());
    if let Some(level) = cli.log_level {
        config.level_filter = match level {
            LogLevelArg::Error => LevelFilter::ERROR,
            LogLevelArg::Warn => LevelFilter::WARN,
            LogLevelArg::Info => LevelFilter::INFO,
            LogLevelArg::Debug => LevelFilter::DEBUG,
            LogLevelArg::Trace => LevelFilter::TRACE,
        };
    }
    config.format = match cli.log_format {
        LogFormatArg::Pretty => LogFormat::Pretty,
        LogFormatArg::Compact => LogFormat::Compact,
        LogFormatArg::Json => LogFormat::Json,
    };
    config.log_file = cli.log_file.clone();
    config.log_data = cli.log_data;
    config.with_ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
    };
    config
}
