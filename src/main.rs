// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::{generate, Shell};
use log::{debug, error, Level, LevelFilter, Log, Metadata, Record, SetLoggerError};
use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

use amerbrit::app_config::{Config, LogLevel};
use amerbrit::app_controller::Controller;
use amerbrit::file_utils::FileManager;
use amerbrit::TranslationResult;

/// CLI Wrapper for LogLevel to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliLogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<CliLogLevel> for LogLevel {
    fn from(cli_level: CliLogLevel) -> Self {
        match cli_level {
            CliLogLevel::Error => LogLevel::Error,
            CliLogLevel::Warn => LogLevel::Warn,
            CliLogLevel::Info => LogLevel::Info,
            CliLogLevel::Debug => LogLevel::Debug,
            CliLogLevel::Trace => LogLevel::Trace,
        }
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Translate text between American and British English
    Translate(TranslateArgs),

    /// Answer a JSON request of the form {"text": ..., "locale": ...}
    Request {
        /// Request file; standard input is read when omitted
        #[arg(value_name = "REQUEST_FILE")]
        request_path: Option<PathBuf>,
    },

    /// Generate shell completions for amerbrit
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Parser, Debug)]
struct TranslateArgs {
    /// Text to translate; read from --input or standard input when omitted
    #[arg(value_name = "TEXT")]
    text: Option<String>,

    /// Translation direction: american-to-british or british-to-american
    #[arg(short, long)]
    locale: Option<String>,

    /// Read the text to translate from a file
    #[arg(short, long, conflicts_with = "text")]
    input: Option<PathBuf>,

    /// Print the translation without highlight markers
    #[arg(long, conflicts_with = "json")]
    plain: bool,

    /// Print the full JSON result
    #[arg(long)]
    json: bool,
}

/// amerbrit - American and British English translator
#[derive(Parser, Debug)]
#[command(name = "amerbrit")]
#[command(version)]
#[command(about = "Translate English text between American and British conventions")]
#[command(long_about = "amerbrit rewrites vocabulary, spelling, titles and time notation between
American and British English, highlighting every change.

EXAMPLES:
    amerbrit translate -l american-to-british \"I parked in the parking lot at 10:30.\"
    amerbrit translate -l british-to-american -i letter.txt --plain
    echo '{\"text\": \"Mr Bond\", \"locale\": \"british-to-american\"}' | amerbrit request
    amerbrit completions bash > amerbrit.bash

CONFIGURATION:
    Configuration is stored in conf.json by default. You can specify a different
    config file with --config-path. If the config file doesn't exist, a default one
    will be created automatically. Without a dictionary directory the bundled
    dictionaries are used.")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Commands,

    /// Configuration file path
    #[arg(short, long, default_value = "conf.json", global = true)]
    config_path: String,

    /// Set logging level
    #[arg(long, value_enum, global = true)]
    log_level: Option<CliLogLevel>,
}

// @struct: Custom logger implementation; filtering is left to `log::max_level`
struct CustomLogger;

impl CustomLogger {
    // @initializes: Global logger
    fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
        log::set_boxed_logger(Box::new(CustomLogger))?;
        log::set_max_level(level);
        Ok(())
    }

    // @returns: ANSI color for log level
    fn color_for_level(level: Level) -> &'static str {
        match level {
            Level::Error => "1;31",
            Level::Warn => "1;33",
            Level::Info => "1;32",
            Level::Debug => "1;36",
            Level::Trace => "1;35",
        }
    }
}

impl Log for CustomLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let now = chrono::Local::now().format("%H:%M:%S.%3f");
            let _ = writeln!(
                std::io::stderr(),
                "\x1B[{}m{} {:<5} {}\x1B[0m",
                Self::color_for_level(record.level()),
                now,
                record.level(),
                record.args()
            );
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

fn main() -> Result<ExitCode> {
    // Info until the config says otherwise
    CustomLogger::init(LevelFilter::Info)?;

    let cli = CommandLineOptions::parse();

    let cli_log_level: Option<LogLevel> = cli.log_level.map(Into::into);

    match cli.command {
        Commands::Completions { shell } => {
            let mut cmd = CommandLineOptions::command();
            generate(shell, &mut cmd, "amerbrit", &mut std::io::stdout());
            Ok(ExitCode::SUCCESS)
        }
        Commands::Translate(args) => {
            let controller = build_controller(&cli.config_path, cli_log_level)?;
            run_translate(&controller, args)
        }
        Commands::Request { request_path } => {
            let controller = build_controller(&cli.config_path, cli_log_level)?;
            run_request(&controller, request_path)
        }
    }
}

// @returns: Controller built from the config file, with the CLI log level applied
fn build_controller(config_path: &str, cli_log_level: Option<LogLevel>) -> Result<Controller> {
    if let Some(level) = &cli_log_level {
        log::set_max_level(level.to_level_filter());
    }

    let mut config = Config::load_or_create(config_path)?;
    if let Some(level) = cli_log_level {
        config.log_level = level;
    }
    config.validate().context("Configuration validation failed")?;
    log::set_max_level(config.log_level.to_level_filter());

    Ok(Controller::with_config(config)?)
}

fn run_translate(controller: &Controller, args: TranslateArgs) -> Result<ExitCode> {
    let locale = args.locale.as_deref();
    let result = match (&args.text, &args.input) {
        (Some(text), _) => controller.translate(Some(text.as_str()), locale),
        (None, Some(path)) => controller.translate_file(path, locale)?,
        (None, None) => {
            debug!("Reading text from standard input");
            let content = FileManager::read_stdin()?;
            controller.translate(Some(FileManager::trim_trailing_newline(&content)), locale)
        }
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(exit_code_for(&result));
    }

    match &result {
        TranslationResult::Error { error } => error!("{}", error),
        TranslationResult::Success(success) if args.plain => {
            println!("{}", controller.translator().highlighter().strip(&success.translation))
        }
        TranslationResult::Success(success) => println!("{}", success.translation),
    }

    Ok(exit_code_for(&result))
}

fn run_request(controller: &Controller, request_path: Option<PathBuf>) -> Result<ExitCode> {
    let json = FileManager::read_file_or_stdin(request_path.as_deref())?;
    let result = controller.handle_request_json(&json)?;
    println!("{}", serde_json::to_string(&result)?);
    Ok(exit_code_for(&result))
}

fn exit_code_for(result: &TranslationResult) -> ExitCode {
    if result.is_error() {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
