//! wxgloss CLI entry point.

use std::env;
use std::path::PathBuf;
use std::process::ExitCode;

use wxgloss_runtime::{OutputFormat, Renderer, Repl, RuntimeConfig, Session, logging, renderer_for};

/// CLI configuration parsed from arguments.
#[derive(Default)]
struct CliConfig {
    files: Vec<PathBuf>,
    batch_mode: bool,
    show_help: bool,
    show_version: bool,
    locale: Option<String>,
    json: bool,
    tokens_only: bool,
    fields_only: bool,
    lexicon: Option<PathBuf>,
    catalog: Option<PathBuf>,
    stations: Option<PathBuf>,
    log: Option<String>,
}

fn main() -> ExitCode {
    let args: Vec<String> = env::args().collect();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("\x1b[31mError: {e}\x1b[0m");
            ExitCode::FAILURE
        }
    }
}

fn value(args: &[String], i: usize, flag: &str) -> Result<String, Box<dyn std::error::Error>> {
    args.get(i)
        .cloned()
        .ok_or_else(|| format!("{flag} requires a value").into())
}

fn parse_args(args: Vec<String>) -> Result<CliConfig, Box<dyn std::error::Error>> {
    let mut config = CliConfig::default();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-h" | "--help" => config.show_help = true,
            "-V" | "--version" => config.show_version = true,
            "-b" | "--batch" => config.batch_mode = true,
            "--json" => config.json = true,
            "--tokens-only" => config.tokens_only = true,
            "--fields-only" => config.fields_only = true,
            flag @ ("--locale" | "--lexicon" | "--catalog" | "--stations" | "--log") => {
                i += 1;
                let v = value(&args, i, flag)?;
                match flag {
                    "--locale" => config.locale = Some(v),
                    "--lexicon" => config.lexicon = Some(PathBuf::from(v)),
                    "--catalog" => config.catalog = Some(PathBuf::from(v)),
                    "--stations" => config.stations = Some(PathBuf::from(v)),
                    _ => config.log = Some(v),
                }
            }
            arg if arg.starts_with('-') => {
                return Err(format!("unknown option: {arg}").into());
            }
            path => config.files.push(PathBuf::from(path)),
        }
        i += 1;
    }

    if config.tokens_only && config.fields_only {
        return Err("--tokens-only and --fields-only cannot be combined".into());
    }
    Ok(config)
}

fn runtime_config(cli: &CliConfig) -> Result<RuntimeConfig, Box<dyn std::error::Error>> {
    let mut config = match &cli.locale {
        Some(tag) => RuntimeConfig::new().with_locale(tag.parse()?),
        None => RuntimeConfig::from_env()?,
    };
    if cli.json {
        config = config.with_format(OutputFormat::Json);
    }
    if cli.tokens_only {
        config = config.tokens_only();
    }
    if cli.fields_only {
        config = config.fields_only();
    }
    if let Some(path) = &cli.lexicon {
        config = config.with_lexicon_path(path);
    }
    if let Some(path) = &cli.catalog {
        config = config.with_catalog_path(path);
    }
    if let Some(path) = &cli.stations {
        config = config.with_stations_path(path);
    }
    if let Some(directive) = &cli.log {
        config = config.with_log_directive(directive);
    }
    if !cli.files.is_empty() {
        config = config.without_banner();
    }
    Ok(config)
}

fn run(args: Vec<String>) -> Result<(), Box<dyn std::error::Error>> {
    let cli = parse_args(args)?;

    if cli.show_help {
        print_help();
        return Ok(());
    }

    if cli.show_version {
        println!("wxgloss {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    let config = runtime_config(&cli)?;
    logging::init(config.log_directive.as_deref())?;

    if let Some(directive) = &config.log_directive {
        eprintln!("\x1b[33mDebug flags enabled:\x1b[0m");
        eprintln!("  - Log filter (--log): {directive}");
        eprintln!();
    }

    let session = Session::from_config(&config)?;

    let mut reports = Vec::new();
    for file in &cli.files {
        reports.extend(session.reports_from_file(file)?);
    }
    if !reports.is_empty() {
        println!("{}", renderer_for(&config).render_many(&reports)?.trim_end());
    }

    if cli.batch_mode {
        return Ok(());
    }

    let mut repl = Repl::new()?.with_session(session).with_config(config);
    repl.run()?;
    Ok(())
}

fn print_help() {
    println!(
        "\x1b[1mwxgloss\x1b[0m - Token classification and field explanations for METAR, TAF and NOTAM

\x1b[1mUSAGE:\x1b[0m
    wxgloss [OPTIONS] [FILES...]

\x1b[1mARGUMENTS:\x1b[0m
    [FILES...]    Decoded message JSON files (one message or an array each)

\x1b[1mOPTIONS:\x1b[0m
    -h, --help             Print help information
    -V, --version          Print version information
    -b, --batch            Render FILES and exit (no REPL)
        --locale <TAG>     Display locale: en, zh-CN (default: $WXGLOSS_LOCALE or en)
        --json             Render as JSON
        --tokens-only      Show classified tokens only
        --fields-only      Show explained fields only
        --lexicon <FILE>   Lexicon JSON merged over the built-in tables
        --catalog <FILE>   Catalog JSON merged over the built-in templates
        --stations <FILE>  Station display names (JSON object or array)
        --log <FILTER>     Log filter directive (default: $RUST_LOG or warn)

\x1b[1mEXAMPLES:\x1b[0m
    wxgloss                                Start interactive REPL
    wxgloss -b metar.json                  Explain a message and exit
    wxgloss -b --json --locale zh-CN a.json
    wxgloss --log wxgloss_engine=trace     REPL with classifier tracing"
    );
}
