//! Pitch Tunnel Core - Tunnel Analysis Engine
//!
//! The main entry point for tunnel-core, handling:
//! - Pitch dataset loading and validation
//! - Per-type aggregation at the decision point
//! - Pairwise tunnel comparison and classification
//! - Flight paths for a selected pitch pair
//! - Configuration inspection and output schemas

use clap::{Args, Parser, Subcommand};
use std::io::IsTerminal;
use std::path::PathBuf;
use tunnel_common::error::format_error_human;
use tunnel_common::{Error, OutputFormat, StanceFilter, StructuredError, SCHEMA_VERSION};
use tunnel_core::aggregate::summarize;
use tunnel_core::config::{load_config, ConfigError, ConfigOptions, ResolvedConfig};
use tunnel_core::dataset::{DatasetLoader, PitchDataset};
use tunnel_core::exit_codes::ExitCode;
use tunnel_core::log_event;
use tunnel_core::logging::{
    event_names, generate_run_id, init_logging, LogConfig, LogContext, LogLevel, Stage,
};
use tunnel_core::report::{summaries_markdown, AnalysisReport};
use tunnel_core::schema::{
    available_schemas, format_schema, generate_all_schemas, generate_schema, SchemaFormat,
};
use tunnel_core::session::AnalysisSession;

/// Pitch Tunnel Core - How well do a pitcher's pitch types hide from the batter?
#[derive(Parser)]
#[command(name = "tunnel-core")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[command(flatten)]
    global: GlobalOpts,
}

/// Global options available to all commands
#[derive(Args, Debug)]
struct GlobalOpts {
    /// Engine config file (JSON or TOML)
    #[arg(long, global = true, env = "TUNNEL_CONFIG")]
    config: Option<PathBuf>,

    /// Output format
    #[arg(long, short = 'f', global = true, default_value = "json")]
    format: OutputFormat,

    /// Increase verbosity (-v, -vv)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Decrease verbosity (quiet mode)
    #[arg(short, long, global = true)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Compare every eligible pitch-type pair at the decision point
    Analyze(SelectionArgs),

    /// Average release and decision-point location per pitch type
    Summarize(SelectionArgs),

    /// List pitchers in a dataset
    Pitchers(PitchersArgs),

    /// Average flight paths for one pitch-type pair
    Paths(PathsArgs),

    /// Configuration management
    Config(ConfigArgs),

    /// Print JSON Schemas for output records
    Schema(SchemaArgs),

    /// Print version information
    Version,
}

// ============================================================================
// Command argument structs
// ============================================================================

#[derive(Args, Debug)]
struct SelectionArgs {
    /// Pitch dataset (JSON array of pitch records)
    #[arg(long)]
    data: PathBuf,

    /// Pitcher name, exactly as it appears in the dataset
    #[arg(long)]
    pitcher: String,

    /// Restrict to windup or stretch deliveries
    #[arg(long, value_enum, default_value_t = StanceFilter::Both)]
    stance: StanceFilter,

    /// Decision time in seconds after release (defaults to the config value)
    #[arg(long = "time")]
    time: Option<f64>,

    /// Minimum pitches per type (overrides the config value)
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
    min_samples: Option<u64>,
}

#[derive(Args, Debug)]
struct PitchersArgs {
    /// Pitch dataset (JSON array of pitch records)
    #[arg(long)]
    data: PathBuf,

    /// Group pitchers by team code
    #[arg(long)]
    by_team: bool,
}

#[derive(Args, Debug)]
struct PathsArgs {
    #[command(flatten)]
    selection: SelectionArgs,

    /// Pitch types to compare, e.g. FF,CU
    #[arg(long, value_parser = parse_pair)]
    pair: (String, String),
}

#[derive(Args, Debug)]
struct ConfigArgs {
    #[command(subcommand)]
    command: ConfigCommands,
}

#[derive(Subcommand, Debug)]
enum ConfigCommands {
    /// Show the effective engine configuration
    Show,

    /// Validate an engine config file
    Validate {
        /// Config file to validate (defaults to the resolved config)
        path: Option<PathBuf>,
    },
}

#[derive(Args, Debug)]
struct SchemaArgs {
    /// Type name (omit for all schemas)
    name: Option<String>,

    /// List available schema types
    #[arg(long)]
    list: bool,

    /// Single-line JSON
    #[arg(long)]
    compact: bool,
}

fn parse_pair(s: &str) -> Result<(String, String), String> {
    let (a, b) = s
        .split_once(',')
        .ok_or_else(|| format!("expected two pitch types separated by a comma, got '{}'", s))?;
    let (a, b) = (a.trim(), b.trim());
    if a.is_empty() || b.is_empty() {
        return Err(format!("pitch types must not be empty: '{}'", s));
    }
    if a == b {
        return Err(format!("pitch types must differ: '{}'", s));
    }
    Ok((a.to_string(), b.to_string()))
}

fn main() {
    let cli = Cli::parse();

    let cli_level = LogLevel::from_verbosity(cli.global.quiet, cli.global.verbose);
    init_logging(&LogConfig::from_env(cli_level, None));

    let exit_code = match &cli.command {
        Commands::Analyze(args) => run_analyze(&cli.global, args),
        Commands::Summarize(args) => run_summarize(&cli.global, args),
        Commands::Pitchers(args) => run_pitchers(&cli.global, args),
        Commands::Paths(args) => run_paths(&cli.global, args),
        Commands::Config(args) => run_config(&cli.global, args),
        Commands::Schema(args) => run_schema(&cli.global, args),
        Commands::Version => {
            print_version(&cli.global);
            ExitCode::Clean
        }
    };

    std::process::exit(exit_code.as_i32());
}

// ============================================================================
// Shared plumbing
// ============================================================================

fn print_json(value: &serde_json::Value) {
    println!(
        "{}",
        serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
    );
}

fn envelope(ctx: &LogContext, command: &str) -> serde_json::Value {
    serde_json::json!({
        "schema_version": SCHEMA_VERSION,
        "run_id": ctx.run_id,
        "generated_at": chrono::Utc::now().to_rfc3339(),
        "command": command,
    })
}

/// Merge `payload`'s fields into the standard envelope.
fn with_envelope(ctx: &LogContext, command: &str, payload: serde_json::Value) -> serde_json::Value {
    let mut value = envelope(ctx, command);
    if let (Some(base), serde_json::Value::Object(extra)) = (value.as_object_mut(), payload) {
        base.extend(extra);
    }
    value
}

fn resolve(global: &GlobalOpts, ctx: &LogContext) -> Result<ResolvedConfig, ConfigError> {
    let options = ConfigOptions {
        config_path: global.config.clone(),
    };
    let resolved = load_config(&options)?;
    if resolved.using_defaults() {
        log_event!(
            ctx,
            DEBUG,
            event_names::CONFIG_DEFAULT_USED,
            Stage::Init,
            "no engine config found; using built-in defaults"
        );
    } else {
        let source = resolved.source().to_string();
        log_event!(
            ctx,
            INFO,
            event_names::CONFIG_LOADED,
            Stage::Init,
            "engine config loaded",
            source = source.as_str()
        );
    }
    Ok(resolved)
}

fn load_data(ctx: &LogContext, path: &std::path::Path) -> Result<PitchDataset, Error> {
    let mut loader = DatasetLoader::new();
    let dataset = loader.load_path(path)?;
    log_event!(
        ctx,
        DEBUG,
        event_names::DATASET_LOADED,
        Stage::Load,
        "dataset ready",
        pitches = dataset.len()
    );
    Ok(dataset)
}

/// Load the dataset and apply the CLI selection to a fresh session.
fn open_session(
    ctx: &LogContext,
    args: &SelectionArgs,
    config: &ResolvedConfig,
) -> Result<AnalysisSession, Error> {
    let dataset = load_data(ctx, &args.data)?;

    let mut engine = config.engine.clone();
    if let Some(n) = args.min_samples {
        engine.min_samples = usize::try_from(n).unwrap_or(usize::MAX);
    }
    if let Some(t) = args.time {
        engine.decision_time_s = t;
    }

    let mut session = AnalysisSession::new(dataset, engine);
    session.select_pitcher(&args.pitcher)?;
    session.set_stance(args.stance)?;
    if let Some(t) = args.time {
        session.set_decision_time(t)?;
    }
    log_event!(
        ctx,
        DEBUG,
        event_names::SELECTION_CHANGED,
        Stage::Select,
        "selection applied",
        pitcher = args.pitcher.as_str(),
        pitches = session.filtered_pitches().len()
    );
    Ok(session)
}

/// Report an engine error on stderr in the requested format.
fn output_error(global: &GlobalOpts, ctx: &LogContext, error: &Error) -> ExitCode {
    let exit_code = ExitCode::from(error);
    let message = error.to_string();
    log_event!(
        ctx,
        ERROR,
        event_names::RUN_FINISHED,
        Stage::Report,
        "command failed",
        code = error.code(),
        error = message.as_str()
    );

    match global.format {
        OutputFormat::Json => {
            let response = serde_json::json!({
                "schema_version": SCHEMA_VERSION,
                "run_id": ctx.run_id,
                "generated_at": chrono::Utc::now().to_rfc3339(),
                "status": "error",
                "exit_code": exit_code.code_name(),
                "error": StructuredError::from(error),
            });
            eprintln!(
                "{}",
                serde_json::to_string_pretty(&response).unwrap_or_else(|_| response.to_string())
            );
        }
        OutputFormat::Summary => {
            eprintln!("[{}] error: {}", ctx.run_id, error);
        }
        OutputFormat::Exitcode => {}
        OutputFormat::Md => {
            eprintln!("{}", format_error_human(error, std::io::stderr().is_terminal()));
        }
    }

    exit_code
}

/// Output a config error in the appropriate format.
fn output_config_error(global: &GlobalOpts, ctx: &LogContext, error: &ConfigError) -> ExitCode {
    let exit_code = match error {
        ConfigError::IoError { .. } => ExitCode::IoError,
        _ => ExitCode::ConfigError,
    };
    let message = error.to_string();
    log_event!(
        ctx,
        ERROR,
        event_names::CONFIG_ERROR,
        Stage::Init,
        "config error",
        code = error.code(),
        error = message.as_str()
    );

    let response = serde_json::json!({
        "schema_version": SCHEMA_VERSION,
        "run_id": ctx.run_id,
        "generated_at": chrono::Utc::now().to_rfc3339(),
        "status": "error",
        "exit_code": exit_code.code_name(),
        "error": {
            "code": error.code(),
            "message": message,
        }
    });

    match global.format {
        OutputFormat::Json => {
            eprintln!(
                "{}",
                serde_json::to_string_pretty(&response).unwrap_or_else(|_| response.to_string())
            );
        }
        OutputFormat::Summary => {
            eprintln!("[{}] config error: {}", ctx.run_id, error);
        }
        OutputFormat::Exitcode => {}
        OutputFormat::Md => {
            eprintln!("# Configuration Error");
            eprintln!();
            eprintln!("Error: {}", error);
        }
    }

    exit_code
}

fn start(command: &str) -> LogContext {
    let ctx = LogContext::new(generate_run_id());
    log_event!(
        ctx,
        INFO,
        event_names::RUN_STARTED,
        Stage::Init,
        "starting command",
        command = command
    );
    ctx
}

fn finish(ctx: &LogContext, exit_code: ExitCode) -> ExitCode {
    let code_name = exit_code.code_name();
    log_event!(
        ctx,
        INFO,
        event_names::RUN_FINISHED,
        Stage::Report,
        "command finished",
        exit_code = code_name
    );
    exit_code
}

// ============================================================================
// Command implementations
// ============================================================================

fn run_analyze(global: &GlobalOpts, args: &SelectionArgs) -> ExitCode {
    let ctx = start("analyze");

    let config = match resolve(global, &ctx) {
        Ok(c) => c,
        Err(e) => return output_config_error(global, &ctx, &e),
    };
    let mut session = match open_session(&ctx, args, &config) {
        Ok(s) => s,
        Err(e) => return output_error(global, &ctx, &e),
    };
    if let Err(e) = session.run_analysis() {
        return output_error(global, &ctx, &e);
    }

    let snapshot = config.snapshot_of(session.config());
    let report = AnalysisReport::from_session(&session, ctx.run_id.clone(), snapshot);
    match global.format {
        OutputFormat::Json => match report.to_json() {
            Ok(json) => println!("{}", json),
            Err(e) => return output_error(global, &ctx, &e),
        },
        OutputFormat::Md => print!("{}", report.to_markdown()),
        OutputFormat::Summary => println!("{}", report.to_summary_line()),
        OutputFormat::Exitcode => {}
    }

    finish(&ctx, ExitCode::for_status(&report.status))
}

fn run_summarize(global: &GlobalOpts, args: &SelectionArgs) -> ExitCode {
    let ctx = start("summarize");

    let config = match resolve(global, &ctx) {
        Ok(c) => c,
        Err(e) => return output_config_error(global, &ctx, &e),
    };
    let session = match open_session(&ctx, args, &config) {
        Ok(s) => s,
        Err(e) => return output_error(global, &ctx, &e),
    };
    let selection = session.selection();
    let summaries = match summarize(
        session.filtered_pitches(),
        selection.decision_time_s,
        session.config().min_samples,
    ) {
        Ok(s) => s,
        Err(e) => return output_error(global, &ctx, &e),
    };

    match global.format {
        OutputFormat::Json => print_json(&with_envelope(
            &ctx,
            "summarize",
            serde_json::json!({
                "selection": selection,
                "min_samples": session.config().min_samples,
                "summaries": summaries,
                "config": config.snapshot_of(session.config()),
            }),
        )),
        OutputFormat::Md => {
            println!("# Pitch Type Summary: {}", args.pitcher);
            println!();
            println!(
                "Stance: {} | Decision time: {:.3}s | Minimum samples: {}",
                selection.stance,
                selection.decision_time_s,
                session.config().min_samples
            );
            println!();
            print!("{}", summaries_markdown(&summaries));
        }
        OutputFormat::Summary => {
            let types: Vec<&str> = summaries.iter().map(|s| s.pitch_type.as_str()).collect();
            println!(
                "[{}] {} ({}, t={:.3}s): {} pitch type(s) [{}]",
                ctx.run_id,
                args.pitcher,
                selection.stance,
                selection.decision_time_s,
                summaries.len(),
                types.join(", ")
            );
        }
        OutputFormat::Exitcode => {}
    }

    let exit_code = if summaries.is_empty() {
        ExitCode::InsufficientData
    } else {
        ExitCode::Clean
    };
    finish(&ctx, exit_code)
}

fn run_pitchers(global: &GlobalOpts, args: &PitchersArgs) -> ExitCode {
    let ctx = start("pitchers");

    let dataset = match load_data(&ctx, &args.data) {
        Ok(d) => d,
        Err(e) => return output_error(global, &ctx, &e),
    };

    if args.by_team {
        let roster = dataset.roster();
        match global.format {
            OutputFormat::Json => print_json(&with_envelope(
                &ctx,
                "pitchers",
                serde_json::json!({ "teams": roster }),
            )),
            OutputFormat::Md => {
                println!("# Pitchers by Team");
                for team in &roster {
                    println!();
                    println!("## {}", team.team);
                    println!();
                    for name in &team.pitchers {
                        println!("- {}", name);
                    }
                }
            }
            OutputFormat::Summary => {
                let pitchers: usize = roster.iter().map(|t| t.pitchers.len()).sum();
                println!(
                    "[{}] {} pitcher(s) across {} team(s)",
                    ctx.run_id,
                    pitchers,
                    roster.len()
                );
            }
            OutputFormat::Exitcode => {}
        }
    } else {
        let pitchers: Vec<serde_json::Value> = dataset
            .pitchers()
            .into_iter()
            .map(|name| {
                let types = dataset.pitch_types_for(&name);
                serde_json::json!({ "name": name, "pitch_types": types })
            })
            .collect();
        match global.format {
            OutputFormat::Json => print_json(&with_envelope(
                &ctx,
                "pitchers",
                serde_json::json!({ "pitchers": pitchers }),
            )),
            OutputFormat::Md => {
                println!("# Pitchers");
                println!();
                println!("| Pitcher | Pitch types |");
                println!("|---|---|");
                for name in dataset.pitchers() {
                    println!("| {} | {} |", name, dataset.pitch_types_for(&name).join(", "));
                }
            }
            OutputFormat::Summary => {
                println!(
                    "[{}] {} pitcher(s), {} pitch(es)",
                    ctx.run_id,
                    pitchers.len(),
                    dataset.len()
                );
            }
            OutputFormat::Exitcode => {}
        }
    }

    finish(&ctx, ExitCode::Clean)
}

fn run_paths(global: &GlobalOpts, args: &PathsArgs) -> ExitCode {
    let ctx = start("paths");

    let config = match resolve(global, &ctx) {
        Ok(c) => c,
        Err(e) => return output_config_error(global, &ctx, &e),
    };
    let mut session = match open_session(&ctx, &args.selection, &config) {
        Ok(s) => s,
        Err(e) => return output_error(global, &ctx, &e),
    };

    let (a, b) = (&args.pair.0, &args.pair.1);
    if let Err(e) = session.select_pitch_pair(a, b) {
        return output_error(global, &ctx, &e);
    }
    if let Err(e) = session.run_analysis() {
        return output_error(global, &ctx, &e);
    }
    let paths = match session.pair_flight_paths() {
        Ok(Some(p)) => p,
        Ok(None) => return finish(&ctx, ExitCode::InsufficientData),
        Err(e) => return output_error(global, &ctx, &e),
    };
    let result = session.pair_result();

    match global.format {
        OutputFormat::Json => print_json(&with_envelope(
            &ctx,
            "paths",
            serde_json::json!({
                "selection": session.selection(),
                "result": result,
                "paths": paths,
                "config": config.snapshot_of(session.config()),
            }),
        )),
        OutputFormat::Md => {
            println!("# Flight Paths: {} vs {}", a, b);
            println!();
            if let Some(r) = result {
                println!(
                    "Tunnel separation: {:.3} ft ({}) | Release separation: {:.3} ft",
                    r.tunnel_separation,
                    r.label(),
                    r.release_separation
                );
                println!();
            }
            for path in [&paths.path_a, &paths.path_b] {
                let Some(first) = path.first() else { continue };
                println!("## {}", first.pitch_type);
                println!();
                println!("| t (s) | x (ft) | z (ft) | Past decision |");
                println!("|---:|---:|---:|---|");
                for p in path {
                    println!(
                        "| {:.3} | {:.3} | {:.3} | {} |",
                        p.t,
                        p.x,
                        p.z,
                        if p.past_decision_point { "yes" } else { "no" }
                    );
                }
                println!();
            }
        }
        OutputFormat::Summary => {
            let sep = result
                .map(|r| format!("{:.3} ft ({})", r.tunnel_separation, r.label()))
                .unwrap_or_else(|| "n/a".to_string());
            println!(
                "[{}] {}/{}: {}+{} samples, tunnel separation {}",
                ctx.run_id,
                a,
                b,
                paths.path_a.len(),
                paths.path_b.len(),
                sep
            );
        }
        OutputFormat::Exitcode => {}
    }

    finish(&ctx, ExitCode::Clean)
}

fn run_config(global: &GlobalOpts, args: &ConfigArgs) -> ExitCode {
    match &args.command {
        ConfigCommands::Show => run_config_show(global),
        ConfigCommands::Validate { path } => run_config_validate(global, path.as_ref()),
    }
}

/// Display the effective configuration (including defaults if no file is present).
fn run_config_show(global: &GlobalOpts) -> ExitCode {
    let ctx = LogContext::new(generate_run_id());

    let config = match resolve(global, &ctx) {
        Ok(c) => c,
        Err(e) => return output_config_error(global, &ctx, &e),
    };
    let snapshot = config.snapshot();
    let path = config.path().map(|p| p.display().to_string());

    match global.format {
        OutputFormat::Json => print_json(&with_envelope(
            &ctx,
            "config show",
            serde_json::json!({
                "source": {
                    "path": path,
                    "kind": config.source().to_string(),
                    "using_defaults": config.using_defaults(),
                    "hash": snapshot.file_hash,
                },
                "config_hash": snapshot.config_hash,
                "values": &config.engine,
            }),
        )),
        OutputFormat::Summary => {
            println!(
                "[{}] config: {} ({})",
                ctx.run_id,
                path.as_deref().unwrap_or("built-in defaults"),
                snapshot.short_id()
            );
        }
        OutputFormat::Exitcode => {}
        OutputFormat::Md => {
            let engine = &config.engine;
            println!("# tunnel-core config show");
            println!();
            match path {
                Some(p) => println!("Source: {} ({})", p, config.source()),
                None => println!("Source: **built-in defaults** (no engine config found)"),
            }
            println!("Schema version: {}", engine.schema_version);
            println!();
            println!("| Setting | Value |");
            println!("|---|---|");
            println!("| min_samples | {} |", engine.min_samples);
            println!("| moderate_min (ft) | {} |", engine.thresholds.moderate_min);
            println!("| poor_min (ft) | {} |", engine.thresholds.poor_min);
            println!("| decision_time_s | {} |", engine.decision_time_s);
            println!("| plate_y_ft | {:.4} |", engine.plate_y_ft);
            println!("| path_step_s | {} |", engine.path_step_s);
            println!("| recompute | {} |", engine.recompute);
            println!();
            println!("Config hash: {}", snapshot.short_id());
        }
    }

    ExitCode::Clean
}

/// Validate an engine config file.
fn run_config_validate(global: &GlobalOpts, path: Option<&PathBuf>) -> ExitCode {
    let ctx = LogContext::new(generate_run_id());

    let options = ConfigOptions {
        config_path: path.cloned().or_else(|| global.config.clone()),
    };

    match load_config(&options) {
        Ok(config) => {
            let shown = config.path().map(|p| p.display().to_string());
            match global.format {
                OutputFormat::Json => print_json(&with_envelope(
                    &ctx,
                    "config validate",
                    serde_json::json!({
                        "status": "valid",
                        "path": shown,
                        "using_defaults": config.using_defaults(),
                        "schema_version": config.engine.schema_version,
                    }),
                )),
                OutputFormat::Summary => {
                    println!("[{}] config validate: OK", ctx.run_id);
                }
                OutputFormat::Exitcode => {}
                OutputFormat::Md => {
                    println!("# Configuration Validation");
                    println!();
                    println!("Status: ✓ Valid");
                    match shown {
                        Some(p) => println!("Config: {}", p),
                        None => println!("Config: using built-in defaults"),
                    }
                }
            }
            ExitCode::Clean
        }
        Err(e) => output_config_error(global, &ctx, &e),
    }
}

fn run_schema(global: &GlobalOpts, args: &SchemaArgs) -> ExitCode {
    if args.list {
        match global.format {
            OutputFormat::Json => {
                let list: Vec<serde_json::Value> = available_schemas()
                    .into_iter()
                    .map(|(name, desc)| serde_json::json!({ "name": name, "description": desc }))
                    .collect();
                print_json(&serde_json::json!({
                    "schema_version": SCHEMA_VERSION,
                    "schemas": list,
                }));
            }
            OutputFormat::Exitcode => {}
            _ => {
                for (name, desc) in available_schemas() {
                    println!("{:<22} {}", name, desc);
                }
            }
        }
        return ExitCode::Clean;
    }

    let format = if args.compact {
        SchemaFormat::JsonCompact
    } else {
        SchemaFormat::Json
    };

    let value = match &args.name {
        Some(name) => match generate_schema(name) {
            Some(schema) => schema,
            None => {
                eprintln!(
                    "unknown schema type '{}'; run `tunnel-core schema --list`",
                    name
                );
                return ExitCode::ArgsError;
            }
        },
        None => match serde_json::to_value(generate_all_schemas()) {
            Ok(v) => v,
            Err(e) => {
                eprintln!("schema generation failed: {}", e);
                return ExitCode::InternalError;
            }
        },
    };

    match format_schema(&value, format) {
        Ok(text) => {
            if global.format != OutputFormat::Exitcode {
                println!("{}", text);
            }
            ExitCode::Clean
        }
        Err(e) => {
            eprintln!("schema formatting failed: {}", e);
            ExitCode::InternalError
        }
    }
}

fn print_version(global: &GlobalOpts) {
    let version_info = serde_json::json!({
        "schema_version": SCHEMA_VERSION,
        "tunnel_core_version": env!("CARGO_PKG_VERSION"),
        "rust_version": env!("CARGO_PKG_RUST_VERSION"),
    });

    match global.format {
        OutputFormat::Json => print_json(&version_info),
        OutputFormat::Exitcode => {}
        _ => {
            println!("tunnel-core {}", env!("CARGO_PKG_VERSION"));
            println!("schema version: {}", SCHEMA_VERSION);
        }
    }
}
