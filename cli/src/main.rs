//! CLI entrypoint for minwon-desk
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, bail};
use clap::Parser;
use minwon_application::{
    AuditLogger, AutoConfirmCompletion, ComplaintView, CompletionPrompt, NoAuditLogger,
    NoProgress, ReplyWorkflowUseCase, WorkflowError, WorkflowProgressNotifier,
};
use minwon_domain::{ComplaintId, OutputFormat, QualityRating};
use minwon_infrastructure::{ConfigLoader, FileConfig, HttpComplaintBackend, JsonlAuditLogger};
use minwon_presentation::{
    Cli, Command, ConsoleFormatter, EditError, InteractiveCompletionPrompt, SimpleProgress,
    SpinnerProgress, apply_edits, apply_steer,
};
use std::io::IsTerminal;
use std::path::Path;
use std::process::ExitCode;
use std::sync::Arc;
use tracing::{debug, info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    let _log_guard = init_tracing(cli.verbose, cli.log_file.as_deref())?;
    info!("Starting minwon-desk");

    if cli.show_config {
        print_config_sources(cli.config.as_deref());
        return Ok(ExitCode::SUCCESS);
    }

    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_deref()).context("Failed to load configuration")?
    };
    let issues = config.validate();
    if !issues.is_empty() {
        for issue in &issues {
            eprintln!("config error: {}", issue);
        }
        bail!("Invalid configuration ({} issue(s))", issues.len());
    }

    let Some(command) = cli.command.clone() else {
        bail!("No command given. Run with --help for usage.");
    };
    let format = config.output.resolve_format(cli.output.map(OutputFormat::from));
    ConsoleFormatter::set_color(config.output.use_color(cli.no_color, format));

    let use_case = build_use_case(&cli, &config, &command)?;
    let view = use_case
        .open(ComplaintId(command.complaint_id()))
        .await
        .with_context(|| format!("Failed to open complaint {}", command.complaint_id()))?;

    let interrupt = tokio::spawn(close_on_interrupt(view.clone()));
    let result = run(&use_case, &view, command, format).await;
    interrupt.abort();

    match result {
        Ok(()) => Ok(ExitCode::SUCCESS),
        Err(e) if is_detached(&e) => {
            eprintln!("Interrupted; nothing further was sent and any late response was discarded.");
            Ok(ExitCode::from(130))
        }
        Err(e) => Err(e),
    }
}

// === Dependency Injection ===
fn build_use_case(cli: &Cli, config: &FileConfig, command: &Command) -> Result<ReplyWorkflowUseCase> {
    let backend = Arc::new(
        HttpComplaintBackend::from_config(&config.backend)
            .context("Failed to create backend client")?,
    );
    debug!("Backend at {}", backend.base_url());

    let prompt: Arc<dyn CompletionPrompt> = match command {
        Command::Complete { rating, yes, .. } => {
            let rating = rating.map(QualityRating::new).transpose()?;
            if *yes {
                Arc::new(AutoConfirmCompletion::new(rating))
            } else {
                Arc::new(InteractiveCompletionPrompt::new().with_preset_rating(rating))
            }
        }
        _ => Arc::new(InteractiveCompletionPrompt::new()),
    };

    let progress: Arc<dyn WorkflowProgressNotifier> = if cli.quiet {
        Arc::new(NoProgress)
    } else if std::io::stderr().is_terminal() {
        Arc::new(SpinnerProgress::new())
    } else {
        Arc::new(SimpleProgress)
    };

    let audit_logger: Arc<dyn AuditLogger> = match &config.audit.path {
        Some(path) => match JsonlAuditLogger::new(path) {
            Some(logger) => {
                debug!("Audit log at {}", logger.path().display());
                Arc::new(logger)
            }
            None => Arc::new(NoAuditLogger),
        },
        None => Arc::new(NoAuditLogger),
    };

    Ok(ReplyWorkflowUseCase::new(backend, prompt)
        .with_progress(progress)
        .with_audit_logger(audit_logger)
        .with_params(config.workflow.to_params()))
}

async fn run(
    use_case: &ReplyWorkflowUseCase,
    view: &ComplaintView,
    command: Command,
    format: OutputFormat,
) -> Result<()> {
    match command {
        Command::Show { draft, .. } => {
            select_draft(view, draft)?;
            print_view(view, format);
        }
        Command::Generate { .. } => {
            let count = use_case.generate(view).await?;
            info!("{} draft(s) generated", count);
            print_view(view, format);
        }
        Command::Regenerate { .. } => {
            let count = use_case.regenerate(view).await?;
            info!("{} draft(s) regenerated", count);
            print_view(view, format);
        }
        Command::Steer(args) => {
            if args.has_edits() {
                view.update(|w| apply_steer(w.review_points_mut(), &args))?;
                use_case.save_review_points(view).await?;
            }
            if args.regenerate {
                use_case.regenerate(view).await?;
                print_view(view, format);
            } else if format == OutputFormat::Json {
                let payload = view.read(|w| w.review_points().to_payload());
                println!("{}", serde_json::to_string_pretty(&payload)?);
            } else {
                print!(
                    "{}",
                    view.read(|w| ConsoleFormatter::format_review_points(w.review_points()))
                );
            }
        }
        Command::Similar { .. } => {
            let seeds = use_case.similar_seeds(view).await?;
            match format {
                OutputFormat::Json => println!("{}", ConsoleFormatter::format_seeds_json(&seeds)),
                _ => print!("{}", ConsoleFormatter::format_seeds(&seeds)),
            }
        }
        Command::Export { draft, .. } => {
            select_draft(view, draft)?;
            let output = view.read(|w| {
                w.visible_answer().map(|answer| match format {
                    OutputFormat::Json => ConsoleFormatter::format_json(answer),
                    _ => ConsoleFormatter::format_text(answer),
                })
            });
            match output {
                Some(output) => println!("{}", output),
                None => bail!("Complaint {} has no drafts to export", view.id()),
            }
        }
        Command::Hold { edits, .. } => {
            let seeds = if edits.seeds.is_empty() {
                Vec::new()
            } else {
                use_case.similar_seeds(view).await?
            };
            let changes = view.update(|w| apply_edits(w, &edits, &seeds))?;
            debug!("{} edit(s) applied", changes);

            use_case.hold(view).await?;
            eprintln!("Complaint {} held.", view.id());
            print_view(view, format);
        }
        Command::Complete { edits, .. } => {
            let seeds = if edits.seeds.is_empty() {
                Vec::new()
            } else {
                use_case.similar_seeds(view).await?
            };
            let changes = view.update(|w| apply_edits(w, &edits, &seeds))?;
            debug!("{} edit(s) applied", changes);

            match use_case.complete(view).await {
                Ok(outcome) => {
                    match outcome.rating {
                        Some(rating) => eprintln!("Complaint {} completed (rated {}).", view.id(), rating),
                        None => eprintln!("Complaint {} completed.", view.id()),
                    }
                    print_view(view, format);
                }
                Err(WorkflowError::Declined) => {
                    eprintln!("Completion cancelled; nothing was saved.");
                }
                Err(e) => return Err(e.into()),
            }
        }
    }
    Ok(())
}

fn select_draft(view: &ComplaintView, draft: usize) -> Result<(), EditError> {
    let (selected, total) =
        view.update(|w| (draft > 0 && w.select(draft - 1), w.pool().len()));
    if !selected && total > 0 {
        return Err(EditError::NoSuchDraft { draft, total });
    }
    Ok(())
}

fn print_view(view: &ComplaintView, format: OutputFormat) {
    let output = view.read(|w| ConsoleFormatter::format_view(view.complaint(), w, format));
    println!("{}", output);
}

fn is_detached(error: &anyhow::Error) -> bool {
    error
        .downcast_ref::<WorkflowError>()
        .is_some_and(WorkflowError::is_detached)
}

async fn close_on_interrupt(view: ComplaintView) {
    if tokio::signal::ctrl_c().await.is_ok() {
        warn!("Interrupted; closing complaint {}", view.id());
        view.close();
    }
}

fn print_config_sources(config_path: Option<&Path>) {
    println!("Configuration sources (highest priority first):");
    for (label, found) in ConfigLoader::config_sources(config_path) {
        match found {
            Some(path) => println!("  {} [{}]", label, path.display()),
            None => println!("  {}", label),
        }
    }
}

/// Initialize logging based on verbosity level.
///
/// With `--log-file` logs go to that file without ANSI colors; the returned
/// guard flushes it on drop.
fn init_tracing(verbose: u8, log_file: Option<&Path>) -> Result<Option<WorkerGuard>> {
    let filter = match verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    let Some(path) = log_file else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .init();
        return Ok(None);
    };

    let file_name = path
        .file_name()
        .context("--log-file must name a file")?;
    let dir = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };
    std::fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create log directory {}", dir.display()))?;

    let (writer, guard) = tracing_appender::non_blocking(tracing_appender::rolling::never(dir, file_name));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(false)
        .with_writer(writer)
        .init();
    Ok(Some(guard))
}
