//! CLI entrypoint for course-planner
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, anyhow, bail};
use clap::Parser;
use planner_application::{PlanMenusInput, PlanMenusOutput, PlanMenusUseCase, plan_deterministic};
use planner_domain::{
    BudgetContext, ConfigIssue, MenuPromptTemplate, OutputFormat, Severity, build_prompt,
    check_menus, extract_ideas, parse_menus_response,
};
use planner_infrastructure::{CommandMenuGenerator, ConfigLoader, FileConfig};
use planner_presentation::{Cli, Command, ConsoleFormatter, InputArgs, ProgressReporter};
use std::io::Read;
use std::path::Path;
use std::process::ExitCode;
use std::sync::Arc;
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    if cli.show_config {
        ConfigLoader::print_config_sources();
        return Ok(ExitCode::SUCCESS);
    }

    // === Configuration ===
    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())
            .map_err(|e| anyhow!("Failed to load configuration: {}", e))?
    };
    report_config_issues(&config.validate())?;

    ConsoleFormatter::set_color(config.output.color);
    let format: OutputFormat = cli
        .output
        .map(Into::into)
        .or(config.output.format)
        .unwrap_or_default();
    let budget = config
        .budget
        .to_budget_context(cli.food_cost.as_deref(), cli.wine_cost.as_deref());

    let Some(command) = cli.command else {
        bail!("No command given. Run `course-planner --help` for usage.");
    };
    let text = read_custom_text(command.input())?;

    info!("Starting course-planner");
    debug!("Custom text: {:?}", text);

    match command {
        Command::Plan { .. } => {
            let result = plan_deterministic(&text, &budget);
            print_result(&result, format);
            Ok(ExitCode::SUCCESS)
        }

        Command::Prompt { .. } => {
            print_prompt(&text, &budget, format);
            Ok(ExitCode::SUCCESS)
        }

        Command::Check { menus, .. } => run_check(&text, &menus, &config, format),

        Command::Generate {
            max_attempts,
            no_fallback,
            ..
        } => {
            if let Some(issue) = config.generation.command_issue() {
                bail!("{}", issue.message);
            }

            // === Dependency Injection ===
            let generator = Arc::new(CommandMenuGenerator::from_argv(&config.generation.command)?);

            let mut params = config
                .generation
                .to_generation_params(config.fidelity.to_policy());
            if let Some(max) = max_attempts {
                params = params.with_max_attempts(max);
            }
            if no_fallback {
                params = params.with_fallback(false);
            }

            info!(
                "Generating with `{}` (up to {} attempt(s))",
                generator.program(),
                params.max_attempts
            );

            let input = PlanMenusInput::new(text)
                .with_budget(budget)
                .with_params(params);
            let use_case = PlanMenusUseCase::new(generator);

            let result = if cli.quiet {
                use_case.execute(input).await?
            } else {
                let progress = ProgressReporter::new();
                use_case.execute_with_progress(input, &progress).await?
            };

            print_result(&result, format);
            Ok(ExitCode::SUCCESS)
        }
    }
}

/// Log warnings and abort on fatal configuration issues
fn report_config_issues(issues: &[ConfigIssue]) -> Result<()> {
    for issue in issues {
        match issue.severity {
            Severity::Warning => warn!("config: {}", issue.message),
            Severity::Error => eprintln!("config error: {}", issue.message),
        }
    }
    if ConfigIssue::has_errors(issues) {
        bail!("Invalid configuration");
    }
    Ok(())
}

/// Read the host's text from the argument, a file, or stdin (`-`)
fn read_custom_text(input: &InputArgs) -> Result<String> {
    if let Some(text) = &input.text {
        return Ok(text.clone());
    }
    match &input.file {
        Some(path) if path.as_os_str() == "-" => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read custom text from stdin")?;
            Ok(buf)
        }
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display())),
        None => Ok(String::new()),
    }
}

fn print_result(result: &PlanMenusOutput, format: OutputFormat) {
    let output = match format {
        OutputFormat::Full => ConsoleFormatter::format(result),
        OutputFormat::Menus => ConsoleFormatter::format_menus_only(result),
        OutputFormat::Json => ConsoleFormatter::format_json(result),
    };

    println!("{}", output);
}

fn print_prompt(text: &str, budget: &BudgetContext, format: OutputFormat) {
    let ideas = extract_ideas(text);
    let custom = build_prompt(text, &ideas);
    let prompt = MenuPromptTemplate::generation_prompt(budget, &custom);

    let output = match format {
        OutputFormat::Json => ConsoleFormatter::format_prompt_json(
            &ideas,
            MenuPromptTemplate::system(),
            &custom,
            &prompt,
        ),
        OutputFormat::Menus => custom,
        OutputFormat::Full => ConsoleFormatter::format_prompt(&custom, &prompt),
    };

    println!("{}", output);
}

/// Validate a saved generator response; exit status 1 on drift
fn run_check(
    text: &str,
    menus_path: &Path,
    config: &FileConfig,
    format: OutputFormat,
) -> Result<ExitCode> {
    let response = std::fs::read_to_string(menus_path)
        .with_context(|| format!("Failed to read {}", menus_path.display()))?;
    let menus = parse_menus_response(&response)
        .with_context(|| format!("Could not parse menus from {}", menus_path.display()))?;

    let ideas = extract_ideas(text);
    let report = check_menus(&menus, &ideas, &config.fidelity.to_policy());
    info!(
        "Checked {} menu(s) against {} idea(s): {}",
        menus.len(),
        ideas.len(),
        if report.passed() { "pass" } else { "drift" }
    );

    let output = match format {
        OutputFormat::Json => ConsoleFormatter::format_json(&report),
        OutputFormat::Menus => ConsoleFormatter::format_report(&report),
        OutputFormat::Full => format!(
            "{}\n{}",
            ConsoleFormatter::format_menus(&menus),
            ConsoleFormatter::format_report(&report)
        ),
    };
    println!("{}", output);

    Ok(if report.passed() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
