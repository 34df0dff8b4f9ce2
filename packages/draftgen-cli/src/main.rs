use std::io::Write as _;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use console::Term;
use dialoguer::{theme::ColorfulTheme, Input, Select};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use draftgen::{pipeline, DraftError, OpenAIModel, ParameterMapping, Workflow};
use openai_client::OpenAIClient;

mod config;

use config::Config;

#[derive(Parser)]
#[command(name = "draftgen", about = "Generate project scaffolds and PRDs with a hosted LLM")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Generate a project outline, implementation plan, and setup script
    Scaffold,
    /// Generate a product requirements document
    Prd,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn,draftgen=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    // Missing credentials are a configuration error, surfaced before any
    // form is shown or request attempted.
    let config = Config::from_env().context("Failed to load configuration")?;

    let client = OpenAIClient::new(config.openai_api_key.clone());
    let model = OpenAIModel::new(client, config.model.clone());

    let workflow = match cli.command {
        Some(Command::Scaffold) => Workflow::scaffold(),
        Some(Command::Prd) => Workflow::prd(),
        None => pick_workflow()?,
    };

    run_workflow(&model, &workflow, &config).await
}

/// Let the user pick a generator when no subcommand was given.
fn pick_workflow() -> Result<Workflow> {
    let term = Term::stdout();
    let workflows = Workflow::all();
    let titles: Vec<&str> = workflows.iter().map(|w| w.title).collect();

    let selection = Select::with_theme(&ColorfulTheme::default())
        .with_prompt("What would you like to generate?")
        .items(&titles)
        .default(0)
        .interact_on(&term)?;

    Ok(workflows[selection])
}

async fn run_workflow(model: &OpenAIModel, workflow: &Workflow, config: &Config) -> Result<()> {
    println!();
    println!("{}", workflow.title.bright_cyan().bold());
    println!("{}", workflow.intro.dimmed());
    println!();

    let mapping = collect_form(workflow)?;

    let mapping = match mapping {
        Some(mapping) => mapping,
        None => {
            println!("{}", "Please fill in all fields.".yellow());
            return Ok(());
        }
    };

    println!();
    println!("{}", "Generating...".bright_blue());
    println!();

    let document = pipeline::run(model, workflow, &mapping, |fragment| {
        print!("{}", fragment);
        let _ = std::io::stdout().flush();
    })
    .await
    .context("Generation failed")?;

    println!();

    for section in &document.sections {
        if let Some(content) = &section.content {
            println!();
            println!("{}", section.label.bright_green().bold());
            println!("{}", content);
        }
    }

    let path = draftgen::write_export(&config.output_dir, &workflow.export, &document.full_text)?;
    println!();
    println!(
        "{} {}",
        "Saved full response to".bright_blue(),
        path.display()
    );

    Ok(())
}

/// Prompt for every field. Returns `None` when any field is left blank,
/// which blocks submission with the single form warning.
fn collect_form(workflow: &Workflow) -> Result<Option<ParameterMapping>> {
    let mut mapping = ParameterMapping::new();

    for field in workflow.fields {
        if let Some(help) = field.help {
            println!("{}", help.dimmed());
        }

        let value: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(field.label)
            .allow_empty(true)
            .interact_text()?;

        mapping.insert(field.key, value);
    }

    match draftgen::form::validate(workflow.fields, &mapping) {
        Ok(()) => Ok(Some(mapping)),
        Err(DraftError::IncompleteForm) => Ok(None),
        Err(e) => Err(e.into()),
    }
}
