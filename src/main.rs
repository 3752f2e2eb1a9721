// SPDX-License-Identifier: MIT
// Copyright 2026 Dignemi contributors

//! Dignemi admin CLI
//!
//! Signs in with a magic link and manages routes and activities through
//! the content API. Command output goes to stdout; logs go to stderr.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand};
use dignemi_admin::{
    builder::{ActivityPreview, DayPreview},
    config::Config,
    error::AppError,
    forms::{ActivityForm, LoginForm, RouteCreateForm, RouteDraft, Tracked},
    models::Activity,
    services::auth::LINK_SENT_MESSAGE,
    views::{ActivityListView, RouteListView},
    AdminApp,
};
use serde::de::DeserializeOwned;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Debug, Parser)]
#[command(name = "dignemi-admin", about = "Content management for the Dignemi app")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Request a magic link
    Login {
        #[arg(long)]
        email: String,
    },
    /// Sign in with a magic-link URL or a pasted token
    Verify {
        #[arg(long)]
        token: String,
    },
    Logout,
    Whoami {
        /// Ask the API instead of reading the stored session
        #[arg(long)]
        remote: bool,
    },
    #[command(subcommand)]
    Routes(RoutesCommand),
    #[command(subcommand)]
    Activities(ActivitiesCommand),
}

#[derive(Debug, Subcommand)]
enum RoutesCommand {
    List {
        #[arg(long, default_value = "")]
        search: String,
    },
    /// Print a stored route as a draft file
    Show {
        id: String,
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Create a route from a step-list form file
    Create {
        #[arg(long)]
        file: PathBuf,
    },
    /// Create or update a route from a draft file
    Save {
        #[arg(long)]
        file: PathBuf,
        #[arg(long)]
        id: Option<String>,
    },
    Preview {
        #[arg(long)]
        file: PathBuf,
        /// 1-based day number
        #[arg(long)]
        day: Option<usize>,
    },
}

#[derive(Debug, Subcommand)]
enum ActivitiesCommand {
    List {
        #[arg(long)]
        file: PathBuf,
        #[arg(long, default_value = "")]
        search: String,
    },
    Preview {
        #[arg(long)]
        file: PathBuf,
    },
    Save {
        #[arg(long)]
        file: PathBuf,
    },
}

#[tokio::main]
async fn main() {
    init_logging();

    if let Err(err) = run(Cli::parse()).await {
        match err.downcast_ref::<AppError>() {
            Some(AppError::Validation(report)) => {
                eprintln!("error: {}", report.summary());
                for field in report.errors() {
                    eprintln!("  {}: {}", field.path, field.message);
                }
            }
            Some(app_err) => eprintln!("error: {}", app_err.alert_message()),
            None => eprintln!("error: {err:#}"),
        }
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let config = Config::from_env().context("Failed to load configuration")?;
    tracing::debug!(api_url = %config.api_url, "Configuration loaded");
    let app = AdminApp::from_config(config)?;

    match cli.command {
        Command::Login { email } => {
            app.auth.request_magic_link(&LoginForm { email }).await?;
            println!("{LINK_SENT_MESSAGE}");
        }
        Command::Verify { token } => {
            let user = app.auth.verify(&token)?;
            println!("{} ({})", user.email, user.role);
        }
        Command::Logout => app.auth.logout()?,
        Command::Whoami { remote } => {
            app.require_dashboard()?;
            let user = if remote {
                app.auth.get_me().await?
            } else {
                app.session.user().ok_or(AppError::Unauthorized)?
            };
            println!("{} {} ({})", user.initial().unwrap_or('?'), user.email, user.role);
        }
        Command::Routes(cmd) => run_routes(&app, cmd).await?,
        Command::Activities(cmd) => run_activities(&app, cmd).await?,
    }
    Ok(())
}

async fn run_routes(app: &AdminApp, cmd: RoutesCommand) -> anyhow::Result<()> {
    match cmd {
        RoutesCommand::List { search } => {
            app.require_dashboard()?;
            let catalog = app.content.get_catalog().await?;
            print!("{}", RouteListView::new(&catalog, &search));
        }
        RoutesCommand::Show { id, out } => {
            app.require_dashboard()?;
            let (form, builder) = app.content.load_program(&id).await?;
            let json = serde_json::to_string_pretty(&RouteDraft::from_parts(&form, &builder))?;
            match out {
                Some(path) => fs::write(&path, json)
                    .with_context(|| format!("Failed to write {}", path.display()))?,
                None => println!("{json}"),
            }
        }
        RoutesCommand::Create { file } => {
            app.require_dashboard()?;
            let form: RouteCreateForm = read_json(&file)?;
            let created = app.content.submit_route_form(&form).await?;
            println!("Ruta creada {}", created.id.unwrap_or_default());
        }
        RoutesCommand::Save { file, id } => {
            app.require_dashboard()?;
            let (form, mut builder) = read_json::<RouteDraft>(&file)?.into_parts();
            let result = app.content.save_program(id.as_deref(), &form, &mut builder).await;
            if let Err(AppError::Validation(_)) = &result {
                eprintln!("Día {} tiene errores", builder.active_day_number());
            }
            let saved = result?;
            println!("Ruta guardada {}", saved.id.unwrap_or_default());
        }
        RoutesCommand::Preview { file, day } => {
            let (_, mut builder) = read_json::<RouteDraft>(&file)?.into_parts();
            if let Some(day) = day {
                if day == 0 || !builder.select_day(day - 1) {
                    anyhow::bail!("Day {day} does not exist ({} days)", builder.day_count());
                }
            }
            print!("{}", DayPreview::from_builder(&builder));
        }
    }
    Ok(())
}

async fn run_activities(app: &AdminApp, cmd: ActivitiesCommand) -> anyhow::Result<()> {
    match cmd {
        ActivitiesCommand::List { file, search } => {
            let activities: Vec<Activity> = read_json(&file)?;
            print!("{}", ActivityListView::new(&activities, &search));
        }
        ActivitiesCommand::Preview { file } => {
            let form: ActivityForm = read_json(&file)?;
            print!("{}", ActivityPreview::project(&form));
        }
        ActivitiesCommand::Save { file } => {
            app.require_dashboard()?;
            let mut form = Tracked::new(read_json::<ActivityForm>(&file)?);
            let created = app.content.save_activity(&mut form).await?;
            println!(
                "Actividad guardada {} {}",
                created.id.unwrap_or_default(),
                form.status_label()
            );
        }
    }
    Ok(())
}

fn read_json<T: DeserializeOwned>(path: &Path) -> anyhow::Result<T> {
    let text =
        fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("Invalid JSON in {}", path.display()))
}

/// Initialize structured JSON logging on stderr.
fn init_logging() {
    let format = tracing_subscriber::fmt::layer()
        .json()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_current_span(true)
        .flatten_event(true);

    let mut filter = tracing_subscriber::EnvFilter::from_default_env();
    for directive in ["dignemi_admin=debug", "info"] {
        if let Ok(directive) = directive.parse() {
            filter = filter.add_directive(directive);
        }
    }

    tracing_subscriber::registry().with(filter).with(format).init();
}
