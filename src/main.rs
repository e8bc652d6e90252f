//! Principal Dashboard
//!
//! Command line entry point

use std::path::PathBuf;

use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use tracing::info;

use principal_dashboard::{
    config::Settings,
    dashboard::Dashboard,
    models::{EventEdit, LeaveStatus, RequestStatus},
    services::DashboardClient,
    utils::logging,
};

#[derive(Parser, Debug)]
#[command(name = "principal-dashboard")]
#[command(about = "Manage students, leave, event and emergency requests", version)]
struct Args {
    /// Config file (defaults to ./config.* when present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Backend base URL, overriding the configured one
    #[arg(long, global = true)]
    base_url: Option<String>,

    /// Principal username
    #[arg(short, long, global = true)]
    username: Option<String>,

    /// Principal password
    #[arg(short, long, global = true)]
    password: Option<String>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Check that the backend answers
    Ping,
    /// Register a new principal account
    Register {
        #[arg(long)]
        email: String,
    },
    /// Log in and print every table
    Show,
    /// Print the student list
    Students,
    /// Add a student to the roster
    AddStudent {
        #[arg(long)]
        name: String,
        #[arg(long)]
        roll: String,
    },
    /// Rename or re-number a student
    EditStudent {
        #[arg(long)]
        old_roll: String,
        #[arg(long)]
        name: String,
        #[arg(long)]
        roll: String,
    },
    /// Delete a student by roll number
    DeleteStudent { roll: String },
    /// Answer a leave request (Approved, Rejected or Paused)
    LeaveStatus {
        id: i64,
        #[arg(long)]
        status: LeaveStatus,
        #[arg(long)]
        response: Option<String>,
    },
    /// Edit an event request; omitted fields keep their current values
    UpdateEvent {
        id: i64,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        date: Option<String>,
        #[arg(long)]
        location: Option<String>,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        status: Option<RequestStatus>,
    },
    /// Delete an event request
    DeleteEvent {
        id: i64,
        /// Confirm the deletion
        #[arg(long)]
        yes: bool,
    },
    /// Answer an emergency request (Approved, Rejected or Pending)
    EmergencyStatus {
        id: i64,
        #[arg(long)]
        status: RequestStatus,
        #[arg(long)]
        response: Option<String>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    let args = Args::parse();

    // Load configuration
    let mut settings = Settings::load(args.config.as_deref()).context("loading configuration")?;
    if let Some(base_url) = &args.base_url {
        settings.api.base_url = base_url.clone();
    }
    if args.debug {
        settings.logging.level = "debug".to_string();
    }
    settings.validate()?;

    // Initialize logging
    let _guard = logging::init_logging(&settings.logging)?;
    info!("Starting {} against {}", principal_dashboard::info(), settings.api.base_url);

    let client = DashboardClient::new(&settings.api)?;
    let mut dashboard = Dashboard::new(client);

    let username = args.username.clone().or_else(|| settings.principal.username.clone());
    let password = args.password.clone().or_else(|| settings.principal.password.clone());

    let result = run(&mut dashboard, args.command.unwrap_or(Command::Show), username, password).await;

    for notice in dashboard.take_notices() {
        println!("{}", notice);
    }

    result
}

async fn run(
    dashboard: &mut Dashboard,
    command: Command,
    username: Option<String>,
    password: Option<String>,
) -> anyhow::Result<()> {
    match command {
        Command::Ping => {
            let message = dashboard.client().ping().await?;
            println!("{}", message.unwrap_or_else(|| "Backend reachable".to_string()));
        }
        Command::Register { email } => {
            let (username, password) = credentials(username, password)?;
            dashboard.register(&username, &email, &password).await?;
            if let Some(message) = dashboard.register_message() {
                println!("{}", message);
            }
        }
        Command::Students => {
            dashboard.load_students().await?;
            print!("{}", dashboard.render_students());
        }
        Command::AddStudent { name, roll } => {
            dashboard.register_student(&name, &roll).await?;
            print!("{}", dashboard.render_students());
        }
        Command::EditStudent { old_roll, name, roll } => {
            dashboard.update_student(&old_roll, &name, &roll).await?;
            print!("{}", dashboard.render_students());
        }
        Command::DeleteStudent { roll } => {
            dashboard.delete_student(&roll).await?;
            print!("{}", dashboard.render_students());
        }
        command => {
            login(dashboard, username, password).await?;
            run_authenticated(dashboard, command).await?;
            print!("{}", dashboard.render());
        }
    }

    Ok(())
}

async fn run_authenticated(dashboard: &mut Dashboard, command: Command) -> anyhow::Result<()> {
    match command {
        Command::Show => {}
        Command::LeaveStatus { id, status, response } => {
            dashboard.submit_leave_status(id, status, response).await?;
        }
        Command::UpdateEvent { id, title, date, location, description, status } => {
            let edit = EventEdit { title, date, location, description, status };
            dashboard.update_event(id, edit).await?;
        }
        Command::DeleteEvent { id, yes } => {
            if !yes {
                bail!("refusing to delete event {} without --yes", id);
            }
            dashboard.delete_event(id).await?;
        }
        Command::EmergencyStatus { id, status, response } => {
            dashboard.update_emergency(id, status, response).await?;
        }
        other => bail!("{:?} does not need a login", other),
    }
    Ok(())
}

async fn login(
    dashboard: &mut Dashboard,
    username: Option<String>,
    password: Option<String>,
) -> anyhow::Result<()> {
    let (username, password) = credentials(username, password)?;
    if let Err(e) = dashboard.login(&username, &password).await {
        if let Some(message) = dashboard.login_error() {
            bail!("{}", message);
        }
        return Err(e.into());
    }
    Ok(())
}

fn credentials(username: Option<String>, password: Option<String>) -> anyhow::Result<(String, String)> {
    match (username, password) {
        (Some(username), Some(password)) => Ok((username, password)),
        _ => bail!("--username and --password are required (or principal.username/password in config)"),
    }
}
