//! laudo - session CLI for the multi-tenant medical-report platform
//!
//! Wires the session and authorization subsystem together: config, token
//! store, credential pipeline, and session service.
//!
//! # Examples
//!
//! ```bash
//! # Sign in and persist the session
//! laudo login --username ana --password s3cret
//!
//! # Inspect the current session
//! laudo whoami --pretty
//!
//! # Authenticated passthrough
//! laudo get /laudos
//! laudo post /laudos --body '{"titulo": "RX Torax"}'
//! ```

mod cli;
mod commands;
mod logger;
mod navigator;

use crate::cli::Cli;
use crate::commands::Commands;
use crate::navigator::CliNavigator;

use lp_auth::{LandingRoutes, SessionStatus};
use lp_client::{
    ApiClient, FileTokenStore, Navigator, Result as ClientResult, SessionService, TokenStore,
};
use lp_config::Config;

use std::process::ExitCode;
use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use serde_json::{Value, json};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {e}");
            return ExitCode::FAILURE;
        }
    };
    if let Err(e) = config.validate() {
        eprintln!("Error: {e}");
        return ExitCode::FAILURE;
    }

    let log_file = match config.log_file_path() {
        Ok(log_file) => log_file,
        Err(e) => {
            eprintln!("Error: {e}");
            return ExitCode::FAILURE;
        }
    };
    if let Err(e) = logger::initialize(config.logging.level, log_file, config.logging.colored) {
        eprintln!("Error: {e}");
        return ExitCode::FAILURE;
    }

    let session_path = match config.session_path() {
        Ok(session_path) => session_path,
        Err(e) => {
            eprintln!("Error: {e}");
            return ExitCode::FAILURE;
        }
    };

    let base_url = cli
        .server
        .clone()
        .unwrap_or_else(|| config.api.base_url.clone());
    let routes = LandingRoutes {
        login: config.routes.login.clone(),
        dashboard: config.routes.dashboard.clone(),
        super_admin: config.routes.super_admin.clone(),
    };

    let store: Arc<dyn TokenStore> = Arc::new(FileTokenStore::new(session_path));
    let navigator: Arc<dyn Navigator> = Arc::new(CliNavigator::new(&routes.login));
    let api = match ApiClient::new(
        &base_url,
        Duration::from_secs(config.api.request_timeout_secs),
        Arc::clone(&store),
        Arc::clone(&navigator),
        routes.clone(),
    ) {
        Ok(api) => Arc::new(api),
        Err(e) => {
            eprintln!("Error: {e}");
            return ExitCode::FAILURE;
        }
    };
    let session = SessionService::new(Arc::clone(&api), store, navigator, routes);
    session.resolve();

    match run_command(cli.command, &api, &session).await {
        Ok(value) => {
            let rendered = if cli.pretty {
                serde_json::to_string_pretty(&value)
            } else {
                serde_json::to_string(&value)
            };
            match rendered {
                Ok(text) => {
                    println!("{text}");
                    ExitCode::SUCCESS
                }
                Err(e) => {
                    eprintln!("Error: {e}");
                    ExitCode::FAILURE
                }
            }
        }
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run_command(
    command: Commands,
    api: &ApiClient,
    session: &SessionService,
) -> ClientResult<Value> {
    match command {
        Commands::Login { username, password } => {
            session.sign_in(&username, &password).await?;
            Ok(whoami(session))
        }

        Commands::Logout => {
            session.logout().await;
            Ok(json!({"status": "anonymous"}))
        }

        Commands::Whoami => Ok(whoami(session)),

        Commands::Get { path } => api.get(&path).await,

        Commands::Post { path, body } => {
            let body: Value = serde_json::from_str(&body)?;
            api.post(&path, &body).await
        }
    }
}

fn whoami(session: &SessionService) -> Value {
    match session.status() {
        SessionStatus::Authenticated(snapshot) => json!({
            "status": "authenticated",
            "subject": snapshot.subject_id,
            "principalRole": snapshot.principal_role,
            "roles": snapshot.roles.iter().collect::<Vec<_>>(),
            "superAdmin": snapshot.is_super_admin,
            "financialPermission": snapshot.financial_permission,
            "tenant": snapshot.tenant_scope.primary(),
            "expiresAt": snapshot.expires_at,
        }),
        _ => json!({"status": "anonymous"}),
    }
}
