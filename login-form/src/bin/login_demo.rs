//! Drive the sign-in form headlessly from command-line credentials.
#![cfg_attr(not(any(test, doctest)), deny(clippy::unwrap_used))]
#![cfg_attr(not(any(test, doctest)), deny(clippy::expect_used))]
#![expect(
    clippy::print_stdout,
    reason = "the demo reports errors and the outcome as key=value lines"
)]

use std::io;
use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use login_form::LoginFormSettings;
use login_form::domain::{FormEvent, InputField, LoginForm, SubmitOutcome};
use tokio::runtime::Builder;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

/// `login-demo` command arguments.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "login-demo",
    about = "Validate and submit sign-in credentials through the form controller",
    version
)]
struct CliArgs {
    /// Email typed into the form. Left empty when omitted.
    #[arg(long, value_name = "address", default_value = "")]
    email: String,
    /// Password typed into the form. Left empty when omitted.
    #[arg(long, value_name = "secret", default_value = "", hide_default_value = true)]
    password: String,
    /// Tick the "remember me" box.
    #[arg(long)]
    remember: bool,
}

fn main() -> io::Result<ExitCode> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let runtime = Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|error| io::Error::other(format!("create Tokio runtime: {error}")))?;
    runtime.block_on(async_main())
}

async fn async_main() -> io::Result<ExitCode> {
    let args = CliArgs::try_parse().map_err(io::Error::other)?;
    let settings = LoginFormSettings::from_environment("login-demo").map_err(io::Error::other)?;
    let auth_client = settings.build_auth_client().map_err(io::Error::other)?;

    let form = LoginForm::new(auth_client);
    form.subscribe(Arc::new(log_event));

    form.set_email(args.email);
    form.validate_field(InputField::Email);
    form.set_password(args.password);
    form.validate_field(InputField::Password);
    form.set_remember(args.remember);

    let outcome = form.submit().await;
    for (field, message) in form.errors().iter() {
        println!("error.{field}={message}");
    }
    let (label, code) = match outcome {
        SubmitOutcome::Authenticated => ("authenticated", ExitCode::SUCCESS),
        SubmitOutcome::Rejected(_) => ("rejected", ExitCode::from(1)),
        SubmitOutcome::Invalid => ("invalid", ExitCode::from(2)),
        SubmitOutcome::AlreadySubmitting => ("already_submitting", ExitCode::from(3)),
    };
    println!("outcome={label}");
    Ok(code)
}

fn log_event(event: &FormEvent) {
    if event.moves_focus() {
        info!(target: "login_demo::focus", "focus moved to the global error");
    }
    info!(?event, "form event");
}
