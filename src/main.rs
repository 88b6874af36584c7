use std::io;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use console::{style, StyledObject};
use tracing_subscriber::EnvFilter;

use urbano::commands::{self, Context};
use urbano::config::MailConfig;
use urbano::mailer::MailgunTransport;
use urbano::urbandict::HttpTransport;

#[derive(Parser, Debug)]
#[command(name = "urbano", version, author = "Chubbs Solutions <urbano@chubbs.solutions>")]
#[command(about = "Get a fresh Urban Dictionary word in your inbox")]
struct CliOptions {
    /// Print request urls and verbose logs
    #[arg(long, global = true)]
    debug: bool,

    #[arg(long, env = "MAILGUN_PUBLIC_API_KEY", hide_env_values = true)]
    mailgun_api_key: Option<String>,

    #[arg(long, env = "MAILGUN_DOMAIN")]
    mailgun_domain: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Get and send a new word by email
    #[command(visible_alias = "s")]
    Send { recipient: Option<String> },
    /// Display a new word
    #[command(visible_alias = "d")]
    Display,
    /// Define a word
    #[command(visible_alias = "w")]
    Word { terms: Vec<String> },
}

fn init_tracing(debug: bool) {
    let default = if debug { "urbano=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn main() -> ExitCode {
    let options = CliOptions::parse();
    init_tracing(options.debug);

    match run(options) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", error_line(&e));
            ExitCode::FAILURE
        }
    }
}

fn error_line(e: &urbano::Error) -> StyledObject<String> {
    style(e.to_string()).for_stderr().red()
}

fn run(options: CliOptions) -> urbano::Result<()> {
    let transport = HttpTransport::new()?;
    let mail_transport = MailgunTransport::new()?;
    let mail_config = MailConfig::new(options.mailgun_api_key, options.mailgun_domain);
    let mut ctx = Context::new(&transport, &mail_transport, &mail_config);
    ctx.debug = options.debug;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match options.command {
        Command::Send { recipient } => {
            let today = chrono::Local::now().date_naive();
            commands::send(&ctx, recipient.as_deref(), today, &mut out)
        }
        Command::Display => commands::display(&ctx, &mut out),
        Command::Word { terms } => commands::define(&ctx, &terms, &mut out),
    }
}
