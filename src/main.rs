mod api;
mod cli;
mod cmd;
mod config;
mod parsers;
mod region;
mod types;
mod util;

use anyhow::Result;
use tracing::debug;
use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter,
};

use cli::Command;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing subscriber for human-readable logs
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env().unwrap_or(
                EnvFilter::default()
                    .add_directive("info".parse()?)
                    .add_directive("hyper=error".parse()?),
            ),
        )
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_span_events(FmtSpan::CLOSE)
                .event_format(fmt::format().compact().with_target(false).without_time()),
        )
        .init();

    let cli = cli::parse();
    debug!("{cli:#?}");

    match cli.command {
        Command::OnboardAsa(args) => cmd::onboard_asa(&cli.connection, args).await,
        Command::CreateFtd(args) => cmd::create_ftd(&cli.connection, args).await,
        Command::RegisterFtd(args) => cmd::register_ftd(&cli.connection, args).await,
        Command::OnboardFtds(args) => cmd::onboard_ftds(&cli.connection, args).await,
        Command::CreateUsers(args) => cmd::create_users(&cli.connection, args).await,
        Command::ListDevices => cmd::list_devices(&cli.connection).await,
        Command::AskAi(args) => cmd::ask_ai(&cli.connection, args).await,
    }
}
