use clap::Parser;
use pendulum_animator::cli::{args::PendulumAnimatorArgs, run};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args: PendulumAnimatorArgs = PendulumAnimatorArgs::parse();

    if let Err(err) = run(&args) {
        tracing::error!(%err, "command failed");
        std::process::exit(1);
    }
}
