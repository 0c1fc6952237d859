use clap::{Args, Parser, Subcommand};

use crate::pendulum::driver::DEFAULT_FRAME_PERIOD_MS;

#[derive(Debug, Parser)]
#[clap(author, version, about)]
pub struct PendulumAnimatorArgs {
    /// Animates the reference pair of pendulums when no command is given.
    #[command(subcommand)]
    pub command: Option<CommandsEnum>,
}

#[derive(Debug, Subcommand)]
pub enum CommandsEnum {
    /// Simulate with a fixed frame cadence and write PNG frames plus a trajectory log.
    Render(RenderArgs),
    /// Open a window and animate the pendulums in real time.
    Animate(ParameterFilePath),
}

#[derive(Debug, Args)]
pub struct ParameterFilePath {
    pub params_path: String,
}

#[derive(Debug, Args)]
pub struct RenderArgs {
    pub params_path: String,

    #[clap(long, short)]
    pub date_time_out: bool,

    /// Number of frame callbacks to simulate.
    #[clap(long, short, default_value_t = 600)]
    pub frames: usize,

    /// Time between synthetic frame timestamps, in milliseconds.
    #[clap(long, default_value_t = DEFAULT_FRAME_PERIOD_MS)]
    pub frame_period_ms: f64,

    /// Write a PNG for every N-th frame. Zero disables image output.
    #[clap(long, short, default_value_t = 10)]
    pub image_stride: usize,
}
