use thiserror::Error;
use tracing::{debug, info};

use crate::{
    core::file_io::{
        build_output_path_with_date_time, extract_base_name, maybe_date_time_string, FilePrefix,
    },
    pendulum::{params::AnimationParams, state::ConfigError},
};

use args::{CommandsEnum, PendulumAnimatorArgs};

pub mod animate;
pub mod args;
pub mod render;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("unable to parse parameter file: {0}")]
    Json(#[from] serde_json::Error),
    #[error("unable to write image: {0}")]
    Image(#[from] image::ImageError),
    #[error("invalid pendulum configuration: {0}")]
    Config(#[from] ConfigError),
    #[error("invalid option: {0}")]
    InvalidOption(String),
    #[error("unable to create window: {0}")]
    Window(#[from] winit::error::OsError),
    #[error("unable to create pixel buffer: {0}")]
    Pixels(#[from] pixels::Error),
}

pub fn load_params(params_path: &str) -> Result<AnimationParams, CliError> {
    let params: AnimationParams = serde_json::from_str(&std::fs::read_to_string(params_path)?)?;
    debug!(
        params_path,
        pendulums = params.pendulums.len(),
        "loaded parameter file"
    );
    Ok(params)
}

pub fn run(args: &PendulumAnimatorArgs) -> Result<(), CliError> {
    match &args.command {
        Some(CommandsEnum::Render(render_args)) => {
            let params = load_params(&render_args.params_path)?;
            let file_prefix = FilePrefix {
                directory_path: build_output_path_with_date_time(
                    &render_args.params_path,
                    "render",
                    &maybe_date_time_string(render_args.date_time_out),
                )?,
                file_base: extract_base_name(&render_args.params_path).to_owned(),
            };
            let options = render::RenderOptions {
                frames: render_args.frames,
                frame_period_ms: render_args.frame_period_ms,
                image_stride: render_args.image_stride,
            };
            render::render_animation(&params, &options, file_prefix)
        }
        Some(CommandsEnum::Animate(path)) => animate::animate(&load_params(&path.params_path)?),
        None => {
            info!("no command given; animating the reference configuration");
            animate::animate(&AnimationParams::reference())
        }
    }
}
