use clap::Parser;
use seg_eval::{evaluate_from_config, load_config_from_file};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(author, version, about = "Pixel-level segmentation metrics for COCO polygon annotations", long_about = None)]
struct Args {
    /// YAML configuration naming the ground-truth and prediction files
    config: PathBuf,

    /// Override image.height from the configuration
    #[clap(long)]
    height: Option<usize>,

    /// Override image.width from the configuration
    #[clap(long)]
    width: Option<usize>,

    /// Print the metrics as JSON
    #[clap(long)]
    json: bool,
}

fn run(args: Args) -> seg_eval::Result<()> {
    let mut config = load_config_from_file(&args.config)?;
    if let Some(height) = args.height {
        config.image.height = height;
    }
    if let Some(width) = args.width {
        config.image.width = width;
    }

    let metrics = evaluate_from_config(&config)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&metrics)?);
    } else {
        println!("{metrics}");
    }
    Ok(())
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    match run(Args::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("{err}");
            ExitCode::FAILURE
        }
    }
}
