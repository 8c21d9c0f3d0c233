use clap::Parser;
use libresize::{process_directory, Error, FailurePolicy, HeightRule, ResizeConfig};

use std::path::PathBuf;
use std::time::Instant;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Directory searched recursively for images
    #[arg(long, default_value = "images")]
    input_dir: PathBuf,

    /// Directory the resized images are written to (must exist)
    #[arg(long, default_value = "processed_images")]
    output_dir: PathBuf,

    /// Report files that fail to decode or encode and continue with the rest
    #[arg(long)]
    keep_going: bool,

    /// Scale each height from the previous output instead of the original
    #[arg(long)]
    cascade_heights: bool,

    /// Print a JSON report of the run when done
    #[arg(long)]
    json: bool,
}

fn main() {
    env_logger::init();

    let args = Args::parse();

    let config = ResizeConfig {
        height_rule: if args.cascade_heights {
            HeightRule::Cascade
        } else {
            HeightRule::FromOriginal
        },
        failure_policy: if args.keep_going {
            FailurePolicy::Isolate
        } else {
            FailurePolicy::Halt
        },
        ..ResizeConfig::default()
    };

    let start_time = Instant::now();

    let report = match process_directory(&args.input_dir, &args.output_dir, &config, |notice| {
        println!("{}", notice)
    }) {
        Ok(report) => report,
        Err(e @ Error::MissingDirectories { .. }) => {
            println!("{}", e);
            return;
        }
        Err(e) => {
            eprintln!("❌ Error processing images: {}", e);
            std::process::exit(1);
        }
    };

    log::info!(
        "Wrote {} image(s) in {:.2}s",
        report.written.len(),
        start_time.elapsed().as_secs_f64()
    );

    if args.json {
        match serde_json::to_string_pretty(&report) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("❌ Error serializing JSON: {}", e);
                std::process::exit(1);
            }
        }
    }
}
