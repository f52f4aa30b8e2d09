use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use connect_sdk_codegen::{generate_from_str, CodegenError, GenerateOptions};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(author, version, about = "Generate mapper declarations from a service model")]
struct Args {
    /// Service model JSON document
    #[arg(long)]
    model: PathBuf,

    /// Output file; stdout when omitted
    #[arg(long)]
    out: Option<PathBuf>,

    /// Service name used for the registry function
    #[arg(long, default_value = "Connect")]
    service_name: String,
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

fn run(args: &Args) -> Result<(), CodegenError> {
    let input = fs::read_to_string(&args.model).map_err(|source| CodegenError::Io {
        path: args.model.clone(),
        source,
    })?;
    let source = generate_from_str(&input, &GenerateOptions::new(args.service_name.as_str()))?;
    match &args.out {
        Some(path) => {
            fs::write(path, source).map_err(|source| CodegenError::Io {
                path: path.clone(),
                source,
            })?;
            tracing::info!(path = %path.display(), "wrote generated module");
        }
        None => print!("{source}"),
    }
    Ok(())
}

fn main() -> ExitCode {
    init_tracing();
    let args = Args::parse();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(error = %err, "code generation failed");
            ExitCode::FAILURE
        }
    }
}
