use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

/// Render a dimensioned isolated-footing drawing from a solver result record.
#[derive(Parser)]
#[command(name = "footing-draw", version, about)]
struct Args {
    /// Solver result record (JSON).
    input: PathBuf,

    /// Output PDF path. Defaults to a timestamped name in the current directory.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Also write the raw drawing as a PNG.
    #[arg(long)]
    png: Option<PathBuf>,
}

fn run(args: &Args) -> Result<(), footing_draw::Error> {
    let output = args
        .output
        .clone()
        .unwrap_or_else(|| PathBuf::from(footing_draw::suggested_filename()));

    if let Some(png_path) = &args.png {
        let data = std::fs::read(&args.input)?;
        let footing = footing_draw::parse_record_bytes(&data)?;
        let image = footing_draw::render_drawing(&footing)?;
        std::fs::write(png_path, &image.png)?;
        let bytes = footing_draw::export_pdf(&image)?;
        std::fs::write(&output, &bytes)?;
        log::info!("wrote {} and {}", png_path.display(), output.display());
        return Ok(());
    }

    footing_draw::convert_record_to_pdf(&args.input, &output)
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
