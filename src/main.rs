use argh::FromArgs;
use std::io;
use std::path::PathBuf;
use tracing::Level;
use training_impact_analysis::{initialize, run, AnalysisConfig, AnalysisError};

/// Tests whether training attendance improves employee performance scores
#[derive(FromArgs, Debug)]
struct Args {
    /// dataset CSV (default: <project>/Employee_Training_and_Performance_Dataset.csv)
    #[argh(option, short = 'i')]
    input: Option<PathBuf>,

    /// directory for the boxplot (default: <project>/reports)
    #[argh(option, short = 'o')]
    output_dir: Option<PathBuf>,

    /// log debug diagnostics to stderr
    #[argh(switch, short = 'v')]
    verbose: bool,
}

fn main() -> Result<(), AnalysisError> {
    let args: Args = argh::from_env();

    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_max_level(if args.verbose {
            Level::DEBUG
        } else {
            Level::INFO
        })
        .with_target(false)
        .init();

    println!("✅ Checking plotting capabilities...");
    if let Err(e) = initialize() {
        eprintln!("❌ Initialization failed: {}", e);
        return Err(e.into());
    }
    println!("✅ Initialization successful");

    let config = AnalysisConfig::default()
        .input_path(args.input)
        .output_dir(args.output_dir);

    run(&config, &mut io::stdout().lock())?;
    Ok(())
}
