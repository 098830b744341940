//! Tessel Command-Line Interface
//!
//! Renders a circuit file into a layer-by-layer HTML viewer.
//!
//! ```text
//! tessel render -i surface_code.stim -o viewer.html --fault shortest_error.json
//! ```

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

use clap::{Parser, Subcommand};
use console::style;
use tracing_subscriber::EnvFilter;

mod commands;

use commands::{render, version};

/// Tessel - time-sliced viewer for stabilizer circuits
#[derive(Parser)]
#[command(name = "tessel")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a circuit into an HTML layer viewer
    Render {
        /// Input circuit file
        #[arg(short, long)]
        input: String,

        /// Output HTML file (defaults to the input name with .html)
        #[arg(short, long)]
        output: Option<String>,

        /// Viewer configuration file (YAML)
        #[arg(short, long)]
        config: Option<String>,

        /// Fault mechanism to highlight (JSON)
        #[arg(short, long)]
        fault: Option<String>,

        /// Viewer width in pixels
        #[arg(long)]
        width: Option<u32>,

        /// Viewer height in pixels
        #[arg(long)]
        height: Option<u32>,
    },

    /// Show version information
    Version,
}

fn main() {
    let cli = Cli::parse();

    // Setup logging
    let filter = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    // Execute command
    let result = match cli.command {
        Commands::Render {
            input,
            output,
            config,
            fault,
            width,
            height,
        } => render::execute(
            &input,
            output.as_deref(),
            config.as_deref(),
            fault.as_deref(),
            width,
            height,
        ),

        Commands::Version => {
            version::execute();
            Ok(())
        }
    };

    // Handle errors
    if let Err(e) = result {
        eprintln!("{} {:#}", style("Error:").red().bold(), e);
        std::process::exit(1);
    }
}
