//! topscreen CLI — launch screen mirroring and forward device input.

mod config;

use clap::{Parser, Subcommand};
use tracing::{info, warn};

use topscreen_input::{AdbInput, DeviceInput};
use topscreen_mirror::{MirrorError, MirrorProcess};

#[derive(Parser)]
#[command(
    name = "topscreen",
    about = "Mirror an Android device and forward input through adb",
    version,
    propagate_version = true
)]
struct Cli {
    /// Path to configuration file.
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the mirror helper and the control panel.
    Run,

    /// Send a single tap, defaulting to the configured tap point.
    Tap {
        /// X coordinate in pixels.
        #[arg(allow_negative_numbers = true)]
        x: Option<i32>,
        /// Y coordinate in pixels.
        #[arg(allow_negative_numbers = true)]
        y: Option<i32>,
    },

    /// Send a single swipe; omitted values use the configured gesture.
    Swipe {
        #[arg(allow_negative_numbers = true)]
        x1: Option<i32>,
        #[arg(allow_negative_numbers = true)]
        y1: Option<i32>,
        #[arg(allow_negative_numbers = true)]
        x2: Option<i32>,
        #[arg(allow_negative_numbers = true)]
        y2: Option<i32>,
        /// Duration in milliseconds.
        duration_ms: Option<u64>,
    },

    /// Press the BACK navigation key.
    Back,

    /// Press the HOME navigation key.
    Home,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let config = config::load_config(cli.config.as_deref())?;
    let input = AdbInput::new(config.input.clone());

    let success = match cli.command.unwrap_or(Commands::Run) {
        Commands::Run => return run_session(&config, &input),
        Commands::Tap { x, y } => input.tap(x, y),
        Commands::Swipe {
            x1,
            y1,
            x2,
            y2,
            duration_ms,
        } => input.swipe(x1, y1, x2, y2, duration_ms),
        Commands::Back => input.back(),
        Commands::Home => input.home(),
    };

    // Scripts get the boolean through the exit status.
    if success {
        println!("ok");
        Ok(())
    } else {
        println!("failed");
        std::process::exit(1);
    }
}

/// Start the mirror helper (best-effort), run the panel, stop the helper.
fn run_session(config: &config::Config, input: &dyn DeviceInput) -> anyhow::Result<()> {
    let mirror = match MirrorProcess::start(&config.mirror) {
        Ok(process) => Some(process),
        Err(MirrorError::Disabled) => {
            info!("mirroring disabled, running panel only");
            None
        }
        Err(e) => {
            warn!(error = %e, "continuing without screen mirroring");
            None
        }
    };

    topscreen_panel::run_panel(config.input.clone(), input)?;

    if let Some(mut mirror) = mirror {
        mirror.stop();
    }
    Ok(())
}
