use anyhow::Result;
use spill::cli;
use spill::commands::{handle_capture, CaptureConfig};

// Main orchestrator function
fn main() -> Result<()> {
    env_logger::init();

    let cli = cli::parse_args();
    handle_capture(build_capture_config(cli))
}

// Pure function to build capture configuration
fn build_capture_config(cli: cli::Cli) -> CaptureConfig {
    CaptureConfig { path: cli.path }
}
