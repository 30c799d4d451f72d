use clap::{ArgAction, Parser};
use rainbowpath::commands::*;
use rainbowpath::core::print_error;
use std::env;

#[derive(Parser)]
#[command(name = "rainbowpath")]
#[command(about = "Print a path with colored components and separators")]
#[command(version, disable_version_flag = true)]
struct Cli {
    /// Enable debug logging
    #[arg(long)]
    debug: bool,

    /// Print version
    #[arg(short = 'v', long = "version", action = ArgAction::Version)]
    version: Option<bool>,

    #[command(flatten)]
    render: RenderArgs,
}

fn main() {
    let cli = Cli::parse();

    // Configure logging based on --debug flag
    if cli.debug {
        env::set_var("RUST_LOG", "debug");
    } else if env::var_os("RUST_LOG").is_none() {
        env::set_var("RUST_LOG", "warn");
    }
    env_logger::init();

    if let Err(e) = execute_render(cli.render) {
        log::debug!("Render failed with {:?} error", e.kind());
        print_error(&e.to_string());
        std::process::exit(1);
    }
}
