use std::process::ExitCode;

use clap::Parser;
use glossa_cli::Cli;

#[tokio::main]
async fn main() -> ExitCode {
    glossa_cli::init_tracing();
    let cli = Cli::parse();
    match glossa_cli::run(cli).await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
