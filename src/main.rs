use std::process::ExitCode;

use alphabeta_chess::uci;

fn main() -> ExitCode {
    // stdout carries protocol replies only; diagnostics go to stderr.
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .target(env_logger::Target::Stderr)
        .init();

    match uci::run_uci_loop() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("uci loop failed: {e}");
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
