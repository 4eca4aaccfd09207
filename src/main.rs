use clap::CommandFactory;
use gatekeeper::{
    cli::{DefaultPolicy, FlagArgs, PolicyLoader},
    error::{GatekeeperError, ParseError},
    runtime::{LoggingSupervisor, execute_with_policy},
};

#[tokio::main]
async fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let defaults = DefaultPolicy::from_process_env();

    let policy = match PolicyLoader::load(&args, &defaults) {
        Ok(policy) => policy,
        Err(err) => exit_with(err),
    };

    init_logging(policy.enforcement.verbose);

    match execute_with_policy(&LoggingSupervisor, &policy).await {
        Ok(exit_code) => std::process::exit(exit_code),
        Err(err) => exit_with(err),
    }
}

/// `RUST_LOG` wins; otherwise `--verbose` raises the default level to debug
fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();
}

fn exit_with(err: GatekeeperError) -> ! {
    if let GatekeeperError::Parse(ParseError::Flags(clap_err)) = &err {
        // Help and version go to stdout, real errors to stderr
        let _ = clap_err.print();
    } else {
        eprintln!("Error: {err}");
    }
    if err.wants_usage() {
        eprintln!("\n{}", FlagArgs::command().render_help());
    }
    std::process::exit(err.exit_code());
}
