use clap::Parser;

use addrfmt::cli::{run, Cli};
use addrfmt::utils::logger;

fn main() {
    let cli = Cli::parse();
    logger::init_cli_logger(cli.verbose);

    match run(&cli.command) {
        Ok(conversion) if cli.json => match serde_json::to_string(&conversion) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                tracing::error!("failed to serialize result: {}", e);
                std::process::exit(1);
            }
        },
        Ok(conversion) => println!("{}", conversion.to_plain()),
        Err(e) => {
            tracing::error!("conversion failed: {}", e);
            std::process::exit(1);
        }
    }
}
