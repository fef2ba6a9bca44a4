use clap::Parser;

mod cli;
mod logging;

use crate::cli::Cli;

fn main() {
    let cli = Cli::parse();

    // Initialize logging before any codec call so rejections are reported.
    logging::init_logging(cli.verbose);

    match cli.command.run() {
        Ok(output) => println!("{}", output),
        Err(err) => {
            eprintln!("urlcodec error: {:#}", err);
            std::process::exit(1);
        }
    }
}
