use small_demos::core::prompt;
use small_demos::utils::logger;
use std::io::{self, Write};

fn main() {
    logger::init_cli_logger(false);

    print!("{}", prompt::PROMPT);
    if let Err(e) = io::stdout().flush() {
        tracing::error!("{}", e);
        std::process::exit(1);
    }

    let stdin = io::stdin();
    match prompt::read_name(stdin.lock()) {
        Ok(name) => println!("Hello {}", name),
        Err(e) => {
            tracing::error!("{}", e);
            std::process::exit(1);
        }
    }
}
