use clap::Parser;
use small_demos::config::{debug_enabled, GreeterConfig};
use small_demos::core::greet;
use small_demos::utils::logger;

fn main() {
    let config = GreeterConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(config.verbose);
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if debug_enabled() {
        println!("Debug mode is on");
    }

    let name = greet::resolve_name(&config.name, &config.words);
    println!("{}", greet::greeting(&name));
}
