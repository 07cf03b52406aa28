use clap::Parser;
use small_demos::config::{debug_enabled, WalkConfig};
use small_demos::core::walk;
use small_demos::utils::logger;
use small_demos::utils::validation::Validate;
use std::path::Path;

fn main() {
    let config = WalkConfig::parse();

    logger::init_cli_logger(config.verbose);

    if debug_enabled() {
        println!("Debug mode is on");
    }

    if let Err(e) = config.validate() {
        tracing::error!("{}", e);
        std::process::exit(1);
    }

    let root = config.root();
    tracing::info!("walk {}", root);

    let result = walk::walk_tree(Path::new(&root), |name, rel| {
        tracing::info!("{} ({})", name, rel.display());
    });

    // 第一個走訪錯誤就整個中止
    if let Err(e) = result {
        tracing::error!("{}", e);
        std::process::exit(1);
    }
}
