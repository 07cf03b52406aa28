use small_demos::core::scratch;
use small_demos::utils::logger;
use std::path::Path;

fn main() {
    logger::init_cli_logger(false);

    if let Err(e) = scratch::write_scratch_file(Path::new(".")) {
        tracing::error!("{}", e);
    }
}
