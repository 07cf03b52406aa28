use reqwest::Client;
use small_demos::core::fetch;
use small_demos::utils::logger;

#[tokio::main]
async fn main() {
    logger::init_cli_logger(false);

    tracing::info!("fetch...");
    let client = Client::new();

    // 失敗只記一行錯誤就結束，不重試
    match fetch::fetch_text(&client, fetch::DEFAULT_URL).await {
        Ok(body) => tracing::info!("{}", body),
        Err(e) => tracing::error!("{}", e),
    }
}
