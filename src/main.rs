#[tokio::main]
async fn main() {
    if let Err(error) = arena_runtime::run().await {
        tracing::error!(%error, "runtime error");
        std::process::exit(1);
    }
}
