#[tokio::main]
async fn main() -> anyhow::Result<()> {
    verse_practice_backend::run().await
}
