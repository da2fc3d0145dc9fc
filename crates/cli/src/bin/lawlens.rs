use anyhow::Result;

#[tokio::main]
async fn main() -> Result<()> {
    lawlens_cli::main_entry().await
}
