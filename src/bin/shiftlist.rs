use anyhow::Result;

#[tokio::main]
async fn main() -> Result<()> {
    shiftlist::tui::run().await
}
