use anyhow::Context;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    articles::app::run()
        .await
        .context("articles service terminated with an error")
}
