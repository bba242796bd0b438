// Reads JSON commands from stdin; see `plaza_lib::commands::Command`.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    plaza_lib::run().await
}
