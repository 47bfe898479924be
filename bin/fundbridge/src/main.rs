use eyre::Report;

#[tokio::main]
async fn main() -> Result<(), Report> {
    fundbridge::run().await
}
