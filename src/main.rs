use tracing_subscriber::EnvFilter;

mod command;

fn main() -> anyhow::Result<()> {
    // RUST_LOG overrides the default level; records from the `log` facade are forwarded
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    command::run()
}
