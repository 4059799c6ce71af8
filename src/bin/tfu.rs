use anyhow::Result;
use clap::Parser;
use topfile_util::cli::{execute, QueryOptions, TopfileUtilCli};
use tracing::debug;

fn main() -> Result<()> {
    let cli = TopfileUtilCli::parse();
    let options = QueryOptions::from(&cli);

    // Logs go to stderr so stdout stays usable as json/yaml/txt
    tracing_subscriber::fmt()
        .with_max_level(options.log_level())
        .with_writer(std::io::stderr)
        .init();

    debug!("Starting tfu v{}", env!("CARGO_PKG_VERSION"));

    let output = execute(&cli)?;
    print!("{output}");

    Ok(())
}
