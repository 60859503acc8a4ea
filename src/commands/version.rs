use anyhow::Result;

pub fn execute() -> Result<()> {
    println!("metricconv version {}", env!("CARGO_PKG_VERSION"));
    Ok(())
}
