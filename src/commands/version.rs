use anyhow::Result;

pub fn execute() -> Result<()> {
    println!("wmstatus version {}", env!("CARGO_PKG_VERSION"));
    Ok(())
}
