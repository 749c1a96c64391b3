use color_eyre::{eyre::bail, Result};
use log::LevelFilter;
use simple_logger::SimpleLogger;

fn level(verbosity: u8) -> Result<LevelFilter> {
    Ok(match verbosity {
        0 => LevelFilter::Info,
        1 => LevelFilter::Debug,
        2 => LevelFilter::Trace,
        _ => bail!("At most two -v flags are understood, got {verbosity}"),
    })
}

pub fn init(verbosity: u8) -> Result<()> {
    SimpleLogger::new()
        .with_level(level(verbosity)?)
        .with_module_level("hyper", LevelFilter::Warn)
        .with_module_level("reqwest", LevelFilter::Warn)
        .init()?;
    Ok(())
}
