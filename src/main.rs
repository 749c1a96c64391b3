use berrypull::{
    args, logging,
    runner::{Runner, Settings},
};
use color_eyre::{
    eyre::{eyre, Result, WrapErr},
    Section,
};
use log::info;

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    let args = args::parse();
    logging::init(args.verbose)?;

    let runner = Runner::new(Settings::from(args)).wrap_err("Invalid wiki or CDN URL")?;
    let report = runner
        .run()
        .await
        .wrap_err("Stopped at the first failure")
        .suggestion("Rerun without --fail-fast to carry on past failing berries")?;

    info!("{report}");
    if !report.is_success() {
        let failed: Vec<&str> = report.failures().map(|(name, _)| name).collect();
        return Err(eyre!("Failed to pull {}", failed.join(", ")))
            .suggestion("Rerun with --existing skip to retry only what is missing");
    }
    info!("done");
    Ok(())
}
