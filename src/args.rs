use crate::{
    download::{DEFAULT_CDN, DEFAULT_WIKI},
    folder::Existing,
    job::{Job, TREE_VARIANTS},
    names,
    runner::Settings,
};
use clap::{ArgAction::Count, Parser, Subcommand};
use std::path::PathBuf;
use tokio::time::Duration;
use url::Url;

#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Args {
    #[command(subcommand)]
    pub job: JobArg,

    /// Directory the per-berry folders are created in
    #[arg(short, long, default_value = "berry_pull")]
    pub output: PathBuf,

    /// Comma separated names to pull instead of every berry
    #[arg(short, long, value_delimiter = ',')]
    pub names: Option<Vec<String>>,

    /// Base URL of the wiki's file description pages
    #[arg(long, default_value = DEFAULT_WIKI)]
    pub wiki: Url,

    /// Base URL media paths are resolved against
    #[arg(long, default_value = DEFAULT_CDN)]
    pub cdn: Url,

    /// Number of berries to pull concurrently
    #[arg(short = 'j', long, default_value_t = 4)]
    pub jobs: usize,

    /// Turn debugging information on
    #[arg(short, long, action = Count)]
    pub verbose: u8,

    /// Number of times to retry a failed request
    #[arg(short, long, default_value_t = 3)]
    pub retries: usize,

    /// Timeout beyond which a request is no longer retried
    #[arg(short, long, default_value = "10", value_parser = parse_seconds, value_name = "SECONDS")]
    pub timeout: Duration,

    /// What to do with output that is already on disk
    #[arg(short, long, value_enum, default_value_t = Existing::Skip)]
    pub existing: Existing,

    /// Stop at the first failure instead of moving on to the next berry
    #[arg(long)]
    pub fail_fast: bool,
}

#[derive(Subcommand, Debug)]
pub enum JobArg {
    /// Pull the tree images of each berry
    Trees {
        /// Comma separated tree variants to pull
        #[arg(long, value_delimiter = ',', default_values_t = TREE_VARIANTS.map(String::from))]
        variants: Vec<String>,
    },
    /// Pull the bag icon of each berry
    Icons,
}

impl From<Args> for Settings {
    fn from(value: Args) -> Self {
        let job = match value.job {
            JobArg::Trees { variants } => Job::Trees { variants },
            JobArg::Icons => Job::Icons,
        };
        Settings {
            job,
            names: names::resolve(value.names),
            root: value.output,
            wiki: value.wiki,
            cdn: value.cdn,
            jobs: value.jobs,
            retries: value.retries,
            timeout: value.timeout,
            existing: value.existing,
            fail_fast: value.fail_fast,
        }
    }
}

pub fn parse() -> Args {
    Args::parse()
}

fn parse_seconds(arg: &str) -> Result<Duration, std::num::ParseIntError> {
    let seconds = arg.parse()?;
    Ok(Duration::from_secs(seconds))
}
