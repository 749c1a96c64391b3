use crate::{
    download::{self, Downloader},
    folder::{self, Existing, Provisioned},
    job::Job,
    Error,
};
use futures::{stream, StreamExt};
use log::{debug, error, info};
use std::{fmt, path::PathBuf};
use tokio::{fs, time::Duration};
use url::Url;

/// Everything a batch run needs, independent of how it was configured.
#[derive(Debug, Clone)]
pub struct Settings {
    pub job: Job,
    pub names: Vec<String>,
    pub root: PathBuf,
    pub wiki: Url,
    pub cdn: Url,
    pub jobs: usize,
    pub retries: usize,
    pub timeout: Duration,
    pub existing: Existing,
    pub fail_fast: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum State {
    Written(usize),
    Skipped,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Saved {
    pub path: PathBuf,
    pub state: State,
}

#[derive(Debug)]
pub struct ItemReport {
    pub name: String,
    pub outcome: Result<Vec<Saved>, Error>,
}

/// Per-item results, in the order the names were given.
#[derive(Debug, Default)]
pub struct Report {
    pub items: Vec<ItemReport>,
}

impl Report {
    pub fn failures(&self) -> impl Iterator<Item = (&str, &Error)> {
        self.items.iter().filter_map(|item| match &item.outcome {
            Ok(_) => None,
            Err(e) => Some((item.name.as_str(), e)),
        })
    }

    fn saved(&self) -> impl Iterator<Item = &Saved> {
        self.items
            .iter()
            .filter_map(|item| item.outcome.as_ref().ok())
            .flatten()
    }

    pub fn written(&self) -> usize {
        self.saved()
            .filter(|saved| matches!(saved.state, State::Written(_)))
            .count()
    }

    pub fn skipped(&self) -> usize {
        self.saved()
            .filter(|saved| saved.state == State::Skipped)
            .count()
    }

    pub fn is_success(&self) -> bool {
        self.failures().next().is_none()
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} items: {} files written, {} skipped, {} items failed",
            self.items.len(),
            self.written(),
            self.skipped(),
            self.failures().count()
        )
    }
}

pub struct Runner {
    downloader: Downloader,
    job: Job,
    names: Vec<String>,
    root: PathBuf,
    jobs: usize,
    existing: Existing,
    fail_fast: bool,
}

impl Runner {
    pub fn new(settings: Settings) -> Result<Self, Error> {
        let downloader = Downloader::new(
            settings.wiki,
            settings.cdn,
            settings.retries,
            settings.timeout,
        )?;
        Ok(Runner {
            downloader,
            job: settings.job,
            names: settings.names,
            root: settings.root,
            // Stopping at the first failure leaves later items untouched only if
            // nothing runs ahead of it.
            jobs: if settings.fail_fast {
                1
            } else {
                settings.jobs.max(1)
            },
            existing: settings.existing,
            fail_fast: settings.fail_fast,
        })
    }

    /// Pulls every target of every name. Items run concurrently up to `jobs`,
    /// but the report keeps the order of the names.
    pub async fn run(&self) -> Result<Report, Error> {
        info!("Downloading into {}", self.root.display());
        let mut items = stream::iter(&self.names)
            .map(|name| async move {
                ItemReport {
                    name: name.clone(),
                    outcome: self.item(name).await,
                }
            })
            .buffered(self.jobs);

        let mut report = Report::default();
        while let Some(item) = items.next().await {
            match item.outcome {
                Err(e) if self.fail_fast => return Err(e),
                Err(ref e) => error!("Failed while pulling {}: {e}", item.name),
                Ok(_) => {}
            }
            report.items.push(item);
        }
        Ok(report)
    }

    /// Provisions the item's directory, then pulls its targets one after another.
    async fn item(&self, name: &str) -> Result<Vec<Saved>, Error> {
        let dir = self.root.join(name);
        info!("{}", dir.display());
        if folder::provision(&dir, self.existing).await? == Provisioned::Reused {
            debug!("Reusing {}", dir.display());
        }

        let mut saved = Vec::new();
        for target in self.job.targets(name) {
            let path = dir.join(&target.filename);
            let skip = self.existing == Existing::Skip
                && fs::try_exists(&path)
                    .await
                    .map_err(|source| Error::Write {
                        path: path.clone(),
                        source,
                    })?;
            if skip {
                info!("{} already present, skipping", target.filename);
                saved.push(Saved {
                    path,
                    state: State::Skipped,
                });
                continue;
            }

            info!("{}", target.filename);
            let fragment = self.downloader.scrape(&target.title).await?;
            debug!("{} resolved to {fragment}", target.title);
            let body = self.downloader.fetch_asset(&fragment).await?;
            download::write_bytes(&path, &body).await?;
            saved.push(Saved {
                path,
                state: State::Written(body.len()),
            });
        }
        Ok(saved)
    }
}
