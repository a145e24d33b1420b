//! Sequential verification run.

use mcpdir_catalog::ToolRecord;

use crate::config::VerifyConfig;
use crate::error::Result;
use crate::probe::{HttpProbe, LinkProbe};
use crate::report::{Report, ReportEntry};
use crate::{github, npm};

/// Checks records one at a time with a fixed pause between them.
pub struct Verifier<P: LinkProbe> {
    probe: P,
    config: VerifyConfig,
}

impl Verifier<HttpProbe> {
    /// Verifier that talks to the real endpoints in `config`.
    pub fn http(config: VerifyConfig) -> Result<Self> {
        config.validate()?;
        let probe = HttpProbe::new(&config.user_agent)?;
        Ok(Self::new(probe, config))
    }
}

impl<P: LinkProbe> Verifier<P> {
    pub fn new(probe: P, config: VerifyConfig) -> Self {
        Self { probe, config }
    }

    /// Records a run would check: those with a homepage, up to the limit.
    pub fn targets<'a>(&self, records: &'a [ToolRecord]) -> Vec<&'a ToolRecord> {
        records
            .iter()
            .filter(|r| r.homepage.is_some())
            .take(self.config.limit)
            .collect()
    }

    /// Run the GitHub and npm checks for one record.
    pub async fn check_record(&self, record: &ToolRecord) -> ReportEntry {
        let github = github::check(&self.probe, &self.config, record.homepage.as_deref()).await;
        let npm_package = npm::scoped_package(&record.args).map(String::from);
        let npm = match &npm_package {
            Some(package) => npm::check(&self.probe, &self.config, package).await,
            None => npm::NpmCheck::Skipped,
        };
        ReportEntry {
            id: record.id.clone(),
            name: record.name.clone(),
            homepage: record.homepage.clone(),
            github,
            npm_package,
            npm,
        }
    }

    /// Check every target in order, reporting progress lines through
    /// `progress`.
    pub async fn run<F>(&self, records: &[ToolRecord], mut progress: F) -> Report
    where
        F: FnMut(&str),
    {
        let targets = self.targets(records);
        let total = targets.len();
        tracing::info!(total, "Verifying tools");

        let mut report = Report::default();
        for (i, record) in targets.into_iter().enumerate() {
            progress(&format!("[{}/{}] Checking {}...", i + 1, total, record.id));
            let entry = self.check_record(record).await;
            for line in entry.status_lines() {
                progress(&line);
            }
            report.push(entry);

            if i + 1 < total {
                tokio::time::sleep(self.config.delay()).await;
            }
        }
        report
    }
}
