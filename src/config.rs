//! Generator configuration
//!
//! All output locations are explicit values handed to the
//! [`Generator`](crate::generator::Generator); nothing is read from
//! process-wide state.

use std::path::{Path, PathBuf};

use crate::experiment::ExperimentRecord;
use crate::{Error, Result};

/// Default extension of generated pages.
pub const DEFAULT_PAGE_EXTENSION: &str = "mdx";

/// File name (without extension) of the leaderboard page.
pub const INDEX_STEM: &str = "_index";

/// URL prefixes under which the documentation site serves generated output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteLinks {
    /// Prefix for copied artifacts, e.g. `/artifacts`
    pub artifacts_url: String,
    /// Prefix for experiment pages, e.g. `/docs/experiments`
    pub experiments_url: String,
}

impl Default for SiteLinks {
    fn default() -> Self {
        Self {
            artifacts_url: "/artifacts".to_string(),
            experiments_url: "/docs/experiments".to_string(),
        }
    }
}

impl SiteLinks {
    /// Link to a copied artifact of a run.
    #[must_use]
    pub fn artifact(&self, run_id: &str, file_name: &str) -> String {
        format!("{}/{run_id}/{file_name}", self.artifacts_url)
    }

    /// Link to a run's generated page.
    #[must_use]
    pub fn page(&self, record: &ExperimentRecord) -> String {
        format!(
            "{}/{}/{}",
            self.experiments_url,
            record.year(),
            record.page_stem()
        )
    }
}

/// Output locations and formatting options for one generator run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Root of the copied artifact tree (`<site>/static/artifacts`)
    pub artifacts_dir: PathBuf,
    /// Root of the generated pages (`<site>/docs/experiments`)
    pub experiments_dir: PathBuf,
    /// Extension of generated pages, without the dot
    pub page_extension: String,
    /// Site URLs used in generated links
    pub links: SiteLinks,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self::for_site_root(".")
    }
}

impl GeneratorConfig {
    /// Standard documentation-site layout below `root`.
    #[must_use]
    pub fn for_site_root(root: impl AsRef<Path>) -> Self {
        let root = root.as_ref();
        Self {
            artifacts_dir: root.join("static").join("artifacts"),
            experiments_dir: root.join("docs").join("experiments"),
            page_extension: DEFAULT_PAGE_EXTENSION.to_string(),
            links: SiteLinks::default(),
        }
    }

    /// Set the page extension. A leading dot is ignored.
    #[must_use]
    pub fn with_page_extension(mut self, extension: impl AsRef<str>) -> Self {
        self.page_extension = extension.as_ref().trim_start_matches('.').to_string();
        self
    }

    /// Directory that receives a run's artifacts.
    #[must_use]
    pub fn artifact_dir(&self, run_id: &str) -> PathBuf {
        self.artifacts_dir.join(run_id)
    }

    /// Directory holding the pages of one year.
    #[must_use]
    pub fn year_dir(&self, record: &ExperimentRecord) -> PathBuf {
        self.experiments_dir.join(record.year())
    }

    /// `<experiments_dir>/<year>/<date>_<run_id>.<ext>`
    #[must_use]
    pub fn page_path(&self, record: &ExperimentRecord) -> PathBuf {
        self.year_dir(record)
            .join(format!("{}.{}", record.page_stem(), self.page_extension))
    }

    /// `<experiments_dir>/_index.<ext>`
    #[must_use]
    pub fn index_path(&self) -> PathBuf {
        self.experiments_dir
            .join(format!("{INDEX_STEM}.{}", self.page_extension))
    }
}

/// Check that `date` keeps the page it names below the experiments
/// directory. The date is both the year directory and the file-name
/// prefix, so it must not contain a path separator or `..`.
///
/// # Errors
///
/// [`Error::UnsafeDate`] if the date contains `/`, `\` or `..`.
pub fn validate_date(date: &str) -> Result<()> {
    if date.contains(['/', '\\']) || date.contains("..") {
        return Err(Error::UnsafeDate(date.to_string()));
    }
    Ok(())
}
