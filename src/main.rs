// generate-experiment-pages CLI
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::fmt::writer::MakeWriterExt;
use tracing_subscriber::EnvFilter;

use experiment_pages::{Generator, GeneratorConfig, GENERATOR_NAME};

#[derive(Parser, Debug)]
#[command(name = GENERATOR_NAME)]
#[command(version)]
#[command(about = "Generate experiment pages and a leaderboard index from JSON results", long_about = None)]
#[command(after_help = "Example:\n  generate-experiment-pages results/run-abc123 results/run-def456")]
struct Cli {
    /// Directories containing metrics.json and plot files
    #[arg(value_name = "SOURCE_DIR", required = true, num_args = 1..)]
    sources: Vec<PathBuf>,

    /// Documentation site root
    #[arg(long, value_name = "DIR", env = "EXPERIMENT_SITE_ROOT", default_value = ".")]
    site_root: PathBuf,

    /// Artifact output directory (defaults to <site-root>/static/artifacts)
    #[arg(long, value_name = "DIR")]
    artifacts_dir: Option<PathBuf>,

    /// Page output directory (defaults to <site-root>/docs/experiments)
    #[arg(long, value_name = "DIR")]
    experiments_dir: Option<PathBuf>,

    /// Extension of generated pages
    #[arg(long, value_name = "EXT", default_value = experiment_pages::config::DEFAULT_PAGE_EXTENSION)]
    page_ext: String,
}

impl Cli {
    fn into_config(self) -> (GeneratorConfig, Vec<PathBuf>) {
        let mut config =
            GeneratorConfig::for_site_root(&self.site_root).with_page_extension(&self.page_ext);
        if let Some(dir) = self.artifacts_dir {
            config.artifacts_dir = dir;
        }
        if let Some(dir) = self.experiments_dir {
            config.experiments_dir = dir;
        }
        (config, self.sources)
    }
}

fn init_logging() {
    // WARN and ERROR go to stderr, progress lines to stdout
    let writer = std::io::stderr
        .with_max_level(tracing::Level::WARN)
        .or_else(std::io::stdout);
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(writer)
        .with_target(false)
        .without_time()
        .init();
}

fn main() -> Result<()> {
    // Usage errors exit nonzero before any output is written
    let cli = Cli::parse();
    init_logging();

    let (config, sources) = cli.into_config();
    let generator = Generator::new(config);
    generator.run(&sources).with_context(|| {
        format!(
            "failed to write output under {} and {}",
            generator.config().artifacts_dir.display(),
            generator.config().experiments_dir.display()
        )
    })?;

    Ok(())
}
