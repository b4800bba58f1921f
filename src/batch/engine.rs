use std::path::{Path, PathBuf};
use std::sync::Arc;

use tokio::sync::Semaphore;
use tokio::task::{self, JoinSet};
use tracing::{debug, error, info, warn};

use crate::{
    batch::scanner,
    canvas::{Placement, PortraitRenderer},
    config::Config,
    error::{BatchError, CompositorError, Result},
};

/// Drives a whole directory through the renderer
///
/// Every candidate file becomes its own blocking task. At most
/// `batch.workers` conversions run at once; the engine waits for all of them
/// before returning, and a failing file never affects its siblings.
pub struct BatchEngine {
    config: Config,
    converter: Arc<dyn Converter>,
}

/// Turns one input file into one output file
pub trait Converter: Send + Sync {
    fn convert(&self, input: &Path, output: &Path) -> Result<Placement>;
}

impl Converter for PortraitRenderer {
    fn convert(&self, input: &Path, output: &Path) -> Result<Placement> {
        PortraitRenderer::convert(self, input, output)
    }
}

/// A file that was converted
#[derive(Debug, Clone)]
pub struct Converted {
    pub input: PathBuf,
    pub output: PathBuf,
    pub placement: Placement,
}

/// A file that could not be converted
#[derive(Debug)]
pub struct Failure {
    pub input: PathBuf,
    pub error: CompositorError,
}

/// Outcome of one run over a directory
#[derive(Debug, Default)]
pub struct BatchReport {
    pub converted: Vec<Converted>,
    pub failures: Vec<Failure>,
}

impl BatchReport {
    /// Number of files that were attempted
    pub fn total(&self) -> usize {
        self.converted.len() + self.failures.len()
    }

    /// True when no file failed
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }
}

impl BatchEngine {
    pub fn new(config: Config) -> Self {
        let renderer = PortraitRenderer::new(config.canvas.clone());
        Self::with_converter(config, Arc::new(renderer))
    }

    /// Use a custom converter instead of the default renderer
    pub fn with_converter(config: Config, converter: Arc<dyn Converter>) -> Self {
        Self { config, converter }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Convert every candidate in `directory`
    ///
    /// Fails only when the directory itself cannot be listed; per-file
    /// errors are logged as each file finishes and returned in the report.
    pub async fn run<P: AsRef<Path>>(&self, directory: P) -> Result<BatchReport> {
        let directory = directory.as_ref();
        let jobs = scanner::scan_directory(directory, &self.config.batch)?;

        info!("Found {} image(s) to convert in {:?}", jobs.len(), directory);
        debug!("Running with up to {} concurrent conversion(s)", self.config.batch.workers);

        let limiter = Arc::new(Semaphore::new(self.config.batch.workers));
        let mut tasks = JoinSet::new();

        for job in jobs {
            let permit = limiter.clone().acquire_owned().await.map_err(|e| BatchError::TaskFailed {
                path: job.input.display().to_string(),
                reason: e.to_string(),
            })?;

            let converter = Arc::clone(&self.converter);

            tasks.spawn(async move {
                let (input, output) = (job.input.clone(), job.output.clone());

                let outcome = task::spawn_blocking(move || {
                    let _permit = permit;
                    converter.convert(&input, &output)
                })
                .await
                .unwrap_or_else(|e| {
                    Err(BatchError::TaskFailed {
                        path: job.input.display().to_string(),
                        reason: e.to_string(),
                    }.into())
                });

                match &outcome {
                    Ok(_) => info!("Converted {} -> {}", job.name(), job.output.display()),
                    Err(e) => error!("Failed to convert {}: {}", job.name(), e),
                }

                (job, outcome)
            });
        }

        let mut report = BatchReport::default();

        while let Some(joined) = tasks.join_next().await {
            let (job, outcome) = match joined {
                Ok(finished) => finished,
                Err(e) => {
                    error!("Conversion task was lost: {}", e);
                    continue;
                }
            };

            match outcome {
                Ok(placement) => report.converted.push(Converted {
                    input: job.input,
                    output: job.output,
                    placement,
                }),
                Err(e) => report.failures.push(Failure {
                    input: job.input,
                    error: e,
                }),
            }
        }

        if report.is_clean() {
            info!("Batch complete: {} converted", report.converted.len());
        } else {
            warn!(
                "Batch complete: {} converted, {} failed",
                report.converted.len(),
                report.failures.len()
            );
        }

        Ok(report)
    }
}
