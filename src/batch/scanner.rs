use std::path::{Path, PathBuf};

use tracing::debug;

use crate::config::BatchConfig;
use crate::error::{BatchError, Result};

/// One file to convert and where its canvas will be written
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionJob {
    pub input: PathBuf,
    pub output: PathBuf,
}

impl ConversionJob {
    pub fn new<P: Into<PathBuf>>(input: P, suffix: &str) -> Self {
        let input = input.into();
        let output = output_path_for(&input, suffix);
        Self { input, output }
    }

    /// File name of the input, for logging
    pub fn name(&self) -> String {
        self.input
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.input.display().to_string())
    }
}

/// A file is picked up when it ends in `.jpg` (any case) and its name does
/// not contain `suffix`, which marks files this tool already wrote.
///
/// The marker check is a plain substring match, so a source photo that
/// happens to be called `my_portrait.jpg` is never converted.
pub fn is_candidate(file_name: &str, suffix: &str) -> bool {
    file_name.to_lowercase().ends_with(".jpg") && !file_name.contains(suffix)
}

/// `<dir>/<stem><suffix>.jpg` next to the input
pub fn output_path_for(input: &Path, suffix: &str) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default();

    input.with_file_name(format!("{}{}.jpg", stem, suffix))
}

/// List `directory` once and return a job for every candidate file, sorted by name
pub fn scan_directory<P: AsRef<Path>>(directory: P, config: &BatchConfig) -> Result<Vec<ConversionJob>> {
    let directory = directory.as_ref();
    let scan_failed = |e: std::io::Error| BatchError::ScanFailed {
        path: directory.display().to_string(),
        reason: e.to_string(),
    };

    let mut jobs = Vec::new();

    for entry in std::fs::read_dir(directory).map_err(scan_failed)? {
        let entry = entry.map_err(scan_failed)?;
        let file_name = entry.file_name();

        let Some(name) = file_name.to_str() else {
            debug!("Skipping non UTF-8 entry {:?}", file_name);
            continue;
        };

        if !is_candidate(name, &config.output_suffix) {
            continue;
        }

        let path = entry.path();
        if !path.is_file() {
            debug!("Skipping {:?}: not a regular file", path);
            continue;
        }

        jobs.push(ConversionJob::new(path, &config.output_suffix));
    }

    jobs.sort_by(|a, b| a.input.cmp(&b.input));
    Ok(jobs)
}
