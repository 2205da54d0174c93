// datemark/src/processors/batch.rs
use crate::core::processor::WatermarkProcessor;
use crate::core::{FileOutcome, ProcessingSummary, Result, WatermarkConfig, WatermarkError};
use crate::utils::{is_supported_image, output_dir_for, watermark_file_name};
use indicatif::{ParallelProgressIterator, ProgressBar, ProgressStyle};
use rayon::prelude::*;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

pub struct BatchProcessor {
    processor: WatermarkProcessor,
    thread_pool: Option<rayon::ThreadPool>,
}

impl BatchProcessor {
    pub fn new(config: WatermarkConfig, max_threads: usize) -> Result<Self> {
        let mut batch = Self {
            processor: WatermarkProcessor::new(config)?,
            thread_pool: None,
        };

        if max_threads > 0 {
            let pool = rayon::ThreadPoolBuilder::new()
                .num_threads(max_threads)
                .build()
                .map_err(|e| {
                    WatermarkError::Render(format!("Failed to create thread pool: {}", e))
                })?;
            batch.thread_pool = Some(pool);
        }

        Ok(batch)
    }

    pub fn process(&self, input_path: &Path) -> Result<ProcessingSummary> {
        if !input_path.exists() {
            return Err(WatermarkError::PathNotFound(format!(
                "Path does not exist: {}",
                input_path.display()
            )));
        }

        let output_dir = output_dir_for(input_path);
        std::fs::create_dir_all(&output_dir)?;
        log::info!("Output directory: {}", output_dir.display());

        let mut summary = ProcessingSummary {
            output_dir: output_dir.clone(),
            ..Default::default()
        };

        let image_paths = self.collect_image_paths(input_path);
        if image_paths.is_empty() {
            log::warn!("No image files found in {}", input_path.display());
            return Ok(summary);
        }

        log::info!(
            "Processing {} images from {}",
            image_paths.len(),
            input_path.display()
        );

        let pb = self.create_progress_bar(image_paths.len());

        // Each file runs independently; one failure never unwinds the batch.
        let per_file = |path: &PathBuf| {
            let output_path = output_dir.join(watermark_file_name(path));
            (path.clone(), self.processor.process(path, &output_path))
        };

        let results: Vec<(PathBuf, Result<FileOutcome>)> = if let Some(pool) = &self.thread_pool {
            pool.install(|| {
                image_paths
                    .par_iter()
                    .progress_with(pb.clone())
                    .map(per_file)
                    .collect()
            })
        } else {
            image_paths
                .par_iter()
                .progress_with(pb.clone())
                .map(per_file)
                .collect()
        };

        summary.attempted = results.len();
        for (path, result) in results {
            match result {
                Ok(FileOutcome::Written) => summary.succeeded += 1,
                Ok(FileOutcome::SkippedNoDate) => summary.skipped += 1,
                Err(e) => {
                    log::error!("Failed to process {}: {}", path.display(), e);
                    summary
                        .errors
                        .push((path.display().to_string(), e.to_string()));
                }
            }
        }

        pb.finish_with_message(format!(
            "{}/{} images watermarked",
            summary.succeeded, summary.attempted
        ));

        log::info!(
            "Done: {} watermarked, {} skipped, {} failed, output in {}",
            summary.succeeded,
            summary.skipped,
            summary.errors.len(),
            output_dir.display()
        );

        Ok(summary)
    }

    // A file input is its own candidate list; a directory contributes its
    // immediate file entries only. Non-image entries drop out silently.
    fn collect_image_paths(&self, input_path: &Path) -> Vec<PathBuf> {
        if input_path.is_file() {
            return if is_supported_image(input_path) {
                vec![input_path.to_path_buf()]
            } else {
                Vec::new()
            };
        }

        WalkDir::new(input_path)
            .max_depth(1)
            .into_iter()
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.file_type().is_file())
            .filter(|entry| is_supported_image(entry.path()))
            .map(|entry| entry.into_path())
            .collect()
    }

    fn create_progress_bar(&self, total: usize) -> ProgressBar {
        let pb = ProgressBar::new(total as u64);
        if let Ok(style) = ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({eta}) {msg}")
        {
            pb.set_style(style.progress_chars("#>-"));
        }
        pb
    }
}
