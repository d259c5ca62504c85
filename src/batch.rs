//! Bulk normalization of raw identifiers.
//!
//! Each row is normalized independently with [`detect`] and [`segment`]
//! against the same read-only [`TemplateSet`], so rows may run on rayon's
//! pool. Results are always returned in input order.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::config::ParallelConfig;
use crate::core::TemplateSet;
use crate::matching::{detect, segment};

/// Normalization outcome for a single raw identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizedRecord {
    pub raw: String,
    /// Normalized identifier, or the `Unable to reformat` sentinel
    pub normalized: String,
    pub segments: Vec<String>,
    pub template_index: Option<usize>,
}

impl NormalizedRecord {
    pub fn is_matched(&self) -> bool {
        self.template_index.is_some()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchSummary {
    pub total: usize,
    pub matched: usize,
    pub unmatched: usize,
    /// Rows won by each template, indexed like the template set
    pub per_template: Vec<usize>,
}

impl BatchSummary {
    fn from_records(records: &[NormalizedRecord], template_count: usize) -> Self {
        let mut per_template = vec![0; template_count];
        for index in records.iter().filter_map(|r| r.template_index) {
            if let Some(slot) = per_template.get_mut(index) {
                *slot += 1;
            }
        }

        let matched = per_template.iter().sum();
        Self {
            total: records.len(),
            matched,
            unmatched: records.len() - matched,
            per_template,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchReport {
    pub records: Vec<NormalizedRecord>,
    pub summary: BatchSummary,
}

/// Normalize and segment one raw identifier.
pub fn normalize_record(raw: &str, templates: &TemplateSet) -> NormalizedRecord {
    let detection = detect(raw, templates);
    let segments = segment(raw, templates);

    NormalizedRecord {
        raw: raw.to_string(),
        normalized: detection.result.into_output(),
        segments,
        template_index: detection.template_index,
    }
}

/// Normalize every raw identifier, preserving input order.
pub fn normalize_batch<S>(raws: &[S], templates: &TemplateSet, parallel: &ParallelConfig) -> BatchReport
where
    S: AsRef<str> + Sync,
{
    let records = if parallel.enabled && raws.len() > 1 {
        normalize_parallel(raws, templates, parallel)
    } else {
        normalize_sequential(raws, templates)
    };

    let summary = BatchSummary::from_records(&records, templates.len());
    debug!(
        total = summary.total,
        matched = summary.matched,
        unmatched = summary.unmatched,
        "Normalized batch"
    );

    BatchReport { records, summary }
}

fn normalize_sequential<S: AsRef<str>>(raws: &[S], templates: &TemplateSet) -> Vec<NormalizedRecord> {
    raws.iter()
        .map(|raw| normalize_record(raw.as_ref(), templates))
        .collect()
}

fn normalize_parallel<S>(raws: &[S], templates: &TemplateSet, parallel: &ParallelConfig) -> Vec<NormalizedRecord>
where
    S: AsRef<str> + Sync,
{
    let min_len = parallel.effective_batch_size();
    let run = || -> Vec<NormalizedRecord> {
        raws.par_iter()
            .with_min_len(min_len)
            .map(|raw| normalize_record(raw.as_ref(), templates))
            .collect()
    };

    let Some(threads) = parallel.max_concurrency else {
        return run();
    };

    match rayon::ThreadPoolBuilder::new().num_threads(threads).build() {
        Ok(pool) => pool.install(run),
        Err(e) => {
            warn!("Failed to build {}-thread pool, using global pool: {}", threads, e);
            run()
        }
    }
}
