//! JaCoCo coverage summaries.
//!
//! Reads a JaCoCo XML report, extracts aggregate and per-package coverage,
//! and renders a markdown table suitable for a pull-request comment.
//!
//! ```no_run
//! use jacoco_summary::{extract_file, render_markdown};
//! use std::path::Path;
//!
//! let summary = extract_file(Path::new("target/site/jacoco/jacoco.xml"))?;
//! println!("{}", render_markdown(&summary.metrics, &summary.packages));
//! # Ok::<(), jacoco_summary::SummaryError>(())
//! ```

#![warn(missing_docs)]

mod error;
pub mod extract;
pub mod model;
pub mod render;
pub mod status;

pub use error::{SummaryError, SummaryResult};
pub use extract::{
    extract_file, extract_str, AggregateScope, ExtractOptions, ReportExtractor,
    DEFAULT_PACKAGE_PREFIX, DEFAULT_REPORT_PATH,
};
pub use model::{CounterKind, CounterMetric, CoverageSummary, PackageMetric};
pub use render::{render_markdown, MarkdownFormatter};
pub use status::{CoverageStatus, Thresholds};
