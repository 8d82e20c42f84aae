//! JaCoCo XML extraction.
//!
//! Turns a report document into a [`CoverageSummary`]: aggregate metrics keyed
//! by counter kind plus per-package instruction coverage sorted lowest first.

use crate::error::{SummaryError, SummaryResult};
use crate::model::{
    coverage_percent, total_units, CounterKind, CounterMetric, CoverageSummary, PackageMetric,
};
use roxmltree::{Document, Node, ParsingOptions};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;
use tracing::{debug, info};

/// Default location of the report written by the JaCoCo Maven plugin
pub const DEFAULT_REPORT_PATH: &str = "target/site/jacoco/jacoco.xml";

/// Organizational namespace removed from package names
pub const DEFAULT_PACKAGE_PREFIX: &str = "com.expedia.demo.";

/// Package name used when a `package` element has no `name` attribute
const UNNAMED_PACKAGE: &str = "default";

/// Which counters feed the aggregate metrics
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum AggregateScope {
    /// Every counter in the document, later counters overwrite earlier ones
    #[default]
    Document,
    /// Only counters that are direct children of the root `report` element
    Report,
}

/// Extraction settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractOptions {
    /// Prefix removed from package names for display
    pub package_prefix: String,
    /// Aggregate counter scope
    pub scope: AggregateScope,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            package_prefix: DEFAULT_PACKAGE_PREFIX.to_string(),
            scope: AggregateScope::Document,
        }
    }
}

/// Reads JaCoCo reports into [`CoverageSummary`] values
#[derive(Debug, Clone, Default)]
pub struct ReportExtractor {
    options: ExtractOptions,
}

impl ReportExtractor {
    /// Create an extractor with default options
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the package prefix to strip
    #[must_use]
    pub fn with_package_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.options.package_prefix = prefix.into();
        self
    }

    /// Set the aggregate scope
    #[must_use]
    pub const fn with_scope(mut self, scope: AggregateScope) -> Self {
        self.options.scope = scope;
        self
    }

    /// Current options
    #[must_use]
    pub const fn options(&self) -> &ExtractOptions {
        &self.options
    }

    /// Load and extract a report from disk
    ///
    /// # Errors
    ///
    /// [`SummaryError::MissingFile`] if `path` does not exist, [`SummaryError::Io`]
    /// if it cannot be read, and a malformed-document error if the content
    /// is not a parseable report.
    pub fn extract_file(&self, path: &Path) -> SummaryResult<CoverageSummary> {
        if !path.exists() {
            return Err(SummaryError::missing_file(path));
        }

        let content = std::fs::read_to_string(path).map_err(|source| SummaryError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), bytes = content.len(), "loaded coverage report");

        self.extract_str(&content)
    }

    /// Extract a report already held in memory
    ///
    /// # Errors
    ///
    /// Returns a malformed-document error if `xml` is not well-formed or a
    /// counter carries a non-numeric count.
    pub fn extract_str(&self, xml: &str) -> SummaryResult<CoverageSummary> {
        let document = parse_document(xml)?;
        let root = document.root_element();

        let metrics = self.collect_metrics(root)?;
        let packages = self.collect_packages(root)?;

        info!(
            kinds = metrics.len(),
            packages = packages.len(),
            "extracted coverage summary"
        );

        Ok(CoverageSummary { metrics, packages })
    }

    fn collect_metrics(
        &self,
        root: Node<'_, '_>,
    ) -> SummaryResult<BTreeMap<CounterKind, CounterMetric>> {
        let mut metrics = BTreeMap::new();

        let counters: Vec<Node<'_, '_>> = match self.options.scope {
            AggregateScope::Document => root
                .descendants()
                .skip(1)
                .filter(|n| n.has_tag_name("counter"))
                .collect(),
            AggregateScope::Report => root
                .children()
                .filter(|n| n.has_tag_name("counter"))
                .collect(),
        };

        for node in counters {
            let Some(counter) = read_counter(node)? else {
                continue;
            };
            debug!(
                kind = %counter.kind,
                missed = counter.missed,
                covered = counter.covered,
                "counter"
            );
            // Empty counters never replace an earlier entry for the same kind
            if let Some(metric) =
                CounterMetric::from_counts(counter.kind.clone(), counter.missed, counter.covered)
            {
                metrics.insert(counter.kind, metric);
            }
        }

        Ok(metrics)
    }

    fn collect_packages(&self, root: Node<'_, '_>) -> SummaryResult<Vec<PackageMetric>> {
        let mut packages = Vec::new();

        for package in root
            .descendants()
            .skip(1)
            .filter(|n| n.has_tag_name("package"))
        {
            let raw_name = package.attribute("name").unwrap_or(UNNAMED_PACKAGE);

            let mut instruction = None;
            for node in package.children().filter(|n| n.has_tag_name("counter")) {
                if let Some(counter) = read_counter(node)? {
                    if counter.kind == CounterKind::Instruction {
                        if let Some(coverage) = coverage_percent(counter.missed, counter.covered) {
                            let total = total_units(counter.missed, counter.covered);
                            instruction = Some((coverage, total));
                        }
                    }
                }
            }

            let Some((coverage, total)) = instruction else {
                debug!(package = raw_name, "skipping package without instructions");
                continue;
            };

            let name = self.display_name(raw_name);
            if name.is_empty() {
                debug!(package = raw_name, "skipping package with empty display name");
                continue;
            }

            packages.push(PackageMetric {
                name,
                coverage,
                total,
            });
        }

        // Stable: packages with equal coverage keep document order
        packages.sort_by(|a, b| a.coverage.total_cmp(&b.coverage));
        Ok(packages)
    }

    /// Package name with every occurrence of the configured prefix removed
    #[must_use]
    pub fn display_name(&self, package_name: &str) -> String {
        let prefix = self.options.package_prefix.as_str();
        if prefix.is_empty() {
            package_name.to_string()
        } else {
            package_name.replace(prefix, "")
        }
    }
}

/// Extract a report from disk with default options
///
/// # Errors
///
/// See [`ReportExtractor::extract_file`].
pub fn extract_file(path: &Path) -> SummaryResult<CoverageSummary> {
    ReportExtractor::new().extract_file(path)
}

/// Extract an in-memory report with default options
///
/// # Errors
///
/// See [`ReportExtractor::extract_str`].
pub fn extract_str(xml: &str) -> SummaryResult<CoverageSummary> {
    ReportExtractor::new().extract_str(xml)
}

/// Raw counts read from one `counter` element
struct RawCounter {
    kind: CounterKind,
    missed: u64,
    covered: u64,
}

fn parse_document(xml: &str) -> SummaryResult<Document<'_>> {
    // JaCoCo reports carry a DOCTYPE referencing report.dtd
    let mut options = ParsingOptions::default();
    options.allow_dtd = true;
    Ok(Document::parse_with_options(xml, options)?)
}

/// Counters without a `type` attribute are ignored
fn read_counter(node: Node<'_, '_>) -> SummaryResult<Option<RawCounter>> {
    let Some(kind) = node.attribute("type") else {
        return Ok(None);
    };

    Ok(Some(RawCounter {
        missed: read_count(node, kind, "missed")?,
        covered: read_count(node, kind, "covered")?,
        kind: CounterKind::from(kind),
    }))
}

/// Missing count attributes are treated as zero
fn read_count(node: Node<'_, '_>, kind: &str, attribute: &'static str) -> SummaryResult<u64> {
    node.attribute(attribute).map_or(Ok(0), |raw| {
        raw.trim()
            .parse::<u64>()
            .map_err(|_| SummaryError::InvalidCounter {
                kind: kind.to_string(),
                attribute,
                value: raw.to_string(),
            })
    })
}
