//! Markdown summary formatter.
//!
//! ## Output
//!
//! ```text
//! ## 📊 Code Coverage Report
//!
//! ### Overall Coverage
//!
//! | Metric | Coverage |
//! |--------|----------|
//! | Instruction | 90.00% |
//! | Branch | 75.00% |
//!
//! ### Coverage by Package
//!
//! | Package | Coverage |
//! |---------|----------|
//! | util | 🔴 20.00% |
//! | service | 🟢 100.00% |
//! ```

use crate::model::{CounterKind, CounterMetric, CoverageSummary, PackageMetric};
use crate::status::Thresholds;
use std::collections::BTreeMap;
use std::fmt::Write;

/// Markdown report generator
#[derive(Debug)]
pub struct MarkdownFormatter<'a> {
    metrics: &'a BTreeMap<CounterKind, CounterMetric>,
    packages: &'a [PackageMetric],
    thresholds: Thresholds,
}

impl<'a> MarkdownFormatter<'a> {
    /// Create a formatter over extracted metrics and sorted packages
    #[must_use]
    pub fn new(
        metrics: &'a BTreeMap<CounterKind, CounterMetric>,
        packages: &'a [PackageMetric],
    ) -> Self {
        Self {
            metrics,
            packages,
            thresholds: Thresholds::default(),
        }
    }

    /// Create a formatter over a whole summary
    #[must_use]
    pub fn from_summary(summary: &'a CoverageSummary) -> Self {
        Self::new(&summary.metrics, &summary.packages)
    }

    /// Override the status thresholds
    #[must_use]
    pub const fn with_thresholds(mut self, thresholds: Thresholds) -> Self {
        self.thresholds = thresholds;
        self
    }

    /// Generate the markdown report
    #[must_use]
    pub fn generate(&self) -> String {
        let mut md = String::from("## 📊 Code Coverage Report\n\n");

        md.push_str("### Overall Coverage\n\n");
        md.push_str("| Metric | Coverage |\n");
        md.push_str("|--------|----------|\n");
        for kind in &CounterKind::HEADLINE {
            if let Some(metric) = self.metrics.get(kind) {
                let _ = writeln!(md, "| {} | {:.2}% |", kind.label(), metric.coverage);
            }
        }
        md.push('\n');

        if !self.packages.is_empty() {
            md.push_str("### Coverage by Package\n\n");
            md.push_str("| Package | Coverage |\n");
            md.push_str("|---------|----------|\n");
            for package in self.packages {
                let status = self.thresholds.classify(package.coverage);
                let _ = writeln!(
                    md,
                    "| {} | {} {:.2}% |",
                    package.name,
                    status.emoji(),
                    package.coverage
                );
            }
        }

        md
    }
}

/// Render metrics and packages with default thresholds
#[must_use]
pub fn render_markdown(
    metrics: &BTreeMap<CounterKind, CounterMetric>,
    packages: &[PackageMetric],
) -> String {
    MarkdownFormatter::new(metrics, packages).generate()
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    fn metrics(entries: &[(CounterKind, u64, u64)]) -> BTreeMap<CounterKind, CounterMetric> {
        entries
            .iter()
            .filter_map(|(kind, missed, covered)| {
                CounterMetric::from_counts(kind.clone(), *missed, *covered)
            })
            .map(|m| (m.kind.clone(), m))
            .collect()
    }

    fn package(name: &str, coverage: f64) -> PackageMetric {
        PackageMetric {
            name: name.to_string(),
            coverage,
            total: 100,
        }
    }

    #[test]
    fn test_full_layout() {
        let metrics = metrics(&[
            (CounterKind::Line, 5, 15),
            (CounterKind::Instruction, 10, 90),
            (CounterKind::Branch, 1, 3),
        ]);
        let packages = vec![package("util", 20.0), package("service", 100.0)];

        let output = render_markdown(&metrics, &packages);
        let expected = "## 📊 Code Coverage Report\n\
            \n\
            ### Overall Coverage\n\
            \n\
            | Metric | Coverage |\n\
            |--------|----------|\n\
            | Instruction | 90.00% |\n\
            | Branch | 75.00% |\n\
            | Line | 75.00% |\n\
            \n\
            ### Coverage by Package\n\
            \n\
            | Package | Coverage |\n\
            |---------|----------|\n\
            | util | 🔴 20.00% |\n\
            | service | 🟢 100.00% |\n";
        assert_eq!(output, expected);
    }

    #[test]
    fn test_missing_kinds_are_omitted() {
        let metrics = metrics(&[(CounterKind::Branch, 1, 1)]);
        let output = render_markdown(&metrics, &[]);
        assert!(output.contains("| Branch | 50.00% |"));
        assert!(!output.contains("Instruction |"));
        assert!(!output.contains("Line |"));
    }

    #[test]
    fn test_non_headline_kinds_not_shown() {
        let metrics = metrics(&[(CounterKind::Method, 1, 1), (CounterKind::Complexity, 1, 1)]);
        let output = render_markdown(&metrics, &[]);
        assert!(!output.contains("Method"));
        assert!(!output.contains("Complexity"));
    }

    #[test]
    fn test_no_packages_omits_section() {
        let metrics = metrics(&[(CounterKind::Instruction, 10, 90)]);
        let output = render_markdown(&metrics, &[]);
        assert!(!output.contains("Coverage by Package"));
        assert!(!output.contains("| Package |"));
        assert!(output.ends_with("| Instruction | 90.00% |\n\n"));
    }

    #[test]
    fn test_empty_inputs_still_emit_overall_table() {
        let output = render_markdown(&BTreeMap::new(), &[]);
        assert_eq!(
            output,
            "## 📊 Code Coverage Report\n\n### Overall Coverage\n\n| Metric | Coverage |\n|--------|----------|\n\n"
        );
    }

    #[test]
    fn test_status_markers() {
        let packages = vec![
            package("poor", 49.99),
            package("fair_low", 50.0),
            package("fair_high", 79.99),
            package("good", 80.0),
        ];
        let output = render_markdown(&BTreeMap::new(), &packages);
        assert!(output.contains("| poor | 🔴 49.99% |"));
        assert!(output.contains("| fair_low | 🟡 50.00% |"));
        assert!(output.contains("| fair_high | 🟡 79.99% |"));
        assert!(output.contains("| good | 🟢 80.00% |"));
    }

    #[test]
    fn test_package_order_is_preserved() {
        let packages = vec![package("b", 90.0), package("a", 10.0)];
        let output = render_markdown(&BTreeMap::new(), &packages);
        let b = output.find("| b |").unwrap();
        let a = output.find("| a |").unwrap();
        assert!(b < a);
    }

    #[test]
    fn test_custom_thresholds() {
        let packages = vec![package("core", 85.0)];
        let output = MarkdownFormatter::new(&BTreeMap::new(), &packages)
            .with_thresholds(Thresholds::new(90.0, 60.0))
            .generate();
        assert!(output.contains("| core | 🟡 85.00% |"));
    }

    #[test]
    fn test_rounding_to_two_decimals() {
        let metrics = metrics(&[(CounterKind::Line, 2, 1)]);
        let output = render_markdown(&metrics, &[]);
        assert!(output.contains("| Line | 33.33% |"));
    }

    #[test]
    fn test_from_summary_matches_render() {
        let summary = CoverageSummary {
            metrics: metrics(&[(CounterKind::Instruction, 1, 1)]),
            packages: vec![package("x", 50.0)],
        };
        assert_eq!(
            MarkdownFormatter::from_summary(&summary).generate(),
            render_markdown(&summary.metrics, &summary.packages)
        );
    }

    mod property_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn prop_render_is_deterministic(
                counts in proptest::collection::vec((0u64..1000, 0u64..1000), 0..6),
                coverages in proptest::collection::vec(0.0f64..=100.0, 0..10)
            ) {
                let kinds = [
                    CounterKind::Instruction,
                    CounterKind::Branch,
                    CounterKind::Line,
                    CounterKind::Method,
                    CounterKind::Class,
                    CounterKind::Complexity,
                ];
                let entries: Vec<_> = kinds
                    .iter()
                    .cloned()
                    .zip(counts)
                    .map(|(k, (m, c))| (k, m, c))
                    .collect();
                let metrics = metrics(&entries);
                let packages: Vec<_> = coverages
                    .iter()
                    .enumerate()
                    .map(|(i, c)| package(&format!("p{i}"), *c))
                    .collect();

                let first = render_markdown(&metrics, &packages);
                let second = render_markdown(&metrics, &packages);
                prop_assert_eq!(&first, &second);
                prop_assert_eq!(first.contains("Coverage by Package"), !packages.is_empty());
            }
        }
    }
}
