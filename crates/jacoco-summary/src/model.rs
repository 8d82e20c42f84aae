//! Coverage data model extracted from a JaCoCo report.
//!
//! ## JaCoCo XML Format
//!
//! ```xml
//! <report name="demo">
//!   <package name="com.expedia.demo.service">
//!     <class name="com/expedia/demo/service/BookService">
//!       <counter type="INSTRUCTION" missed="4" covered="96"/>
//!     </class>
//!     <counter type="INSTRUCTION" missed="4" covered="96"/>
//!     <counter type="LINE" missed="1" covered="24"/>
//!   </package>
//!   <counter type="INSTRUCTION" missed="4" covered="96"/>
//!   <counter type="BRANCH" missed="2" covered="6"/>
//! </report>
//! ```

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Kind of unit a JaCoCo counter measures
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum CounterKind {
    /// Bytecode instructions
    Instruction,
    /// Branches of conditional statements
    Branch,
    /// Source lines
    Line,
    /// Cyclomatic complexity
    Complexity,
    /// Methods
    Method,
    /// Classes
    Class,
    /// Any counter type this tool does not know by name
    Other(String),
}

impl CounterKind {
    /// Kinds shown in the overall table, in display order
    pub const HEADLINE: [Self; 3] = [Self::Instruction, Self::Branch, Self::Line];

    /// The `type` attribute value as written by JaCoCo
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Instruction => "INSTRUCTION",
            Self::Branch => "BRANCH",
            Self::Line => "LINE",
            Self::Complexity => "COMPLEXITY",
            Self::Method => "METHOD",
            Self::Class => "CLASS",
            Self::Other(raw) => raw,
        }
    }

    /// Capitalized label: first character upper case, the rest lower case
    #[must_use]
    pub fn label(&self) -> String {
        let raw = self.as_str();
        let mut chars = raw.chars();
        chars.next().map_or_else(String::new, |first| {
            first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect()
        })
    }
}

impl From<&str> for CounterKind {
    fn from(raw: &str) -> Self {
        match raw {
            "INSTRUCTION" => Self::Instruction,
            "BRANCH" => Self::Branch,
            "LINE" => Self::Line,
            "COMPLEXITY" => Self::Complexity,
            "METHOD" => Self::Method,
            "CLASS" => Self::Class,
            other => Self::Other(other.to_string()),
        }
    }
}

impl From<String> for CounterKind {
    fn from(raw: String) -> Self {
        Self::from(raw.as_str())
    }
}

impl From<CounterKind> for String {
    fn from(kind: CounterKind) -> Self {
        match kind {
            CounterKind::Other(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for CounterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// missed + covered, widened so counts near `u64::MAX` cannot overflow
#[must_use]
pub fn total_units(missed: u64, covered: u64) -> u128 {
    u128::from(missed) + u128::from(covered)
}

/// Percentage of covered units, `None` when there is nothing to cover
#[must_use]
pub fn coverage_percent(missed: u64, covered: u64) -> Option<f64> {
    let total = total_units(missed, covered);
    if total == 0 {
        return None;
    }
    Some(covered as f64 / total as f64 * 100.0)
}

/// Aggregate metrics for one counter kind
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CounterMetric {
    /// Counter kind
    pub kind: CounterKind,
    /// Units not executed
    pub missed: u64,
    /// Units executed
    pub covered: u64,
    /// missed + covered, always non-zero
    pub total: u128,
    /// covered / total * 100
    pub coverage: f64,
}

impl CounterMetric {
    /// Build a metric from raw counts; `None` when the counter is empty
    #[must_use]
    pub fn from_counts(kind: CounterKind, missed: u64, covered: u64) -> Option<Self> {
        let coverage = coverage_percent(missed, covered)?;
        Some(Self {
            kind,
            missed,
            covered,
            total: total_units(missed, covered),
            coverage,
        })
    }
}

/// Instruction coverage of a single package
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PackageMetric {
    /// Package name with the organizational prefix removed
    pub name: String,
    /// Instruction coverage percentage
    pub coverage: f64,
    /// Total instructions in the package
    pub total: u128,
}

/// Everything extracted from one report
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CoverageSummary {
    /// Aggregate metrics keyed by counter kind
    pub metrics: BTreeMap<CounterKind, CounterMetric>,
    /// Packages sorted ascending by coverage
    pub packages: Vec<PackageMetric>,
}

impl CoverageSummary {
    /// Aggregate metric for a kind, if the report had a non-empty counter for it
    #[must_use]
    pub fn metric(&self, kind: &CounterKind) -> Option<&CounterMetric> {
        self.metrics.get(kind)
    }

    /// Render as pretty-printed JSON
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
