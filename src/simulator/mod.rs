//! Query simulator - returns canned results for SQL typed on a lesson page
//!
//! Nothing is parsed or executed. The input is lower-cased and tested against
//! the page's ordered rule list; the first matching rule's outcome is returned.
//! Narrow patterns are listed before broad ones so they are not shadowed.
//! Input that matches no rule gets the demo note as an error.
//!
//! Structure:
//! - rules: page contexts and their rule tables
//! - canned: fixed result tables

pub mod canned;
pub mod rules;

pub use rules::{PageContext, Pattern, Rule};

use crate::core::SimulatedResultSet;
use tracing::debug;

pub const DEMO_NOTE: &str =
    "Note: This is a demo. In a real environment, connect to PostgreSQL to execute queries.";

/// Simulates `sql` on `page`. Pure and total: every input yields exactly one
/// of rows, success or error.
#[must_use]
pub fn simulate(sql: &str, page: PageContext) -> SimulatedResultSet {
    match matching_rule(sql, page) {
        Some(rule) => {
            debug!(page = %page, rule = rule.label, "simulated query matched");
            (rule.outcome)()
        }
        None => {
            debug!(page = %page, "simulated query matched no rule");
            SimulatedResultSet::Error(DEMO_NOTE.to_string())
        }
    }
}

/// The rule `simulate` would apply, if any.
#[must_use]
pub fn matching_rule(sql: &str, page: PageContext) -> Option<&'static Rule> {
    let lowered = sql.to_lowercase();
    page.rules().iter().find(|rule| rule.pattern.matches(&lowered))
}
