use super::canned;
use crate::content::Lesson;
use crate::core::SimulatedResultSet;
use std::fmt;

/// Substring test applied to lower-cased input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pattern {
    Contains(&'static str),
    AnyOf(&'static [&'static str]),
    Always,
}

impl Pattern {
    /// `lowered` must already be lower-case; needles are written lower-case.
    #[must_use]
    pub fn matches(&self, lowered: &str) -> bool {
        match self {
            Self::Contains(needle) => lowered.contains(needle),
            Self::AnyOf(needles) => needles.iter().any(|n| lowered.contains(n)),
            Self::Always => true,
        }
    }
}

/// One entry of a page's rule table.
#[derive(Debug, Clone, Copy)]
pub struct Rule {
    pub label: &'static str,
    pub pattern: Pattern,
    pub outcome: fn() -> SimulatedResultSet,
}

const DDL_OR_INSERT: Pattern = Pattern::AnyOf(&["create table", "insert into"]);

static DATABASE_SETUP_RULES: &[Rule] = &[
    Rule {
        label: "carriers",
        pattern: Pattern::Contains("where is_carrier"),
        outcome: canned::carriers,
    },
    Rule {
        label: "all_users",
        pattern: Pattern::Contains("select * from users"),
        outcome: canned::all_users,
    },
    Rule {
        label: "acknowledge",
        pattern: DDL_OR_INSERT,
        outcome: canned::success,
    },
];

static CARRIER_TRIPS_RULES: &[Rule] = &[
    Rule {
        label: "active_trips",
        pattern: Pattern::Contains("select"),
        outcome: canned::active_trips,
    },
    Rule {
        label: "acknowledge",
        pattern: Pattern::Always,
        outcome: canned::success,
    },
];

static ACKNOWLEDGE_ALL_RULES: &[Rule] = &[Rule {
    label: "acknowledge",
    pattern: Pattern::Always,
    outcome: canned::success,
}];

static GENERAL_RULES: &[Rule] = &[Rule {
    label: "acknowledge",
    pattern: DDL_OR_INSERT,
    outcome: canned::success,
}];

/// The page a query is typed on. Selects the rule table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PageContext {
    DatabaseSetup,
    CarrierTrips,
    PackageRequests,
    DeliveryMatches,
    Ratings,
    MatchingAlgorithm,
    IndexingPerformance,
    AdvancedFeatures,
    /// No lesson open.
    General,
}

impl PageContext {
    pub const ALL: [Self; 9] = [
        Self::DatabaseSetup,
        Self::CarrierTrips,
        Self::PackageRequests,
        Self::DeliveryMatches,
        Self::Ratings,
        Self::MatchingAlgorithm,
        Self::IndexingPerformance,
        Self::AdvancedFeatures,
        Self::General,
    ];

    /// Tutorial part number; unknown parts map to `General`.
    #[must_use]
    pub const fn from_part(part: u8) -> Self {
        match part {
            1 => Self::DatabaseSetup,
            2 => Self::CarrierTrips,
            3 => Self::PackageRequests,
            4 => Self::DeliveryMatches,
            5 => Self::Ratings,
            6 => Self::MatchingAlgorithm,
            7 => Self::IndexingPerformance,
            8 => Self::AdvancedFeatures,
            _ => Self::General,
        }
    }

    #[must_use]
    pub const fn for_lesson(lesson: &Lesson) -> Self {
        Self::from_part(lesson.part)
    }

    #[must_use]
    pub const fn part(self) -> Option<u8> {
        match self {
            Self::DatabaseSetup => Some(1),
            Self::CarrierTrips => Some(2),
            Self::PackageRequests => Some(3),
            Self::DeliveryMatches => Some(4),
            Self::Ratings => Some(5),
            Self::MatchingAlgorithm => Some(6),
            Self::IndexingPerformance => Some(7),
            Self::AdvancedFeatures => Some(8),
            Self::General => None,
        }
    }

    /// Ordered rule table; first match wins.
    #[must_use]
    pub fn rules(self) -> &'static [Rule] {
        match self {
            Self::DatabaseSetup => DATABASE_SETUP_RULES,
            Self::CarrierTrips => CARRIER_TRIPS_RULES,
            Self::PackageRequests
            | Self::DeliveryMatches
            | Self::Ratings
            | Self::MatchingAlgorithm
            | Self::IndexingPerformance
            | Self::AdvancedFeatures => ACKNOWLEDGE_ALL_RULES,
            Self::General => GENERAL_RULES,
        }
    }
}

impl fmt::Display for PageContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.part() {
            Some(part) => write!(f, "part-{part}"),
            None => write!(f, "general"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pattern_matching() {
        assert!(Pattern::Contains("select").matches("select 1"));
        assert!(!Pattern::Contains("select").matches("insert into t"));
        assert!(DDL_OR_INSERT.matches("insert into t values (1)"));
        assert!(DDL_OR_INSERT.matches("create table t (id int)"));
        assert!(!DDL_OR_INSERT.matches("create index i on t(id)"));
        assert!(Pattern::Always.matches(""));
    }

    #[test]
    fn test_part_round_trip() {
        for part in 1..=8 {
            assert_eq!(PageContext::from_part(part).part(), Some(part));
        }
        assert_eq!(PageContext::from_part(0), PageContext::General);
        assert_eq!(PageContext::from_part(42), PageContext::General);
        assert_eq!(PageContext::General.to_string(), "general");
        assert_eq!(PageContext::Ratings.to_string(), "part-5");
    }

    #[test]
    fn test_needles_are_lower_case() {
        for page in PageContext::ALL {
            for rule in page.rules() {
                let needles: &[&str] = match &rule.pattern {
                    Pattern::Contains(n) => std::slice::from_ref(n),
                    Pattern::AnyOf(ns) => *ns,
                    Pattern::Always => &[],
                };
                for n in needles {
                    assert_eq!(*n, n.to_lowercase(), "rule {} on {page}", rule.label);
                }
            }
        }
    }

    #[test]
    fn test_always_rules_come_last() {
        for page in PageContext::ALL {
            let rules = page.rules();
            if let Some(pos) = rules.iter().position(|r| r.pattern == Pattern::Always) {
                assert_eq!(pos, rules.len() - 1, "unreachable rules after Always on {page}");
            }
        }
    }

    #[test]
    fn test_canned_tables_are_well_formed() {
        for page in PageContext::ALL {
            for rule in page.rules() {
                assert!((rule.outcome)().error().is_none(), "rule {} on {page}", rule.label);
            }
        }
    }
}
