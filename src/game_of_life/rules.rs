//! Life-family rule parsing (`<survive>.<survive>/<birth>`)

use serde::{Deserialize, Serialize};
use std::fmt;

const DEFAULT_SURVIVE: [u8; 2] = [2, 3];
const DEFAULT_BIRTH: u8 = 3;

/// Survival and birth neighbor counts for one world
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RuleSpec {
    survive: [u8; 2],
    birth: u8,
}

impl Default for RuleSpec {
    fn default() -> Self {
        Self {
            survive: DEFAULT_SURVIVE,
            birth: DEFAULT_BIRTH,
        }
    }
}

impl RuleSpec {
    /// Parse a rule string such as `"2.3/3"`.
    ///
    /// Each of the three digits falls back to its classical default on its own
    /// when missing, unparseable or non-positive, so parsing never fails.
    pub fn parse(spec: &str) -> Self {
        let (survive, birth) = spec.split_once('/').unwrap_or((spec, ""));
        let (first, second) = survive.split_once('.').unwrap_or((survive, ""));

        Self {
            survive: [
                component(first, DEFAULT_SURVIVE[0]),
                component(second, DEFAULT_SURVIVE[1]),
            ],
            birth: component(birth, DEFAULT_BIRTH),
        }
    }

    pub fn survive_counts(&self) -> [u8; 2] {
        self.survive
    }

    pub fn birth_count(&self) -> u8 {
        self.birth
    }

    /// Whether a live cell with `live_count` neighbors stays alive
    pub fn survives(&self, live_count: usize) -> bool {
        self.survive.iter().any(|&n| n as usize == live_count)
    }

    /// Whether a dead cell with `live_count` neighbors comes alive
    pub fn born(&self, live_count: usize) -> bool {
        self.birth as usize == live_count
    }

    /// Next state of a cell given its current state and neighbor count
    pub fn next_state(&self, alive: bool, live_count: usize) -> bool {
        if alive {
            self.survives(live_count)
        } else {
            self.born(live_count)
        }
    }
}

fn component(raw: &str, default: u8) -> u8 {
    match raw.trim().parse::<i64>() {
        Ok(n) if n > 0 => u8::try_from(n).unwrap_or(default),
        _ => default,
    }
}

impl fmt::Display for RuleSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}/{}", self.survive[0], self.survive[1], self.birth)
    }
}

impl From<&str> for RuleSpec {
    fn from(spec: &str) -> Self {
        Self::parse(spec)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classic_rule() {
        let rule = RuleSpec::parse("2.3/3");
        assert_eq!(rule.survive_counts(), [2, 3]);
        assert_eq!(rule.birth_count(), 3);
        assert_eq!(rule, RuleSpec::default());
    }

    #[test]
    fn test_garbage_falls_back_to_defaults() {
        assert_eq!(RuleSpec::parse("garbage"), RuleSpec::default());
        assert_eq!(RuleSpec::parse(""), RuleSpec::default());
        assert_eq!(RuleSpec::parse("0.-1/x"), RuleSpec::default());
    }

    #[test]
    fn test_components_default_independently() {
        let rule = RuleSpec::parse("1.x/6");
        assert_eq!(rule.survive_counts(), [1, 3]);
        assert_eq!(rule.birth_count(), 6);

        let rule = RuleSpec::parse("3.4/");
        assert_eq!(rule.survive_counts(), [3, 4]);
        assert_eq!(rule.birth_count(), 3);
    }

    #[test]
    fn test_rule_logic() {
        let rule = RuleSpec::default();
        assert!(rule.next_state(true, 2));
        assert!(rule.next_state(true, 3));
        assert!(rule.next_state(false, 3));
        assert!(!rule.next_state(true, 1));
        assert!(!rule.next_state(true, 4));
        assert!(!rule.next_state(false, 2));
    }

    #[test]
    fn test_display() {
        assert_eq!(RuleSpec::parse("3.4/2").to_string(), "3.4/2");
        assert_eq!(RuleSpec::parse("bad").to_string(), "2.3/3");
    }
}
