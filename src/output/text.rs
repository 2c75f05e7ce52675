//! Small text-formatting helpers shared by the tree renderer.

use crate::models::SecGroupRule;
use colored::Colorize;

/// Pair a primary and a secondary label: primary green, secondary dimmed.
/// Either side alone renders green; both absent renders nothing.
pub fn make_name(primary: Option<&str>, secondary: Option<&str>) -> Option<String> {
    match (primary, secondary) {
        (Some(a), Some(b)) => Some(format!("{} / {}", a.green(), b.bright_black())),
        (Some(a), None) => Some(a.green().to_string()),
        (None, Some(b)) => Some(b.green().to_string()),
        (None, None) => None,
    }
}

/// The ` (name)` suffix for a resource line, empty when there is no name.
pub fn name_suffix(primary: Option<&str>, secondary: Option<&str>) -> String {
    match make_name(primary, secondary) {
        Some(name) => format!(" ({name})"),
        None => String::new(),
    }
}

/// Color a state green when it matches the healthy value, red otherwise.
pub fn state_colored(state: &str, healthy: &str) -> String {
    if state == healthy {
        state.green().to_string()
    } else {
        state.red().to_string()
    }
}

pub fn ingress_rule_line(rule: &SecGroupRule) -> String {
    format!(
        "{} from [{}] to {}",
        "ALLOW".green(),
        rule.peers.join(", ").cyan(),
        rule.port.cyan()
    )
}

pub fn egress_rule_line(rule: &SecGroupRule) -> String {
    // The provider encodes a revoked default egress as this exact
    // placeholder peer and inverted port range.
    if rule.peers.len() == 1 && rule.peers[0] == "255.255.255.255/32" && rule.port == "252-86" {
        format!(
            "{} to [{}] to {}",
            "DENY".red(),
            "any address".red(),
            "any ports".red()
        )
    } else {
        format!(
            "{} to [{}] to {}",
            "ALLOW".green(),
            rule.peers.join(", ").cyan(),
            rule.port.cyan()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn uncolored() {
        colored::control::set_override(false);
    }

    #[test]
    fn test_make_name_pairs() {
        uncolored();
        assert_eq!(
            make_name(Some("name"), Some("logical-id")).as_deref(),
            Some("name / logical-id")
        );
        assert_eq!(make_name(Some("name"), None).as_deref(), Some("name"));
        assert_eq!(make_name(None, Some("only")).as_deref(), Some("only"));
        assert!(make_name(None, None).is_none());
    }

    #[test]
    fn test_name_suffix_empty_when_nameless() {
        uncolored();
        assert_eq!(name_suffix(None, None), "");
        assert_eq!(name_suffix(Some("x"), None), " (x)");
    }

    #[test]
    fn test_state_coloring_uses_exact_match() {
        uncolored();
        assert_eq!(state_colored("active", "active"), "active");
        assert_eq!(state_colored("failed", "active"), "failed");
    }

    #[test]
    fn test_revoked_default_egress_renders_as_deny() {
        uncolored();
        let rule = SecGroupRule {
            port: "252-86".to_string(),
            peers: vec!["255.255.255.255/32".to_string()],
        };
        assert_eq!(egress_rule_line(&rule), "DENY to [any address] to any ports");
        let normal = SecGroupRule {
            port: "443".to_string(),
            peers: vec!["10.0.0.0/8".to_string()],
        };
        assert_eq!(egress_rule_line(&normal), "ALLOW to [10.0.0.0/8] to 443");
    }
}
