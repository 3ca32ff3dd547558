use crate::constants::RESERVED_SERVER;

/// Checks whether any of the given wildcard rules matches the item, ignoring case. A rule may
/// start and/or end with '*'.
///
pub fn is_omitted(item: &str, rules: &[String]) -> bool {
    let item = item.to_lowercase();

    rules.iter().any(|rule| match rule.to_lowercase().as_str() {
        r if r.len() > 1 && r.starts_with('*') && r.ends_with('*') => {
            item.contains(&r[1..r.len() - 1])
        }
        r if r.starts_with('*') => item.ends_with(&r[1..]),
        r if r.ends_with('*') => item.starts_with(&r[..r.len() - 1]),
        r => item == r,
    })
}

/// Turns a comma-separated list from the command line into server omit rules. The reserved
/// journal directory is always among them.
///
pub fn server_rules(user_rules: Option<&str>) -> Vec<String> {
    let mut rules = vec![RESERVED_SERVER.to_string()];

    if let Some(list) = user_rules {
        rules.extend(
            list.split(',')
                .map(str::trim)
                .filter(|r| !r.is_empty())
                .map(String::from),
        );
    }

    rules
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_match() {
        let rules = vec!["journal".to_string()];
        assert!(is_omitted("journal", &rules));
        assert!(is_omitted("Journal", &rules));
        assert!(is_omitted("JOURNAL", &rules));
        assert!(!is_omitted("journals", &rules));
    }

    #[test]
    fn test_prefix_match() {
        let rules = vec!["test*".to_string()];
        assert!(is_omitted("TestServer", &rules));
        assert!(!is_omitted("Faydark", &rules));
    }

    #[test]
    fn test_suffix_match() {
        let rules = vec!["*-old".to_string()];
        assert!(is_omitted("Faydark-OLD", &rules));
        assert!(!is_omitted("old-Faydark", &rules));
    }

    #[test]
    fn test_contains_match() {
        let rules = vec!["*beta*".to_string()];
        assert!(is_omitted("Open-Beta-2", &rules));
        assert!(!is_omitted("Faydark", &rules));
    }

    #[test]
    fn test_lone_star_matches_everything() {
        let rules = vec!["*".to_string()];
        assert!(is_omitted("Faydark", &rules));
    }

    #[test]
    fn test_empty_rules() {
        let rules: Vec<String> = vec![];
        assert!(!is_omitted("anything", &rules));
    }

    #[test]
    fn test_server_rules() {
        assert_eq!(vec!["journal".to_string()], server_rules(None));
        assert_eq!(
            vec!["journal".to_string(), "test*".to_string(), "old".to_string()],
            server_rules(Some("test*, old,,"))
        );
    }
}
