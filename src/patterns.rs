use std::path::Path;
use tracing::{debug, warn};

/// Patterns applied on every invocation, before any user-configured ones.
pub const BUILTIN_EXCLUDE_PATTERNS: &[&str] = &["**/__pycache__/**", "**/node_modules/**"];

/// One parsed exclude rule. Only two pattern shapes are recognized;
/// everything else becomes `NoOp` and never matches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExcludeRule {
    /// `**/<name>/**`: the path passes through a directory named `<name>`.
    ContainsDir(String),
    /// `**/*.<ext>`: the path ends with `.<ext>`.
    ExtensionMatch(String),
    NoOp,
}

impl ExcludeRule {
    pub fn parse(raw: &str) -> Self {
        let pattern = raw.trim().to_lowercase();

        if let Some(name) = pattern
            .strip_prefix("**/")
            .and_then(|rest| rest.strip_suffix("/**"))
        {
            if !name.is_empty() && !name.contains('/') && !name.contains('*') {
                return ExcludeRule::ContainsDir(name.to_string());
            }
        }

        if let Some(ext) = pattern.strip_prefix("**/*.") {
            if !ext.is_empty() && !ext.contains('/') && !ext.contains('*') {
                return ExcludeRule::ExtensionMatch(ext.to_string());
            }
        }

        if !pattern.is_empty() {
            warn!("Ignoring unrecognized exclude pattern: {}", raw);
        }
        ExcludeRule::NoOp
    }

    fn matches(&self, relative: &str) -> bool {
        match self {
            ExcludeRule::ContainsDir(name) => {
                relative.split('/').any(|segment| segment == name)
            }
            ExcludeRule::ExtensionMatch(ext) => {
                relative.ends_with(&format!(".{ext}"))
            }
            ExcludeRule::NoOp => false,
        }
    }
}

/// The merged rule set for one invocation: built-in patterns union the
/// user-configured ones, duplicates collapsed case-insensitively.
#[derive(Debug, Clone, Default)]
pub struct ExcludeRules {
    rules: Vec<ExcludeRule>,
}

impl ExcludeRules {
    pub fn with_builtin(configured: &[String]) -> Self {
        let mut raw: Vec<String> = BUILTIN_EXCLUDE_PATTERNS
            .iter()
            .map(|p| p.to_lowercase())
            .collect();
        for pattern in configured {
            let lowered = pattern.trim().to_lowercase();
            if !lowered.is_empty() && !raw.contains(&lowered) {
                raw.push(lowered);
            }
        }
        debug!("Using exclude patterns: {:?}", raw);

        ExcludeRules {
            rules: raw.iter().map(|p| ExcludeRule::parse(p)).collect(),
        }
    }

    /// Whether `path`, taken relative to `root`, matches any rule.
    pub fn is_excluded(&self, path: &Path, root: &Path) -> bool {
        let relative = normalize_relative(path, root);
        self.rules.iter().any(|rule| rule.matches(&relative))
    }
}

fn normalize_relative(path: &Path, root: &Path) -> String {
    let stripped = path.strip_prefix(root).unwrap_or(path);
    stripped.to_string_lossy().replace('\\', "/").to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn parses_contains_dir_shape() {
        assert_eq!(
            ExcludeRule::parse("**/node_modules/**"),
            ExcludeRule::ContainsDir("node_modules".to_string())
        );
    }

    #[test]
    fn parses_extension_shape() {
        assert_eq!(
            ExcludeRule::parse("**/*.log"),
            ExcludeRule::ExtensionMatch("log".to_string())
        );
    }

    #[test]
    fn unrecognized_patterns_parse_to_noop() {
        assert_eq!(ExcludeRule::parse("*.tmp"), ExcludeRule::NoOp);
        assert_eq!(ExcludeRule::parse("**/a/b/**"), ExcludeRule::NoOp);
        assert_eq!(ExcludeRule::parse("**/*/**"), ExcludeRule::NoOp);
        assert_eq!(ExcludeRule::parse(""), ExcludeRule::NoOp);
    }

    #[test]
    fn contains_dir_matches_any_depth() {
        let rules = ExcludeRules::with_builtin(&[]);
        let root = PathBuf::from("/proj/src");
        assert!(rules.is_excluded(&root.join("node_modules"), &root));
        assert!(rules.is_excluded(&root.join("a/b/node_modules/x.js"), &root));
        assert!(!rules.is_excluded(&root.join("node_modules.rs"), &root));
    }

    #[test]
    fn matching_is_case_insensitive() {
        let rules = ExcludeRules::with_builtin(&["**/*.LOG".to_string()]);
        let root = PathBuf::from("/proj");
        assert!(rules.is_excluded(&root.join("out/Server.log"), &root));
        assert!(rules.is_excluded(&root.join("NODE_MODULES"), &root));
    }

    #[test]
    fn extension_match_is_a_suffix_test() {
        let rules = ExcludeRules::with_builtin(&["**/*.log".to_string()]);
        let root = PathBuf::from("/proj");
        assert!(rules.is_excluded(&root.join("server.log"), &root));
        assert!(rules.is_excluded(&root.join("deep/nested/app.log"), &root));
        assert!(!rules.is_excluded(&root.join("catalog"), &root));
    }

    #[test]
    fn duplicate_patterns_collapse() {
        let rules = ExcludeRules::with_builtin(&[
            "**/node_modules/**".to_string(),
            "**/NODE_MODULES/**".to_string(),
        ]);
        assert_eq!(rules.rules.len(), BUILTIN_EXCLUDE_PATTERNS.len());
    }
}
