use serde::{Deserialize, Serialize};
use std::fmt;

/// Canonical lookup key derived from a technology display name.
///
/// Keys are lowercase ASCII alphanumerics (possibly empty for symbol-only
/// names). A key always normalizes to itself, so callers may pass either a
/// display name or an already-canonical key through the same lookup path.
#[derive(Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TechKey(pub String);

/// Explicit name -> key mappings, matched against the whole lowercased name.
///
/// These names need a hand-picked key because the generic rule would collide
/// ("C#", "C++", and "C" all strip to "c") or produce something awkward
/// (".NET" -> "net"). Containment never triggers an entry; only an exact
/// whole-string match does.
const KEY_OVERRIDES: &[(&str, &str)] = &[
    ("c#", "csharp"),
    ("c++", "cpp"),
    ("c", "c"),
    (".net", "dotnet"),
    ("node.js", "nodejs"),
    ("next.js", "nextjs"),
    ("vs code", "vscode"),
    ("tailwind css", "tailwind"),
    ("rest apis", "restapi"),
    ("ci/cd", "cicd"),
    ("phpmyadmin", "phpmyadmin"),
    ("lorawan", "lorawan"),
];

impl TechKey {
    /// Derive the canonical key for a display name.
    ///
    /// Lowercases the input, consults the override table on the whole
    /// string, and otherwise strips every character outside `[a-z0-9]`
    /// with no replacement. Total and deterministic: every input string,
    /// including the empty string, yields a key without failure.
    pub fn normalize(name: &str) -> Self {
        let lower = name.to_lowercase();
        if let Some((_, key)) = KEY_OVERRIDES.iter().find(|(name, _)| *name == lower) {
            return Self((*key).to_string());
        }
        Self(
            lower
                .chars()
                .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
                .collect(),
        )
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TechKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(name: &str) -> String {
        TechKey::normalize(name).0
    }

    #[test]
    fn overrides_take_precedence() {
        assert_eq!(key("C++"), "cpp");
        assert_eq!(key("C#"), "csharp");
        assert_eq!(key(".NET"), "dotnet");
        assert_eq!(key("Node.js"), "nodejs");
        assert_eq!(key("CI/CD"), "cicd");
        assert_eq!(key("VS Code"), "vscode");
        assert_eq!(key("Tailwind CSS"), "tailwind");
        // The generic rule would keep the plural "s" here; only the table
        // entry reaches the documented key.
        assert_eq!(key("REST APIs"), "restapi");
    }

    #[test]
    fn generic_rule_strips_symbols_and_spaces() {
        assert_eq!(key("React"), "react");
        assert_eq!(key("REST API"), "restapi");
        assert_eq!(key("HTML5"), "html5");
        assert_eq!(key("Objective-C"), "objectivec");
        assert_eq!(key("Ruby on Rails"), "rubyonrails");
    }

    #[test]
    fn normalization_is_case_insensitive() {
        assert_eq!(key("react"), key("REACT"));
        assert_eq!(key("React"), key("rEaCt"));
        assert_eq!(key("c++"), key("C++"));
    }

    #[test]
    fn overrides_match_whole_names_only() {
        // Contains "c++" but is not "c++", so the generic rule applies.
        assert_eq!(key("C++ Builder"), "cbuilder");
        assert_eq!(key("VS Code Insiders"), "vscodeinsiders");
    }

    #[test]
    fn symbol_only_names_yield_the_empty_key() {
        assert_eq!(key("+++"), "");
        assert_eq!(key("@/!"), "");
        assert_eq!(key(""), "");
    }

    #[test]
    fn normalization_is_idempotent() {
        let samples = [
            "C++", "C#", ".NET", "Node.js", "CI/CD", "React", "REST APIs", "VS Code",
            "Tailwind CSS", "HTML5", "+++", "", "already-lower case",
        ];
        for name in samples {
            let once = key(name);
            assert_eq!(key(&once), once, "normalize not idempotent for {name:?}");
        }
    }

    #[test]
    fn every_override_output_is_its_own_canonical_form() {
        for (_, mapped) in KEY_OVERRIDES {
            assert_eq!(key(mapped), *mapped, "override target {mapped} not stable");
        }
    }
}
