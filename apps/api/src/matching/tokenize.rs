use std::collections::HashSet;

/// Extracts skill-like tokens from free text: lower-case, replace every
/// character outside `[a-z0-9+#.\- ]` with a space, split on whitespace runs.
/// The allow-list keeps tokens like `c++`, `c#` and `node.js` intact.
pub fn extract_tokens(text: &str) -> HashSet<String> {
    text.to_lowercase()
        .chars()
        .map(|c| match c {
            'a'..='z' | '0'..='9' | '+' | '#' | '.' | '-' => c,
            _ => ' ',
        })
        .collect::<String>()
        .split_whitespace()
        .map(str::to_owned)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lowercases_and_splits_on_whitespace_runs() {
        let tokens = extract_tokens("Senior  Rust\tEngineer");
        assert!(tokens.contains("senior"));
        assert!(tokens.contains("rust"));
        assert!(tokens.contains("engineer"));
        assert_eq!(tokens.len(), 3);
    }

    #[test]
    fn preserves_symbolic_skill_names() {
        let tokens = extract_tokens("We use C++, C# and Node.js daily");
        assert!(tokens.contains("c++"));
        assert!(tokens.contains("c#"));
        assert!(tokens.contains("node.js"));
    }

    #[test]
    fn strips_punctuation_noise() {
        let tokens = extract_tokens("React/Redux (2+ years)! — apply now?");
        assert!(tokens.contains("react"));
        assert!(tokens.contains("redux"));
        assert!(tokens.contains("2+"));
        assert!(!tokens.iter().any(|t| t.contains('/') || t.contains('(')));
    }

    #[test]
    fn empty_input_yields_no_tokens() {
        assert!(extract_tokens("").is_empty());
        assert!(extract_tokens("!?¡—").is_empty());
    }
}
