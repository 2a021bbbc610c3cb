//! Concept identifiers and their normalization.
//!
//! Concept names arrive from several sources (user input, CLICS glosses,
//! colexification lists) with inconsistent casing and whitespace. Every
//! comparison between concept names goes through [`normalize_concept`].

/// An ordered pair of concepts. `(A, B)` and `(B, A)` are distinct pairs.
pub type ConceptPair = (String, String);

/// Canonical form of a concept name: trimmed and uppercased.
#[must_use]
pub fn normalize_concept(concept: &str) -> String {
    concept.trim().to_uppercase()
}

/// Case- and whitespace-insensitive concept equality.
#[must_use]
pub fn same_concept(a: &str, b: &str) -> bool {
    normalize_concept(a) == normalize_concept(b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalizes_case_and_whitespace() {
        assert_eq!(normalize_concept("  tree "), "TREE");
        assert_eq!(normalize_concept("Wood"), "WOOD");
    }

    #[test]
    fn same_concept_ignores_case() {
        assert!(same_concept("tree", "TREE"));
        assert!(same_concept("Tree ", " tree"));
        assert!(!same_concept("tree", "wood"));
    }
}
