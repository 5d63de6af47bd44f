//! Query classification: proximity question or general keyword question.

/// Terms signalling location-relative intent.
const PROXIMITY_TERMS: &[&str] = &["nearest", "near", "close", "closest", "around", "nearby"];

/// Terms referring to a boarding point.
const JETTY_TERMS: &[&str] = &["jetty", "jetties", "terminal", "stop", "station"];

/// Returns true when `text` asks for geographically nearest jetties.
///
/// Both checks are plain substring containment over the lowercased text;
/// token boundaries are not enforced, so a term inside a larger word
/// still counts.
pub fn is_proximity_query(text: &str) -> bool {
    let lowered = text.to_lowercase();

    let has_proximity_term = PROXIMITY_TERMS.iter().any(|term| lowered.contains(term));
    let has_jetty_term = JETTY_TERMS.iter().any(|term| lowered.contains(term));

    has_proximity_term && has_jetty_term
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nearest_jetty_question_is_proximity() {
        assert!(is_proximity_query("What's the nearest jetty to me?"));
    }

    #[test]
    fn fare_question_is_not_proximity() {
        assert!(!is_proximity_query("What's the fare to CMS?"));
    }

    #[test]
    fn needs_both_vocabularies() {
        // Proximity term without a jetty referent
        assert!(!is_proximity_query("Is there anything close by?"));
        // Jetty referent without a proximity term
        assert!(!is_proximity_query("Tell me about Falomo jetty"));
    }

    #[test]
    fn substring_containment_ignores_word_boundaries() {
        // "station" appears inside "stations", "nearby" inside "nearby."
        assert!(is_proximity_query("Any ferry stations nearby?"));
    }
}
