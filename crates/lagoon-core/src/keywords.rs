//! Keyword extraction from free-form user text.
//!
//! The extractor feeds the data scoper: it derives a small, ordered set of
//! salient lowercase terms from a chat message. It is deliberately coarse;
//! there is no stemming or relevance scoring.

/// Maximum number of keywords returned for a single message.
pub const KEYWORD_CAP: usize = 10;

/// Fixed domain vocabulary: waterway place names and transit terms.
///
/// Tokens found here are always kept even when they would otherwise be
/// discarded (e.g. purely numeric jetty designations never occur, but
/// short well-known names do appear in user questions).
const DOMAIN_VOCABULARY: &[&str] = &[
    // Place names around the lagoon network
    "ikorodu", "cms", "marina", "apapa", "badagry", "lekki", "ajah", "falomo", "ebute", "ero",
    "ojo", "badore", "ijede", "oworonshoki", "osborne", "ilaje", "takwa", "liverpool", "mile",
    "ikoyi", "victoria", "epe", "agboyi", "baiyeku", "langbasa",
    // Transit terms
    "jetty", "jetties", "ferry", "ferries", "route", "routes", "fare", "terminal", "boat",
    "schedule", "price", "cost", "duration", "operator", "charter", "payment", "frequency",
    "departure", "crossing",
];

/// Extracts an ordered-unique set of lowercase keywords from `text`,
/// capped at [`KEYWORD_CAP`].
///
/// Two passes over the message:
/// 1. lowercased whitespace tokens, stripped of non-alphanumerics, kept
///    when at least 3 characters long and either in the domain vocabulary
///    or not purely numeric;
/// 2. original-case tokens whose first character is uppercase and whose
///    length exceeds 1 (a coarse proper-noun detector), lowercased.
///
/// A message of only stopword-length tokens with no capitalized words
/// yields an empty list; callers treat that as "no keywords found".
pub fn extract_keywords(text: &str) -> Vec<String> {
    let mut keywords: Vec<String> = Vec::new();

    for token in text.to_lowercase().split_whitespace() {
        let cleaned: String = token.chars().filter(|c| c.is_alphanumeric()).collect();
        if cleaned.chars().count() < 3 {
            continue;
        }
        let in_vocabulary = DOMAIN_VOCABULARY.contains(&cleaned.as_str());
        let purely_numeric = cleaned.chars().all(|c| c.is_ascii_digit());
        if in_vocabulary || !purely_numeric {
            push_unique(&mut keywords, cleaned);
        }
    }

    for token in text.split_whitespace() {
        let mut chars = token.chars();
        let starts_uppercase = chars.next().is_some_and(char::is_uppercase);
        if starts_uppercase && chars.next().is_some() {
            push_unique(&mut keywords, token.to_lowercase());
        }
    }

    keywords.truncate(KEYWORD_CAP);
    keywords
}

fn push_unique(keywords: &mut Vec<String>, candidate: String) {
    if !keywords.contains(&candidate) {
        keywords.push(candidate);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_domain_terms_and_proper_nouns() {
        let keywords = extract_keywords("What is the fare from Ikorodu to CMS?");

        assert!(keywords.contains(&"fare".to_string()));
        assert!(keywords.contains(&"ikorodu".to_string()));
        // "CMS?" survives the proper-noun pass lowercased as typed
        assert!(keywords.iter().any(|k| k.starts_with("cms")));
    }

    #[test]
    fn discards_short_and_numeric_tokens() {
        let keywords = extract_keywords("is it at 1500 or so");
        assert!(keywords.is_empty());
    }

    #[test]
    fn stopword_only_message_yields_empty_list() {
        let keywords = extract_keywords("is it ok to go");
        assert!(keywords.is_empty());
    }

    #[test]
    fn preserves_first_seen_order_and_dedupes() {
        let keywords = extract_keywords("ferry fare ferry fare ikorodu");
        assert_eq!(keywords, vec!["ferry", "fare", "ikorodu"]);
    }

    #[test]
    fn caps_at_ten_entries() {
        let keywords = extract_keywords(
            "alpha bravo charlie delta echo foxtrot golf hotel india juliet kilo lima",
        );
        assert_eq!(keywords.len(), KEYWORD_CAP);
        assert_eq!(keywords[0], "alpha");
    }

    #[test]
    fn extraction_is_idempotent_on_its_own_output() {
        let first = extract_keywords("Which jetty near Ikorodu has charter boats available?");
        let joined = first.join(" ");
        let second = extract_keywords(&joined);
        assert_eq!(first, second);
    }
}
