//! Prompt assembly.
//!
//! One prompt string per request: role instructions, the
//! provenance-labeled scoped data serialized as structured text, a
//! conditional proximity section, and the literal user question.

use lagoon_core::config::PromptVariant;
use lagoon_core::error::Result;
use lagoon_core::scope::{Provenance, ScopedContext};

/// The original wording, with denser emoji guidance.
const BASELINE_INSTRUCTIONS: &str = "\
You are Lagoon, a cheerful guide to the Lagos waterway ferry network. \
Answer only from the transit data provided below; if the data does not \
cover the question, say so plainly instead of guessing. Keep answers \
short and conversational, use **bold** for jetty and route names, use \
[label](url) for any links, and sprinkle in fitting emojis freely.";

/// The location-aware wording, with sparser emoji guidance.
const LOCATION_AWARE_INSTRUCTIONS: &str = "\
You are Lagoon, a helpful guide to the Lagos waterway ferry network. \
Answer only from the transit data provided below; if the data does not \
cover the question, say so plainly instead of guessing. Keep answers \
short and conversational, use **bold** for jetty and route names, use \
[label](url) for any links, and use at most the occasional emoji.";

/// Extra instructions for the proximity path: what the distance field
/// means and how to order the narrative.
const PROXIMITY_INSTRUCTIONS: &str = "\
The jetties below are ranked by distance from the user's current \
location; the distance_km field is the great-circle distance in \
kilometers. Present them closest first.";

/// Builds the complete prompt for one request.
pub fn build_prompt(
    context: &ScopedContext,
    question: &str,
    variant: PromptVariant,
) -> Result<String> {
    let instructions = match variant {
        PromptVariant::Baseline => BASELINE_INSTRUCTIONS,
        PromptVariant::LocationAware => LOCATION_AWARE_INSTRUCTIONS,
    };

    let mut prompt = String::new();
    prompt.push_str(instructions);
    prompt.push_str("\n\n");

    prompt.push_str(&format!(
        "Transit data ({}):\n{}\n",
        context.provenance.label(),
        serialize_context(context)?
    ));

    if matches!(context.provenance, Provenance::Filtered { .. })
        && context.jetties.is_empty()
        && context.routes.is_empty()
    {
        prompt.push_str(
            "\nNo records matched the user's keywords; tell the user nothing was found.\n",
        );
    }

    if context.provenance == Provenance::DistanceRanked {
        prompt.push('\n');
        prompt.push_str(PROXIMITY_INSTRUCTIONS);
        prompt.push('\n');
    }

    prompt.push_str(&format!("\nUser question: {question}\n"));
    Ok(prompt)
}

fn serialize_context(context: &ScopedContext) -> Result<String> {
    let text = if context.provenance == Provenance::DistanceRanked {
        serde_json::to_string_pretty(&context.ranked_jetties)?
    } else {
        serde_json::to_string_pretty(&serde_json::json!({
            "jetties": context.jetties,
            "routes": context.routes,
        }))?
    };
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use lagoon_core::geo::Coordinate;
    use lagoon_core::model::{Dataset, Jetty};
    use lagoon_core::scope::{scope_by_keywords, scope_by_proximity};

    fn dataset() -> Dataset {
        Dataset::new(
            vec![Jetty {
                id: "j-01".to_string(),
                name: "Falomo Jetty".to_string(),
                area: "Eti-Osa".to_string(),
                status: "Operational".to_string(),
                ownership: "State".to_string(),
                condition: "Good".to_string(),
                offers_charter: false,
                location: Coordinate::new(6.4420, 3.4226),
                description: None,
                landmark: None,
            }],
            Vec::new(),
        )
    }

    #[test]
    fn prompt_contains_label_data_and_question() {
        let dataset = dataset();
        let context = scope_by_keywords(&dataset, &["falomo".to_string()], 8);
        let prompt = build_prompt(&context, "Tell me about Falomo", PromptVariant::Baseline)
            .unwrap();

        assert!(prompt.contains("filtered, relevant to: falomo"));
        assert!(prompt.contains("Falomo Jetty"));
        assert!(prompt.ends_with("User question: Tell me about Falomo\n"));
    }

    #[test]
    fn proximity_prompt_explains_distance_field() {
        let dataset = dataset();
        let context = scope_by_proximity(&dataset, Coordinate::new(6.45, 3.40), 5);
        let prompt =
            build_prompt(&context, "nearest jetty?", PromptVariant::LocationAware).unwrap();

        assert!(prompt.contains("distance_km"));
        assert!(prompt.contains("closest first"));
    }

    #[test]
    fn keyword_prompt_has_no_proximity_section() {
        let dataset = dataset();
        let context = scope_by_keywords(&dataset, &[], 8);
        let prompt = build_prompt(&context, "hi", PromptVariant::LocationAware).unwrap();

        assert!(!prompt.contains("closest first"));
        assert!(prompt.contains("sample of the network"));
    }

    #[test]
    fn no_match_context_is_stated_explicitly() {
        let dataset = dataset();
        let context = scope_by_keywords(&dataset, &["zeppelin".to_string()], 8);
        let prompt = build_prompt(&context, "zeppelin?", PromptVariant::Baseline).unwrap();

        assert!(prompt.contains("nothing was found"));
        // Still the filtered label, never a silent fallback to sampling.
        assert!(prompt.contains("filtered, relevant to: zeppelin"));
    }

    #[test]
    fn variants_differ_in_wording() {
        let dataset = dataset();
        let context = scope_by_keywords(&dataset, &[], 8);
        let baseline = build_prompt(&context, "hi", PromptVariant::Baseline).unwrap();
        let aware = build_prompt(&context, "hi", PromptVariant::LocationAware).unwrap();
        assert_ne!(baseline, aware);
    }
}
