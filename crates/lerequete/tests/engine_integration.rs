// Integration tests for the query engine
//
// These tests cover the full parse -> filter & rank -> highlight flow over
// small custom collections, including the delimiter-precedence and
// same-line bonus edge cases.

use chrono::NaiveDate;
use lelexique::{ContentItem, Entry};
use lerequete::ranking::comparison_words;
use lerequete::{filter_and_rank, highlight, ParsedQuery, SearchEngine, SearchMode, Span};

fn date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
}

fn entry(id: &str, term: &str, texts: &[&str]) -> Entry {
    Entry {
        id: id.to_string(),
        term: term.to_string(),
        content: texts
            .iter()
            .map(|text| ContentItem::new(*text, term))
            .collect(),
        keywords: Vec::new(),
        shared_terms: Vec::new(),
        compiled_date: date(),
        edited_date: date(),
    }
}

mod parsing {
    use super::*;

    #[test]
    fn test_empty_query() {
        let query = ParsedQuery::parse("");
        assert!(query.terms.is_empty());
        assert_eq!(query.mode, SearchMode::AnyMatch);
    }

    #[test]
    fn test_any_match_query() {
        let query = ParsedQuery::parse("karma|action");
        assert_eq!(query.terms, vec!["karma", "action"]);
        assert_eq!(query.mode, SearchMode::AnyMatch);
    }

    #[test]
    fn test_same_line_query() {
        let query = ParsedQuery::parse("karma||action");
        assert_eq!(query.terms, vec!["karma", "action"]);
        assert_eq!(query.mode, SearchMode::SameLineMatch);
    }

    #[test]
    fn test_consecutive_delimiters_drop_empty_pieces() {
        let query = ParsedQuery::parse("  a | | b  ");
        assert_eq!(query.terms, vec!["a", "b"]);
    }

    #[test]
    fn test_parser_and_scorer_splits_agree_on_same_line_input() {
        // For plain same-line input the scorer's raw-string split and the
        // parser's term split land on the same words.
        let query = ParsedQuery::parse("karma||action");
        assert_eq!(comparison_words(&query), query.terms);
    }

    #[test]
    fn test_parser_and_scorer_splits_diverge_on_any_match_input() {
        // Under any-match the scorer splits the raw string on whitespace,
        // so the pipe-delimited terms never reach it as separate words.
        let query = ParsedQuery::parse("karma|action");
        assert_eq!(query.terms.len(), 2);
        assert_eq!(comparison_words(&query), vec!["karma|action".to_string()]);
    }
}

mod ranking_and_filtering {
    use super::*;

    #[test]
    fn test_empty_terms_return_every_entry_sorted_ascending() {
        let entries = vec![
            entry("c", "Cedar", &["Tall evergreen."]),
            entry("a", "Aspen", &["Quaking leaves."]),
            entry("b", "Birch", &["White bark."]),
        ];

        let results = filter_and_rank(&entries, &ParsedQuery::parse(""));

        let terms: Vec<&str> = results.iter().map(|r| r.entry.term.as_str()).collect();
        assert_eq!(terms, vec!["Aspen", "Birch", "Cedar"]);
        assert_eq!(results.len(), entries.len());
        assert!(results.iter().all(|r| !r.entry.content.is_empty()));
    }

    #[test]
    fn test_whitespace_only_query_behaves_like_empty() {
        let entries = vec![
            entry("b", "Birch", &["White bark."]),
            entry("a", "Aspen", &["Quaking leaves."]),
        ];

        let results = filter_and_rank(&entries, &ParsedQuery::parse("   "));
        let terms: Vec<&str> = results.iter().map(|r| r.entry.term.as_str()).collect();
        assert_eq!(terms, vec!["Aspen", "Birch"]);
    }

    #[test]
    fn test_zero_score_entries_are_absent() {
        let entries = vec![
            entry("hit", "Karma", &["Cause and effect."]),
            entry("miss", "Meditation", &["Focused attention."]),
        ];

        let results = filter_and_rank(&entries, &ParsedQuery::parse("karma"));
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].entry.id, "hit");
    }

    #[test]
    fn test_equal_scores_preserve_input_order() {
        let entries = vec![
            entry("one", "Karma East", &["Nothing else."]),
            entry("two", "Karma West", &["Nothing else."]),
        ];

        let results = filter_and_rank(&entries, &ParsedQuery::parse("karma"));
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].score, results[1].score);
        assert_eq!(results[0].entry.id, "one");
        assert_eq!(results[1].entry.id, "two");
    }

    #[test]
    fn test_same_line_scenario_retains_one_item_and_awards_bonus() {
        // Two content items; only the first carries both terms on one line.
        let subject = entry(
            "cause-effect",
            "Cause and Effect",
            &[
                "Karma follows action on every plane.",
                "Patterns persist in consciousness.",
            ],
        );
        let engine = SearchEngine::new(vec![subject]);

        let query = ParsedQuery::parse("karma||action");
        let results = engine.search(&query);

        assert_eq!(results.len(), 1);
        let survivor = &results[0];
        assert_eq!(survivor.entry.content.len(), 1);
        assert_eq!(
            survivor.entry.content[0].text,
            "Karma follows action on every plane."
        );
        // Per-word content hits (+3 each) plus the same-line bonus (+15)
        assert_eq!(survivor.score, 21);
    }

    #[test]
    fn test_same_line_entry_without_co_occurrence_is_dropped() {
        let subject = entry(
            "split",
            "Split Mention",
            &["Karma appears here.", "Action appears there."],
        );
        let engine = SearchEngine::new(vec![subject]);

        let results = engine.search(&ParsedQuery::parse("karma||action"));
        assert!(results.is_empty());
    }
}

mod highlighting {
    use super::*;

    fn terms(list: &[&str]) -> Vec<String> {
        list.iter().map(|t| t.to_string()).collect()
    }

    #[test]
    fn test_matched_span_preserves_original_casing() {
        let spans = highlight("Karma is action.", &terms(&["karma"]), &[]);

        let matched: Vec<&str> = spans
            .iter()
            .filter(|span| span.is_matched())
            .map(Span::text)
            .collect();
        assert_eq!(matched, vec!["Karma"]);

        let rebuilt: String = spans.iter().map(Span::text).collect();
        assert_eq!(rebuilt, "Karma is action.");
    }

    #[test]
    fn test_no_terms_single_plain_span() {
        let spans = highlight("Karma is action.", &[], &[]);
        assert_eq!(spans.len(), 1);
        assert!(!spans[0].is_matched());
        assert_eq!(spans[0].text(), "Karma is action.");
    }

    #[test]
    fn test_ranked_content_highlights_with_parsed_terms() {
        // End to end: rank a collection, then highlight a surviving item's
        // text with the same parsed terms, as a rendering layer would.
        // The delimiters are spaced: the scorer's whitespace split of the
        // raw string would otherwise see one unmatchable "karma|action"
        // word and score the entry out of the result set.
        let entries = vec![entry("karma", "Karma", &["Karma shapes action."])];
        let query = ParsedQuery::parse("karma | action");

        let results = filter_and_rank(&entries, &query);
        assert_eq!(results.len(), 1);

        let text = &results[0].entry.content[0].text;
        let spans = highlight(text, &query.terms, &entries);

        let matched: Vec<&str> = spans
            .iter()
            .filter(|span| span.is_matched())
            .map(Span::text)
            .collect();
        assert_eq!(matched, vec!["Karma", "action"]);
    }
}

mod properties {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        // Concatenating span texts must reproduce the input exactly, for
        // any terms/text combination including overlapping and adjacent
        // matches and metacharacter-laden terms.
        #[test]
        fn highlight_round_trips_input_text(
            text in ".{0,60}",
            terms in proptest::collection::vec("[a-zA-Z0-9 .*+?^$(){}\\[\\]|\\\\-]{1,6}", 0..4),
        ) {
            let spans = highlight(&text, &terms, &[]);
            let rebuilt: String = spans.iter().map(Span::text).collect();
            prop_assert_eq!(rebuilt, text);
        }

        #[test]
        fn parse_never_yields_empty_terms(raw in ".{0,40}") {
            let query = ParsedQuery::parse(&raw);
            prop_assert!(query.terms.iter().all(|term| !term.is_empty()));
            prop_assert!(query.terms.iter().all(|term| term.trim() == term));
        }
    }
}
