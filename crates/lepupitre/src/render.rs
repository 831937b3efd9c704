// Plain-text rendering
//
// Matched fragments are bracketed in place; each one also yields a link
// note naming its palette slot and the entries a hover popover would
// offer. Visual styling stays with richer front ends.

use lelexique::Entry;
use lerequete::{highlight, ParsedQuery, RankedEntry, Span};

use crate::config::GlossaireConfig;

/// One rendered line plus the link notes for its matched fragments
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedLine {
    /// Line text with matched fragments bracketed, casing preserved
    pub text: String,

    /// One note per matched fragment with a non-empty related list
    pub links: Vec<String>,
}

/// Bracket matched fragments and collect their popover targets
pub fn render_line(
    text: &str,
    terms: &[String],
    lookup: &[Entry],
    palette_len: usize,
) -> RenderedLine {
    let mut out = String::new();
    let mut links = Vec::new();

    for span in highlight(text, terms, lookup) {
        match span {
            Span::Plain { text } => out.push_str(&text),
            Span::Matched {
                text,
                color_index,
                related,
            } => {
                out.push('[');
                out.push_str(&text);
                out.push(']');

                if !related.is_empty() {
                    let slot = if palette_len == 0 {
                        0
                    } else {
                        color_index % palette_len
                    };
                    let targets: Vec<&str> =
                        related.iter().map(|entry| entry.term.as_str()).collect();
                    links.push(format!("{} (slot {}) -> {}", text, slot, targets.join(", ")));
                }
            }
        }
    }

    RenderedLine { text: out, links }
}

/// Render ranked search results as plain text
pub fn render_results(
    results: &[RankedEntry],
    query: &ParsedQuery,
    config: &GlossaireConfig,
) -> String {
    // Related-entry lookups run against the visible result set, not the
    // full collection, matching the popover behavior being stood in for.
    let lookup: Vec<Entry> = results.iter().map(|result| result.entry.clone()).collect();

    let mut out = String::new();
    for result in results {
        let heading = render_line(&result.entry.term, &query.terms, &lookup, config.palette_len);
        out.push_str(&format!("{}. {}", result.rank, heading.text));
        if !query.is_unfiltered() {
            out.push_str(&format!("  (score {})", result.score));
        }
        out.push('\n');

        if config.show_dates {
            out.push_str(&format!(
                "   compiled {}, edited {}\n",
                result.entry.compiled_date, result.entry.edited_date
            ));
        }
        for note in &heading.links {
            out.push_str(&format!("      -> {}\n", note));
        }

        for item in &result.entry.content {
            let line = render_line(&item.text, &query.terms, &lookup, config.palette_len);
            out.push_str(&format!("   - {}", line.text));
            if item.is_cross_reference(&result.entry.term) {
                out.push_str(&format!(" [from: {}]", item.source_term));
            }
            out.push('\n');
            for note in &line.links {
                out.push_str(&format!("      -> {}\n", note));
            }
        }
        out.push('\n');
    }

    out
}
