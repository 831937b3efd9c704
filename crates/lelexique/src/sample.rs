// Built-in sample glossary
//
// The default data set used by the CLI when no data file is supplied, and
// by tests that need a realistic small collection.

use chrono::NaiveDate;
use once_cell::sync::Lazy;

use crate::entry::{ContentItem, Entry};

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("fixture dates are valid")
}

static SAMPLE: Lazy<Vec<Entry>> = Lazy::new(|| {
    vec![
        Entry {
            id: "karma".to_string(),
            term: "Karma".to_string(),
            content: vec![
                ContentItem::new(
                    "The universal law of cause and effect operating on mental, \
                     emotional, and physical planes.",
                    "Karma",
                ),
                ContentItem::new(
                    "Creates patterns in consciousness that influence future \
                     experiences and outcomes.",
                    "Karma",
                ),
                ContentItem::new(
                    "Operating through thoughts, actions, and intentions in the \
                     mental realm.",
                    "Karma",
                ),
            ],
            keywords: vec![
                "cause effect".to_string(),
                "action".to_string(),
                "consequence".to_string(),
                "good bad".to_string(),
                "destiny".to_string(),
                "fate".to_string(),
            ],
            shared_terms: vec!["Action".to_string(), "Meditation".to_string()],
            compiled_date: date(2024, 1, 15),
            edited_date: date(2024, 3, 20),
        },
        Entry {
            id: "meditation".to_string(),
            term: "Meditation".to_string(),
            content: vec![
                ContentItem::new(
                    "A transformative practice involving focused attention and \
                     conscious awareness.",
                    "Meditation",
                ),
                ContentItem::new(
                    "Encompasses various techniques including breath awareness \
                     and mental concentration.",
                    "Meditation",
                ),
                ContentItem::new(
                    "Present moment awareness leads to understanding karma and \
                     actions better.",
                    "Karma",
                ),
            ],
            keywords: vec![
                "focus".to_string(),
                "awareness".to_string(),
                "concentration".to_string(),
                "mindfulness".to_string(),
                "practice".to_string(),
            ],
            shared_terms: vec!["Mindfulness".to_string(), "Karma".to_string()],
            compiled_date: date(2024, 2, 1),
            edited_date: date(2024, 3, 25),
        },
        Entry {
            id: "mindfulness".to_string(),
            term: "Mindfulness".to_string(),
            content: vec![
                ContentItem::new(
                    "Sustained, non-judgmental attention to the present moment.",
                    "Mindfulness",
                ),
                ContentItem::new(
                    "Cultivated through regular meditation and breath awareness.",
                    "Meditation",
                ),
            ],
            keywords: vec![
                "attention".to_string(),
                "presence".to_string(),
                "awareness".to_string(),
            ],
            shared_terms: vec!["Meditation".to_string()],
            compiled_date: date(2024, 2, 10),
            edited_date: date(2024, 3, 28),
        },
    ]
});

/// A fresh copy of the built-in sample entries
pub fn sample_entries() -> Vec<Entry> {
    SAMPLE.clone()
}
