// src/normalize.rs

use crate::domain::listing::Mapping;

const NBSP: char = '\u{a0}';

/// Cleans a scraped string: non-breaking spaces become plain spaces, any run
/// of single quotes collapses to one, and the ends are trimmed.
pub fn normalize_str(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut prev_quote = false;

    for ch in text.chars() {
        let ch = if ch == NBSP { ' ' } else { ch };
        if ch == '\'' {
            if prev_quote {
                continue;
            }
            prev_quote = true;
        } else {
            prev_quote = false;
        }
        out.push(ch);
    }

    out.trim().to_string()
}

pub fn normalize(text: Option<&str>) -> Option<String> {
    text.map(normalize_str)
}

/// Normalizes keys and values. Keys that clean up to the same string collide
/// and the later value wins, keeping the first key's position.
pub fn normalize_mapping(mapping: &Mapping) -> Mapping {
    let mut out = Mapping::with_capacity(mapping.len());
    for (key, value) in mapping {
        out.insert(normalize_str(key), normalize_str(value));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn none_passes_through() {
        assert_eq!(normalize(None), None);
    }

    #[test]
    fn replaces_nbsp_and_doubled_quotes() {
        assert_eq!(normalize(Some("a\u{a0}b''c")).as_deref(), Some("a b'c"));
        assert_eq!(normalize_str("  R\u{a0}1\u{a0}250\u{a0}000 "), "R 1 250 000");
    }

    #[test]
    fn quote_runs_collapse_to_one() {
        assert_eq!(normalize_str("''''"), "'");
        assert_eq!(normalize_str("O'''Reilly"), "O'Reilly");
    }

    proptest! {
        #[test]
        fn is_idempotent(text in "[a-z0-9 '\u{a0}\t\n]{0,32}") {
            let once = normalize_str(&text);
            prop_assert!(!once.contains('\u{a0}'), "output contains NBSP: {:?}", once);
            prop_assert!(!once.contains("''"));
            prop_assert_eq!(normalize_str(&once), once);
        }
    }

    #[test]
    fn mapping_keeps_order_and_last_write_wins() {
        let mut raw = Mapping::new();
        raw.insert("Bedrooms\u{a0}".to_string(), "3".to_string());
        raw.insert("Garages".to_string(), " 2 ".to_string());
        raw.insert("Bedrooms".to_string(), "4".to_string());

        let cleaned = normalize_mapping(&raw);

        assert_eq!(cleaned.len(), 2);
        let keys: Vec<&str> = cleaned.keys().map(String::as_str).collect();
        assert_eq!(keys, ["Bedrooms", "Garages"]);
        assert_eq!(cleaned["Bedrooms"], "4");
        assert_eq!(cleaned["Garages"], "2");
    }
}
