//! Integration tests for the keyword processor public API.
//!
//! Exercises the end-to-end surface: keyword registration (single, bulk,
//! file-based), extraction with and without spans, replacement, and the
//! property-based invariants of the scanner.

use std::collections::HashSet;
use std::io::Write;

use proptest::prelude::*;
use flashtext::{FlashtextError, KeywordProcessor, KeywordSpan, ProcessorConfig};

#[test]
fn test_extract_scenario() {
    let mut processor = KeywordProcessor::new();
    processor
        .add_keywords_from_map([("teacher", "tea"), ("student", "stu")])
        .unwrap();

    assert_eq!(
        processor.extract_keywords("the teacher asked the student"),
        vec!["tea", "stu"]
    );
}

#[test]
fn test_mid_word_match_scenario() {
    let mut processor = KeywordProcessor::new();
    processor.add_keyword("abc").unwrap();

    // No word-boundary checks: substring occurrences are reported.
    assert_eq!(processor.extract_keywords("oHabcxyz"), vec!["abc"]);
}

#[test]
fn test_replace_scenario() {
    let mut processor = KeywordProcessor::new();
    processor.add_keyword_with_clean_name("abc", "ABC").unwrap();

    assert_eq!(processor.replace_keywords("say abc now"), "say ABC now");
}

#[test]
fn test_span_scenario() {
    let mut processor = KeywordProcessor::new();
    processor.add_keyword("abc").unwrap();

    assert_eq!(
        processor.extract_keywords_with_spans("hello abc"),
        vec![KeywordSpan::new("abc", 6, 9)]
    );
}

#[test]
fn test_case_insensitive_scenario() {
    let mut processor =
        KeywordProcessor::with_config(ProcessorConfig::new().with_case_sensitive(false));
    processor.add_keyword_with_clean_name("ABC", "abc").unwrap();

    assert_eq!(processor.extract_keywords("xx abc yy"), vec!["abc"]);
    assert_eq!(processor.extract_keywords("xx ABC yy"), vec!["abc"]);
}

#[test]
fn test_collision_scenarios() {
    let mut processor = KeywordProcessor::new();
    processor.add_keyword_with_clean_name("abc", "x").unwrap();
    processor.add_keyword_with_clean_name("abc", "y").unwrap();
    assert_eq!(processor.get_keyword("abc"), Some("x|y".to_string()));

    let mut processor =
        KeywordProcessor::with_config(ProcessorConfig::new().with_unique_keyword(true));
    processor.add_keyword_with_clean_name("abc", "x").unwrap();
    processor.add_keyword_with_clean_name("abc", "y").unwrap();
    assert_eq!(processor.get_keyword("abc"), Some("y".to_string()));
}

#[test]
fn test_deletion_leaves_other_keywords_intact() {
    let mut processor = KeywordProcessor::new();
    processor
        .add_keywords_from_map([("teacher", "tea"), ("teach", "verb"), ("student", "stu")])
        .unwrap();

    assert!(processor.remove_keyword("teacher"));
    assert!(!processor.contains("teacher"));

    let remaining = processor.all_keywords();
    assert_eq!(remaining.len(), 2);
    assert_eq!(remaining.get("teach").map(String::as_str), Some("verb"));
    assert_eq!(remaining.get("student").map(String::as_str), Some("stu"));
}

#[test]
fn test_file_loading_round_trip() {
    // Install a subscriber so the loader's debug events are exercised;
    // other tests may have installed one already.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();

    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "abc").unwrap();
    writeln!(file, "中国 => 中文").unwrap();
    writeln!(file).unwrap();
    file.flush().unwrap();

    let mut processor = KeywordProcessor::new();
    let added = processor.add_keywords_from_file(file.path()).unwrap();

    assert_eq!(added, 2);
    let all = processor.all_keywords();
    assert_eq!(all.len(), 2);
    assert_eq!(all.get("abc").map(String::as_str), Some("abc"));
    assert_eq!(all.get("中国").map(String::as_str), Some("中文"));

    assert_eq!(processor.extract_keywords("hello, 你会说中文吗？"), Vec::<String>::new());
    assert_eq!(processor.extract_keywords("去过中国吗"), vec!["中文"]);
}

#[test]
fn test_empty_keyword_is_rejected_everywhere() {
    let mut processor = KeywordProcessor::new();
    assert!(matches!(processor.add_keyword(""), Err(FlashtextError::EmptyKeyword)));
    assert!(matches!(
        processor.add_keywords_from_list(["ok", ""]),
        Err(FlashtextError::EmptyKeyword)
    ));
}

fn keyword_set() -> impl Strategy<Value = Vec<String>> {
    proptest::collection::hash_set("[a-z]{1,8}", 1..20)
        .prop_map(|set| set.into_iter().collect())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Joining distinct keywords with spaces and scanning the result finds
    /// each keyword exactly once, in order. Spaces never occur inside
    /// keywords, so every token commits as its own longest match.
    #[test]
    fn prop_extract_finds_joined_keywords(keywords in keyword_set()) {
        let mut processor = KeywordProcessor::new();
        processor.add_keywords_from_list(&keywords).unwrap();

        let text = keywords.join(" ");
        prop_assert_eq!(processor.extract_keywords(&text), keywords);
    }

    /// With clean names equal to the keywords and case-sensitive matching,
    /// replacement rewrites every match with its own text and is therefore
    /// the identity on arbitrary input.
    #[test]
    fn prop_replace_is_identity_for_self_named_keywords(
        keywords in proptest::collection::vec("[a-zA-Z0-9]{1,6}", 0..15),
        text in ".{0,200}",
    ) {
        let mut processor = KeywordProcessor::new();
        processor.add_keywords_from_list(&keywords).unwrap();

        prop_assert_eq!(processor.replace_keywords(&text), text);
    }

    /// Spans are ascending and non-overlapping, and each span's slice of
    /// the scanned text spells an indexed keyword with the reported clean
    /// name.
    #[test]
    fn prop_spans_are_consistent(
        keywords in keyword_set(),
        text in "[a-z ]{0,200}",
    ) {
        let mut processor = KeywordProcessor::new();
        processor.add_keywords_from_list(&keywords).unwrap();

        let chars: Vec<char> = text.chars().collect();
        let mut previous_end = 0;
        for span in processor.extract_keywords_with_spans(&text) {
            prop_assert!(span.start >= previous_end);
            prop_assert!(span.end <= chars.len());
            prop_assert!(span.start < span.end);

            let matched: String = chars[span.start..span.end].iter().collect();
            prop_assert_eq!(processor.get_keyword(&matched), Some(span.clean_name.clone()));
            previous_end = span.end;
        }
    }

    /// Enumeration after arbitrary insert/remove interleavings contains
    /// exactly the keywords that were inserted and not removed afterwards.
    #[test]
    fn prop_enumeration_tracks_inserts_and_removals(
        keywords in keyword_set(),
        removals in proptest::collection::vec(any::<prop::sample::Index>(), 0..10),
    ) {
        let mut processor = KeywordProcessor::new();
        processor.add_keywords_from_list(&keywords).unwrap();

        let mut expected: HashSet<String> = keywords.iter().cloned().collect();
        for index in removals {
            let keyword = index.get(&keywords);
            processor.remove_keyword(keyword);
            expected.remove(keyword);
        }

        let enumerated: HashSet<String> = processor.all_keywords().into_keys().collect();
        prop_assert_eq!(enumerated, expected);
    }
}
