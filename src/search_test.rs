use super::*;
use proptest::prelude::*;

fn make_entry(title: &str, desc: &str) -> Entry {
    Entry::new(title, format!("{title}.pdf")).with_desc(desc)
}

fn sample_entries() -> Vec<Entry> {
    vec![
        make_entry("dbms", "basics"),
        make_entry("dsa", "Arrays, linked lists, trees."),
        make_entry("Data science", "Processes, scheduling, memory."),
    ]
}

#[test]
fn empty_query_returns_all() {
    let entries = sample_entries();
    let result = filter_entries(&entries, "");
    assert_eq!(result.len(), 3);
}

#[test]
fn whitespace_only_query_returns_all() {
    let entries = sample_entries();
    assert_eq!(filter_entries(&entries, "   ").len(), 3);
}

#[test]
fn filter_matches_title_case_insensitive() {
    let entries = sample_entries();
    let result = filter_entries(&entries, "  DATA ");
    assert_eq!(result.len(), 1);
    assert_eq!(result[0].title(), "Data science");
}

#[test]
fn filter_matches_description() {
    let entries = sample_entries();
    let result = filter_entries(&entries, "linked");
    assert_eq!(result.len(), 1);
    assert_eq!(result[0].title(), "dsa");
}

#[test]
fn filter_matches_across_title_and_description_boundary() {
    let entries = sample_entries();
    let result = filter_entries(&entries, "dbms bas");
    assert_eq!(result.len(), 1);
    assert_eq!(result[0].title(), "dbms");
}

#[test]
fn filter_no_match_returns_empty() {
    let entries = vec![Entry::new("dbms", "dbms_notes.pdf").with_desc("basics")];
    assert!(filter_entries(&entries, "dsa").is_empty());
}

#[test]
fn on_input_with_no_match_shows_empty_state() {
    let entries = vec![Entry::new("dbms", "dbms_notes.pdf").with_desc("basics")];
    let mut filter = SearchFilter::new("search-sem1", "sem1-list", entries);
    let mut container = Container::new("sem1-list");

    filter.on_input("dsa", &mut container);

    assert!(container.is_empty_state());
    assert!(container.cards().is_empty());
    assert_eq!(filter.value(), "dsa");
}

#[test]
fn backspace_restores_broader_results() {
    let mut filter = SearchFilter::new("search-sem1", "sem1-list", sample_entries());
    let mut container = Container::new("sem1-list");

    filter.on_input("lis", &mut container);
    assert_eq!(container.cards().len(), 1);

    filter.on_input("li", &mut container);
    // "lists" と "scheduling" が一致
    assert_eq!(container.cards().len(), 2);

    filter.on_input("", &mut container);
    assert_eq!(container.cards().len(), 3);
}

#[test]
fn ids_are_kept() {
    let filter = SearchFilter::new("search-sem1", "sem1-list", vec![]);
    assert_eq!(filter.input_id(), "search-sem1");
    assert_eq!(filter.container_id(), "sem1-list");
    assert!(filter.original().is_empty());
}

fn entries_strategy() -> impl Strategy<Value = Vec<Entry>> {
    prop::collection::vec(("[a-zA-Z ]{0,8}", "[a-zA-Z ]{0,8}"), 0..8)
        .prop_map(|v| v.into_iter().map(|(t, d)| make_entry(&t, &d)).collect())
}

/// `needle` が `haystack` の順序を保った部分列かどうか
fn is_subsequence(needle: &[&Entry], haystack: &[Entry]) -> bool {
    let mut it = haystack.iter();
    needle.iter().all(|n| it.any(|h| std::ptr::eq(h, *n)))
}

proptest! {
    /// 絞り込み結果は元の順序を保った部分列
    #[test]
    fn prop_filter_is_ordered_subsequence(entries in entries_strategy(), q in "[a-zA-Z ]{0,4}") {
        let result = filter_entries(&entries, &q);
        prop_assert!(is_subsequence(&result, &entries));
    }

    /// 空クエリは恒等
    #[test]
    fn prop_empty_query_is_identity(entries in entries_strategy()) {
        let result = filter_entries(&entries, "");
        prop_assert_eq!(result.len(), entries.len());
        prop_assert!(is_subsequence(&result, &entries));
    }

    /// 長いクエリの後に接頭辞へ戻しても、直接計算した結果と一致する
    #[test]
    fn prop_backspace_matches_direct_filter(entries in entries_strategy(), q in "[a-z]{1,4}", extra in "[a-z]{1,3}") {
        let mut filter = SearchFilter::new("search-g", "g-list", entries.clone());
        let mut container = Container::new("g-list");

        filter.on_input(&format!("{q}{extra}"), &mut container);
        filter.on_input(&q, &mut container);

        let direct: Vec<Entry> = filter_entries(&entries, &q).into_iter().cloned().collect();
        prop_assert_eq!(container.shown(), direct.as_slice());
    }
}
