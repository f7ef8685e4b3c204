use super::*;
use proptest::prelude::*;

#[test]
fn escape_replaces_all_reserved_characters() {
    assert_eq!(escape("<b>&\"'"), "&lt;b&gt;&amp;&quot;&#39;");
}

#[test]
fn escape_empty_returns_empty() {
    assert_eq!(escape(""), "");
}

#[test]
fn escape_leaves_other_characters_unchanged() {
    assert_eq!(escape("Data science 101 / ノート"), "Data science 101 / ノート");
}

#[test]
fn escape_twice_escapes_ampersands_again() {
    // 二重エスケープは実体参照の & も再エスケープされる
    assert_eq!(escape(&escape("<")), "&amp;lt;");
}

#[test]
fn encode_file_ref_hides_reserved_characters() {
    let encoded = encode_file_ref("notes/a&b \"c\".pdf");
    assert!(!encoded.contains('&'));
    assert!(!encoded.contains('"'));
    assert!(!encoded.contains(' '));
}

#[test]
fn decode_file_ref_round_trips_space_and_ampersand() {
    let file = "my notes/a&b.pdf";
    assert_eq!(decode_file_ref(&encode_file_ref(file)).unwrap(), file);
}

#[test]
fn decode_file_ref_rejects_invalid_utf8() {
    let err = decode_file_ref("%FF%FE").unwrap_err();
    assert!(matches!(err, NotecatError::InvalidFileRef(_)));
}

proptest! {
    /// エスケープ結果には生の < > " ' が残らない
    #[test]
    fn prop_escape_output_has_no_raw_markup(s in ".*") {
        let out = escape(&s);
        prop_assert!(!out.contains('<'));
        prop_assert!(!out.contains('>'));
        prop_assert!(!out.contains('"'));
        prop_assert!(!out.contains('\''));
    }

    /// 任意のファイル参照がエンコード・デコードで復元される
    #[test]
    fn prop_file_ref_round_trips(s in ".*") {
        prop_assert_eq!(decode_file_ref(&encode_file_ref(&s)).unwrap(), s);
    }
}
