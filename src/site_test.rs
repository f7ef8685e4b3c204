use super::*;
use crate::catalog::{CatalogStore, Group};
use crate::page::PageEvent;

fn make_page() -> CatalogPage {
    let store = CatalogStore::new(
        "Notes <2026>",
        vec![
            Group::new(
                "sem1",
                vec![Entry::new("dbms", "pdfs/dbms notes.pdf").with_desc("</script><b>")],
            )
            .with_label("Semester 1"),
            Group::new("sem2", vec![]),
        ],
    )
    .unwrap();
    CatalogPage::ready(&store)
}

fn options() -> SiteOptions {
    SiteOptions { year: 2026 }
}

#[test]
fn site_contains_group_sections_with_ids() {
    let html = render_site(&make_page(), &options()).unwrap();

    assert!(html.contains(r#"id="search-sem1""#));
    assert!(html.contains(r#"id="sem1-list""#));
    assert!(html.contains(r#"id="search-sem2""#));
    assert!(html.contains("<h2>Semester 1</h2>"));
}

#[test]
fn site_prerenders_cards_and_empty_state() {
    let html = render_site(&make_page(), &options()).unwrap();

    assert!(html.contains(r#"data-file="pdfs%2Fdbms%20notes.pdf""#));
    assert!(html.contains("<p>No notes added yet.</p>"));
}

#[test]
fn site_escapes_title() {
    let html = render_site(&make_page(), &options()).unwrap();
    assert!(html.contains("<title>Notes &lt;2026&gt;</title>"));
}

#[test]
fn embedded_data_cannot_close_script_tag() {
    let html = render_site(&make_page(), &options()).unwrap();
    let start = html.find(r#"<script id="catalog-data""#).unwrap();
    let data_section = &html[start..];
    let end = data_section.find("</script>").unwrap();

    // 埋め込み JSON の途中で </script> が現れない
    assert!(data_section[..end].contains(r#"\u003c/script\u003e\u003cb\u003e"#));
}

#[test]
fn embedded_data_escapes_comment_open() {
    let store = CatalogStore::new(
        "T",
        vec![Group::new(
            "g",
            vec![Entry::new("<!--<script>", "a&b.pdf")],
        )],
    )
    .unwrap();
    let html = render_site(&CatalogPage::ready(&store), &options()).unwrap();

    let start = html.find(r#"<script id="catalog-data""#).unwrap();
    let data_section = &html[start..];
    let open_end = data_section.find('>').unwrap() + 1;
    let end = data_section.find("</script>").unwrap();
    let data = &data_section[open_end..end];

    assert!(!data.contains('<'));
    assert!(!data.contains('>'));
    assert!(!data.contains('&'));
    assert!(data.contains(r#"\u003c!--\u003cscript\u003e"#));

    // 値としては元の文字列に戻る
    let parsed: serde_json::Value = serde_json::from_str(data).unwrap();
    assert_eq!(parsed[0]["entries"][0]["title"], "<!--<script>");
    assert_eq!(parsed[0]["entries"][0]["file"], "a&b.pdf");

    // 後続のハンドラスクリプトはデータブロックの外に残る
    assert!(data_section[end..].contains("<script>"));
}

#[test]
fn site_footer_has_year() {
    let html = render_site(&make_page(), &options()).unwrap();
    assert!(html.contains(r#"<span id="year">2026</span>"#));
}

#[test]
fn overlay_starts_hidden_with_empty_viewer() {
    let html = overlay_html(&Overlay::default());
    assert!(html.contains(r#"aria-hidden="true""#));
    assert!(html.contains(r#"<iframe id="pdf-frame" title="Document preview" src="">"#));
    assert!(html.contains(r#"href="">Download"#));
}

#[test]
fn overlay_reflects_open_preview() {
    let mut page = make_page();
    page.dispatch(PageEvent::CardActivated {
        group: "sem1".to_string(),
        index: 0,
    });

    let html = overlay_html(page.preview().overlay());
    assert!(html.contains(r#"aria-hidden="false""#));
    assert!(html.contains(r#"src="pdfs/dbms notes.pdf""#));
    assert!(html.contains(r#"href="pdfs/dbms notes.pdf" download>"#));
}
