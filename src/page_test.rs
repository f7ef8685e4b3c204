use super::*;
use crate::catalog::{Entry, Group};
use crate::preview::PreviewState;

fn make_store() -> CatalogStore {
    CatalogStore::new(
        "Semester Notes",
        vec![
            Group::new(
                "sem1",
                vec![
                    Entry::new("dbms", "dbms_notes.pdf").with_desc("basics"),
                    Entry::new("networks", "my notes/a&b.pdf"),
                ],
            ),
            Group::new("sem2", vec![]),
        ],
    )
    .unwrap()
}

fn input(group: &str, text: &str) -> PageEvent {
    PageEvent::InputChanged {
        group: group.to_string(),
        text: text.to_string(),
    }
}

fn activate(group: &str, index: usize) -> PageEvent {
    PageEvent::CardActivated {
        group: group.to_string(),
        index,
    }
}

#[test]
fn ids_follow_group_key() {
    assert_eq!(search_input_id("sem1"), "search-sem1");
    assert_eq!(container_id("sem1"), "sem1-list");

    let page = CatalogPage::new(&make_store());
    let sem1 = page.group("sem1").unwrap();
    assert_eq!(sem1.filter.input_id(), "search-sem1");
    assert_eq!(sem1.container.id(), "sem1-list");
}

#[test]
fn ready_renders_every_group() {
    let page = CatalogPage::ready(&make_store());

    assert_eq!(page.group("sem1").unwrap().container.cards().len(), 2);
    assert!(page.group("sem2").unwrap().container.is_empty_state());
}

#[test]
fn input_filters_only_its_group() {
    let mut page = CatalogPage::ready(&make_store());
    page.dispatch(input("sem1", "dsa"));

    let sem1 = page.group("sem1").unwrap();
    assert!(sem1.container.is_empty_state());
    assert_eq!(sem1.filter.value(), "dsa");
    assert!(page.group("sem2").unwrap().filter.value().is_empty());
}

#[test]
fn card_activation_opens_exact_file_reference() {
    let mut page = CatalogPage::ready(&make_store());
    page.dispatch(activate("sem1", 1));

    assert_eq!(page.preview().state().file(), Some("my notes/a&b.pdf"));
    assert_eq!(page.preview().overlay().viewer_src, "my notes/a&b.pdf");
}

#[test]
fn activation_uses_filtered_view_index() {
    let mut page = CatalogPage::ready(&make_store());
    page.dispatch(input("sem1", "network"));
    page.dispatch(activate("sem1", 0));

    assert_eq!(page.preview().state().file(), Some("my notes/a&b.pdf"));
}

#[test]
fn close_and_backdrop_close_preview() {
    let mut page = CatalogPage::ready(&make_store());

    page.dispatch(activate("sem1", 0));
    page.dispatch(PageEvent::CloseActivated);
    assert_eq!(page.preview().state(), &PreviewState::Closed);
    assert_eq!(page.preview().overlay().viewer_src, "");

    page.dispatch(activate("sem1", 0));
    page.dispatch(PageEvent::BackdropActivated);
    assert_eq!(page.preview().state(), &PreviewState::Closed);
    assert!(page.preview().overlay().aria_hidden);
}

#[test]
fn escape_closes_only_when_open() {
    let mut page = CatalogPage::ready(&make_store());
    page.dispatch(PageEvent::KeyPressed(Key::Escape));
    assert_eq!(page.preview().state(), &PreviewState::Closed);

    page.dispatch(activate("sem1", 0));
    page.dispatch(PageEvent::KeyPressed(Key::Escape));
    assert_eq!(page.preview().state(), &PreviewState::Closed);
}

#[test]
fn unknown_group_and_index_are_ignored() {
    let mut page = CatalogPage::ready(&make_store());
    page.dispatch(input("sem9", "x"));
    page.dispatch(activate("sem9", 0));
    page.dispatch(activate("sem1", 99));
    page.dispatch(activate("sem2", 0));

    assert_eq!(page.preview().state(), &PreviewState::Closed);
    assert_eq!(page.group("sem1").unwrap().container.cards().len(), 2);
}
