use super::*;
use crate::net::catalog::parse_embedded;

fn filtered_catalog(query: &str) -> CatalogState {
    let mut state = CatalogState::default();
    state.finish_loading(parse_embedded().unwrap().products);
    state.apply_filter(query);
    state
}

#[test]
fn show_all_clears_input_and_filter() {
    let owner = Owner::new();
    owner.set();
    let catalog = RwSignal::new(filtered_catalog("xyz"));
    let search = RwSignal::new(SearchState { input: "xyz".to_owned() });

    run_search(catalog, search, SearchAction::ShowAll);

    assert!(search.with_untracked(|s| s.input.is_empty()));
    assert!(catalog.with_untracked(|c| c.query.is_empty()));
    assert_eq!(catalog.with_untracked(|c| c.visible().len()), 6);
}

#[test]
fn ignored_action_leaves_input_and_filter() {
    let owner = Owner::new();
    owner.set();
    let catalog = RwSignal::new(filtered_catalog("classic"));
    let search = RwSignal::new(SearchState { input: "c".to_owned() });
    let before = catalog.with_untracked(CatalogState::grid_key);

    run_search(catalog, search, SearchAction::Ignore);

    assert_eq!(search.get_untracked().input, "c");
    assert_eq!(catalog.with_untracked(|c| c.query.clone()), "classic");
    assert_eq!(catalog.with_untracked(CatalogState::grid_key), before);
}

#[test]
fn filter_action_keeps_typed_input() {
    let owner = Owner::new();
    owner.set();
    let catalog = RwSignal::new(filtered_catalog(""));
    let search = RwSignal::new(SearchState { input: "Blue".to_owned() });

    run_search(catalog, search, SearchAction::Filter("blue".to_owned()));

    assert_eq!(search.get_untracked().input, "Blue");
    assert_eq!(catalog.with_untracked(|c| c.query.clone()), "blue");
}
