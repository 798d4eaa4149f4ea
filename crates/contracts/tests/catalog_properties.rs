use contracts::domain::a001_project::{
    filter, CardView, CatalogStore, DetailState, DetailView, ProjectId, ProjectRecord,
};
use proptest::prelude::*;
use std::collections::HashMap;

const CATEGORIES: [&str; 4] = ["webdev", "automation", "design", "WebDev"];

fn arb_catalog() -> impl Strategy<Value = CatalogStore> {
    prop::collection::vec((prop::sample::select(CATEGORIES.to_vec()), any::<bool>()), 0..24).prop_map(
        |rows| {
            let records = rows
                .into_iter()
                .enumerate()
                .map(|(i, (category, featured))| ProjectRecord {
                    id: ProjectId(i as u32 + 1),
                    title: format!("Project {}", i + 1),
                    category: category.to_string(),
                    description: String::new(),
                    image_ref: String::new(),
                    featured,
                    live_url: "#".to_string(),
                    source_url: "#".to_string(),
                })
                .collect();
            CatalogStore::from_parts(records, HashMap::new()).unwrap()
        },
    )
}

fn arb_token() -> impl Strategy<Value = String> {
    prop_oneof![
        prop::sample::select(CATEGORIES.to_vec()).prop_map(|s| s.to_string()),
        Just("all".to_string()),
        "[a-zA-Z]{0,8}",
    ]
}

fn ids(records: &[ProjectRecord]) -> Vec<ProjectId> {
    records.iter().map(|r| r.id).collect()
}

#[test]
fn test_every_present_category_is_non_empty() {
    let catalog = CatalogStore::embedded().unwrap();
    for category in catalog.categories() {
        let visible = filter(catalog.get_all(), category);
        assert!(!visible.is_empty());
        assert!(visible.iter().all(|r| r.category == category));
    }
}

#[test]
fn test_webdev_scenario_end_to_end() {
    let catalog = CatalogStore::embedded().unwrap();
    let webdev = filter(catalog.get_all(), "webdev");
    assert!(webdev.iter().any(|r| r.id == ProjectId(3)));
    assert!(!webdev.iter().any(|r| r.category == "automation"));

    let card = CardView::render(catalog.get_by_id(ProjectId(3)).unwrap());
    assert_eq!(
        card.show_featured_badge,
        catalog.get_by_id(ProjectId(3)).unwrap().featured
    );
}

proptest! {
    #[test]
    fn prop_filter_keeps_only_matching_in_order(catalog in arb_catalog(), token in arb_token()) {
        let visible = filter(catalog.get_all(), &token);

        if token == "all" {
            prop_assert_eq!(&visible, &catalog.get_all().to_vec());
        } else {
            prop_assert!(visible.iter().all(|r| r.category == token));
            let expected: Vec<ProjectId> = catalog
                .get_all()
                .iter()
                .filter(|r| r.category == token)
                .map(|r| r.id)
                .collect();
            prop_assert_eq!(ids(&visible), expected);
        }
    }

    #[test]
    fn prop_filter_is_idempotent(catalog in arb_catalog(), token in arb_token()) {
        let once = filter(catalog.get_all(), &token);
        let twice = filter(&once, &token);
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn prop_absent_category_is_empty(catalog in arb_catalog(), token in "[xyz]{1,6}") {
        prop_assert!(filter(catalog.get_all(), &token).is_empty());
    }

    #[test]
    fn prop_detail_view_single_open(catalog in arb_catalog(), picks in prop::collection::vec(0u32..30, 1..12)) {
        let mut view = DetailView::new();
        for raw in picks {
            let id = ProjectId(raw);
            let before = view.state();
            let result = view.open(&catalog, id);
            if catalog.get_by_id(id).is_ok() {
                prop_assert!(result.is_ok());
                prop_assert_eq!(view.state(), DetailState::Open(id));
            } else {
                prop_assert!(result.is_err());
                prop_assert_eq!(view.state(), before);
            }
        }
        view.close();
        prop_assert_eq!(view.state(), DetailState::Closed);
    }
}
