//! Filter correctness over every group/category pair.

use super::portfolio;
use crate::filter::{ActiveControl, CategoryFilter, GallerySelector};
use crate::model::{Catalog, GroupId, ItemId};

/// Straightforward reference: scan the catalog in order.
fn expected(catalog: &Catalog, group: &GroupId, filter: &CategoryFilter) -> Vec<ItemId> {
    catalog
        .iter()
        .filter(|item| &item.group == group)
        .filter(|item| match filter {
            CategoryFilter::All => true,
            CategoryFilter::Category(c) => &item.category == c,
        })
        .map(|item| item.id.clone())
        .collect()
}

fn all_filters(catalog: &Catalog) -> Vec<CategoryFilter> {
    let mut filters = vec![CategoryFilter::All, CategoryFilter::parse("watercolor")];
    for group in catalog.groups() {
        for category in catalog.categories(&group) {
            let filter = CategoryFilter::Category(category);
            if !filters.contains(&filter) {
                filters.push(filter);
            }
        }
    }
    filters
}

#[test]
fn test_group_then_filter_matches_reference() {
    let catalog = portfolio();
    let mut groups = catalog.groups();
    groups.push(GroupId::new("gallery-flash"));

    for group in &groups {
        for filter in all_filters(&catalog) {
            let mut selector = GallerySelector::new(catalog.clone(), GroupId::new("gallery-tattoos"));
            selector.set_group(group.clone());
            let change = selector.set_category_filter(filter.clone());

            let want = expected(&catalog, group, &filter);
            let got: Vec<ItemId> = selector.visible_set().iter().map(|i| i.id.clone()).collect();
            assert_eq!(got, want, "group={group} filter={}", filter.as_str());

            let shown: Vec<ItemId> = change.shown.iter().map(|s| s.id.clone()).collect();
            assert_eq!(shown, want);
            assert_eq!(shown.len() + change.hidden.len(), catalog.len());
        }
    }
}

#[test]
fn test_filter_then_group_matches_reference() {
    let catalog = portfolio();

    for filter in all_filters(&catalog) {
        for group in catalog.groups() {
            let mut selector = GallerySelector::new(catalog.clone(), GroupId::new("gallery-designs"));
            selector.set_category_filter(filter.clone());
            selector.set_group(group.clone());

            let got: Vec<ItemId> = selector.visible_set().iter().map(|i| i.id.clone()).collect();
            assert_eq!(got, expected(&catalog, &group, &filter));
        }
    }
}

#[test]
fn test_exactly_one_active_control_per_change() {
    let mut selector = GallerySelector::new(portfolio(), GroupId::new("gallery-tattoos"));

    let change = selector.set_group(GroupId::new("gallery-designs"));
    assert_eq!(
        change.active,
        ActiveControl::Group(GroupId::new("gallery-designs"))
    );

    let change = selector.set_category_filter(CategoryFilter::All);
    assert_eq!(change.active, ActiveControl::Category(CategoryFilter::All));
}

#[test]
fn test_visible_set_is_recomputed_each_call() {
    let mut selector = GallerySelector::new(portfolio(), GroupId::new("gallery-tattoos"));
    let before = selector.visible_set();

    selector.set_category_filter(CategoryFilter::parse("ornamental"));
    let after = selector.visible_set();

    assert_eq!(before.len(), 5);
    assert_eq!(after.ids(), vec![&ItemId::new("t-hand")]);
}
