use std::rc::Rc;

use proptest::prelude::*;
use quill::runtime::value::list::{ListDefinition, ListItem, ListValue};

const MOODS: [(&str, i32); 5] = [("calm", 1),
                                 ("wary", 2),
                                 ("angry", 3),
                                 ("furious", 4),
                                 ("berserk", 5)];

fn moods_def() -> Rc<ListDefinition> {
    Rc::new(ListDefinition::new("moods", MOODS))
}

fn mood(name: &str) -> ListItem {
    ListItem::new("moods", name)
}

/// Builds a list holding the named subset of the moods definition.
fn moods(names: &[&str]) -> ListValue {
    let mut list = ListValue::new();
    list.add_origin(moods_def());
    for (name, ordinal) in MOODS {
        if names.contains(&name) {
            list.insert(mood(name), ordinal);
        }
    }
    list
}

#[test]
fn ordering_compares_ordinal_ranges() {
    // min(left) > max(right)
    assert!(moods(&["angry"]).greater_than(&moods(&["calm", "wary"])));
    assert!(!moods(&["calm", "angry"]).greater_than(&moods(&["wary"])));

    // Inclusive variant compares both ends of the range.
    assert!(moods(&["wary", "angry"]).greater_than_or_equals(&moods(&["calm", "angry"])));
    assert!(!moods(&["calm", "angry"]).greater_than_or_equals(&moods(&["wary", "angry"])));

    assert!(moods(&["calm"]).less_than(&moods(&["wary"])));
    assert!(!moods(&["calm", "angry"]).less_than(&moods(&["wary"])));
    assert!(moods(&["calm", "wary"]).less_than_or_equals(&moods(&["wary", "angry"])));
}

#[test]
fn empty_lists_sit_at_the_bottom_of_orderings() {
    let empty = ListValue::new();
    let some = moods(&["wary"]);

    assert!(some.greater_than(&empty));
    assert!(!empty.greater_than(&some));
    assert!(empty.less_than(&some));
    assert!(!some.less_than(&empty));
    assert!(!empty.greater_than(&empty));
    assert!(!empty.less_than(&empty));
}

#[test]
fn containment_never_holds_for_empty_lists() {
    let empty = ListValue::new();
    let some = moods(&["calm", "wary"]);

    assert!(some.contains(&moods(&["calm"])));
    assert!(!some.contains(&moods(&["angry"])));
    assert!(!some.contains(&empty));
    assert!(!empty.contains(&some));
    assert!(!empty.contains(&empty));
}

#[test]
fn min_and_max_select_by_ordinal() {
    let span = moods(&["wary", "furious"]);

    assert_eq!(span.min_as_list(), moods(&["wary"]));
    assert_eq!(span.max_as_list(), moods(&["furious"]));
    assert_eq!(span.max_ordinal(), 4);

    let empty = ListValue::new();
    assert!(empty.min_as_list().is_empty());
    assert!(empty.max_as_list().is_empty());
    assert_eq!(empty.max_ordinal(), 0);
}

#[test]
fn ordinal_ties_resolve_by_item_name() {
    let mut rivals = ListValue::new();
    rivals.insert(ListItem::new("rivals", "vex"), 2);
    rivals.insert(ListItem::new("rivals", "ash"), 2);

    let (item, _) = rivals.max_item().unwrap();
    assert_eq!(item.name(), "ash");
    let (item, _) = rivals.min_item().unwrap();
    assert_eq!(item.name(), "ash");
}

#[test]
fn inversion_walks_the_origin_definition() {
    let current = moods(&["calm", "berserk"]);

    assert_eq!(current.inverse(), moods(&["wary", "angry", "furious"]));
    assert_eq!(current.all().len(), MOODS.len());

    // A list without origins has nothing to invert into.
    let mut stray = ListValue::new();
    stray.insert(ListItem::bare("lost"), 1);
    assert!(stray.inverse().is_empty());
}

#[test]
fn equality_ignores_insertion_order() {
    let mut forward = ListValue::new();
    forward.insert(mood("calm"), 1);
    forward.insert(mood("wary"), 2);

    let mut backward = ListValue::new();
    backward.insert(mood("wary"), 2);
    backward.insert(mood("calm"), 1);

    assert_eq!(forward, backward);
    assert_ne!(forward, moods(&["calm"]));
}

#[test]
fn display_sorts_by_ordinal() {
    let listing = moods(&["angry", "calm", "wary"]);
    assert_eq!(listing.to_string(), "calm, wary, angry");

    assert_eq!(ListValue::new().to_string(), "");
    assert_eq!(mood("calm").full_name(), "moods.calm");
}

fn mood_subset() -> impl Strategy<Value = ListValue> {
    proptest::collection::btree_set(0..MOODS.len(), 0..=MOODS.len()).prop_map(|indices| {
        let mut list = ListValue::new();
        list.add_origin(moods_def());
        for index in indices {
            let (name, ordinal) = MOODS[index];
            list.insert(mood(name), ordinal);
        }
        list
    })
}

proptest! {
    #[test]
    fn union_is_commutative(a in mood_subset(), b in mood_subset()) {
        prop_assert_eq!(a.union(&b), b.union(&a));
    }

    #[test]
    fn difference_with_self_is_empty(a in mood_subset()) {
        prop_assert!(a.without(&a).is_empty());
    }

    #[test]
    fn intersection_is_a_subset_of_both(a in mood_subset(), b in mood_subset()) {
        let shared = a.intersect(&b);
        prop_assert!(shared.items().all(|(item, _)| a.contains_item(item)
                                                    && b.contains_item(item)));
    }

    #[test]
    fn union_covers_both_operands(a in mood_subset(), b in mood_subset()) {
        let both = a.union(&b);
        prop_assert!(a.items().all(|(item, _)| both.contains_item(item)));
        prop_assert!(b.items().all(|(item, _)| both.contains_item(item)));
    }

    #[test]
    fn inversion_partitions_the_origin(a in mood_subset()) {
        prop_assert_eq!(a.inverse().union(&a), a.all());
        prop_assert!(a.inverse().intersect(&a).is_empty());
    }
}
