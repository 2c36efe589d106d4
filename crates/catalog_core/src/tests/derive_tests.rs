use super::*;

use shared::domain::Sex;

use crate::join::join;
use crate::test_support::{category, joined, names, product, user};

fn two_products(first: &str, second: &str) -> Vec<JoinedProduct> {
    join(
        &[user(1, "Roma", Sex::M)],
        &[category(1, "Fruits", "🍏", 1)],
        &[product(1, first, 1), product(2, second, 1)],
    )
}

#[test]
fn default_state_is_identity() {
    let rows = joined();
    assert_eq!(derive(&rows, &ViewState::default()), rows);
}

#[test]
fn owner_filter_keeps_only_matching_owner() {
    let state = ViewState::default().select_owner(Some(UserId(2)));
    let rows = derive(&joined(), &state);

    assert!(!rows.is_empty());
    assert!(rows.iter().all(|row| row.owner_id() == Some(UserId(2))));
    assert_eq!(names(&rows), ["Bread", "Eggs", "Sugar", "Banana", "Apples"]);
}

#[test]
fn owner_filter_drops_rows_without_owner() {
    let state = ViewState::default().select_owner(Some(UserId(9)));
    assert!(derive(&joined(), &state).is_empty());
}

#[test]
fn search_is_case_insensitive_substring() {
    let rows = join(
        &[user(1, "Roma", Sex::M)],
        &[category(1, "Fruits", "🍏", 1)],
        &[product(1, "Apple", 1), product(2, "Plum", 1)],
    );
    let state = ViewState::default().set_search_query("a");
    assert_eq!(names(&derive(&rows, &state)), ["Apple"]);

    let state = ViewState::default().set_search_query("PL");
    assert_eq!(names(&derive(&rows, &state)), ["Apple", "Plum"]);
}

#[test]
fn search_query_is_trimmed_before_matching() {
    let state = ViewState::default().set_search_query("  milk  ");
    assert_eq!(names(&derive(&joined(), &state)), ["Milk"]);

    let blank = ViewState::default().set_search_query("   ");
    assert_eq!(derive(&joined(), &blank).len(), joined().len());
}

#[test]
fn search_lowercases_non_ascii() {
    let rows = two_products("Äpfel", "Birne");
    let state = ViewState::default().set_search_query("äPF");
    assert_eq!(names(&derive(&rows, &state)), ["Äpfel"]);
}

#[test]
fn category_filter_keeps_selected_categories() {
    let state = ViewState::default()
        .toggle_category(CategoryId(3))
        .toggle_category(CategoryId(5));
    assert_eq!(
        names(&derive(&joined(), &state)),
        ["Jacket", "Banana", "Socks", "Apples"]
    );
}

#[test]
fn category_filter_drops_unresolved_categories() {
    let state = ViewState::default().toggle_category(CategoryId(42));
    assert!(derive(&joined(), &state).is_empty());
}

#[test]
fn filters_combine_conjunctively() {
    let state = ViewState::default()
        .select_owner(Some(UserId(2)))
        .toggle_category(CategoryId(1))
        .set_search_query("e");
    assert_eq!(names(&derive(&joined(), &state)), ["Bread", "Eggs"]);
}

#[test]
fn sorts_by_name_both_directions() {
    let rows = two_products("Banana", "Apple");

    let asc = ViewState::default().toggle_sort(SortColumn::Name);
    assert_eq!(names(&derive(&rows, &asc)), ["Apple", "Banana"]);

    let desc = asc.toggle_sort(SortColumn::Name);
    assert_eq!(names(&derive(&rows, &desc)), ["Banana", "Apple"]);
}

#[test]
fn sort_is_locale_aware() {
    let rows = join(
        &[user(1, "Roma", Sex::M)],
        &[category(1, "Misc", "📦", 1)],
        &[
            product(1, "banana", 1),
            product(2, "Apple", 1),
            product(3, "Éclair", 1),
        ],
    );
    let state = ViewState::default().toggle_sort(SortColumn::Name);
    assert_eq!(names(&derive(&rows, &state)), ["Apple", "banana", "Éclair"]);
}

#[test]
fn sort_by_category_title_is_stable() {
    let state = ViewState::default().toggle_sort(SortColumn::CategoryTitle);
    let rows = derive(&joined(), &state);

    // Unresolved category sorts as an empty title.
    assert_eq!(rows[0].name, "Ghost");
    assert_eq!(
        names(&rows[1..]),
        [
            "Jacket", "Socks", "Milk", "Beer", "Banana", "Apples", "Bread", "Eggs", "Sugar",
            "Teddy"
        ]
    );
}

#[test]
fn descending_sort_keeps_ties_in_original_order() {
    let state = ViewState::default()
        .toggle_sort(SortColumn::CategoryTitle)
        .toggle_sort(SortColumn::CategoryTitle);
    let rows = derive(&joined(), &state);
    assert_eq!(
        names(&rows),
        [
            "Teddy", "Bread", "Eggs", "Sugar", "Banana", "Apples", "Milk", "Beer", "Jacket",
            "Socks", "Ghost"
        ]
    );
}

#[test]
fn unsorted_preserves_filtered_order() {
    let state = ViewState::default()
        .toggle_sort(SortColumn::Name)
        .toggle_sort(SortColumn::Name)
        .toggle_sort(SortColumn::Name)
        .toggle_category(CategoryId(1));
    assert_eq!(names(&derive(&joined(), &state)), ["Bread", "Eggs", "Sugar"]);
}
