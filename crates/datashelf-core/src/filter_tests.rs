//! Tests for `filter` module

use proptest::prelude::*;

use super::dataset::{Dataset, Row};
use super::error::Error;
use super::filter::*;
use super::value::Cell;

const BOOKS: &str = "\
title,authors,average_rating,in_print,pages
A,X,5,true,120
B,Y,3,false,
C,X,4.5,TRUE,300
D,Y,5.0,false,80
";

fn books() -> Dataset {
    Dataset::from_reader("books_c.csv", BOOKS.as_bytes(), b',').expect("load fixture")
}

fn titles(dataset: &Dataset) -> Vec<String> {
    dataset
        .rows()
        .iter()
        .filter_map(|row| row.get(0).and_then(Cell::as_str).map(str::to_string))
        .collect()
}

// -------------------------------------------------------------------------
// Equality semantics
// -------------------------------------------------------------------------

#[test]
fn test_top_rated_keeps_only_rating_five() {
    let filtered = Filter::top_rated().apply(books()).expect("filter");

    assert_eq!(titles(&filtered), vec!["A", "D"]);
}

#[test]
fn test_by_author_exact_match() {
    let filtered = Filter::by_author("Y").apply(books()).expect("filter");

    assert_eq!(titles(&filtered), vec!["B", "D"]);
}

#[test]
fn test_by_author_is_case_sensitive_and_not_partial() {
    assert!(Filter::by_author("y").apply(books()).expect("filter").is_empty());
    assert!(Filter::by_author("").apply(books()).expect("filter").is_empty());
}

#[test]
fn test_numeric_target_matches_numerically() {
    let filtered = Filter::equal("average_rating", "3.0")
        .apply(books())
        .expect("filter");

    assert_eq!(titles(&filtered), vec!["B"]);
}

#[test]
fn test_integer_column_accepts_float_spelling() {
    let filtered = Filter::equal("pages", "120.0").apply(books()).expect("filter");

    assert_eq!(titles(&filtered), vec!["A"]);
}

#[test]
fn test_integer_column_compares_without_float_rounding() {
    let ids = Dataset::from_reader(
        "ids.csv",
        "title,id\nA,9007199254740993\nB,9007199254740992\n".as_bytes(),
        b',',
    )
    .expect("load fixture");

    let filtered = Filter::equal("id", "9007199254740992.0")
        .apply(ids.clone())
        .expect("filter");
    assert_eq!(titles(&filtered), vec!["B"]);

    let filtered = Filter::equal("id", "9007199254740993").apply(ids).expect("filter");
    assert_eq!(titles(&filtered), vec!["A"]);
}

#[test]
fn test_integer_column_rejects_fractional_target() {
    let filtered = Filter::equal("pages", "120.5").apply(books()).expect("filter");

    assert!(filtered.is_empty());
}

#[test]
fn test_boolean_column_case_insensitive_target() {
    let filtered = Filter::equal("in_print", "True").apply(books()).expect("filter");

    assert_eq!(titles(&filtered), vec!["A", "C"]);
}

#[test]
fn test_type_mismatch_yields_empty_result() {
    let filtered = Filter::equal("average_rating", "five")
        .apply(books())
        .expect("mismatch is not an error");

    assert!(filtered.is_empty());
    assert_eq!(filtered.schema().len(), 5);
}

#[test]
fn test_null_cells_never_match() {
    let filtered = Filter::equal("pages", "NaN").apply(books()).expect("filter");

    assert!(filtered.is_empty());
}

#[test]
fn test_unknown_column_fails() {
    let err = Filter::equal("isbn", "1").apply(books()).expect_err("unknown column");

    assert!(matches!(
        err,
        Error::ColumnNotFound { ref dataset, ref column } if dataset == "books_c.csv" && column == "isbn"
    ));
}

#[test]
fn test_top_rated_without_five_star_books_is_empty() {
    let dataset = Dataset::from_reader(
        "books_c.csv",
        "title,average_rating\nB,3\nC,4.2\n".as_bytes(),
        b',',
    )
    .expect("load");

    let filtered = Filter::top_rated().apply(dataset).expect("filter");

    assert!(filtered.is_empty());
}

#[test]
fn test_filter_keeps_source_indexes() {
    let filtered = Filter::by_author("Y").apply(books()).expect("filter");

    let indexes: Vec<usize> = filtered.rows().iter().map(Row::index).collect();
    assert_eq!(indexes, vec![1, 3]);
}

// -------------------------------------------------------------------------
// Property: result is the exact, ordered subsequence of matching rows
// -------------------------------------------------------------------------

fn csv_text(rows: &[(u8, u8)]) -> String {
    let mut text = String::from("key,num\n");
    for (key, num) in rows {
        text.push_str(&format!("k{key},{num}\n"));
    }
    text
}

proptest! {
    #[test]
    fn prop_filter_is_ordered_matching_subsequence(
        rows in prop::collection::vec((0u8..4, 0u8..4), 1..40),
        key in 0u8..5,
        num in 0u8..5,
    ) {
        let text = csv_text(&rows);
        let load = || Dataset::from_reader("prop.csv", text.as_bytes(), b',').unwrap();

        let by_key = Filter::equal("key", format!("k{key}")).apply(load()).unwrap();
        let expected: Vec<usize> = rows
            .iter()
            .enumerate()
            .filter(|(_, (k, _))| *k == key)
            .map(|(i, _)| i)
            .collect();
        let got: Vec<usize> = by_key.rows().iter().map(Row::index).collect();
        prop_assert_eq!(got, expected);

        let by_num = Filter::equal("num", num.to_string()).apply(load()).unwrap();
        let expected: Vec<usize> = rows
            .iter()
            .enumerate()
            .filter(|(_, (_, n))| *n == num)
            .map(|(i, _)| i)
            .collect();
        let got: Vec<usize> = by_num.rows().iter().map(Row::index).collect();
        prop_assert_eq!(got, expected);
    }

    #[test]
    fn prop_unknown_column_always_fails(column in "[a-z]{1,8}") {
        prop_assume!(column != "key" && column != "num");
        let text = csv_text(&[(1, 1), (2, 2)]);
        let dataset = Dataset::from_reader("prop.csv", text.as_bytes(), b',').unwrap();

        let is_column_not_found = matches!(
            Filter::equal(column, "1").apply(dataset),
            Err(Error::ColumnNotFound { .. })
        );
        prop_assert!(is_column_not_found);
    }
}
