//! Tests for `output` module

use serde_json::{json, Value};

use super::dataset::Dataset;
use super::error::Error;
use super::filter::Filter;
use super::output::*;

const BOOKS: &str = "\
title,authors,average_rating,pages
A,X,5,120
B,Y,3,
C,Y,4.5,300
";

fn books() -> Dataset {
    Dataset::from_reader("books_c.csv", BOOKS.as_bytes(), b',').expect("load fixture")
}

fn render(dataset: Dataset, orient: Orient) -> Value {
    let text = QueryResult::new(dataset, orient)
        .to_json_string()
        .expect("serialize");
    serde_json::from_str(&text).expect("valid json")
}

#[test]
fn test_records_shape() {
    let json = render(books(), Orient::Records);

    assert_eq!(
        json,
        json!([
            {"title": "A", "authors": "X", "average_rating": 5.0, "pages": 120},
            {"title": "B", "authors": "Y", "average_rating": 3.0, "pages": null},
            {"title": "C", "authors": "Y", "average_rating": 4.5, "pages": 300}
        ])
    );
}

#[test]
fn test_columns_shape_keeps_source_indexes() {
    let filtered = Filter::by_author("Y").apply(books()).expect("filter");

    let json = render(filtered, Orient::Columns);

    assert_eq!(
        json,
        json!({
            "title": {"1": "B", "2": "C"},
            "authors": {"1": "Y", "2": "Y"},
            "average_rating": {"1": 3.0, "2": 4.5},
            "pages": {"1": null, "2": 300}
        })
    );
}

#[test]
fn test_records_preserve_column_order() {
    let text = QueryResult::new(books(), Orient::Records)
        .to_json_string()
        .expect("serialize");

    let title = text.find("\"title\"").expect("title");
    let authors = text.find("\"authors\"").expect("authors");
    let rating = text.find("\"average_rating\"").expect("rating");
    assert!(title < authors && authors < rating);
}

#[test]
fn test_empty_result_keeps_shape() {
    let empty = Filter::by_author("nobody").apply(books()).expect("filter");

    assert_eq!(render(empty.clone(), Orient::Records), json!([]));
    assert_eq!(
        render(empty, Orient::Columns),
        json!({"title": {}, "authors": {}, "average_rating": {}, "pages": {}})
    );
}

#[test]
fn test_integer_column_serializes_as_integer() {
    let text = QueryResult::new(books(), Orient::Records)
        .to_json_string()
        .expect("serialize");

    assert!(text.contains("\"pages\":120"));
    assert!(text.contains("\"average_rating\":5.0"));
}

#[test]
fn test_orient_parsing() {
    assert_eq!("records".parse::<Orient>().expect("records"), Orient::Records);
    assert_eq!("COLUMNS".parse::<Orient>().expect("columns"), Orient::Columns);
    assert!(matches!(
        "split".parse::<Orient>(),
        Err(Error::InvalidOrient(ref s)) if s == "split"
    ));
}

#[test]
fn test_orient_default_is_records() {
    assert_eq!(Orient::default(), Orient::Records);
    assert_eq!(Orient::Columns.to_string(), "columns");
}
