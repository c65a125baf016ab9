//! Runtime behavior of `condense!` expansions, mirroring the query corpus
//! the transformation was built against.

#![allow(deprecated)]

use cgql_macros::{condense, condense_graphql};

#[test]
fn removes_unnecessary_whitespace_from_template() {
    let amount = 5;
    let result = condense!(
        "replaces " {amount} "    whitespace\tcharacters\n   with a single space."
    );
    assert_eq!(result, "replaces 5 whitespace characters with a single space.");
}

#[test]
fn retains_whitespace_around_interpolations() {
    let before = "before";
    let after = "after";
    let template = "template";
    let expressions = "expressions";
    let result = condense!(
        "retains space " {before} ", " {after} " and between " {template} " " {expressions} "."
    );
    assert_eq!(
        result,
        "retains space before,after and between template expressions."
    );
}

#[test]
fn retains_space_across_a_new_line_between_interpolations() {
    let template = "template";
    let expressions = "expressions";
    let result = condense!(
        "retains space between " {template} "\n        " {expressions} " when separated by a new line."
    );
    assert_eq!(
        result,
        "retains space between template expressions when separated by a new line."
    );
}

#[test]
fn condenses_query_containing_a_single_object() {
    let result = condense!(
        "\n    query {\n        simpleQuery{\n            options\n        }\n    }"
    );
    assert_eq!(result, "query{simpleQuery{options}}");
}

#[test]
fn condenses_query_containing_multiple_params() {
    let result = condense!(
        "\n    query {\n        simpleQuery{\n            options\n            date\n            age\n        }\n    }"
    );
    assert_eq!(result, "query{simpleQuery{options date age}}");
}

#[test]
fn condenses_query_with_variables_and_nested_objects() {
    let result = condense!(
        "\n    query queryWithVariables(\n        $id: ID,\n        $age: String,\n        $startDate: Date){\n            products(type: $type) {\n                id\n                code\n                options {\n                    timeInMilliseconds\n                }\n            }\n        }"
    );
    assert_eq!(
        result,
        "query queryWithVariables($id:ID,$age:String,$startDate:Date){products(type:$type){id code options{timeInMilliseconds}}}"
    );
}

#[test]
fn plain_string_is_a_static_str() {
    let result: &'static str = condense!("  a    b  ");
    assert_eq!(result, "a b");
}

#[test]
fn interpolated_query_arguments_survive() {
    let id = 7;
    let result = condense!("query {\n  user(id: " {id} ") {\n    name\n  }\n}");
    assert_eq!(result, "query{user(id:7){name}}");
}

#[test]
fn leading_interpolation_gets_an_empty_first_segment() {
    let verb = "query";
    let result = condense!({verb} " {\n  viewer\n}");
    assert_eq!(result, "query{viewer}");
}

#[test]
fn alias_behaves_identically() {
    let result = condense_graphql!("query {\n  viewer { id }\n}");
    assert_eq!(result, "query{viewer{id}}");
}

#[test]
fn extra_arguments_are_ignored_with_first_winning() {
    let result = condense!("query { a }", "query { b }");
    assert_eq!(result, "query{a}");
}
