//! Integration tests for the end-to-end front end.
//!
//! These tests verify that the complete pipeline works correctly from raw
//! bytes through tokenization, parsing, and tree rendering.

use expect_test::expect;
use minicc::errors::errors::{Error, LexError, ParseError};
use minicc::lexer::scanner::tokenize;
use minicc::parse_expression;
use minicc::tree::printer::render;

/// The lexer demo program, mixing ASCII and full-width punctuation.
const SAMPLE_PROGRAM: &str = "\
int main(){
int count=5;
int count_ = 5；
if （count == 5）｛
count_ = 0;
｝
else {
count_ = 1+2+(3+4)+5;
}
while (count_+count) {
count = count-1;
｝
}";

#[test]
fn test_tokenize_sample_program_dumps_expected_stream() {
    let tokens = tokenize(SAMPLE_PROGRAM.as_bytes()).unwrap();
    let dump: String = tokens.iter().map(|token| format!("{token}\n")).collect();

    let expected = expect![[r#"
        int: TYPE_TOKEN
        main: MAIN_TOKEN
        (: LEFTPAREN_TOKEN
        ): RIGHTPAREN_TOKEN
        {: LEFTBRACE_TOKEN
        int: TYPE_TOKEN
        count: ID_TOKEN
        =: ASSIGN_TOKEN
        5: LITERAL_TOKEN
        ;: SEMICOLON_TOKEN
        int: TYPE_TOKEN
        count_: ID_TOKEN
        =: ASSIGN_TOKEN
        5: LITERAL_TOKEN
        ;: SEMICOLON_TOKEN
        if: IF_TOKEN
        (: LEFTPAREN_TOKEN
        count: ID_TOKEN
        ==: EQUAL_TOKEN
        5: LITERAL_TOKEN
        ): RIGHTPAREN_TOKEN
        {: LEFTBRACE_TOKEN
        count_: ID_TOKEN
        =: ASSIGN_TOKEN
        0: LITERAL_TOKEN
        ;: SEMICOLON_TOKEN
        }: RIGHTBRACE_TOKEN
        else: ELSE_TOKEN
        {: LEFTBRACE_TOKEN
        count_: ID_TOKEN
        =: ASSIGN_TOKEN
        1: LITERAL_TOKEN
        +: PLUS_TOKEN
        2: LITERAL_TOKEN
        +: PLUS_TOKEN
        (: LEFTPAREN_TOKEN
        3: LITERAL_TOKEN
        +: PLUS_TOKEN
        4: LITERAL_TOKEN
        ): RIGHTPAREN_TOKEN
        +: PLUS_TOKEN
        5: LITERAL_TOKEN
        ;: SEMICOLON_TOKEN
        }: RIGHTBRACE_TOKEN
        while: WHILE_TOKEN
        (: LEFTPAREN_TOKEN
        count_: ID_TOKEN
        +: PLUS_TOKEN
        count: ID_TOKEN
        ): RIGHTPAREN_TOKEN
        {: LEFTBRACE_TOKEN
        count: ID_TOKEN
        =: ASSIGN_TOKEN
        count: ID_TOKEN
        -: MINUS_TOKEN
        1: LITERAL_TOKEN
        ;: SEMICOLON_TOKEN
        }: RIGHTBRACE_TOKEN
        }: RIGHTBRACE_TOKEN
    "#]];
    expected.assert_eq(&dump);
}

#[test]
fn test_pipeline_renders_sum_with_nested_group() {
    let tree = parse_expression("1+(2+3)".as_bytes()).unwrap();

    let expected = expect![[r#"
        └── S
            ├── E
            │   └── 1
            └── S'
                ├── +
                └── S
                    ├── E
                    │   ├── (
                    │   ├── S
                    │   │   ├── E
                    │   │   │   └── 2
                    │   │   └── S'
                    │   │       ├── +
                    │   │       └── S
                    │   │           ├── E
                    │   │           │   └── 3
                    │   │           └── S'
                    │   │               └── ε
                    │   └── )
                    └── S'
                        └── ε
    "#]];
    expected.assert_eq(&render(&tree));
}

#[test]
fn test_full_width_punctuation_feeds_the_parser() {
    let wide = parse_expression("（1+2）+3".as_bytes()).unwrap();
    let ascii = parse_expression("(1+2)+3".as_bytes()).unwrap();
    assert_eq!(render(&wide), render(&ascii));
}

#[test]
fn test_unbalanced_expression_fails_with_missing_paren() {
    let result = parse_expression("(1+2".as_bytes());
    match result {
        Err(Error::Parse(ParseError::MissingCloseParen { .. })) => {}
        other => panic!("expected a missing-parenthesis error, got {other:?}"),
    }

    let message = parse_expression("(1+2".as_bytes()).unwrap_err().to_string();
    assert!(message.contains("missing closing parenthesis"));
}

#[test]
fn test_trailing_literal_fails_after_complete_parse() {
    let result = parse_expression("1 2".as_bytes());
    match result {
        Err(Error::Parse(ParseError::TrailingInput { token })) => {
            assert_eq!(token, "'2'");
        }
        other => panic!("expected a trailing-input error, got {other:?}"),
    }
}

#[test]
fn test_overlong_lexeme_fails_the_pipeline() {
    let source = "a".repeat(81);
    let result = parse_expression(source.as_bytes());
    match result {
        Err(Error::Lex(LexError::TokenTooLong { lexeme })) => {
            assert_eq!(lexeme.len(), 81);
        }
        other => panic!("expected a token-too-long error, got {other:?}"),
    }
}

#[test]
fn test_empty_input_is_rejected() {
    let result = parse_expression("".as_bytes());
    match result {
        Err(Error::Parse(ParseError::ExpectedExpression { found })) => {
            assert_eq!(found, "end of input");
        }
        other => panic!("expected an expected-expression error, got {other:?}"),
    }
}
