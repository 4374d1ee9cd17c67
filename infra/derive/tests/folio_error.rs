use folio_derive::folio_error;
use std::borrow::Cow;

#[folio_error]
pub enum ParseError {
    #[error("Integer error{}: {source}", format_context(.context))]
    Int { source: std::num::ParseIntError, context: Option<Cow<'static, str>> },

    #[error("Internal error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

fn parse(raw: &str) -> Result<i64, ParseError> {
    raw.parse::<i64>().context("parsing page size")
}

#[test]
fn source_errors_convert_with_context() {
    let err = parse("ten").expect_err("not a number");
    assert!(matches!(err, ParseError::Int { context: Some(ref c), .. } if c == "parsing page size"));
    assert!(err.to_string().starts_with("Integer error (parsing page size): "));
}

#[test]
fn question_mark_uses_from_impl() {
    fn inner() -> Result<i64, ParseError> {
        Ok("x".parse::<i64>()?)
    }

    let err = inner().expect_err("not a number");
    assert!(matches!(err, ParseError::Int { context: None, .. }));
}

#[test]
fn internal_variant_accepts_strings() {
    let from_static: ParseError = "boom".into();
    assert_eq!(from_static.to_string(), "Internal error: boom");

    let with_context: Result<(), ParseError> = Err(ParseError::from(String::from("late")));
    let err = with_context.context("bootstrap").expect_err("error expected");
    assert_eq!(err.to_string(), "Internal error (bootstrap): late");
}

#[test]
fn folio_error_ui() {
    let t = trybuild::TestCases::new();
    t.pass("tests/ui/folio_error_pass.rs");
}
