use aqua_derive::aqua_error;
use std::borrow::Cow;
use std::path::PathBuf;

#[aqua_error]
pub enum SampleError {
    #[error("IO error{}: {source}", format_context(.context))]
    Io { source: std::io::Error, context: Option<Cow<'static, str>> },

    #[error("Missing file{}: {}", format_context(.context), path.display())]
    Missing { path: PathBuf, context: Option<Cow<'static, str>> },

    #[error("Internal error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

#[test]
fn aqua_error_ui() {
    let t = trybuild::TestCases::new();
    t.pass("tests/ui/aqua_error_pass.rs");
}

#[test]
fn source_errors_convert_with_context() {
    let raw: Result<(), std::io::Error> =
        Err(std::io::Error::new(std::io::ErrorKind::NotFound, "gone"));

    let err = raw.context("reading favicon.svg").expect_err("should stay an error");

    assert!(matches!(err, SampleError::Io { .. }));
    assert_eq!(err.to_string(), "IO error (reading favicon.svg): gone");
}

#[test]
fn question_mark_converts_without_context() {
    fn read() -> Result<(), SampleError> {
        Err(std::io::Error::other("denied"))?;
        Ok(())
    }

    let err = read().expect_err("should fail");
    assert_eq!(err.to_string(), "IO error: denied");
}

#[test]
fn internal_variant_accepts_strings() {
    let from_static: SampleError = "static message".into();
    let from_owned: SampleError = String::from("owned message").into();

    assert_eq!(from_static.to_string(), "Internal error: static message");
    assert_eq!(from_owned.to_string(), "Internal error: owned message");
}

#[test]
fn context_overrides_existing_variants() {
    let missing: Result<(), SampleError> =
        Err(SampleError::Missing { path: PathBuf::from("favicon.svg"), context: None });

    let err = missing.context("startup").expect_err("should stay an error");
    assert_eq!(err.to_string(), "Missing file (startup): favicon.svg");
}
