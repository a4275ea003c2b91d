#![allow(unreachable_pub)]

//! # Macros
//!
//! Procedural macros for the Aqua workspace.
//!
//! ## Usage
//! ```toml
//! [dependencies]
//! aqua-derive.workspace = true
//! thiserror.workspace = true
//! ```

mod error;

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

/// Turns an enum into a workspace error type.
///
/// # Generated Items
///
/// * `#[derive(Debug, thiserror::Error)]` unless already derived.
/// * `<ErrorName>Ext` trait with `.context(...)` for `Result<T, ErrorName>` and for
///   `Result<T, SourceError>` of every variant carrying a source.
/// * `From<SourceError>` for every variant with a `source` field (or a field marked `#[source]`).
/// * `From<&'static str>` and `From<String>` when an `Internal { message, context }` variant exists.
/// * A private `format_context` helper used inside `#[error(...)]` strings.
///
/// # Requirements
///
/// 1. Applied to an enum with named-field variants only.
/// 2. Variants with a source must also carry `context: Option<Cow<'static, str>>`.
///
/// # Example
///
/// ```rust,ignore
/// use aqua_derive::aqua_error;
/// use std::borrow::Cow;
///
/// #[aqua_error]
/// pub enum StoreError {
///     #[error("IO error{}: {source}", format_context(.context))]
///     Io { source: std::io::Error, context: Option<Cow<'static, str>> },
///
///     #[error("Internal error{}: {message}", format_context(.context))]
///     Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
/// }
///
/// fn read() -> Result<String, StoreError> {
///     std::fs::read_to_string("store.toml").context("Reading store settings")
/// }
/// ```
#[proc_macro_attribute]
pub fn aqua_error(_args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as DeriveInput);
    error::expand(input).unwrap_or_else(syn::Error::into_compile_error).into()
}
