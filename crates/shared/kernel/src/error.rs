use std::borrow::Cow;

/// Errors surfaced by the interaction kernel.
#[aqua_derive::aqua_error]
pub enum KernelError {
    #[error("Config error{}: {source}", format_context(.context))]
    Config { source: config::ConfigError, context: Option<Cow<'static, str>> },

    /// An event referenced a catalog entry that does not exist.
    #[error("Unknown {kind} #{index}{}", format_context(.context))]
    UnknownItem { kind: &'static str, index: usize, context: Option<Cow<'static, str>> },

    #[error("Internal kernel error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}
