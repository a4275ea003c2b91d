use std::borrow::Cow;
use std::path::PathBuf;

#[aqua_derive::aqua_error]
pub enum FaviconError {
    #[error("Source SVG not found: {}{}", path.display(), format_context(.context))]
    SourceNotFound { path: PathBuf, context: Option<Cow<'static, str>> },

    #[error("IO error{}: {source}", format_context(.context))]
    Io { source: std::io::Error, context: Option<Cow<'static, str>> },

    #[error("Invalid SVG{}: {source}", format_context(.context))]
    Svg { source: resvg::usvg::Error, context: Option<Cow<'static, str>> },

    #[error("Render failed{}: {message}", format_context(.context))]
    Render { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("Internal favicon error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}
