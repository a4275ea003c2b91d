use std::borrow::Cow;

#[aqua_derive::aqua_error]
pub enum OptimizeError {
    #[error("IO error{}: {source}", format_context(.context))]
    Io { source: std::io::Error, context: Option<Cow<'static, str>> },

    #[error("Image error{}: {source}", format_context(.context))]
    Image { source: image::ImageError, context: Option<Cow<'static, str>> },

    #[error("Internal image error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}
