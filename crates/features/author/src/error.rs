use folio_kernel::app::AppError;
use std::borrow::Cow;

/// A specialized [`AuthorError`] enum of this crate.
#[folio_derive::folio_error]
pub enum AuthorError {
    /// The application refused the module's views or routes.
    #[error("Author registration error{}: {source}", format_context(.context))]
    Registration { source: AppError, context: Option<Cow<'static, str>> },
}
