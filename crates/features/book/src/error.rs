use folio_kernel::app::AppError;
use std::borrow::Cow;

#[folio_derive::folio_error]
pub enum BookError {
    #[error("Book registration error{}: {source}", format_context(.context))]
    Registration { source: AppError, context: Option<Cow<'static, str>> },
}
