/// Role granted to every authenticated user.
pub const ROLE_USER: &str = "ROLE_USER";
/// Role granted to administrators.
pub const ROLE_ADMIN: &str = "ROLE_ADMIN";

/// Name of the secondary outlet used by dialogs rendered over the current page.
pub const POPUP_OUTLET: &str = "popup";
pub const PRIMARY_OUTLET: &str = "primary";

/// Upper bound for a language key, in bytes (the longest registered BCP 47 tags fit).
pub const MAX_LANGUAGE_KEY_LEN: usize = 35;

/// Prefix of every translation key owned by the application.
pub const TRANSLATION_PREFIX: &str = "folioApp";
