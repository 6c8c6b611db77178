pub mod claims;
pub mod error;
pub mod forms;
pub mod settings;

/// The login route of the external renderer. Unauthenticated writes are
/// redirected here, carrying the original target as the `next` parameter.
pub const LOGIN_PATH: &str = "/auth/login/";
