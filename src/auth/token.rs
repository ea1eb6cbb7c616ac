//! Authentication token model: entity/kind tags, redacted secrets, and validated credentials.

pub mod credential;
pub mod kind;
pub mod secret;
