//! Auth-domain identifiers, token models, nonces, and request signing.

pub mod id;
pub mod nonce;
pub mod signer;
pub mod token;

pub use id::*;
pub use nonce::*;
pub use signer::*;
pub use token::{credential::*, kind::*, secret::*};
