pub mod claims;
pub mod errors;
pub mod signer;

pub use claims::Claims;
pub use claims::TOKEN_TTL_SECS;
pub use errors::TokenError;
pub use signer::TokenSigner;
