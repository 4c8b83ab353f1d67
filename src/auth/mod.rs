pub mod error;
pub mod header;
pub mod jwt;
pub mod ledger;
pub mod password;
mod types;

pub use error::AuthError;
pub use jwt::{JwtKeys, TokenService};
pub use ledger::RevocationLedger;
pub use types::{AuthScheme, Claims, TokenBundle, TokenKind};
