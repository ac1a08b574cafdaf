//! Authentication: bearer JWT verification and the caller identity

mod caller;
mod jwt;
mod middleware;

pub use caller::{Caller, Role};
pub use jwt::{Claims, JwtError, JwtService};
pub use middleware::require_auth;
