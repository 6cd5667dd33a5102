pub mod claims;
pub mod extractor;
pub mod jwt;
pub mod password;

pub use claims::Claims;
pub use extractor::AuthenticatedUser;
pub use jwt::{IssuedToken, JwtService};
pub use password::{hash_password, verify_password};
