pub mod token;
pub mod user;

pub use token::AuthToken;
pub use user::User;
