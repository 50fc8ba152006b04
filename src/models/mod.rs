pub mod drug;
pub mod interaction;
pub mod user;

pub use drug::*;
pub use interaction::*;
pub use user::*;
