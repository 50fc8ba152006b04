pub mod drug_service;
pub mod interaction_service;
pub mod user_service;

pub use drug_service::*;
pub use interaction_service::*;
pub use user_service::*;
