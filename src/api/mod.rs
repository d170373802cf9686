pub mod handlers;
pub mod types;
pub mod validate;

pub use handlers::*;
pub use types::*;
