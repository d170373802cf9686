pub mod model;
pub mod mysql;
pub mod repo;

pub use model::*;
pub use mysql::MySqlRepository;
pub use repo::*;
