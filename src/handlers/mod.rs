pub mod health;
pub mod put;
pub mod get;

pub use health::health_handler;
pub use put::put_motd_handler;
pub use get::get_motd_handler;
