pub mod board;
pub mod category;
pub mod config;
pub mod filter;
pub mod ids;

pub use board::*;
pub use category::*;
pub use config::*;
pub use filter::*;
pub use ids::*;
