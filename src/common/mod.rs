pub mod config;
pub mod content;
pub mod icon;

pub use config::*;
pub use content::*;
pub use icon::*;
