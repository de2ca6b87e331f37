pub mod board;
pub use board::*;

pub mod command;
pub use command::*;

pub mod config;
pub use config::*;

pub mod menu;
pub use menu::*;
