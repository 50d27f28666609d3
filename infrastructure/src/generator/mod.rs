//! Menu generator adapters

mod command;

pub use command::CommandMenuGenerator;
