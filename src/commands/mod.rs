pub mod generate;
pub mod list;
mod paths;
