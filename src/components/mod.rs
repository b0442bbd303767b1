pub mod chips;
pub mod footer;
pub mod help;
pub mod helpers;
pub mod suggestions;
