pub mod add;
pub mod config;
pub mod del;
pub mod edit;
pub mod export;
pub mod import;
pub mod init;
pub mod list;
pub mod start;
pub mod stats;
pub mod theme;
