pub mod cli;
pub mod config;
pub mod error;
pub mod front_matter;
pub mod logger;
pub mod post_create;
pub mod post_publish;
pub mod slug;
