pub mod server;
pub mod setup;
