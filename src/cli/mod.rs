pub mod preview;
pub mod server;
