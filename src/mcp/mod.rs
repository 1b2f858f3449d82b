pub mod server;
pub mod stdio;

pub use server::{QueryServer, SERVER_NAME};
pub use stdio::serve_stdio;
