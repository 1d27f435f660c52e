pub mod appearance;
pub mod config;
pub mod cover;
pub mod host;
pub mod ripple;
pub mod shell;
pub mod typewriter;

pub use appearance::*;
pub use config::*;
pub use cover::*;
pub use host::*;
pub use ripple::*;
pub use shell::*;
pub use typewriter::*;
