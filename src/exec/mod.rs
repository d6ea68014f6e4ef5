mod builtins;
mod launcher;
mod runnable;

pub use builtins::Registry;
pub use launcher::Launcher;
pub use runnable::{Context, Runnable, Status};
