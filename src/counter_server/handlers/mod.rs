//! Counter server HTTP handlers.

mod count;
mod echo;

pub use count::count_handler;
pub use echo::echo_handler;
