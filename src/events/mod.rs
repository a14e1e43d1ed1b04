pub mod keyboard;
pub mod pointer;
pub mod wheel;

pub use keyboard::wire_global_keydown;
pub use pointer::{wire_input_handlers, InputWiring};
pub use wheel::wire_wheel;
