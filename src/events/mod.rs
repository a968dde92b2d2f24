pub mod keyboard;

pub use keyboard::wire_shortcuts;
