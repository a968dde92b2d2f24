pub mod config;
pub mod constants;
pub mod controller;
pub mod environment;
pub mod notice;
pub mod pose;
pub mod presets;
pub mod scenery;
pub mod signal;
pub mod speed;
pub mod storage;
pub mod tween;

pub use config::*;
pub use controller::*;
pub use environment::*;
pub use notice::*;
pub use pose::*;
pub use presets::*;
pub use scenery::*;
pub use signal::*;
pub use speed::*;
pub use storage::*;
pub use tween::*;
