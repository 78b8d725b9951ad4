//! Application state module

mod app_state;
mod forms;
mod task;

pub use app_state::*;
pub use forms::*;
pub use task::*;
