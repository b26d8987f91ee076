pub mod id;
pub mod note;
pub mod task;
pub mod timer;

pub use id::*;
pub use note::*;
pub use task::*;
pub use timer::*;
