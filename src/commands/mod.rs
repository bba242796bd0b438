pub mod registry;

pub use registry::{dispatch, handle_line, Command, CommandResponse};
