pub mod list;

pub use list::{GetThreadsParams, GetThreadsTool};
