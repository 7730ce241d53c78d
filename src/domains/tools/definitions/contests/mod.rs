//! Contest tools.

pub mod get;
pub mod search;

pub use get::{GetContestParams, GetContestTool};
pub use search::{SearchContestsParams, SearchContestsTool};
