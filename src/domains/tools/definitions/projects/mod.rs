//! Project tools: search, lookup, bids and comments.

pub mod bids;
pub mod comments;
pub mod get;
pub mod search;

pub use bids::{GetProjectBidsParams, GetProjectBidsTool};
pub use comments::{GetProjectCommentsParams, GetProjectCommentsTool};
pub use get::{GetProjectParams, GetProjectTool};
pub use search::{SearchProjectsParams, SearchProjectsTool};
