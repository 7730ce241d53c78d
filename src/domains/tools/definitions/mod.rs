//! Tool definitions module.
//!
//! One file per tool, grouped by API area. Each tool implements
//! [`ApiTool`](super::ApiTool).

pub mod common;
pub mod contests;
pub mod freelancers;
pub mod projects;
pub mod reference;
pub mod threads;

pub use contests::{GetContestTool, SearchContestsTool};
pub use freelancers::{
    GetFreelancerPortfolioTool, GetFreelancerReviewsTool, GetFreelancerTool, GetMyBidsTool,
    GetMyProfileTool,
};
pub use projects::{GetProjectBidsTool, GetProjectCommentsTool, GetProjectTool, SearchProjectsTool};
pub use reference::{GetCitiesTool, GetCountriesTool, GetSkillsTool};
pub use threads::GetThreadsTool;
