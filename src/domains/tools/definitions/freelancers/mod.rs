//! Freelancer and account tools.

pub mod get;
pub mod my_bids;
pub mod portfolio;
pub mod profile;
pub mod reviews;

pub use get::{GetFreelancerParams, GetFreelancerTool};
pub use my_bids::{GetMyBidsParams, GetMyBidsTool};
pub use portfolio::{GetFreelancerPortfolioParams, GetFreelancerPortfolioTool};
pub use profile::{GetMyProfileParams, GetMyProfileTool};
pub use reviews::{GetFreelancerReviewsParams, GetFreelancerReviewsTool};
