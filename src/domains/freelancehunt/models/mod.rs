//! Typed records mirroring the Freelancehunt API v2 resources.
//!
//! Records are plain serde data. They are built once from a response body,
//! reshaped by a tool handler and dropped; nothing here holds state.

pub mod bid;
pub mod common;
pub mod contest;
pub mod filters;
pub mod freelancer;
pub mod project;
pub mod thread;

pub use bid::{Bid, BidAttributes};
pub use common::{Avatar, Budget, City, Country, DEFAULT_CURRENCY, JsonMap, Page, Skill, Tag};
pub use contest::{Contest, ContestAttributes};
pub use filters::{
    BidFilters, DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE, PageRequest, Query, SearchFilters, join_ids,
};
pub use freelancer::{FreelancerAttributes, FreelancerProfile, PortfolioItem, UserProfile};
pub use project::{
    Employer, Project, ProjectAttributes, ProjectComment, ProjectCommentAttributes, ProjectLinks,
    ProjectStatus,
};
pub use thread::{Thread, ThreadAttributes, ThreadParticipant, ThreadParticipants};
