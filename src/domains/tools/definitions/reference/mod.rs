//! Reference data tools: skills, countries and cities.

pub mod cities;
pub mod countries;
pub mod skills;

pub use cities::{GetCitiesParams, GetCitiesTool};
pub use countries::{GetCountriesParams, GetCountriesTool};
pub use skills::{GetSkillsParams, GetSkillsTool};
