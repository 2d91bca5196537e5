pub mod assistant;
pub mod eligibility;
