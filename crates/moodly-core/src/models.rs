pub mod assessment;
pub mod dimension;
pub mod eligibility;
pub mod response;
pub mod score;
pub mod window;
