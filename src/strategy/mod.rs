pub mod evaluation;
pub mod policy;
