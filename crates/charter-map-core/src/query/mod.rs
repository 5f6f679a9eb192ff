pub mod engine;
pub mod facets;
pub mod guards;
pub mod matching;
pub mod ordering;
pub mod planner;
