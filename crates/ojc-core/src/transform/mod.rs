pub mod name_normalizer;
pub mod operation_planner;
pub mod schema_resolver;
pub mod type_inference;

pub use operation_planner::plan_document;
