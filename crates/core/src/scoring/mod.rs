pub mod component_executor;
pub mod domain;
pub mod grammar_scorer;
pub mod infrastructure;
