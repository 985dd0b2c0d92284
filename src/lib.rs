pub mod config;
pub mod error;
pub mod experiment;
pub mod gradient_descent;
pub mod metrics;
pub mod model_selection;
pub mod parse;
pub mod reference;
pub mod report;
