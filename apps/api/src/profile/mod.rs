pub mod editing;
pub mod handlers;
pub mod reconcile;
pub mod sanitize;
