pub mod median;
pub mod partition;
pub mod pivot;
pub mod select;
