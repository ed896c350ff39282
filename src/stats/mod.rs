pub mod linalg;
pub mod vec;
