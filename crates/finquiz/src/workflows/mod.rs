pub mod batch;
pub mod quiz;
