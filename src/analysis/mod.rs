pub mod correlation;
pub mod describe;
