pub mod column;
pub mod observation;
