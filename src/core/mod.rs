pub mod approximation;
pub mod indicators;
pub mod risk;
