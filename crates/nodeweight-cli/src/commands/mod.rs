pub mod options;
pub mod weights;
