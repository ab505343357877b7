pub mod count;
pub mod hash;
