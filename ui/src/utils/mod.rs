pub mod chip;
pub mod colors;
