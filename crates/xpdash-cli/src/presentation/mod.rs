pub mod cards;
pub mod format;
