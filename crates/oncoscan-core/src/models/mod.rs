pub mod case;
pub mod image;
pub mod prediction;
