pub mod calculator;
pub mod grouper;
pub mod logic;
pub mod normalizer;
pub mod summary;
