pub mod common;
pub mod track;
