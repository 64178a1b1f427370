pub mod accumulator;
pub mod config;
pub mod consts;
pub mod direction;
pub mod error;
pub mod parser;
pub mod stats;
pub mod summary;
pub mod table;
// cmd and reports are binary modules; everything they render comes from here.
