pub mod config;
pub mod db;
pub mod domain;
pub mod parser;
pub mod paths;
pub mod services;
pub mod source;

#[cfg(test)]
pub mod testing;
