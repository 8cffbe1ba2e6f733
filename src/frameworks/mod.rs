// Frameworks layer: configuration, bootstrap, and the demo driver.

pub mod config;
pub mod demo;
pub mod runner;
