pub mod cli;
pub mod config;
pub mod controller;
pub mod logging;
pub mod script;
pub mod ui;
