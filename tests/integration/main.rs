//! Integration tests for tapseek

mod helpers;

mod cli_test;
mod config_test;
mod surface_test;
