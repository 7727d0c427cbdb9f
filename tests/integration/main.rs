//! Integration tests for seekline

mod cli_test;
mod config_test;
mod helpers;
mod widget_test;
