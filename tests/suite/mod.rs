//! Integration test suite modules

mod cli;
mod scenarios;
