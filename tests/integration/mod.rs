//! Integration tests for the MindMaze desktop core

mod cli_contracts;
mod gate_timing;
mod properties;
mod puzzle_integrity;
mod support;
mod window_scenarios;
