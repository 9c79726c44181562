//! Integration tests for the chapterbar binary and library

mod helpers;

mod chapters_test;
mod cli_test;
mod loader_test;
