//! Algorithm-level scenario tests for the ranking pipeline.

mod ranking_test;
