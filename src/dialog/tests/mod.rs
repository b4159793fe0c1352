//! Unit tests for the dialog module.

mod transform_tests;
