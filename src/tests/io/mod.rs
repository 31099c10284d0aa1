//! IO module tests.

mod opener_tests;
