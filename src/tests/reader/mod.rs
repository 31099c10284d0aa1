//! CyclicReader tests.
