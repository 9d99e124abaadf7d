//! Property-based tests
//!
//! Uses proptest to generate random favorites operations and verify the
//! invariants of the record.

mod favorite_proptest;
