//! Tests for booking service

mod service_tests;
