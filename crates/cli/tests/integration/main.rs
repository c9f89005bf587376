//! End-to-end tests that run qtbuild against stand-in vcpkg and cmake scripts.

#![cfg(unix)]

mod common;
mod dependencies_tests;
mod project_tests;
