//! Shared fixtures for the integration suites.

#![allow(dead_code)]

pub mod profile;
