//! Unit tests for the boxbuddy CLI
//!
//! These tests use mocked dependencies and run fast without external I/O.

mod apps_service;
mod config_service;
mod containers_service;
mod doctor_service;
mod images_service;
