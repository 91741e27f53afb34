//! Unit tests for the request module.
