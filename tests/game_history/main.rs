//! Game history integration tests.

mod support;
mod repository;
