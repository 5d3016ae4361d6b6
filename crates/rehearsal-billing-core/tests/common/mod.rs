//! Common test utilities for rehearsal-billing-core integration tests

pub mod mock_repos;

#[allow(unused_imports)]
pub use mock_repos::{billing_record, MockBillingRecordRepository};
