//! Terminal user-management dashboard.
//!
//! Users come from a remote listing ([`connectors`]), live in a
//! [`dashboard::Dashboard`] that filters, sorts and paginates them, and are
//! persisted through a [`storage::StateStore`]. [`views`] renders pages and
//! the `userdash` binary drives everything through [`console`].

pub mod cli;
pub mod configuration;
pub mod connectors;
pub mod console;
pub mod dashboard;
pub mod models;
pub mod storage;
pub mod telemetry;
pub mod views;
