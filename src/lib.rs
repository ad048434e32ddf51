//! jiradash - JIRA project dashboard and reports.
//!
//! A small JIRA REST client with request statistics, text reports over
//! issues, and a terminal dashboard that works from live or demo data.

pub mod api;
pub mod app;
pub mod cli;
pub mod commands;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod events;
pub mod logging;
pub mod mock;
pub mod report;
pub mod ui;
