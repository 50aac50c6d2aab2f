//! Student grading and ranking.
//!
//! This module grades each parsed student against a [`config::GradingPolicy`],
//! then reduces the graded list to the overall topper and the topper of
//! each university.

pub mod aggregate;
pub mod analyzer;
pub mod config;
pub mod grade;
pub mod types;
pub mod utility;
