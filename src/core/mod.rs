//! Core scheduler modules
//!
//! Contains the kernel state, dispatcher, task management, and supporting
//! primitives.

pub mod config;
pub mod critical;
pub mod cs_cell;
pub mod error;
pub mod kernel;
pub mod sched;
pub mod task;
pub mod types;
