//! Test module for dashpal-core
//!
//! This module contains tests for:
//! - Dashboard action fetching (recents reorder, auth gating, caps)
//! - Debounced search controller (collapse, supersession, idle reset)
//! - Configuration loading and defaults

mod fixtures;
