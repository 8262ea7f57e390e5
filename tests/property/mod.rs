// Copyright (c) 2025 - Cowboy AI, Inc.
//! Property-Based Tests Module
//!
//! Properties of the ledger, the set and remove-smallest, plus searches
//! that must find each seeded defect.

mod bug_discovery;
mod runner_settings;
mod unique_set_properties;
