//! # Core Application Logic
//!
//! This module contains Terra's business logic.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • State (app data)     │
//!                    │  • Action (events)      │
//!                    │  • update() (reducer)   │
//!                    │  • Listing (filters)    │
//!                    │                         │
//!                    │  No I/O. No UI. Pure.   │
//!                    └───────────┬─────────────┘
//!                                │
//!                    ┌───────────┴───────────┐
//!                    ▼                       ▼
//!             ┌────────────┐          ┌────────────┐
//!             │    TUI     │          │    API     │
//!             │  Adapter   │          │  client    │
//!             │ (ratatui)  │          │ (reqwest)  │
//!             └────────────┘          └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`state`]: The `App` struct, all application state in one place
//! - [`action`]: The `Action` enum and the `update()` reducer
//! - [`listing`]: Search, region filter, and "load more" window
//! - [`fuzzy`]: Fuzzy index used by the listing filters
//! - [`detail`]: Details page view model
//! - [`route`]: `/countries` and `/countries/{name}`
//! - [`config`]: Settings from file, env, and CLI

pub mod action;
pub mod config;
pub mod detail;
pub mod fuzzy;
pub mod listing;
pub mod route;
pub mod state;
