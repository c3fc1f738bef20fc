// SPDX-License-Identifier: MPL-2.0
//! `themeshift` keeps a user's theme preference (light, dark, or follow the
//! system) in sync with what is actually painted on screen.
//!
//! The [`manager::ThemeManager`] reconciles three collaborators: a durable
//! [`store::PreferenceStore`], a [`signal::SchemeSource`] reporting the OS
//! appearance, and a presentation sink callback that receives the resolved
//! binary [`theme::Appearance`]. Stores and sources are injected, so hosts
//! and tests can supply their own.

#![doc(html_root_url = "https://docs.rs/themeshift/0.1.0")]

pub mod config;
pub mod error;
pub mod manager;
pub mod paths;
pub mod signal;
pub mod store;
pub mod test_utils;
pub mod theme;
