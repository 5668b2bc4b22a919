//! Compatibility switches.
//!
//! Existing clients rely on a few behaviors that are debatable on their own:
//! error statuses that do not match their meaning, and an empty collection
//! answered as "not found". Both stay the default; each can be turned off
//! here. Checking that a token's account still exists is a behavior change
//! and is off by default.
//!
//! # Environment Variables
//!
//! - `STATUS_CODES`: `legacy` (default) or `semantic`
//! - `EMPTY_LIST_IS_ERROR`: `true` (default) answers an empty list with 404
//! - `AUTH_VERIFY_ACCOUNT`: `false` (default); when `true` the gate rejects
//!   tokens whose account was removed

use std::env;

use campus_core::StatusPolicy;

use crate::parse_flag;

#[derive(Clone, Debug)]
pub struct CompatConfig {
    pub status_policy: StatusPolicy,
    pub empty_list_is_error: bool,
    pub verify_account_exists: bool,
}

impl Default for CompatConfig {
    fn default() -> Self {
        Self {
            status_policy: StatusPolicy::Legacy,
            empty_list_is_error: true,
            verify_account_exists: false,
        }
    }
}

impl CompatConfig {
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let status_policy = match env::var("STATUS_CODES") {
            Ok(raw) => raw.parse().unwrap_or_else(|e| {
                tracing::warn!(error = %e, "Ignoring STATUS_CODES");
                defaults.status_policy
            }),
            Err(_) => defaults.status_policy,
        };

        Self {
            status_policy,
            empty_list_is_error: env::var("EMPTY_LIST_IS_ERROR")
                .ok()
                .and_then(|v| parse_flag(&v))
                .unwrap_or(defaults.empty_list_is_error),
            verify_account_exists: env::var("AUTH_VERIFY_ACCOUNT")
                .ok()
                .and_then(|v| parse_flag(&v))
                .unwrap_or(defaults.verify_account_exists),
        }
    }
}
