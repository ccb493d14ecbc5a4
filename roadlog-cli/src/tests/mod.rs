//! Shared test harness modules for the roadlog CLI.

use super::*;

mod helpers;
