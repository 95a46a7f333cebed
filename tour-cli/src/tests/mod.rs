//! Shared test harness modules for the tour CLI.

use super::*;

mod helpers;
