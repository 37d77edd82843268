//! Shared test harness modules for the TOPSIS CLI.

use super::*;
use crate::rank::{OutputFormat, RankConfig, TiePolicy, config_from_layers_for_test, run_rank_with};

mod helpers;
