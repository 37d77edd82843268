//! Core domain types and the TOPSIS decision engine.
//!
//! TOPSIS (Technique for Order Preference by Similarity to Ideal Solution)
//! ranks alternatives by how close they sit to the best attainable outcome
//! and how far from the worst, across several weighted criteria.
//!
//! Inputs are validated on construction so the engine only ever sees
//! well-formed data:
//! - [`DecisionMatrix`] holds N >= 1 labelled alternatives with M >= 1 finite
//!   criterion values each;
//! - [`Weights`] holds one non-negative multiplier per criterion;
//! - [`Impacts`] holds one [`Impact`] (maximise or minimise) per criterion.
//!
//! [`evaluate`] then returns an [`Evaluation`] carrying a closeness score in
//! `0.0..=1.0` and a rank for every alternative, in input order. Every
//! failure is a [`TopsisError`]; nothing panics on bad input.
//!
//! # Examples
//!
//! ```
//! use topsis_core::{DecisionMatrix, Impacts, Weights, evaluate};
//!
//! # fn main() -> Result<(), topsis_core::TopsisError> {
//! let matrix = DecisionMatrix::parse([
//!     ("Phone A", ["250", "16", "12"]),
//!     ("Phone B", ["200", "16", "8"]),
//!     ("Phone C", ["300", "32", "16"]),
//! ])?;
//! let weights: Weights = "0.25,0.25,0.5".parse()?;
//! let impacts: Impacts = "-,+,+".parse()?;
//!
//! let evaluation = evaluate(&matrix, &weights, &impacts)?;
//! assert_eq!(evaluation.ranks().len(), 3);
//! assert!(evaluation.scores().iter().all(|score| (0.0..=1.0).contains(score)));
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod engine;
mod error;
mod evaluation;
mod impact;
mod matrix;
mod ranking;
mod weights;

pub use engine::{IdealSolution, Separation, evaluate, evaluate_with};
pub use error::{ShapeSubject, TopsisError};
pub use evaluation::{Evaluation, RankedAlternative};
pub use impact::{Impact, Impacts};
pub use matrix::{Alternative, DecisionMatrix, parse_value};
pub use ranking::RankingPolicy;
pub use weights::Weights;
