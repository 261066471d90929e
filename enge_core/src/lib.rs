//! # enge_core - Structural Engineering Calculation Engine
//!
//! `enge_core` is the computational core behind a set of structural
//! calculators: beam deflection, fixed-fixed beam, column buckling and shaft
//! torsion. It takes heterogeneous, possibly-invalid user input expressed in
//! mixed units, normalizes it to SI, runs deterministic closed-form physics
//! and hands back validated, unit-converted results together with field-level
//! error diagnostics.
//!
//! ## Design Philosophy
//!
//! - **Stateless engines**: pure functions from inputs to results
//! - **JSON-First**: all inputs, outputs and error maps implement
//!   Serialize/Deserialize
//! - **Field-scoped errors**: validation never aborts, it annotates fields
//! - **SI hub**: every conversion routes through one canonical unit per
//!   physical dimension
//!
//! ## Quick Start
//!
//! ```rust
//! use enge_core::calculations::beam::{self, BeamInputs};
//! use enge_core::units::{ForceUnit, LengthUnit};
//!
//! let inputs = BeamInputs {
//!     p: Some(1000.0),
//!     p_unit: ForceUnit::N,
//!     l: Some(2000.0),
//!     l_unit: LengthUnit::Mm,
//!     c: Some(50.0),
//!     i: Some(8_000_000.0),
//!     fy: Some(250.0),
//!     e: Some(200.0),
//!     fs_adm: Some(1.5),
//!     ..Default::default()
//! };
//!
//! let errors = beam::validate(&inputs);
//! assert!(errors.is_valid());
//!
//! let output = beam::format_for_ui(&beam::calculate(&beam::to_si(&inputs)));
//! println!("δ = {:.3} mm ({})", output.delta_obt_mm, output.status_deflection);
//! ```
//!
//! ## Modules
//!
//! - [`calculations`] - the four calculation engines
//! - [`state`] - reactive per-calculator state controllers
//! - [`units`] - closed unit vocabularies with SI conversion
//! - [`parse`] - locale-flexible decimal parsing
//! - [`format`] - display-number formatting
//! - [`errors`] - field-scoped validation errors
//! - [`materials`] - built-in material property table

pub mod calculations;
pub mod errors;
pub mod format;
pub mod materials;
pub mod parse;
pub mod state;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use errors::ValidationError;
pub use state::{Controller, Engine, Phase, UiState};
