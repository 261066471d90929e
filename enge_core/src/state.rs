//! # Reactive State Controller
//!
//! One controller instance per calculator. It owns the current raw inputs
//! and derives validation errors and computed output on every mutation,
//! exposing the result as an immutable snapshot.
//!
//! The pipeline is strict: the presence of any field error implies the
//! absence of a result, so a stale output can never be shown against inputs
//! it was not computed from. Recomputation is cheap, pure and synchronous;
//! input debouncing is an optimization for the presentation layer, never a
//! correctness requirement here.
//!
//! ## Example
//!
//! ```rust
//! use enge_core::state::{BeamDeflection, Controller, Phase};
//!
//! let mut controller = Controller::<BeamDeflection>::new();
//! assert_eq!(controller.phase(), Phase::Empty);
//!
//! let snapshot = controller.update(|inputs| enge_core::calculations::beam::BeamInputs {
//!     p: Some(1000.0),
//!     ..inputs
//! });
//! // Six fields still missing: errors present, output absent
//! assert!(snapshot.output.is_none());
//! ```

use crate::calculations::{beam, buckling, fixed_beam, torsion};

/// A calculation engine pluggable into a [`Controller`].
///
/// The four calculators implement this with their own input, error and
/// output types; the controller supplies the shared state-machine wiring so
/// the validate-normalize-compute-format sequence is written once.
pub trait Engine {
    /// Raw inputs: optional values plus unit tags, replaced wholesale on
    /// every edit
    type Inputs: Clone + Default + PartialEq;
    /// Per-field errors; `Default` means valid
    type Errors: Clone + Default + PartialEq;
    /// Display-ready output
    type Output: Clone;

    /// Derive field errors from raw inputs.
    fn validate(inputs: &Self::Inputs) -> Self::Errors;

    /// Run the full normalize-calculate-format pipeline. Only invoked once
    /// [`Engine::validate`] came back clean.
    fn compute(inputs: &Self::Inputs) -> Self::Output;
}

/// Immutable state snapshot published after every mutation.
pub struct UiState<E: Engine> {
    pub inputs: E::Inputs,
    pub errors: E::Errors,
    /// Present if and only if `errors` carries no messages (after the first
    /// mutation; the initial empty state has neither)
    pub output: Option<E::Output>,
}

impl<E: Engine> Clone for UiState<E> {
    fn clone(&self) -> Self {
        UiState {
            inputs: self.inputs.clone(),
            errors: self.errors.clone(),
            output: self.output.clone(),
        }
    }
}

impl<E: Engine> Default for UiState<E> {
    fn default() -> Self {
        UiState {
            inputs: E::Inputs::default(),
            errors: E::Errors::default(),
            output: None,
        }
    }
}

/// Coarse lifecycle phase of a controller, derived from its snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// No input yet; no errors shown, no output
    Empty,
    /// Validation errors present, output absent
    Invalid,
    /// No errors, output present
    Valid,
}

/// Holds the state for one calculator and recomputes it on every mutation.
pub struct Controller<E: Engine> {
    state: UiState<E>,
}

impl<E: Engine> Controller<E> {
    pub fn new() -> Self {
        Controller {
            state: UiState::default(),
        }
    }

    /// Current snapshot.
    pub fn state(&self) -> &UiState<E> {
        &self.state
    }

    /// Lifecycle phase of the current snapshot.
    pub fn phase(&self) -> Phase {
        if self.state.inputs == E::Inputs::default() && self.state.output.is_none() {
            Phase::Empty
        } else if self.state.errors == E::Errors::default() {
            Phase::Valid
        } else {
            Phase::Invalid
        }
    }

    /// Apply an input mutation and republish the snapshot.
    ///
    /// The closure receives the current inputs by value and returns the
    /// replacement (copy-with-field-changed). Validation runs on the new
    /// inputs; when clean, the full pipeline produces a fresh output,
    /// otherwise the output is cleared.
    pub fn update<F>(&mut self, mutate: F) -> &UiState<E>
    where
        F: FnOnce(E::Inputs) -> E::Inputs,
    {
        let inputs = mutate(self.state.inputs.clone());
        let errors = E::validate(&inputs);
        let output = if errors == E::Errors::default() {
            Some(E::compute(&inputs))
        } else {
            None
        };
        self.state = UiState {
            inputs,
            errors,
            output,
        };
        &self.state
    }
}

impl<E: Engine> Default for Controller<E> {
    fn default() -> Self {
        Self::new()
    }
}

/// Cantilever beam deflection calculator.
pub struct BeamDeflection;

impl Engine for BeamDeflection {
    type Inputs = beam::BeamInputs;
    type Errors = beam::BeamErrors;
    type Output = beam::BeamOutput;

    fn validate(inputs: &Self::Inputs) -> Self::Errors {
        beam::validate(inputs)
    }

    fn compute(inputs: &Self::Inputs) -> Self::Output {
        beam::format_for_ui(&beam::calculate(&beam::to_si(inputs)))
    }
}

/// Fixed-fixed beam calculator.
pub struct FixedFixedBeam;

impl Engine for FixedFixedBeam {
    type Inputs = fixed_beam::FixedBeamInputs;
    type Errors = fixed_beam::FixedBeamErrors;
    type Output = fixed_beam::FixedBeamOutput;

    fn validate(inputs: &Self::Inputs) -> Self::Errors {
        fixed_beam::validate(inputs)
    }

    fn compute(inputs: &Self::Inputs) -> Self::Output {
        fixed_beam::format_for_ui(&fixed_beam::calculate(&fixed_beam::to_si(inputs)))
    }
}

/// Column buckling calculator.
pub struct ColumnBuckling;

impl Engine for ColumnBuckling {
    type Inputs = buckling::BucklingInputs;
    type Errors = buckling::BucklingErrors;
    type Output = buckling::BucklingOutput;

    fn validate(inputs: &Self::Inputs) -> Self::Errors {
        buckling::validate(inputs)
    }

    fn compute(inputs: &Self::Inputs) -> Self::Output {
        buckling::calculate(&buckling::resolve(inputs))
    }
}

/// Shaft torsion calculator.
pub struct ShaftTorsion;

impl Engine for ShaftTorsion {
    type Inputs = torsion::TorsionInputs;
    type Errors = torsion::TorsionErrors;
    type Output = torsion::TorsionOutput;

    fn validate(inputs: &Self::Inputs) -> Self::Errors {
        torsion::validate(inputs)
    }

    fn compute(inputs: &Self::Inputs) -> Self::Output {
        torsion::calculate(&torsion::to_si(inputs))
    }
}
