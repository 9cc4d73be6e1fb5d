//! Binary classification metrics bound into the model artifact.
//!
//! The artifact was compiled with these three metrics and refers to them by
//! name (`precision_m`, `recall_m`, `f1_m`), so the loader must be able to
//! supply them. They follow the batch-wise formulation: every term is
//! `round(clip(x, 0, 1))` summed over the whole tensor.
//!
//! Rounding is half-to-even to match the framework the artifact was trained
//! with: a score of exactly `0.5` counts as negative.

use ndarray::{ArrayBase, Data, Dimension, Zip};

/// Fuzz factor added to every denominator.
pub const EPSILON: f32 = 1e-7;

#[inline]
fn clip_round(v: f32) -> f32 {
    v.clamp(0.0, 1.0).round_ties_even()
}

fn positives<S, D>(a: &ArrayBase<S, D>) -> f32
where
    S: Data<Elem = f32>,
    D: Dimension,
{
    a.iter().map(|&v| clip_round(v)).sum()
}

fn true_positives<S1, S2, D>(y_true: &ArrayBase<S1, D>, y_pred: &ArrayBase<S2, D>) -> f32
where
    S1: Data<Elem = f32>,
    S2: Data<Elem = f32>,
    D: Dimension,
{
    Zip::from(y_true)
        .and(y_pred)
        .fold(0.0, |acc, &t, &p| acc + clip_round(t * p))
}

/// Fraction of predicted positives that are real positives.
///
/// # Panics
/// If `y_true` and `y_pred` differ in shape.
pub fn precision_m<S1, S2, D>(y_true: &ArrayBase<S1, D>, y_pred: &ArrayBase<S2, D>) -> f32
where
    S1: Data<Elem = f32>,
    S2: Data<Elem = f32>,
    D: Dimension,
{
    let tp = true_positives(y_true, y_pred);
    tp / (positives(y_pred) + EPSILON)
}

/// Fraction of real positives that were predicted.
///
/// # Panics
/// If `y_true` and `y_pred` differ in shape.
pub fn recall_m<S1, S2, D>(y_true: &ArrayBase<S1, D>, y_pred: &ArrayBase<S2, D>) -> f32
where
    S1: Data<Elem = f32>,
    S2: Data<Elem = f32>,
    D: Dimension,
{
    let tp = true_positives(y_true, y_pred);
    tp / (positives(y_true) + EPSILON)
}

/// Harmonic mean of [`precision_m`] and [`recall_m`].
///
/// # Panics
/// If `y_true` and `y_pred` differ in shape.
pub fn f1_m<S1, S2, D>(y_true: &ArrayBase<S1, D>, y_pred: &ArrayBase<S2, D>) -> f32
where
    S1: Data<Elem = f32>,
    S2: Data<Elem = f32>,
    D: Dimension,
{
    let precision = precision_m(y_true, y_pred);
    let recall = recall_m(y_true, y_pred);
    2.0 * ((precision * recall) / (precision + recall + EPSILON))
}
