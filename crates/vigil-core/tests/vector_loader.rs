//! JSON metric vector loader shared by metric tests.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]
#![allow(dead_code)]

use std::fs;

use ndarray::{ArrayD, IxDyn};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct MetricVector {
    pub description: String,
    pub shape: Vec<usize>,
    pub y_true: Vec<f32>,
    pub y_pred: Vec<f32>,
    pub expect: Expected,
}

#[derive(Debug, Deserialize)]
pub struct Expected {
    pub precision: f32,
    pub recall: f32,
    pub f1: f32,
}

impl MetricVector {
    pub fn arrays(&self) -> (ArrayD<f32>, ArrayD<f32>) {
        let t = ArrayD::from_shape_vec(IxDyn(&self.shape), self.y_true.clone())
            .expect("y_true does not match shape");
        let p = ArrayD::from_shape_vec(IxDyn(&self.shape), self.y_pred.clone())
            .expect("y_pred does not match shape");
        (t, p)
    }
}

pub fn load(name: &str) -> MetricVector {
    let s = fs::read_to_string(format!("tests/vectors/{name}")).unwrap();
    serde_json::from_str(&s).unwrap()
}
