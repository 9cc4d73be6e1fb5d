//! Named functions handed to the loader when deserializing an artifact.

use ndarray::ArrayViewD;

use crate::eval;

/// Signature shared by every metric the artifact can reference.
pub type MetricFn = for<'a, 'b> fn(ArrayViewD<'a, f32>, ArrayViewD<'b, f32>) -> f32;

/// Ordered name -> function table.
#[derive(Clone, Default)]
pub struct CustomObjects {
    entries: Vec<(&'static str, MetricFn)>,
}

impl CustomObjects {
    pub fn new() -> Self {
        Self { entries: Vec::new() }
    }

    /// The three metrics the video classifier was compiled with.
    pub fn standard() -> Self {
        let mut objs = Self::new();
        objs.register("recall_m", recall);
        objs.register("precision_m", precision);
        objs.register("f1_m", f1);
        objs
    }

    /// Register `f` under `name`, replacing any previous entry with that name.
    pub fn register(&mut self, name: &'static str, f: MetricFn) {
        if let Some(slot) = self.entries.iter_mut().find(|(n, _)| *n == name) {
            slot.1 = f;
        } else {
            self.entries.push((name, f));
        }
    }

    pub fn get(&self, name: &str) -> Option<MetricFn> {
        self.entries.iter().find(|(n, _)| *n == name).map(|(_, f)| *f)
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|(n, _)| *n)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn recall(y_true: ArrayViewD<'_, f32>, y_pred: ArrayViewD<'_, f32>) -> f32 {
    eval::recall_m(&y_true, &y_pred)
}

fn precision(y_true: ArrayViewD<'_, f32>, y_pred: ArrayViewD<'_, f32>) -> f32 {
    eval::precision_m(&y_true, &y_pred)
}

fn f1(y_true: ArrayViewD<'_, f32>, y_pred: ArrayViewD<'_, f32>) -> f32 {
    eval::f1_m(&y_true, &y_pred)
}

impl std::fmt::Debug for CustomObjects {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.names()).finish()
    }
}
