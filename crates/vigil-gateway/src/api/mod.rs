//! Front-end API: model lifecycle, feature catalogue, system status.
//!
//! Every route answers with a JSON object; load failures are converted to a
//! `{status, message, model_loaded}` envelope instead of escaping the handler.

pub mod features;
pub mod model;
pub mod system;

pub use features::{FeatureDescriptor, Features, FEATURES};
pub use model::{load_model, model_status, LoadResponse, ModelStatus};
pub use system::{features, system_status, SystemStatus};
