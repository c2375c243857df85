pub mod components;
pub mod morphology;

pub use components::{connected_components, ComponentStats};
pub use morphology::dilate;
