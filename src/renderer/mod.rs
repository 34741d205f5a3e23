//! Rendering boundary
//!
//! Builds vertex data for an external renderer. No graphics API lives here.

pub mod frame;
pub mod shapes;
pub mod vertex;

pub use frame::{Frame, LogRenderer, Renderer};
pub use vertex::Vertex;
