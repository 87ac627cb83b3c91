pub mod resolver;
pub mod traits;
pub mod types;

pub use crate::resolver::{ShapeInput, ShapeProducer, ShapeResolver, to_resolver};
pub use crate::traits::CursorContext;
pub use crate::types::{CursorShape, EditingMode, InputMode};
