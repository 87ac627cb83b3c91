use std::fmt;
use std::sync::Arc;

use crate::traits::CursorContext;
use crate::types::{CursorShape, EditingMode, InputMode};

/// Callable consulted by [`ShapeResolver::Deferred`] on every resolution.
pub type ShapeProducer = dyn Fn() -> ShapeInput + Send + Sync;

/// Loosely typed cursor shape configuration, as accepted at the API
/// boundary: nothing, a bare shape, or a full resolver.
///
/// Most call sites never name this type; `From` impls let them pass a
/// `CursorShape`, an `Option<CursorShape>`, or a `ShapeResolver`
/// directly to [`to_resolver`] and [`ShapeResolver::deferred`].
#[derive(Debug, Clone, Default)]
pub enum ShapeInput {
    /// No preference; normalizes to a fixed [`CursorShape::Block`].
    #[default]
    Unspecified,
    /// A bare shape; normalizes to a fixed resolver holding it.
    Shape(CursorShape),
    /// An existing resolver; normalization passes it through untouched.
    Resolver(ShapeResolver),
}

impl From<CursorShape> for ShapeInput {
    fn from(shape: CursorShape) -> Self {
        ShapeInput::Shape(shape)
    }
}

impl From<Option<CursorShape>> for ShapeInput {
    fn from(shape: Option<CursorShape>) -> Self {
        match shape {
            Some(shape) => ShapeInput::Shape(shape),
            None => ShapeInput::Unspecified,
        }
    }
}

impl From<ShapeResolver> for ShapeInput {
    fn from(resolver: ShapeResolver) -> Self {
        ShapeInput::Resolver(resolver)
    }
}

/// Decides which cursor shape to draw for the current application state.
///
/// All variants are cheap value objects, safe to clone and to share
/// across threads. `Deferred` clones share the same producer.
#[derive(Clone)]
pub enum ShapeResolver {
    /// Always yields the held shape, ignoring the context.
    Fixed(CursorShape),
    /// Follows the host's editing mode: beam while inserting under a
    /// modal discipline, underline while replacing, block otherwise.
    ModeAdaptive,
    /// Re-asks the producer on every resolution and delegates to
    /// whatever it returns. Deliberately never cached, so the producer
    /// can switch behavior at runtime without the holder noticing.
    Deferred(Arc<ShapeProducer>),
}

impl ShapeResolver {
    /// A resolver that always yields `shape`.
    pub fn fixed(shape: CursorShape) -> Self {
        ShapeResolver::Fixed(shape)
    }

    /// A resolver that follows the host's editing and input modes.
    pub fn mode_adaptive() -> Self {
        ShapeResolver::ModeAdaptive
    }

    /// A resolver that defers to `producer` on every resolution.
    ///
    /// The producer may return anything convertible to [`ShapeInput`]
    /// and may answer differently from call to call. Callers needing a
    /// stable answer must memoize upstream; this crate will not.
    pub fn deferred<F, I>(producer: F) -> Self
    where
        F: Fn() -> I + Send + Sync + 'static,
        I: Into<ShapeInput>,
    {
        ShapeResolver::Deferred(Arc::new(move || producer().into()))
    }

    /// Resolve the shape to draw right now.
    ///
    /// Total and synchronous; called on the render hot path.
    pub fn resolve<C: CursorContext>(&self, app: &C) -> CursorShape {
        match self {
            ShapeResolver::Fixed(shape) => *shape,
            ShapeResolver::ModeAdaptive => {
                if app.editing_mode() == EditingMode::Vi {
                    match app.input_mode() {
                        InputMode::Insert => return CursorShape::Beam,
                        InputMode::Replace => return CursorShape::Underline,
                        InputMode::Navigation => {}
                    }
                }
                CursorShape::Block
            }
            ShapeResolver::Deferred(producer) => to_resolver(producer()).resolve(app),
        }
    }
}

impl Default for ShapeResolver {
    fn default() -> Self {
        ShapeResolver::Fixed(CursorShape::Block)
    }
}

impl fmt::Debug for ShapeResolver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShapeResolver::Fixed(shape) => f.debug_tuple("Fixed").field(shape).finish(),
            ShapeResolver::ModeAdaptive => f.write_str("ModeAdaptive"),
            ShapeResolver::Deferred(_) => f.write_str("Deferred(..)"),
        }
    }
}

/// Normalize loosely typed configuration into a concrete resolver.
///
/// Absence becomes the default fixed block, a bare shape becomes a
/// fixed resolver, and an existing resolver moves through unchanged.
pub fn to_resolver(value: impl Into<ShapeInput>) -> ShapeResolver {
    match value.into() {
        ShapeInput::Unspecified => ShapeResolver::default(),
        ShapeInput::Shape(shape) => ShapeResolver::Fixed(shape),
        ShapeInput::Resolver(resolver) => resolver,
    }
}
