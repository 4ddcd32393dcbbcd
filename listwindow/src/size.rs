use alloc::string::String;
use alloc::sync::Arc;
use core::fmt;

use crate::ConfigurationError;

/// A per-item size function: `(index, item_props) -> size`.
pub type SizeFn<P> = Arc<dyn Fn(usize, &P) -> f64 + Send + Sync>;

/// How items are sized along the scroll axis.
///
/// `P` is the opaque item props type handed to [`ItemSize::Dynamic`] functions.
pub enum ItemSize<P = ()> {
    /// Every item has the same size.
    Fixed(f64),
    /// Every item is a percentage of the container size on the scroll axis, e.g. `"25%"`.
    Percent(String),
    /// Size depends on the index (and props).
    Dynamic(SizeFn<P>),
}

impl<P> ItemSize<P> {
    pub fn fixed(size: f64) -> Self {
        Self::Fixed(size)
    }

    pub fn percent(spec: impl Into<String>) -> Self {
        Self::Percent(spec.into())
    }

    pub fn dynamic(f: impl Fn(usize, &P) -> f64 + Send + Sync + 'static) -> Self {
        Self::Dynamic(Arc::new(f))
    }

    /// Returns `true` when the resolved size depends on the container size.
    pub fn depends_on_container(&self) -> bool {
        matches!(self, Self::Percent(_))
    }
}

impl<P> Clone for ItemSize<P> {
    fn clone(&self) -> Self {
        match self {
            Self::Fixed(v) => Self::Fixed(*v),
            Self::Percent(s) => Self::Percent(s.clone()),
            Self::Dynamic(f) => Self::Dynamic(Arc::clone(f)),
        }
    }
}

/// Functions compare by identity: re-creating the same closure counts as a change.
impl<P> PartialEq for ItemSize<P> {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Fixed(a), Self::Fixed(b)) => a == b,
            (Self::Percent(a), Self::Percent(b)) => a == b,
            (Self::Dynamic(a), Self::Dynamic(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl<P> fmt::Debug for ItemSize<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fixed(v) => f.debug_tuple("Fixed").field(v).finish(),
            Self::Percent(s) => f.debug_tuple("Percent").field(s).finish(),
            Self::Dynamic(_) => f.write_str("Dynamic(..)"),
        }
    }
}

impl<P> From<f64> for ItemSize<P> {
    fn from(size: f64) -> Self {
        Self::Fixed(size)
    }
}

/// An [`ItemSize`] with percentages already resolved against the container.
pub enum ResolvedSize<P = ()> {
    Constant(f64),
    PerItem(SizeFn<P>),
}

impl<P> ResolvedSize<P> {
    /// The size of item `index`, before any sanitizing done by the bounds cache.
    pub fn size_of(&self, index: usize, props: &P) -> f64 {
        match self {
            Self::Constant(v) => *v,
            Self::PerItem(f) => f(index, props),
        }
    }

    pub fn constant(&self) -> Option<f64> {
        match self {
            Self::Constant(v) => Some(*v),
            Self::PerItem(_) => None,
        }
    }
}

impl<P> Clone for ResolvedSize<P> {
    fn clone(&self) -> Self {
        match self {
            Self::Constant(v) => Self::Constant(*v),
            Self::PerItem(f) => Self::PerItem(Arc::clone(f)),
        }
    }
}

impl<P> fmt::Debug for ResolvedSize<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Constant(v) => f.debug_tuple("Constant").field(v).finish(),
            Self::PerItem(_) => f.write_str("PerItem(..)"),
        }
    }
}

/// Resolves a size specification into a single shape the rest of the engine works against.
///
/// `container_size` is the container extent on the scroll axis, if known. It is only consulted
/// for [`ItemSize::Percent`].
pub fn resolve_item_size<P>(
    container_size: Option<f64>,
    item_size: &ItemSize<P>,
) -> Result<ResolvedSize<P>, ConfigurationError> {
    match item_size {
        ItemSize::Fixed(size) if size.is_finite() && *size >= 0.0 => {
            Ok(ResolvedSize::Constant(*size))
        }
        ItemSize::Fixed(size) => Err(ConfigurationError::InvalidFixedSize { size: *size }),
        ItemSize::Dynamic(f) => Ok(ResolvedSize::PerItem(Arc::clone(f))),
        ItemSize::Percent(spec) => {
            let percent = parse_percent(spec).ok_or_else(|| ConfigurationError::MalformedPercent {
                spec: spec.clone(),
            })?;
            let container_size =
                container_size.ok_or_else(|| ConfigurationError::MissingContainerSize {
                    spec: spec.clone(),
                })?;
            Ok(ResolvedSize::Constant(container_size * percent / 100.0))
        }
    }
}

fn parse_percent(spec: &str) -> Option<f64> {
    let number = spec.trim().strip_suffix('%')?;
    let value = number.trim_end().parse::<f64>().ok()?;
    (value.is_finite() && value >= 0.0).then_some(value)
}
