//! Slice normalization.
//!
//! # The Problem: Raw Ranges
//!
//! Indexing syntax hands over ranges the way people write them: `-1` means "the last index",
//! `3..` means "from 3 to the end", and the length of the dimension may not be known yet when
//! the range is written down. The striding layer needs none of that. It needs a canonical
//! [`SliceDescriptor`] `(first, last, step, size)` with non-negative bounds, where `last` is
//! the last *selected* element and `size` is how many elements are selected.
//!
//! # The Solution: Two Phases
//!
//! 1. [`normalize`] works without an extent length. It validates the step, canonicalizes
//!    non-negative bounds, and **defers** anything it cannot decide (negative bounds, the
//!    open end [`END`]) as a descriptor with `size == 0`.
//! 2. [`normalize_in`] / [`SliceDescriptor::resolve`] take the concrete length `n`, wrap
//!    negative indices (`i < 0` becomes `n + i`), replace [`END`] with `n - 1`, bounds-check,
//!    and re-derive the canonical descriptor.
//!
//! Both phases are `const fn`, so the same rules run at compile time through
//! [`StaticSlice`] / [`InExtent`] and at run time through [`Slice`].
//!
//! ```rust
//! use tensor_extents::slice::{Slice, END};
//!
//! let d = Slice::new(0, END, 1).normalize_in(5).unwrap();
//! assert_eq!((d.first(), d.last(), d.step(), d.size()), (0, 4, 1, 5));
//!
//! let deferred = Slice::new(-3, -1, 1).normalize().unwrap();
//! assert!(deferred.is_deferred());
//! let d = deferred.resolve(5).unwrap();
//! assert_eq!((d.first(), d.last(), d.size()), (2, 4, 3));
//! ```

use crate::tensor::Result;
use std::fmt;
use std::ops::{RangeFrom, RangeFull, RangeInclusive, RangeToInclusive};
use thiserror::Error;

pub mod list;
mod static_slice;

pub use list::{for_each_slice, resolve_all, Cons, Nil, PushBack, SliceList, SliceSequence};
pub use static_slice::{ConstSlice, InExtent, StaticSlice};

/// Open-end sentinel: "up to and including the last valid index".
pub const END: isize = isize::MAX;

/// Why a slice or a slice-sequence position could not be resolved.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SliceError {
    #[error("slice step cannot be zero")]
    ZeroStep,
    #[error("slice step {step} is negative, only ascending slices are supported")]
    NegativeStep { step: isize },
    #[error("slice first index {first} is after last index {last}")]
    Reversed { first: isize, last: isize },
    #[error("index {index} is still negative for an extent of length {extent}")]
    Unresolvable { index: isize, extent: usize },
    #[error("index {index} is out of bounds for an extent of length {extent}")]
    OutOfBounds { index: isize, extent: usize },
    #[error("position {index} is out of bounds for a slice sequence of length {len}")]
    SequenceIndex { index: usize, len: usize },
    #[error("{slices} slices cannot index extents of rank {rank}")]
    RankMismatch { slices: usize, rank: usize },
}

impl SliceError {
    /// A fixed message for `const` panics, which cannot format fields.
    pub const fn message(&self) -> &'static str {
        match self {
            SliceError::ZeroStep => "slice step cannot be zero",
            SliceError::NegativeStep { .. } => "slice step cannot be negative",
            SliceError::Reversed { .. } => "slice first index is after last index",
            SliceError::Unresolvable { .. } => "slice index is still negative for the extent",
            SliceError::OutOfBounds { .. } => "slice index is out of bounds for the extent",
            SliceError::SequenceIndex { .. } => "slice sequence position is out of bounds",
            SliceError::RankMismatch { .. } => "slice count does not match the extent rank",
        }
    }
}

/// Canonical description of the indices selected along one dimension.
///
/// Invariants: `step > 0`; `size == 0` exactly when resolution was deferred (negative or
/// open-ended bounds, no extent known yet); otherwise `size` elements `first, first + step,
/// ..., last` are selected and `last` is the final one of them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SliceDescriptor {
    first: isize,
    last: isize,
    step: isize,
    size: usize,
}

impl SliceDescriptor {
    pub const fn first(&self) -> isize {
        self.first
    }

    pub const fn last(&self) -> isize {
        self.last
    }

    pub const fn step(&self) -> isize {
        self.step
    }

    /// Number of selected elements, `0` while deferred.
    pub const fn size(&self) -> usize {
        self.size
    }

    /// Returns `true` if the descriptor still needs an extent length to be meaningful.
    pub const fn is_deferred(&self) -> bool {
        self.size == 0
    }

    /// Returns `true` if the bounds are concrete, non-negative indices.
    pub const fn is_resolved(&self) -> bool {
        self.size > 0 && self.first >= 0 && self.last >= 0 && self.last != END
    }

    /// Resolves the descriptor against an extent of length `extent`.
    ///
    /// Resolving an already resolved descriptor against the same length returns it unchanged.
    ///
    /// # Errors
    ///
    /// See [`normalize_in`].
    pub const fn resolve(self, extent: usize) -> std::result::Result<Self, SliceError> {
        normalize_in(self.first, self.last, self.step, extent)
    }

    /// The selected indices in ascending order; empty unless [`is_resolved`](Self::is_resolved).
    pub fn iter(&self) -> impl Iterator<Item = isize> {
        let (first, step) = (self.first, self.step);
        let count = if self.is_resolved() { self.size } else { 0 };
        (0..count).map(move |k| first + k as isize * step)
    }

    const fn deferred(first: isize, last: isize, step: isize) -> Self {
        Self {
            first,
            last,
            step,
            size: 0,
        }
    }
}

impl fmt::Display for SliceDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "slice( {}, {}, {} ) size {}",
            self.first, self.last, self.step, self.size
        )
    }
}

/// Wraps a possibly negative index against an extent of length `extent`.
///
/// Negative values count from the end: `-1` is `extent - 1`. Non-negative values are
/// returned as they are, without an upper-bound check.
///
/// # Errors
///
/// Returns `SliceError::Unresolvable` if the index is still negative after wrapping.
pub const fn normalize_value(
    extent: usize,
    value: isize,
) -> std::result::Result<isize, SliceError> {
    if value >= 0 {
        return Ok(value);
    }
    let wrapped = extent as isize + value;
    if wrapped < 0 {
        return Err(SliceError::Unresolvable {
            index: value,
            extent,
        });
    }
    Ok(wrapped)
}

const fn check_step(step: isize) -> std::result::Result<(), SliceError> {
    if step == 0 {
        return Err(SliceError::ZeroStep);
    }
    if step < 0 {
        return Err(SliceError::NegativeStep { step });
    }
    Ok(())
}

/// Phase one: normalizes a raw slice without knowing the extent length.
///
/// - `first == last` selects exactly one element, whatever its sign.
/// - Both bounds negative, or of mixed sign, or an open end: deferred, `size == 0`.
/// - Both bounds non-negative: `last` is moved back onto the final selected element and
///   `size = (last - first) / step + 1`.
///
/// # Errors
///
/// `ZeroStep` / `NegativeStep` for a non-positive step, `Reversed` for non-negative bounds
/// with `first > last`.
pub const fn normalize(
    first: isize,
    last: isize,
    step: isize,
) -> std::result::Result<SliceDescriptor, SliceError> {
    if let Err(e) = check_step(step) {
        return Err(e);
    }
    if first == last {
        return Ok(SliceDescriptor {
            first,
            last,
            step,
            size: 1,
        });
    }
    if first >= 0 && last >= 0 {
        if first > last {
            return Err(SliceError::Reversed { first, last });
        }
        if last == END {
            return Ok(SliceDescriptor::deferred(first, last, step));
        }
        return Ok(canonical(first, last, step));
    }
    Ok(SliceDescriptor::deferred(first, last, step))
}

/// Phase two: normalizes a raw slice against an extent of length `extent`.
///
/// Negative bounds are wrapped with [`normalize_value`] and [`END`] becomes `extent - 1`;
/// the result is then canonicalized as in [`normalize`] and always has `size >= 1`.
///
/// # Errors
///
/// - `ZeroStep` / `NegativeStep` for a non-positive step;
/// - `Unresolvable` for a bound still negative after wrapping;
/// - `OutOfBounds` if `first` or the last selected element is `>= extent`, which includes
///   every slice of an empty extent;
/// - `Reversed` if the wrapped `first` is after the wrapped `last`.
pub const fn normalize_in(
    first: isize,
    last: isize,
    step: isize,
    extent: usize,
) -> std::result::Result<SliceDescriptor, SliceError> {
    if let Err(e) = check_step(step) {
        return Err(e);
    }
    let n = extent as isize;

    let f = match normalize_value(extent, first) {
        Ok(f) => f,
        Err(e) => return Err(e),
    };
    let l = if last == END {
        n - 1
    } else {
        match normalize_value(extent, last) {
            Ok(l) => l,
            Err(e) => return Err(e),
        }
    };

    if f >= n {
        return Err(SliceError::OutOfBounds { index: f, extent });
    }
    if f > l {
        return Err(SliceError::Reversed { first: f, last: l });
    }
    let d = canonical(f, l, step);
    if d.last >= n {
        return Err(SliceError::OutOfBounds {
            index: d.last,
            extent,
        });
    }
    Ok(d)
}

// Requires 0 <= first <= last and step > 0.
const fn canonical(first: isize, last: isize, step: isize) -> SliceDescriptor {
    let span = last - first;
    SliceDescriptor {
        first,
        last: last - span % step,
        step,
        size: (span / step + 1) as usize,
    }
}

/// Anything that stands for one already-normalized dimension of an index expression.
pub trait SliceLike {
    fn descriptor(&self) -> SliceDescriptor;
}

impl SliceLike for SliceDescriptor {
    fn descriptor(&self) -> SliceDescriptor {
        *self
    }
}

/// A raw `(first, last, step)` range as written at an indexing call site.
///
/// `last` is inclusive and may be [`END`]; either bound may be negative.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Slice {
    first: isize,
    last: isize,
    step: isize,
}

impl Slice {
    pub const fn new(first: isize, last: isize, step: isize) -> Self {
        Self { first, last, step }
    }

    /// The whole dimension.
    pub const fn all() -> Self {
        Self::new(0, END, 1)
    }

    /// A single index.
    pub const fn at(index: isize) -> Self {
        Self::new(index, index, 1)
    }

    /// Returns the same range with a different step.
    pub const fn with_step(self, step: isize) -> Self {
        Self { step, ..self }
    }

    pub const fn first(&self) -> isize {
        self.first
    }

    pub const fn last(&self) -> isize {
        self.last
    }

    pub const fn step(&self) -> isize {
        self.step
    }

    /// Phase-one normalization, see [`normalize`].
    ///
    /// # Errors
    ///
    /// Returns `TensorError::IndexOutOfRange` for an invalid step or reversed bounds.
    pub fn normalize(&self) -> Result<SliceDescriptor> {
        let d = normalize(self.first, self.last, self.step)?;
        if d.is_deferred() {
            tracing::debug!(slice = %self, "slice resolution deferred until the extent is known");
        }
        Ok(d)
    }

    /// Phase-two normalization against an extent of length `extent`, see [`normalize_in`].
    ///
    /// # Errors
    ///
    /// Returns `TensorError::IndexOutOfRange` if the slice does not fit the extent.
    pub fn normalize_in(&self, extent: usize) -> Result<SliceDescriptor> {
        let d = normalize_in(self.first, self.last, self.step, extent)?;
        tracing::trace!(slice = %self, extent, descriptor = %d, "slice resolved");
        Ok(d)
    }
}

impl fmt::Display for Slice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "slice( {}, {}, {} )", self.first, self.last, self.step)
    }
}

impl From<isize> for Slice {
    fn from(index: isize) -> Self {
        Slice::at(index)
    }
}

impl From<RangeInclusive<isize>> for Slice {
    fn from(r: RangeInclusive<isize>) -> Self {
        Slice::new(*r.start(), *r.end(), 1)
    }
}

impl From<RangeFrom<isize>> for Slice {
    fn from(r: RangeFrom<isize>) -> Self {
        Slice::new(r.start, END, 1)
    }
}

impl From<RangeToInclusive<isize>> for Slice {
    fn from(r: RangeToInclusive<isize>) -> Self {
        Slice::new(0, r.end, 1)
    }
}

impl From<RangeFull> for Slice {
    fn from(_: RangeFull) -> Self {
        Slice::all()
    }
}
