//! Slices whose bounds are type parameters.
//!
//! A [`StaticSlice`] carries `(first, last, step)` as const generics and exposes its phase-one
//! descriptor as an associated constant, so an invalid slice written in a type is rejected
//! when that constant is evaluated during compilation rather than at run time:
//!
//! ```compile_fail
//! use tensor_extents::slice::{ConstSlice, SliceDescriptor, StaticSlice};
//! const BAD: SliceDescriptor = <StaticSlice<3, 1, 1> as ConstSlice>::DESCRIPTOR;
//! ```
//!
//! [`InExtent`] binds a static slice to a statically known extent length and performs the
//! second phase at compile time as well.

use super::{normalize, SliceDescriptor, SliceLike};
use crate::tensor::Result;
use std::marker::PhantomData;

/// A slice with a descriptor known at compile time.
pub trait ConstSlice {
    const DESCRIPTOR: SliceDescriptor;
}

impl<C: ConstSlice> SliceLike for C {
    fn descriptor(&self) -> SliceDescriptor {
        C::DESCRIPTOR
    }
}

/// Zero-sized slice `(F, L, S)`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct StaticSlice<const F: isize, const L: isize, const S: isize>;

impl<const F: isize, const L: isize, const S: isize> ConstSlice for StaticSlice<F, L, S> {
    const DESCRIPTOR: SliceDescriptor = match normalize(F, L, S) {
        Ok(d) => d,
        Err(e) => panic!("{}", e.message()),
    };
}

impl<const F: isize, const L: isize, const S: isize> StaticSlice<F, L, S> {
    /// Resolves the slice against a length only known at run time.
    ///
    /// # Errors
    ///
    /// Returns `TensorError::IndexOutOfRange` if the slice does not fit the extent.
    pub fn resolve(extent: usize) -> Result<SliceDescriptor> {
        Ok(Self::DESCRIPTOR.resolve(extent)?)
    }
}

/// The static slice `Sl` resolved against an extent of length `N`.
#[derive(Debug)]
pub struct InExtent<Sl, const N: usize>(PhantomData<Sl>);

impl<Sl, const N: usize> InExtent<Sl, N> {
    pub const fn new() -> Self {
        Self(PhantomData)
    }
}

impl<Sl, const N: usize> Default for InExtent<Sl, N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<Sl, const N: usize> Clone for InExtent<Sl, N> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<Sl, const N: usize> Copy for InExtent<Sl, N> {}

impl<Sl: ConstSlice, const N: usize> ConstSlice for InExtent<Sl, N> {
    const DESCRIPTOR: SliceDescriptor = match Sl::DESCRIPTOR.resolve(N) {
        Ok(d) => d,
        Err(e) => panic!("{}", e.message()),
    };
}
