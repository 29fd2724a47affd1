//! Slice sequences.
//!
//! An index expression such as `t[1..=3, .., -1]` produces one slice per dimension. Two
//! representations are supported by the same [`SliceSequence`] interface:
//!
//! - a heterogeneous list built from [`Cons`] and [`Nil`], whose elements may be different
//!   types (run-time [`SliceDescriptor`]s mixed with zero-sized [`StaticSlice`]s) and whose
//!   length is a compile-time constant;
//! - a homogeneous `Vec`, array or slice of descriptors, whose length is only known at run
//!   time.
//!
//! [`for_each_slice`] visits both the same way, in order, with the position of each element.
//!
//! [`StaticSlice`]: super::StaticSlice

use super::{SliceDescriptor, SliceError, SliceLike};
use crate::extents::Extents;
use crate::tensor::Result;

/// The empty slice list.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Nil;

/// A slice list with first element `head` and remaining elements `tail`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Cons<H, T> {
    head: H,
    tail: T,
}

impl<H, T> Cons<H, T> {
    pub const fn new(head: H, tail: T) -> Self {
        Self { head, tail }
    }

    pub fn head(&self) -> &H {
        &self.head
    }

    pub fn tail(&self) -> &T {
        &self.tail
    }

    /// Splits off the first element, returning it with the rest of the list.
    pub fn pop_front(self) -> (H, T) {
        (self.head, self.tail)
    }
}

/// Compile-time structure of a heterogeneous slice list.
pub trait SliceList: Sized {
    /// Number of elements.
    const LEN: usize;

    /// Descriptor of the element at `index`, `None` past the end.
    fn nth(&self, index: usize) -> Option<SliceDescriptor>;

    /// Calls `f` with `(offset + position, descriptor)` for every element in order.
    fn visit<F: FnMut(usize, SliceDescriptor)>(&self, offset: usize, f: &mut F);

    /// Prepends `slice`.
    fn push_front<S: SliceLike>(self, slice: S) -> Cons<S, Self> {
        Cons::new(slice, self)
    }

    /// Descriptor of the element at the constant position `I`.
    ///
    /// # Errors
    ///
    /// Returns `TensorError::IndexOutOfRange` if `I >= Self::LEN`.
    fn get_const<const I: usize>(&self) -> Result<SliceDescriptor> {
        self.nth(I).ok_or_else(|| {
            SliceError::SequenceIndex {
                index: I,
                len: Self::LEN,
            }
            .into()
        })
    }
}

impl SliceList for Nil {
    const LEN: usize = 0;

    fn nth(&self, _index: usize) -> Option<SliceDescriptor> {
        None
    }

    fn visit<F: FnMut(usize, SliceDescriptor)>(&self, _offset: usize, _f: &mut F) {}
}

impl<H: SliceLike, T: SliceList> SliceList for Cons<H, T> {
    const LEN: usize = 1 + T::LEN;

    fn nth(&self, index: usize) -> Option<SliceDescriptor> {
        match index {
            0 => Some(self.head.descriptor()),
            i => self.tail.nth(i - 1),
        }
    }

    fn visit<F: FnMut(usize, SliceDescriptor)>(&self, offset: usize, f: &mut F) {
        f(offset, self.head.descriptor());
        self.tail.visit(offset + 1, f);
    }
}

/// Appending to the end of a heterogeneous list, which changes its type.
pub trait PushBack<S> {
    type Output;

    fn push_back(self, slice: S) -> Self::Output;
}

impl<S: SliceLike> PushBack<S> for Nil {
    type Output = Cons<S, Nil>;

    fn push_back(self, slice: S) -> Self::Output {
        Cons::new(slice, Nil)
    }
}

impl<S: SliceLike, H: SliceLike, T: PushBack<S>> PushBack<S> for Cons<H, T> {
    type Output = Cons<H, T::Output>;

    fn push_back(self, slice: S) -> Self::Output {
        Cons::new(self.head, self.tail.push_back(slice))
    }
}

/// Ordered, position-addressable slices, one per dimension.
pub trait SliceSequence {
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Descriptor at position `index`.
    ///
    /// # Errors
    ///
    /// Returns `TensorError::IndexOutOfRange` if `index >= self.len()`.
    fn get(&self, index: usize) -> Result<SliceDescriptor>;

    /// Calls `f` with `(position, descriptor)` for every element in order.
    fn for_each_slice<F: FnMut(usize, SliceDescriptor)>(&self, f: F);
}

fn sequence_index(index: usize, len: usize) -> crate::tensor::TensorError {
    SliceError::SequenceIndex { index, len }.into()
}

impl SliceSequence for Nil {
    fn len(&self) -> usize {
        0
    }

    fn get(&self, index: usize) -> Result<SliceDescriptor> {
        Err(sequence_index(index, 0))
    }

    fn for_each_slice<F: FnMut(usize, SliceDescriptor)>(&self, _f: F) {}
}

impl<H: SliceLike, T: SliceList> SliceSequence for Cons<H, T> {
    fn len(&self) -> usize {
        Self::LEN
    }

    fn get(&self, index: usize) -> Result<SliceDescriptor> {
        self.nth(index).ok_or_else(|| sequence_index(index, Self::LEN))
    }

    fn for_each_slice<F: FnMut(usize, SliceDescriptor)>(&self, mut f: F) {
        self.visit(0, &mut f);
    }
}

impl SliceSequence for [SliceDescriptor] {
    fn len(&self) -> usize {
        <[SliceDescriptor]>::len(self)
    }

    fn get(&self, index: usize) -> Result<SliceDescriptor> {
        <[SliceDescriptor]>::get(self, index)
            .copied()
            .ok_or_else(|| sequence_index(index, <[SliceDescriptor]>::len(self)))
    }

    fn for_each_slice<F: FnMut(usize, SliceDescriptor)>(&self, mut f: F) {
        for (i, d) in self.iter().enumerate() {
            f(i, *d);
        }
    }
}

impl SliceSequence for Vec<SliceDescriptor> {
    fn len(&self) -> usize {
        self.as_slice().len()
    }

    fn get(&self, index: usize) -> Result<SliceDescriptor> {
        SliceSequence::get(self.as_slice(), index)
    }

    fn for_each_slice<F: FnMut(usize, SliceDescriptor)>(&self, f: F) {
        self.as_slice().for_each_slice(f)
    }
}

impl<const N: usize> SliceSequence for [SliceDescriptor; N] {
    fn len(&self) -> usize {
        N
    }

    fn get(&self, index: usize) -> Result<SliceDescriptor> {
        SliceSequence::get(self.as_slice(), index)
    }

    fn for_each_slice<F: FnMut(usize, SliceDescriptor)>(&self, f: F) {
        self.as_slice().for_each_slice(f)
    }
}

/// Visits every slice of `seq` in order with its position.
pub fn for_each_slice<Q, F>(seq: &Q, f: F)
where
    Q: SliceSequence + ?Sized,
    F: FnMut(usize, SliceDescriptor),
{
    seq.for_each_slice(f)
}

/// Resolves every slice of `seq` against the matching dimension of `extents`.
///
/// # Errors
///
/// Returns `TensorError::IndexOutOfRange` if the number of slices differs from the rank, or
/// for the first slice that does not fit its dimension.
pub fn resolve_all<Q>(seq: &Q, extents: &Extents) -> Result<Vec<SliceDescriptor>>
where
    Q: SliceSequence + ?Sized,
{
    if seq.len() != extents.rank() {
        return Err(SliceError::RankMismatch {
            slices: seq.len(),
            rank: extents.rank(),
        }
        .into());
    }
    let resolved = (0..seq.len())
        .map(|i| -> Result<SliceDescriptor> { Ok(seq.get(i)?.resolve(extents[i])?) })
        .collect::<Result<Vec<_>>>()?;
    tracing::trace!(%extents, slices = resolved.len(), "slice sequence resolved");
    Ok(resolved)
}

/// Builds a heterogeneous slice list from its elements.
///
/// ```rust
/// use tensor_extents::slice::{normalize, SliceSequence, StaticSlice, END};
/// use tensor_extents::slice_list;
///
/// let list = slice_list![StaticSlice::<0, END, 1>, normalize(1, 3, 1).unwrap()];
/// assert_eq!(list.len(), 2);
/// ```
#[macro_export]
macro_rules! slice_list {
    () => {
        $crate::slice::Nil
    };
    ($head:expr $(, $tail:expr)* $(,)?) => {
        $crate::slice::Cons::new($head, $crate::slice_list!($($tail),*))
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::slice::{normalize, normalize_in, StaticSlice, END};
    use crate::tensor::TensorError;

    fn d(first: isize, last: isize, step: isize) -> SliceDescriptor {
        normalize(first, last, step).unwrap()
    }

    #[test]
    fn test_len_and_get() {
        let list = slice_list![d(0, 2, 1), StaticSlice::<1, 5, 2>, d(-1, -1, 1)];
        assert_eq!(list.len(), 3);
        assert_eq!(<Cons<SliceDescriptor, Nil> as SliceList>::LEN, 1);
        assert_eq!(list.get(1).unwrap(), d(1, 5, 2));
        assert_eq!(list.get_const::<2>().unwrap(), d(-1, -1, 1));
    }

    #[test]
    fn test_get_past_end_fails() {
        let list = slice_list![d(0, 2, 1), d(0, 0, 1)];
        assert_eq!(
            list.get(2).unwrap_err(),
            TensorError::IndexOutOfRange(SliceError::SequenceIndex { index: 2, len: 2 })
        );
        assert!(list.get_const::<5>().is_err());
        assert!(Nil.get(0).is_err());
        assert!(Nil.is_empty());

        let v = vec![d(0, 2, 1)];
        assert_eq!(
            SliceSequence::get(&v, 1).unwrap_err(),
            TensorError::IndexOutOfRange(SliceError::SequenceIndex { index: 1, len: 1 })
        );
    }

    #[test]
    fn test_push_and_pop() {
        let list = Nil.push_front(d(1, 1, 1)).push_front(d(0, 0, 1));
        assert_eq!(list.len(), 2);
        assert_eq!(list.get(0).unwrap(), d(0, 0, 1));

        let list = list.push_back(StaticSlice::<2, 2, 1>);
        assert_eq!(list.len(), 3);
        assert_eq!(list.get(2).unwrap(), d(2, 2, 1));

        let (head, rest) = list.pop_front();
        assert_eq!(head, d(0, 0, 1));
        assert_eq!(rest.len(), 2);
        assert_eq!(*rest.head(), d(1, 1, 1));
        assert_eq!(rest.tail().len(), 1);
    }

    #[test]
    fn test_traversal_matches_between_representations() {
        let list = slice_list![d(0, END, 1), StaticSlice::<1, 3, 1>, d(2, 8, 3)];
        let vec = vec![d(0, END, 1), d(1, 3, 1), d(2, 8, 3)];
        let arr = [d(0, END, 1), d(1, 3, 1), d(2, 8, 3)];

        let mut from_list = Vec::new();
        for_each_slice(&list, |i, s| from_list.push((i, s)));
        let mut from_vec = Vec::new();
        for_each_slice(&vec, |i, s| from_vec.push((i, s)));
        let mut from_arr = Vec::new();
        for_each_slice(&arr, |i, s| from_arr.push((i, s)));
        let mut from_slice = Vec::new();
        for_each_slice(vec.as_slice(), |i, s| from_slice.push((i, s)));

        assert_eq!(from_list.len(), 3);
        assert_eq!(from_list, from_vec);
        assert_eq!(from_vec, from_arr);
        assert_eq!(from_arr, from_slice);
        assert_eq!(
            from_list.iter().map(|(i, _)| *i).collect::<Vec<_>>(),
            vec![0, 1, 2]
        );
    }

    #[test]
    fn test_resolve_all() {
        let extents = Extents::from([5, 4, 9]);
        let list = slice_list![d(0, END, 1), d(-1, -1, 1), StaticSlice::<2, 8, 3>];
        let r = resolve_all(&list, &extents).unwrap();
        assert_eq!(
            r,
            vec![
                normalize_in(0, END, 1, 5).unwrap(),
                normalize_in(3, 3, 1, 4).unwrap(),
                normalize_in(2, 8, 3, 9).unwrap(),
            ]
        );
        assert!(r.iter().all(SliceDescriptor::is_resolved));
    }

    #[test]
    fn test_resolve_all_errors() {
        let extents = Extents::from([5, 4]);
        let one = vec![d(0, 1, 1)];
        assert_eq!(
            resolve_all(&one, &extents).unwrap_err(),
            TensorError::IndexOutOfRange(SliceError::RankMismatch { slices: 1, rank: 2 })
        );

        let two = [d(0, 1, 1), d(0, 6, 1)];
        assert_eq!(
            resolve_all(&two, &extents).unwrap_err(),
            TensorError::IndexOutOfRange(SliceError::OutOfBounds { index: 6, extent: 4 })
        );
    }
}
