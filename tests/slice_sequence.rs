use tensor_extents::slice::{
    for_each_slice, normalize, resolve_all, ConstSlice, InExtent, Slice, SliceDescriptor,
    SliceError, SliceList, SliceSequence, StaticSlice, END,
};
use tensor_extents::{slice_list, Extents, Tensor, TensorError};

// Collects the flat offsets selected by one resolved slice per dimension.
fn gather(t: &Tensor<i32>, slices: &[SliceDescriptor]) -> Vec<i32> {
    let mut offsets = vec![0usize];
    for (dim, s) in slices.iter().enumerate() {
        let stride = t.strides()[dim];
        offsets = offsets
            .iter()
            .flat_map(|base| s.iter().map(move |i| base + i as usize * stride))
            .collect();
    }
    offsets.into_iter().map(|o| t.at(o)).collect()
}

#[test]
fn test_index_expression_on_tensor() {
    let t = Tensor::<i32>::new((0..20).collect(), [4, 5]).unwrap();

    // t[1..=-1, ::2]
    let raw = [Slice::new(1, -1, 1), Slice::all().with_step(2)];
    let deferred: Vec<SliceDescriptor> = raw.iter().map(|s| s.normalize().unwrap()).collect();
    assert!(deferred.iter().all(SliceDescriptor::is_deferred));

    let resolved = resolve_all(&deferred, t.extents()).unwrap();
    assert_eq!(resolved[0].size(), 3);
    assert_eq!(resolved[1].size(), 3);
    assert_eq!(
        gather(&t, &resolved),
        vec![5, 7, 9, 10, 12, 14, 15, 17, 19]
    );
}

#[test]
fn test_heterogeneous_and_homogeneous_agree() {
    let extents = Extents::from([6, 3, 8]);
    let list = slice_list![
        StaticSlice::<-2, END, 1>,
        Slice::at(1).normalize().unwrap(),
        StaticSlice::<0, 7, 3>,
    ];
    let vec: Vec<SliceDescriptor> = vec![
        normalize(-2, END, 1).unwrap(),
        normalize(1, 1, 1).unwrap(),
        normalize(0, 7, 3).unwrap(),
    ];

    let mut seen_list = Vec::new();
    for_each_slice(&list, |i, s| seen_list.push((i, s)));
    let mut seen_vec = Vec::new();
    for_each_slice(&vec, |i, s| seen_vec.push((i, s)));
    assert_eq!(seen_list, seen_vec);

    assert_eq!(
        resolve_all(&list, &extents).unwrap(),
        resolve_all(&vec, &extents).unwrap()
    );
}

#[test]
fn test_sequence_positions_are_checked() {
    let list = slice_list![Slice::all().normalize().unwrap()];
    assert_eq!(list.len(), 1);
    assert!(list.get(0).is_ok());
    assert_eq!(
        list.get(1),
        Err(TensorError::IndexOutOfRange(SliceError::SequenceIndex {
            index: 1,
            len: 1
        }))
    );
    assert!(list.get_const::<3>().is_err());
}

#[test]
fn test_compile_time_resolution() {
    const ROWS: SliceDescriptor = <InExtent<StaticSlice<-3, -1, 2>, 10> as ConstSlice>::DESCRIPTOR;
    assert_eq!((ROWS.first(), ROWS.last(), ROWS.size()), (7, 9, 2));
    assert_eq!(ROWS.iter().collect::<Vec<_>>(), vec![7, 9]);
}

#[test]
fn test_slice_errors_surface_as_tensor_errors() {
    let t = Tensor::<i32>::zeros([3, 3]);
    let slices = [
        Slice::new(0, 1, 1).normalize().unwrap(),
        Slice::new(-5, -1, 1).normalize().unwrap(),
    ];
    let err = resolve_all(&slices, t.extents()).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Index out of range: index -5 is still negative for an extent of length 3"
    );
}
