use core::ptr;

use buffer_view::prelude::*;
use buffer_view::validate_raw_parts;

#[test]
fn construct_from_raw_parts() {
    let storage = [0u8; 10];
    // SAFETY: The pointer and length come from a live array.
    let view = unsafe { BufferView::from_raw_parts(storage.as_ptr(), storage.len()) }.unwrap();
    assert_eq!(view.size(), ByteCount::new(10));
    assert_eq!(view.bit_size(), BitCount::new(80));
    assert_eq!(view.as_ptr(), storage.as_ptr());
}

#[test]
fn construct_from_null_data_and_zero_size() {
    // SAFETY: Invalid shapes are reported before any dereference.
    let result = unsafe { BufferView::<u8>::from_raw_parts(ptr::null(), 0) };
    assert_eq!(result.unwrap_err(), Error::NullDataAndZeroSize);
}

#[test]
fn construct_from_null_data_pointer() {
    // SAFETY: Invalid shapes are reported before any dereference.
    let result = unsafe { BufferView::<u8>::from_raw_parts(ptr::null(), 10) };
    assert_eq!(result.unwrap_err(), Error::NullData);
}

#[test]
fn construct_from_zero_size() {
    let storage = [0u8; 10];
    // SAFETY: Invalid shapes are reported before any dereference.
    let result = unsafe { BufferView::from_raw_parts(storage.as_ptr(), 0) };
    assert_eq!(result.unwrap_err(), Error::ZeroSize);
}

#[test]
fn construct_mut_from_raw_parts() {
    let mut storage = [0u8; 10];
    let data = storage.as_mut_ptr();
    // SAFETY: The pointer and length come from a live array with no
    // other outstanding reference.
    let mut view = unsafe { BufferViewMut::from_raw_parts(data, 10) }.unwrap();
    view.set_byte(ByteCount::new(9), 1).unwrap();
    assert_eq!(view.byte(ByteCount::new(9)), Ok(1));

    // SAFETY: Invalid shapes are reported before any dereference.
    let result = unsafe { BufferViewMut::<u8>::from_raw_parts(ptr::null_mut(), 10) };
    assert_eq!(result.unwrap_err(), Error::NullData);
}

#[test]
fn validate_matches_construction_errors() {
    let storage = [0u8; 4];
    assert_eq!(validate_raw_parts(storage.as_ptr(), 4), Ok(()));
    assert_eq!(
        validate_raw_parts::<u8>(ptr::null(), 0),
        Err(Error::NullDataAndZeroSize)
    );
    assert_eq!(
        validate_raw_parts::<u8>(ptr::null(), 4),
        Err(Error::NullData)
    );
    assert_eq!(
        validate_raw_parts(storage.as_ptr(), 0),
        Err(Error::ZeroSize)
    );
}

#[test]
fn construct_from_array() {
    let storage = [0u8; 10];
    let view = BufferView::from_array(&storage);
    assert_eq!(view.size(), ByteCount::new(10));
    assert_eq!(view.as_ptr(), storage.as_ptr());
}

#[test]
fn access_by_invalid_index() {
    let storage = [0u8; 10];
    let view = BufferView::from_array(&storage);
    assert_eq!(
        view.byte(ByteCount::new(10)).unwrap_err(),
        Error::InvalidIndex
    );
    assert_eq!(
        view.byte(ByteCount::new(11)).unwrap_err(),
        Error::InvalidIndex
    );
    // The failed accesses leave the view usable.
    assert_eq!(view.byte(ByteCount::new(9)), Ok(0));
}

#[test]
fn access_via_byte_index() {
    let storage = [1u8, 2, 3, 4, 5, 6, 7, 8, 9, 10];
    let view = BufferView::from_array(&storage);
    for i in 0..storage.len() {
        assert_eq!(view.byte(ByteCount::new(i)), Ok(storage[i]));
    }
}

#[test]
fn assign_via_byte_index() {
    let mut storage = [0u8; 10];
    let mut view = BufferViewMut::from_array(&mut storage);
    for i in 0..10 {
        view.set_byte(ByteCount::new(i), i as u8).unwrap();
    }
    for i in 0..10 {
        assert_eq!(view.byte(ByteCount::new(i)), Ok(i as u8));
    }
    drop(view);
    // Writes went through to the backing storage, not a copy.
    assert_eq!(storage, [0, 1, 2, 3, 4, 5, 6, 7, 8, 9]);
}

#[test]
fn write_via_byte_mut() {
    let mut storage = [0u8; 4];
    let mut view = BufferViewMut::from_array(&mut storage);
    *view.byte_mut(ByteCount::new(1)).unwrap() = 0xcc;
    assert_eq!(view.byte(ByteCount::new(1)), Ok(0xcc));
    assert_eq!(
        view.byte_mut(ByteCount::new(4)).unwrap_err(),
        Error::InvalidIndex
    );
}

#[test]
fn mutable_view_converts_to_read_only() {
    let mut storage = [3u8; 6];
    let view = BufferViewMut::from_array(&mut storage);
    let data = view.as_ptr();
    let read_only: BufferView<u8> = view.into();
    assert_eq!(read_only.as_ptr(), data);
    assert_eq!(read_only.size(), ByteCount::new(6));
    assert_eq!(read_only.byte(ByteCount::new(5)), Ok(3));
}

#[test]
fn reborrow_as_read_only() {
    let mut storage = [0u8; 4];
    let mut view = BufferViewMut::from_array(&mut storage);
    view.set_byte(ByteCount::new(0), 0x42).unwrap();
    let read_only = view.as_view();
    assert_eq!(read_only.byte(ByteCount::new(0)), Ok(0x42));
    assert_eq!(read_only.len(), view.len());
    assert_eq!(read_only.as_ptr(), view.as_ptr());
}

#[test]
fn bit_size_is_eight_times_size() {
    for n in 1..=16usize {
        let storage = vec![0u8; n];
        let view = make_view(&storage).unwrap();
        assert_eq!(view.size(), ByteCount::new(n));
        assert_eq!(view.bit_size(), BitCount::new(8 * n));
        assert_eq!(view.bit_size(), ByteCount::new(n).to_bit_count());
    }
}

#[test]
fn generic_element_access() {
    let mut storage = [0u32, 1, 2, 3];
    let mut view = BufferViewMut::from_array(&mut storage);
    assert_eq!(view.len(), 4);
    assert_eq!(view.byte_size(), ByteCount::new(16));
    view.write(3, 0xdead_beef).unwrap();
    assert_eq!(view.read(3), Ok(0xdead_beef));
    assert_eq!(view.get(4).unwrap_err(), Error::InvalidIndex);
}

#[test]
fn views_are_plain_values() {
    let storage = [1u8, 2, 3];
    let view = BufferView::from_array(&storage);
    let copy = view;
    // The original remains usable after the copy.
    assert_eq!(view.as_ptr(), copy.as_ptr());
    assert_eq!(view.len(), copy.len());
}
