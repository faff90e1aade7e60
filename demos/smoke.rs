//! Sums two sequences element-wise, once over vectors and once over bare
//! buffers, and reports whether both agree with the expected result.

use lockstep::cursor::{bounds, PtrCursor, PtrCursorMut, SliceCursor, SliceCursorMut};
use lockstep::transform;
use std::error::Error;

fn test_vector() -> Result<(), Box<dyn Error>> {
    let digits = vec![1usize, 2, 3, 4];
    let digits_to_sum = vec![2usize, 3, 4, 5];
    let mut result = vec![0usize; 4];

    let (mut begin, end) = bounds(&digits);
    transform(
        |i: &usize, j: &usize| i + j,
        &mut SliceCursorMut::begin(&mut result),
        &mut begin,
        &end,
        (SliceCursor::begin(&digits_to_sum),),
    );
    if result != [3, 5, 7, 9] {
        return Err("Error in TestVector: expected and actual vectors are not equal".into());
    }
    println!("TestVector:\tOK");
    Ok(())
}

fn test_bare_pointers() -> Result<(), Box<dyn Error>> {
    let digits: [usize; 4] = [1, 2, 3, 4];
    let digits_to_sum: [usize; 4] = [2, 3, 4, 5];
    let mut result = [0usize; 4];
    let reference: [usize; 4] = [3, 5, 7, 9];

    // SAFETY: all three buffers hold four elements and the primary input is
    // walked for exactly four steps.
    let (mut begin, aux, mut output) = unsafe {
        (
            PtrCursor::new(digits.as_ptr()),
            PtrCursor::new(digits_to_sum.as_ptr()),
            PtrCursorMut::new(result.as_mut_ptr()),
        )
    };
    let end = begin.add(4);
    transform(|i: &usize, j: &usize| i + j, &mut output, &mut begin, &end, (aux,));

    if result.iter().zip(&reference).any(|(r, e)| r != e) {
        return Err("Error in TestBarePointers: expected and actual vectors are not equal".into());
    }
    println!("TestBarePointers:\tOK");
    Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
    test_vector()?;
    test_bare_pointers()?;
    Ok(())
}
