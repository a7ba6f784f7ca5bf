//! Bounds-checked sequence access
//!
//! Routines go through these instead of indexing so that a bad index becomes
//! an [`EngineError`] for the run instead of a panic in the frame loop.

use super::errors::EngineError;
use crate::sequence::Value;

pub fn get(data: &[Value], index: usize) -> Result<Value, EngineError> {
    data.get(index).copied().ok_or(EngineError::IndexOutOfRange {
        index,
        len: data.len(),
    })
}

pub fn set(data: &mut [Value], index: usize, value: Value) -> Result<(), EngineError> {
    let len = data.len();
    let slot = data
        .get_mut(index)
        .ok_or(EngineError::IndexOutOfRange { index, len })?;
    *slot = value;
    Ok(())
}

pub fn swap(data: &mut [Value], a: usize, b: usize) -> Result<(), EngineError> {
    let len = data.len();
    let bad = a.max(b);
    if bad >= len {
        return Err(EngineError::IndexOutOfRange { index: bad, len });
    }
    data.swap(a, b);
    Ok(())
}

/// Copy `start..end` out of the sequence
pub fn copy_range(data: &[Value], start: usize, end: usize) -> Result<Vec<Value>, EngineError> {
    data.get(start..end)
        .map(<[Value]>::to_vec)
        .ok_or(EngineError::IndexOutOfRange {
            index: end.max(start),
            len: data.len(),
        })
}

/// Overwrite the sequence starting at `start` with `values`
pub fn write_range(data: &mut [Value], start: usize, values: &[Value]) -> Result<(), EngineError> {
    let len = data.len();
    let end = start + values.len();
    let target = data
        .get_mut(start..end)
        .ok_or(EngineError::IndexOutOfRange { index: end, len })?;
    target.copy_from_slice(values);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_swap_out_of_range() {
        let mut data = vec![1, 2, 3];
        assert_eq!(
            swap(&mut data, 0, 3),
            Err(EngineError::IndexOutOfRange { index: 3, len: 3 })
        );
        assert_eq!(data, vec![1, 2, 3]);
    }

    #[test]
    fn test_write_range() {
        let mut data = vec![5, 4, 3, 2, 1];
        write_range(&mut data, 1, &[9, 9]).unwrap();
        assert_eq!(data, vec![5, 9, 9, 2, 1]);
        assert!(write_range(&mut data, 4, &[1, 2]).is_err());
    }

    #[test]
    fn test_copy_range() {
        let data = vec![5, 4, 3];
        assert_eq!(copy_range(&data, 1, 3).unwrap(), vec![4, 3]);
        assert!(copy_range(&data, 2, 4).is_err());
    }
}
