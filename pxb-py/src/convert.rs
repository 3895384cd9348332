use std::borrow::Cow;

use pxb_core::{BridgeError, HostNumber};
use pyo3::prelude::*;
use pyo3::types::{PyBool, PyByteArray, PyBytes, PySequence, PyString};

use crate::Result;

fn type_name(value: &Bound<'_, PyAny>) -> String {
    value
        .get_type()
        .name()
        .map(|name| name.to_string())
        .unwrap_or_else(|_| "unknown".to_string())
}

fn required<'a, 'py>(
    value: Option<&'a Bound<'py, PyAny>>,
    what: &str,
) -> Result<&'a Bound<'py, PyAny>> {
    match value {
        Some(value) if !value.is_none() => Ok(value),
        _ => Err(BridgeError::InvalidArgument(format!("{what} expected")).into()),
    }
}

/// Borrow the contents of `bytes`, copy those of `bytearray` since it can
/// change while the GIL is released
pub fn encoded_bytes<'a>(value: Option<&'a Bound<'_, PyAny>>) -> Result<Cow<'a, [u8]>> {
    let value = required(value, "Buffer")?;
    if let Ok(bytes) = value.downcast::<PyBytes>() {
        Ok(Cow::Borrowed(bytes.as_bytes()))
    } else if let Ok(array) = value.downcast::<PyByteArray>() {
        Ok(Cow::Owned(array.to_vec()))
    } else {
        let msg = format!("Buffer expected, got {}", type_name(value));
        Err(BridgeError::InvalidArgument(msg).into())
    }
}

/// Accept Python ints (any size) and floats, plus anything implementing
/// `__index__` or `__float__`. Booleans and strings are rejected.
pub fn host_number(value: &Bound<'_, PyAny>, what: &str) -> Result<HostNumber> {
    if value.is_instance_of::<PyString>() || value.is_instance_of::<PyBool>() {
        let msg = format!("{what} must be a number, got {}", type_name(value));
        return Err(BridgeError::InvalidArgument(msg).into());
    }

    value
        .extract::<i64>()
        .map(HostNumber::Int)
        .or_else(|_| value.extract::<f64>().map(HostNumber::Float))
        .map_err(|_| {
            let msg = format!("{what} must be a number, got {}", type_name(value));
            BridgeError::InvalidArgument(msg).into()
        })
}

pub fn dimension(value: Option<&Bound<'_, PyAny>>, what: &str) -> Result<HostNumber> {
    host_number(required(value, what)?, what)
}

/// An ordered sequence (list, tuple, ...) that is not a string
pub fn pixel_sequence<'a, 'py>(
    value: Option<&'a Bound<'py, PyAny>>,
) -> Result<(&'a Bound<'py, PyAny>, usize)> {
    let value = required(value, "Array")?;
    let not_array = || {
        BridgeError::InvalidArgument(format!("Array expected, got {}", type_name(value)))
    };

    if value.is_instance_of::<PyString>() {
        return Err(not_array().into());
    }
    let sequence = value.downcast::<PySequence>().map_err(|_| not_array())?;
    let len = sequence.len().map_err(|_| not_array())?;
    Ok((value, len))
}

/// Convert every element of a pixel sequence, naming the first offending index
pub fn pixel_values(sequence: &Bound<'_, PyAny>, len: usize) -> Result<Vec<HostNumber>> {
    let mut values = Vec::with_capacity(len);
    for (index, item) in sequence.try_iter()?.enumerate() {
        let item = item?;
        values.push(host_number(&item, &format!("element {index}"))?);
    }
    Ok(values)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pxb_core::ErrorKind;
    use pyo3::types::{PyList, PyTuple};

    fn kind(err: crate::Error) -> Option<ErrorKind> {
        match err {
            crate::Error::Bridge(err) => Some(err.kind()),
            crate::Error::Python(_) => None,
        }
    }

    fn sequence_kind(value: &Bound<'_, PyAny>) -> Option<ErrorKind> {
        kind(pixel_sequence(Some(value)).unwrap_err())
    }

    #[test]
    fn test_encoded_bytes() {
        Python::attach(|py| {
            let bytes = PyBytes::new(py, b"abc").into_any();
            assert_eq!(encoded_bytes(Some(&bytes)).unwrap().as_ref(), b"abc");

            let array = PyByteArray::new(py, b"xyz").into_any();
            assert!(matches!(encoded_bytes(Some(&array)).unwrap(), Cow::Owned(_)));

            let text = PyString::new(py, "abc").into_any();
            let err = encoded_bytes(Some(&text)).unwrap_err();
            assert_eq!(kind(err), Some(ErrorKind::InvalidArgument));

            let err = encoded_bytes(None).unwrap_err();
            assert_eq!(kind(err), Some(ErrorKind::InvalidArgument));

            let none = py.None().into_bound(py);
            let err = encoded_bytes(Some(&none)).unwrap_err();
            assert_eq!(kind(err), Some(ErrorKind::InvalidArgument));
        });
    }

    #[test]
    fn test_host_number() {
        Python::attach(|py| {
            let int = 42i64.into_pyobject(py).unwrap().into_any();
            assert_eq!(host_number(&int, "x").unwrap(), HostNumber::Int(42));

            let float = 2.5f64.into_pyobject(py).unwrap().into_any();
            assert_eq!(host_number(&float, "x").unwrap(), HostNumber::Float(2.5));

            let big = py.eval(c"10 ** 30", None, None).unwrap();
            assert_eq!(host_number(&big, "x").unwrap(), HostNumber::Float(1e30));

            let text = PyString::new(py, "7").into_any();
            let err = host_number(&text, "width").unwrap_err();
            assert_eq!(
                err.to_string(),
                "InvalidArgument: width must be a number, got str"
            );
        });
    }

    #[test]
    fn test_host_number_rejects_bool() {
        Python::attach(|py| {
            let flag = py.eval(c"True", None, None).unwrap();
            let err = host_number(&flag, "height").unwrap_err();
            assert_eq!(
                err.to_string(),
                "InvalidArgument: height must be a number, got bool"
            );

            let mixed = py.eval(c"[0, False, 0]", None, None).unwrap();
            let (seq, len) = pixel_sequence(Some(&mixed)).unwrap();
            let err = pixel_values(seq, len).unwrap_err();
            assert_eq!(kind(err), Some(ErrorKind::InvalidArgument));
        });
    }

    #[test]
    fn test_pixel_sequence() {
        Python::attach(|py| {
            let list = PyList::new(py, [1, 2, 3]).unwrap().into_any();
            let (seq, len) = pixel_sequence(Some(&list)).unwrap();
            assert_eq!(len, 3);
            assert_eq!(
                pixel_values(seq, len).unwrap(),
                vec![HostNumber::Int(1), HostNumber::Int(2), HostNumber::Int(3)]
            );

            let tuple = PyTuple::new(py, [1.5, 2.0]).unwrap().into_any();
            let (seq, len) = pixel_sequence(Some(&tuple)).unwrap();
            assert_eq!(
                pixel_values(seq, len).unwrap(),
                vec![HostNumber::Float(1.5), HostNumber::Float(2.0)]
            );

            let text = PyString::new(py, "123").into_any();
            assert_eq!(sequence_kind(&text), Some(ErrorKind::InvalidArgument));

            let int = 5i64.into_pyobject(py).unwrap().into_any();
            assert_eq!(sequence_kind(&int), Some(ErrorKind::InvalidArgument));

            let mixed = py.eval(c"[1, 'a', 3]", None, None).unwrap();
            let (seq, len) = pixel_sequence(Some(&mixed)).unwrap();
            let err = pixel_values(seq, len).unwrap_err();
            assert_eq!(
                err.to_string(),
                "InvalidArgument: element 1 must be a number, got str"
            );
        });
    }

    #[test]
    fn test_unordered_collections_are_not_arrays() {
        Python::attach(|py| {
            let set = py.eval(c"{0, 10, 20, 30, 40, 255}", None, None).unwrap();
            let err = pixel_sequence(Some(&set)).unwrap_err();
            assert_eq!(err.to_string(), "InvalidArgument: Array expected, got set");

            let dict = py
                .eval(c"{255: 'a', 0: 'b', 7: 'c', 1: 'd', 2: 'e', 3: 'f'}", None, None)
                .unwrap();
            let err = pixel_sequence(Some(&dict)).unwrap_err();
            assert_eq!(err.to_string(), "InvalidArgument: Array expected, got dict");
        });
    }
}
