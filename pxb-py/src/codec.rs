use pxb_core::marshal::{dimensions_from_host, pixels_from_host, pixels_to_host};
use pxb_core::{BridgeError, PixelBuffer};
use pyo3::prelude::*;
use pyo3::types::{PyBytes, PyList};

use crate::{Result, convert};

fn decode_pixels(py: Python<'_>, data: Option<&Bound<'_, PyAny>>) -> Result<PixelBuffer> {
    let encoded = convert::encoded_bytes(data)?;
    Ok(py.detach(|| pxb_io::decode(&encoded))?)
}

/// Decode an encoded image into a flat list of RGB channel values.
///
/// The list has `width * height * 3` entries in row-major order. Use
/// `decode_image` or `image_size` to also obtain the dimensions.
#[pyfunction]
#[pyo3(signature = (data=None))]
pub fn image_to_numbers<'py>(
    py: Python<'py>,
    data: Option<&Bound<'py, PyAny>>,
) -> Result<Bound<'py, PyList>> {
    let pixels = decode_pixels(py, data)?;
    Ok(PyList::new(py, pixels_to_host(&pixels))?)
}

/// Encode a flat list of RGB channel values as PNG bytes
#[pyfunction]
#[pyo3(signature = (numbers=None, width=None, height=None))]
pub fn numbers_to_image<'py>(
    py: Python<'py>,
    numbers: Option<&Bound<'py, PyAny>>,
    width: Option<&Bound<'py, PyAny>>,
    height: Option<&Bound<'py, PyAny>>,
) -> Result<Bound<'py, PyBytes>> {
    let (sequence, len) = convert::pixel_sequence(numbers)?;
    let dims = dimensions_from_host(
        convert::dimension(width, "width")?,
        convert::dimension(height, "height")?,
    )?;

    let expected = dims.buffer_len()?;
    if len != expected {
        return Err(BridgeError::SizeMismatch {
            expected,
            actual: len,
        }
        .into());
    }

    let pixels = pixels_from_host(convert::pixel_values(sequence, len)?, dims)?;
    let png = py.detach(|| pxb_io::encode(&pixels))?;
    Ok(PyBytes::new(py, &png))
}

/// Decode an encoded image, returning `(numbers, width, height)`
#[pyfunction]
#[pyo3(signature = (data=None))]
pub fn decode_image<'py>(
    py: Python<'py>,
    data: Option<&Bound<'py, PyAny>>,
) -> Result<(Bound<'py, PyList>, u32, u32)> {
    let pixels = decode_pixels(py, data)?;
    let list = PyList::new(py, pixels_to_host(&pixels))?;
    Ok((list, pixels.width(), pixels.height()))
}

/// Read `(width, height)` from the image header without decoding pixels
#[pyfunction]
#[pyo3(signature = (data=None))]
pub fn image_size(data: Option<&Bound<'_, PyAny>>) -> Result<(u32, u32)> {
    let encoded = convert::encoded_bytes(data)?;
    let info = pxb_io::probe(&encoded)?;
    log::debug!("Probed {}x{} image", info.width, info.height);
    Ok((info.width, info.height))
}
