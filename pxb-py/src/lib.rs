mod codec;
mod convert;

use pxb_core::{BridgeError, ErrorKind};
use pyo3::create_exception;
use pyo3::exceptions::PyException;
use pyo3::prelude::*;
use thiserror::Error;

use codec::{decode_image, image_size, image_to_numbers, numbers_to_image};

create_exception!(pixbridge, CodecBridgeError, PyException);
create_exception!(pixbridge, InvalidArgumentError, CodecBridgeError);
create_exception!(pixbridge, SizeMismatchError, CodecBridgeError);
create_exception!(pixbridge, DecodeFailureError, CodecBridgeError);
create_exception!(pixbridge, EncodeFailureError, CodecBridgeError);

#[derive(Error, Debug)]
pub enum Error {
    #[error("{0}")]
    Bridge(#[from] BridgeError),
    #[error("{0}")]
    Python(#[from] PyErr),
}

impl From<Error> for PyErr {
    fn from(err: Error) -> PyErr {
        match err {
            Error::Bridge(err) => {
                let msg = err.to_string();
                match err.kind() {
                    ErrorKind::InvalidArgument => InvalidArgumentError::new_err(msg),
                    ErrorKind::SizeMismatch => SizeMismatchError::new_err(msg),
                    ErrorKind::DecodeFailure => DecodeFailureError::new_err(msg),
                    ErrorKind::EncodeFailure => EncodeFailureError::new_err(msg),
                }
            }
            Error::Python(err) => err,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[pymodule]
fn pixbridge(m: &Bound<'_, PyModule>) -> PyResult<()> {
    pyo3_log::init();

    m.add_function(wrap_pyfunction!(image_to_numbers, m)?)?;
    m.add_function(wrap_pyfunction!(numbers_to_image, m)?)?;
    m.add_function(wrap_pyfunction!(decode_image, m)?)?;
    m.add_function(wrap_pyfunction!(image_size, m)?)?;

    let py = m.py();
    m.add("CodecBridgeError", py.get_type::<CodecBridgeError>())?;
    m.add("InvalidArgumentError", py.get_type::<InvalidArgumentError>())?;
    m.add("SizeMismatchError", py.get_type::<SizeMismatchError>())?;
    m.add("DecodeFailureError", py.get_type::<DecodeFailureError>())?;
    m.add("EncodeFailureError", py.get_type::<EncodeFailureError>())?;
    Ok(())
}
