//! Flat binary records for moving configurations across process boundaries.
//!
//! A parcel is a positional sequence of little-endian values with no header
//! and no field tags; reader and writer must agree on the field order.
//! Strings are encoded as:
//!
//! ```text
//! i32 byte_length | utf-8 bytes | zero padding to a 4-byte boundary
//! ```
//!
//! A length of `-1` marks a null string, so a string can be at most
//! `i32::MAX` bytes long.
//!
//! For text transports the whole parcel can be wrapped in unpadded
//! RFC 4648 base64.

use bytes::{Buf, BufMut, Bytes, BytesMut};

use crate::config::ConfigurationError;

/// Length marker for a null string.
const NULL_LENGTH: i32 = -1;

/// Errors produced while encoding or decoding a parcel.
#[derive(Debug, thiserror::Error)]
pub enum ParcelError {
    #[error("parcel ended before {0} could be read")]
    UnexpectedEnd(&'static str),
    #[error("string of {0} bytes is too long for a parcel")]
    TooLong(usize),
    #[error("negative length for {0}")]
    InvalidLength(&'static str),
    #[error("required field {0} is null")]
    NullField(&'static str),
    #[error("{0} is not valid utf-8")]
    Utf8(&'static str),
    #[error("unknown environment base url: {0}")]
    UnknownEnvironment(String),
    #[error("invalid locale: {0}")]
    InvalidLocale(#[from] crate::objects::locale::LocaleError),
    #[error("{0} trailing bytes after record")]
    TrailingBytes(usize),
    #[error("invalid base64 encoding")]
    Base64,
    #[error("invalid configuration: {0}")]
    Configuration(#[from] ConfigurationError),
}

// ---------------------------------------------------------------------------
// Parcelable
// ---------------------------------------------------------------------------

/// Types with a fixed parcel layout.
pub trait Parcelable: Sized {
    /// Append this value's fields to `parcel`, in layout order.
    fn write_to_parcel(&self, parcel: &mut ParcelWriter) -> Result<(), ParcelError>;

    /// Read a value back in the same order [`write_to_parcel`](Self::write_to_parcel)
    /// wrote it.
    fn read_from_parcel(parcel: &mut ParcelReader<'_>) -> Result<Self, ParcelError>;

    fn to_bytes(&self) -> Result<Bytes, ParcelError> {
        let mut parcel = ParcelWriter::new();
        self.write_to_parcel(&mut parcel)?;
        Ok(parcel.finish())
    }

    /// Decode a value that must span the whole of `bytes`.
    fn from_bytes(bytes: &[u8]) -> Result<Self, ParcelError> {
        let mut parcel = ParcelReader::new(bytes);
        let value = Self::read_from_parcel(&mut parcel)?;
        parcel.finish()?;
        Ok(value)
    }

    fn to_base64(&self) -> Result<String, ParcelError> {
        Ok(fast32::base64::RFC4648_NOPAD.encode(&self.to_bytes()?))
    }

    fn from_base64(value: &str) -> Result<Self, ParcelError> {
        let bytes = fast32::base64::RFC4648_NOPAD
            .decode_str(value.trim())
            .map_err(|_| ParcelError::Base64)?;
        Self::from_bytes(&bytes)
    }
}

// ---------------------------------------------------------------------------
// Writer
// ---------------------------------------------------------------------------

#[derive(Debug, Default)]
pub struct ParcelWriter {
    buf: BytesMut,
}

impl ParcelWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn write_i32(&mut self, value: i32) {
        self.buf.put_i32_le(value);
    }

    pub fn write_string(&mut self, value: Option<&str>) -> Result<(), ParcelError> {
        let Some(value) = value else {
            self.write_i32(NULL_LENGTH);
            return Ok(());
        };
        self.write_i32(string_length(value.len())?);
        self.buf.put_slice(value.as_bytes());
        self.buf.put_bytes(0, padding(value.len()));
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.buf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    pub fn finish(self) -> Bytes {
        self.buf.freeze()
    }
}

// ---------------------------------------------------------------------------
// Reader
// ---------------------------------------------------------------------------

#[derive(Debug)]
pub struct ParcelReader<'a> {
    buf: &'a [u8],
}

impl<'a> ParcelReader<'a> {
    pub fn new(buf: &'a [u8]) -> Self {
        Self { buf }
    }

    pub fn read_i32(&mut self, field: &'static str) -> Result<i32, ParcelError> {
        if self.buf.remaining() < 4 {
            return Err(ParcelError::UnexpectedEnd(field));
        }
        Ok(self.buf.get_i32_le())
    }

    /// Read a nullable string; `field` names it in errors.
    pub fn read_string(&mut self, field: &'static str) -> Result<Option<String>, ParcelError> {
        let len = match self.read_i32(field)? {
            NULL_LENGTH => return Ok(None),
            len if len < 0 => return Err(ParcelError::InvalidLength(field)),
            len => len as usize,
        };
        let padded = len + padding(len);
        if self.buf.remaining() < padded {
            return Err(ParcelError::UnexpectedEnd(field));
        }
        let value = std::str::from_utf8(&self.buf[..len])
            .map_err(|_| ParcelError::Utf8(field))?
            .to_owned();
        self.buf.advance(padded);
        Ok(Some(value))
    }

    pub fn read_required_string(&mut self, field: &'static str) -> Result<String, ParcelError> {
        self.read_string(field)?.ok_or(ParcelError::NullField(field))
    }

    pub fn remaining(&self) -> usize {
        self.buf.remaining()
    }

    /// Fail if anything is left unread.
    pub fn finish(self) -> Result<(), ParcelError> {
        match self.buf.remaining() {
            0 => Ok(()),
            n => Err(ParcelError::TrailingBytes(n)),
        }
    }
}

fn string_length(len: usize) -> Result<i32, ParcelError> {
    i32::try_from(len).map_err(|_| ParcelError::TooLong(len))
}

fn padding(len: usize) -> usize {
    (4 - len % 4) % 4
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_string_layout() {
        let mut parcel = ParcelWriter::new();
        parcel.write_string(Some("en-US")).unwrap();
        parcel.write_string(None).unwrap();
        parcel.write_string(Some("")).unwrap();
        let bytes = parcel.finish();

        assert_eq!(
            bytes.as_ref(),
            &[
                5, 0, 0, 0, b'e', b'n', b'-', b'U', b'S', 0, 0, 0, // "en-US" + 3 pad
                0xff, 0xff, 0xff, 0xff, // null
                0, 0, 0, 0, // ""
            ]
        );

        let mut reader = ParcelReader::new(&bytes);
        assert_eq!(reader.read_string("a").unwrap().as_deref(), Some("en-US"));
        assert_eq!(reader.read_string("b").unwrap(), None);
        assert_eq!(reader.read_string("c").unwrap().as_deref(), Some(""));
        reader.finish().unwrap();
    }

    #[test]
    fn test_truncated_string() {
        let mut parcel = ParcelWriter::new();
        parcel.write_string(Some("th-TH")).unwrap();
        let bytes = parcel.finish();

        let mut reader = ParcelReader::new(&bytes[..6]);
        assert!(matches!(
            reader.read_string("shopper_locale"),
            Err(ParcelError::UnexpectedEnd("shopper_locale"))
        ));

        let mut reader = ParcelReader::new(&bytes[..2]);
        assert!(matches!(
            reader.read_i32("length"),
            Err(ParcelError::UnexpectedEnd("length"))
        ));
    }

    #[test]
    fn test_null_required_string() {
        let mut parcel = ParcelWriter::new();
        parcel.write_string(None).unwrap();
        let bytes = parcel.finish();
        let mut reader = ParcelReader::new(&bytes);
        assert!(matches!(
            reader.read_required_string("client_key"),
            Err(ParcelError::NullField("client_key"))
        ));
    }

    #[test]
    fn test_negative_length() {
        let mut parcel = ParcelWriter::new();
        parcel.write_i32(-7);
        let bytes = parcel.finish();
        let mut reader = ParcelReader::new(&bytes);
        assert!(matches!(
            reader.read_string("environment"),
            Err(ParcelError::InvalidLength("environment"))
        ));
    }

    #[test]
    fn test_invalid_utf8() {
        let mut parcel = ParcelWriter::new();
        parcel.write_i32(2);
        parcel.buf.put_slice(&[0xc3, 0x28, 0, 0]);
        let bytes = parcel.finish();
        let mut reader = ParcelReader::new(&bytes);
        assert!(matches!(
            reader.read_string("client_key"),
            Err(ParcelError::Utf8("client_key"))
        ));
    }

    #[test]
    fn test_string_length_limit() {
        assert_eq!(string_length(0).unwrap(), 0);
        assert_eq!(string_length(i32::MAX as usize).unwrap(), i32::MAX);
        assert!(matches!(
            string_length(i32::MAX as usize + 1),
            Err(ParcelError::TooLong(len)) if len == i32::MAX as usize + 1
        ));
    }

    #[test]
    fn test_trailing_bytes() {
        let reader = ParcelReader::new(&[1, 2, 3]);
        assert!(matches!(reader.finish(), Err(ParcelError::TrailingBytes(3))));
    }
}
