//! container/header.rs
//!
//! Header record codec.
//!
//! Design notes:
//! - The record is exactly 13 bytes; callers check the chunk length first.
//! - Validation is performed after decoding so the fault names the field.

use byteorder::{BigEndian, ByteOrder};

use crate::constants::{HEADER_DATA_LEN, MAX_DIMENSION};
use crate::container::types::{ColorType, HeaderFault, ImageHeader};

impl ImageHeader {
    pub const LEN: usize = HEADER_DATA_LEN;

    /// Smallest legal header, used for synthetic covers.
    pub fn minimal(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            bit_depth: 8,
            color_type: ColorType::TruecolorAlpha as u8,
            compression: 0,
            filter: 0,
            interlace: 0,
        }
    }

    /// Decode and validate a 13-byte record.
    pub fn decode(data: &[u8]) -> Result<Self, HeaderFault> {
        let data: &[u8; HEADER_DATA_LEN] = data
            .try_into()
            .map_err(|_| HeaderFault::WrongLength { len: data.len() })?;

        let h = Self {
            width:       BigEndian::read_u32(&data[0..4]),   // 0..4
            height:      BigEndian::read_u32(&data[4..8]),   // 4..8
            bit_depth:   data[8],
            color_type:  data[9],
            compression: data[10],
            filter:      data[11],
            interlace:   data[12],
        };
        h.validate()?;
        Ok(h)
    }

    pub fn encode(&self) -> [u8; HEADER_DATA_LEN] {
        let mut out = [0u8; HEADER_DATA_LEN];
        BigEndian::write_u32(&mut out[0..4], self.width);
        BigEndian::write_u32(&mut out[4..8], self.height);
        out[8] = self.bit_depth;
        out[9] = self.color_type;
        out[10] = self.compression;
        out[11] = self.filter;
        out[12] = self.interlace;
        out
    }

    pub fn validate(&self) -> Result<(), HeaderFault> {
        if self.width == 0 || self.height == 0 {
            return Err(HeaderFault::ZeroDimension { width: self.width, height: self.height });
        }
        if self.width > MAX_DIMENSION || self.height > MAX_DIMENSION {
            return Err(HeaderFault::DimensionTooLarge {
                width: self.width,
                height: self.height,
                max: MAX_DIMENSION,
            });
        }

        let color_type = ColorType::verify(self.color_type)?;
        if !color_type.allows_bit_depth(self.bit_depth) {
            return Err(HeaderFault::IllegalBitDepth { color_type, bit_depth: self.bit_depth });
        }

        if self.compression != 0 {
            return Err(HeaderFault::UnsupportedCompression { raw: self.compression });
        }
        if self.filter != 0 {
            return Err(HeaderFault::UnsupportedFilter { raw: self.filter });
        }
        if self.interlace > 1 {
            return Err(HeaderFault::UnknownInterlace { raw: self.interlace });
        }

        Ok(())
    }
}
