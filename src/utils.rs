use std::io::{Read, Write};

use byteorder::{BigEndian, ByteOrder, LittleEndian};

use crate::error::{MeshError, MeshResult, Record};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Endian {
    Little,
    Big,
}

impl Endian {
    /// Byte order of the host, which is what unformatted Fortran output uses
    /// unless the compiler was told otherwise.
    pub fn native() -> Self {
        if cfg!(target_endian = "little") {
            Endian::Little
        } else {
            Endian::Big
        }
    }
    pub fn read_u32(buf: &[u8], e: Endian) -> u32 {
        match e {
            Endian::Little => LittleEndian::read_u32(buf),
            Endian::Big => BigEndian::read_u32(buf),
        }
    }
    pub fn write_u32(buf: &mut [u8], v: u32, e: Endian) {
        match e {
            Endian::Little => LittleEndian::write_u32(buf, v),
            Endian::Big => BigEndian::write_u32(buf, v),
        }
    }
    pub fn read_u32_slice(buf: &[u8], e: Endian) -> Vec<u32> {
        let mut out = vec![0u32; buf.len() / 4];
        match e {
            Endian::Little => LittleEndian::read_u32_into(&buf[..out.len() * 4], &mut out),
            Endian::Big => BigEndian::read_u32_into(&buf[..out.len() * 4], &mut out),
        }
        out
    }
    pub fn write_u32_slice(v: &[u32], e: Endian) -> Vec<u8> {
        let mut out = vec![0u8; v.len() * 4];
        match e {
            Endian::Little => LittleEndian::write_u32_into(v, &mut out),
            Endian::Big => BigEndian::write_u32_into(v, &mut out),
        }
        out
    }
    pub fn read_f32_slice(buf: &[u8], e: Endian) -> Vec<f32> {
        let mut out = vec![0f32; buf.len() / 4];
        match e {
            Endian::Little => LittleEndian::read_f32_into(&buf[..out.len() * 4], &mut out),
            Endian::Big => BigEndian::read_f32_into(&buf[..out.len() * 4], &mut out),
        }
        out
    }
    pub fn write_f32_slice(v: &[f32], e: Endian) -> Vec<u8> {
        let mut out = vec![0u8; v.len() * 4];
        match e {
            Endian::Little => LittleEndian::write_f32_into(v, &mut out),
            Endian::Big => BigEndian::write_f32_into(v, &mut out),
        }
        out
    }
}

// Fortran unformatted record helpers: [len:u32] payload [len:u32]
pub fn write_fortran_record<W: Write>(w: &mut W, payload: &[u8], endian: Endian) -> MeshResult<()> {
    let len = u32::try_from(payload.len()).map_err(|_| MeshError::TooLarge {
        what: "record length",
        count: payload.len(),
    })?;
    let mut lenb = [0u8; 4];
    Endian::write_u32(&mut lenb, len, endian);
    w.write_all(&lenb)?;
    w.write_all(payload)?;
    w.write_all(&lenb)?;
    Ok(())
}

// BORROW the reader
pub fn read_fortran_record<R: Read>(r: &mut R, record: Record, endian: Endian) -> MeshResult<Vec<u8>> {
    let mut lenb = [0u8; 4];
    r.read_exact(&mut lenb)
        .map_err(|e| MeshError::reading(record, e))?;
    let len = Endian::read_u32(&lenb, endian) as usize;

    // allocation follows the bytes actually present, not the prefix
    let mut buf = Vec::new();
    let got = r.by_ref().take(len as u64).read_to_end(&mut buf)?;
    if got != len {
        return Err(MeshError::Truncated { record });
    }

    r.read_exact(&mut lenb)
        .map_err(|e| MeshError::reading(record, e))?;
    let len2 = Endian::read_u32(&lenb, endian) as usize;
    if len != len2 {
        return Err(MeshError::RecordLengthMismatch {
            record,
            prefix: len,
            suffix: len2,
        });
    }
    Ok(buf)
}
