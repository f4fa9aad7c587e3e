// ============================================================
// Layer 6 - NumPy Corpus Cache
// ============================================================
// Encoded splits are cached as NumPy .npy files so training code
// in other languages can memory-map them directly.
//
// Layout of a version 1.0 file:
//   \x93NUMPY                 magic (6 bytes)
//   0x01 0x00                 major / minor version
//   u16 little-endian         header length
//   {'descr': '<i8', 'fortran_order': False, 'shape': (N,), }
//   spaces + '\n'             pad so the data starts on a 64-byte boundary
//   N x i64 little-endian     the token IDs
//
// Writing always produces '<i8'. Reading also accepts '<i4' and
// version 2.0/3.0 headers (u32 header length).

use std::{fs, path::Path};

use crate::domain::{
    corpus::Corpus,
    error::{CorpusError, Result},
    traits::Persistable,
    vocabulary::TokenId,
};

const NPY_MAGIC: &[u8] = b"\x93NUMPY";
const ALIGN: usize = 64;

impl Persistable for Corpus {
    fn save(&self, path: &Path) -> Result<()> {
        fs::write(path, serialize_npy(self.ids())).map_err(|e| CorpusError::io(path, e))
    }

    fn load(path: &Path) -> Result<Self> {
        let data = fs::read(path).map_err(|e| CorpusError::io(path, e))?;
        parse_npy(&data)
            .map(Corpus::new)
            .map_err(|reason| CorpusError::corrupt(path, reason))
    }
}

/// Encode token IDs as a 1-D little-endian int64 .npy file
pub fn serialize_npy(ids: &[TokenId]) -> Vec<u8> {
    let header_dict = format!(
        "{{'descr': '<i8', 'fortran_order': False, 'shape': ({},), }}",
        ids.len()
    );
    let prefix_len = NPY_MAGIC.len() + 2 + 2;
    let unpadded   = prefix_len + header_dict.len() + 1;
    let padding    = (ALIGN - unpadded % ALIGN) % ALIGN;
    let header_len = header_dict.len() + padding + 1;

    let mut out = Vec::with_capacity(prefix_len + header_len + ids.len() * 8);
    out.extend_from_slice(NPY_MAGIC);
    out.push(1);
    out.push(0);
    out.extend_from_slice(&(header_len as u16).to_le_bytes());
    out.extend_from_slice(header_dict.as_bytes());
    out.resize(out.len() + padding, b' ');
    out.push(b'\n');
    for &id in ids {
        out.extend_from_slice(&i64::from(id).to_le_bytes());
    }
    out
}

/// Decode a 1-D integer .npy file into token IDs
pub fn parse_npy(data: &[u8]) -> std::result::Result<Vec<TokenId>, String> {
    if data.len() < 10 || &data[0..6] != NPY_MAGIC {
        return Err("not a valid .npy file".into());
    }
    let major = data[6];
    let (header_start, header_len) = match major {
        1 => (10, u16::from_le_bytes([data[8], data[9]]) as usize),
        2 | 3 => {
            if data.len() < 12 {
                return Err("truncated .npy header".into());
            }
            (12, u32::from_le_bytes([data[8], data[9], data[10], data[11]]) as usize)
        }
        v => return Err(format!("unsupported .npy version {v}")),
    };
    let data_start = header_start + header_len;
    let header = data
        .get(header_start..data_start)
        .ok_or("truncated .npy header")?;
    let header = std::str::from_utf8(header).map_err(|_| "invalid .npy header utf8")?;

    let width = match header_value(header, "descr")? {
        "'<i8'" | "'=i8'" | "'i8'" => 8,
        "'<i4'" | "'=i4'" | "'i4'" => 4,
        other => return Err(format!("unsupported dtype {other}, expected <i8 or <i4")),
    };
    if header_value(header, "fortran_order")? != "False" {
        return Err("fortran_order arrays are not supported".into());
    }
    let len = parse_1d_shape(header_value(header, "shape")?)?;

    let body     = &data[data_start..];
    let expected = len.checked_mul(width).ok_or("npy shape too large")?;
    if body.len() != expected {
        return Err(format!(
            "expected {expected} data bytes for {len} elements, found {}",
            body.len()
        ));
    }

    body.chunks_exact(width)
        .map(|chunk| {
            let value = if width == 8 {
                let mut b = [0u8; 8];
                b.copy_from_slice(chunk);
                i64::from_le_bytes(b)
            } else {
                let mut b = [0u8; 4];
                b.copy_from_slice(chunk);
                i64::from(i32::from_le_bytes(b))
            };
            TokenId::try_from(value).map_err(|_| format!("token id {value} out of range"))
        })
        .collect()
}

/// Raw text of the value for `key` in the header dict, e.g. `'<i8'` or `(3,)`
fn header_value<'a>(header: &'a str, key: &str) -> std::result::Result<&'a str, String> {
    let quoted = format!("'{key}'");
    let start  = header
        .find(&quoted)
        .ok_or_else(|| format!("npy header missing {key}"))?;
    let rest  = &header[start + quoted.len()..];
    let colon = rest.find(':').ok_or_else(|| format!("npy header: no colon after {key}"))?;
    let rest  = rest[colon + 1..].trim_start();

    // A tuple value contains commas, so read up to its closing paren
    let end = if rest.starts_with('(') {
        rest.find(')').map(|i| i + 1)
    } else {
        rest.find([',', '}'])
    }
    .ok_or_else(|| format!("npy header: unterminated value for {key}"))?;
    Ok(rest[..end].trim())
}

fn parse_1d_shape(shape: &str) -> std::result::Result<usize, String> {
    let inner = shape
        .strip_prefix('(')
        .and_then(|s| s.strip_suffix(')'))
        .ok_or_else(|| format!("npy shape {shape} is not a tuple"))?;
    let dims: Vec<&str> = inner.split(',').map(str::trim).filter(|s| !s.is_empty()).collect();
    match dims.as_slice() {
        [n] => n.parse().map_err(|e| format!("npy shape parse: {e}")),
        _   => Err(format!("expected a 1-D array, found shape {shape}")),
    }
}
