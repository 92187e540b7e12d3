//! Universal Label byte identifiers.
//!
//! A Universal Label (UL) is the fixed-width byte key at the front of every
//! KLV triplet in an MXF stream. ULs are opaque: two labels are the same
//! thing iff their octet sequences are identical, and nothing else about
//! them is ordered or numeric. The canonical width is 16 octets, but a few
//! namespaces match on shorter forms (13 octets for sound essence coding,
//! 14 octets for partition pack prefixes), so [`Ul`] tracks its own length
//! and treats different lengths as different labels.

use std::fmt;

/// Canonical width of a Universal Label in octets.
pub const UL_LEN: usize = 16;

/// An immutable Universal Label.
///
/// Construction is constant-time and does no validation beyond length
/// bookkeeping. Equality and hashing are byte-wise and length-aware: a
/// 13-octet label never equals a 16-octet label, even when the longer one
/// is the shorter one zero-padded.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Ul {
    bytes: [u8; UL_LEN],
    len: u8,
}

impl Ul {
    /// Build a label from raw octets.
    ///
    /// Usable in `const` context, which is how the registry tables and the
    /// well-known labels below are expressed.
    ///
    /// # Panics
    ///
    /// Panics if `bytes` is wider than [`UL_LEN`]. Wire-facing callers go
    /// through [`crate::classify`], which rejects oversized keys before any
    /// label is constructed.
    pub const fn from_slice(bytes: &[u8]) -> Self {
        assert!(bytes.len() <= UL_LEN, "universal label wider than 16 octets");
        let mut out = [0u8; UL_LEN];
        let mut i = 0;
        while i < bytes.len() {
            out[i] = bytes[i];
            i += 1;
        }
        Self {
            bytes: out,
            len: bytes.len() as u8,
        }
    }

    /// The label's octets.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes[..self.len as usize]
    }

    /// Number of octets in this label.
    pub const fn len(&self) -> usize {
        self.len as usize
    }

    /// True if the label has no octets.
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The first `n` octets as a shorter label.
    ///
    /// Registries treat shorter keys as a separate namespace, so truncating
    /// a full-width key is how callers probe the 13-octet sound-essence and
    /// 14-octet partition namespaces. `n` larger than the label's length
    /// returns the label unchanged.
    pub fn prefix(&self, n: usize) -> Ul {
        let n = n.min(self.len as usize);
        Ul::from_slice(&self.bytes[..n])
    }
}

impl fmt::Display for Ul {
    /// Renders as dot-separated groups of four hex octets, e.g.
    /// `060e2b34.02530101.0d010101.01011800`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, b) in self.as_bytes().iter().enumerate() {
            if i > 0 && i % 4 == 0 {
                write!(f, ".")?;
            }
            write!(f, "{b:02x}")?;
        }
        Ok(())
    }
}

impl fmt::Debug for Ul {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Ul({self})")
    }
}

// ============================================================================
// Well-Known Labels
// ============================================================================

/// Header partition pack key prefix (14 octets).
///
/// Partition navigation matches the first 14 octets of a partition key; the
/// remaining two octets carry the partition kind and status, which is why
/// this is a prefix label rather than a full-width one.
pub const HEADER_PARTITION: Ul = Ul::from_slice(&[
    0x06, 0x0e, 0x2b, 0x34, 0x02, 0x05, 0x01, 0x01, 0x0d, 0x01, 0x02, 0x01, 0x01, 0x02,
]);

/// Index table segment key.
pub const INDEX_SEGMENT: Ul = Ul::from_slice(&[
    0x06, 0x0e, 0x2b, 0x34, 0x02, 0x53, 0x01, 0x01, 0x0d, 0x01, 0x02, 0x01, 0x01, 0x10, 0x01, 0x00,
]);

/// Structural metadata set key prefix (14 octets).
///
/// All header metadata set keys share these leading octets; the trailing
/// two octets select the individual set.
pub const GENERIC_DESCRIPTOR: Ul = Ul::from_slice(&[
    0x06, 0x0e, 0x2b, 0x34, 0x02, 0x53, 0x01, 0x01, 0x0d, 0x01, 0x01, 0x01, 0x01, 0x01,
]);

// ============================================================================
// Tests
// ============================================================================
