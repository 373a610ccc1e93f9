/// Pre-Authentication Encoding: the canonical, prefix-free byte string fed to the MAC
/// (`v4.local`) or the signature (`v4.public`).
///
/// `PAE([p0, p1, ..., pn-1])` is `LE64(n) || LE64(len(p0)) || p0 || LE64(len(p1)) || p1 || ...`.
/// Refactored from the construction described at
/// <https://github.com/paseto-standard/paseto-spec/blob/master/docs/01-Protocol-Versions/Common.md>.
pub(crate) fn pae(pieces: &[&[u8]]) -> Vec<u8> {
  let mut out = le64(pieces.len() as u64);
  for piece in pieces {
    out.extend(le64(piece.len() as u64));
    out.extend_from_slice(piece);
  }
  out
}

/// 8-byte little-endian encoding of `n` with the top bit masked to zero, per the PASETO spec's
/// requirement that the high bit of the 64-bit length always be clear.
fn le64(n: u64) -> Vec<u8> {
  let masked = n & 0x7fff_ffff_ffff_ffff;
  masked.to_le_bytes().to_vec()
}

#[cfg(test)]
mod unit_tests {
  use super::*;

  #[test]
  fn empty_vector_encodes_count_only() {
    assert_eq!(pae(&[]), 0u64.to_le_bytes().to_vec());
  }

  #[test]
  fn single_empty_piece_contributes_length_prefix_only() {
    let encoded = pae(&[b""]);
    let mut expected = 1u64.to_le_bytes().to_vec();
    expected.extend(0u64.to_le_bytes());
    assert_eq!(encoded, expected);
  }

  #[test]
  fn concatenation_order_is_strict() {
    let encoded = pae(&[b"ab", b"c"]);
    let mut expected = 2u64.to_le_bytes().to_vec();
    expected.extend(2u64.to_le_bytes());
    expected.extend_from_slice(b"ab");
    expected.extend(1u64.to_le_bytes());
    expected.extend_from_slice(b"c");
    assert_eq!(encoded, expected);
  }

  #[test]
  fn top_bit_of_length_is_always_clear() {
    let encoded = pae(&[b"x"]);
    // byte at index 8 is the low byte of len("x") == 1; the top-bit mask only matters for
    // the hypothetical case of a length with bit 63 set, which we can't allocate, so assert
    // the masking function directly instead.
    assert_eq!(le64(u64::MAX)[7] & 0x80, 0);
    let _ = encoded;
  }

  #[test]
  fn is_prefix_free_across_different_arities() {
    // PAE([a, b]) must differ from PAE([a || LE64(len(b)) || b]) treated as a single piece,
    // because the count prefix differs.
    let two_pieces = pae(&[b"hello", b"world"]);
    let mut combined = Vec::new();
    combined.extend(8u64.to_le_bytes());
    combined.extend_from_slice(b"hello");
    combined.extend(5u64.to_le_bytes());
    combined.extend_from_slice(b"world");
    let one_piece = pae(&[&combined]);
    assert_ne!(two_pieces, one_piece);
  }

  #[test]
  fn distinct_vectors_never_collide() {
    let vectors: Vec<Vec<&[u8]>> = vec![
      vec![],
      vec![b""],
      vec![b"a"],
      vec![b"a", b"b"],
      vec![b"ab"],
      vec![b"", b"ab"],
      vec![b"ab", b""],
    ];
    for (i, a) in vectors.iter().enumerate() {
      for (j, b) in vectors.iter().enumerate() {
        if i != j {
          assert_ne!(pae(a), pae(b), "collision between vector {i} and {j}");
        }
      }
    }
  }
}
