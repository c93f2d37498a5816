//! Helpers for flattened unitary matrices.
//!
//! Matrices are stored row-major with the first qubit operand as the most
//! significant bit of the row/column index.

use num_complex::Complex64;

/// Number of qubits a flattened square matrix of `len` entries acts on.
pub fn matrix_width(len: usize) -> Option<usize> {
    let mut qubits = 0;
    let mut entries = 1usize;
    while entries < len {
        entries = entries.checked_mul(4)?;
        qubits += 1;
    }
    (entries == len && qubits > 0).then_some(qubits)
}

/// Reorder a matrix so the qubit significance is reversed.
///
/// Converts between big-endian and little-endian operand conventions. The
/// operation is its own inverse.
pub fn reverse_qubit_order(matrix: &[Complex64], num_qubits: usize) -> Vec<Complex64> {
    let dim = 1usize << num_qubits;
    let mut out = vec![Complex64::new(0.0, 0.0); matrix.len()];
    for row in 0..dim {
        for col in 0..dim {
            let src = row * dim + col;
            if let Some(value) = matrix.get(src) {
                let dst = reverse_bits(row, num_qubits) * dim + reverse_bits(col, num_qubits);
                out[dst] = *value;
            }
        }
    }
    out
}

fn reverse_bits(value: usize, width: usize) -> usize {
    (0..width).fold(0, |acc, bit| acc | (((value >> bit) & 1) << (width - 1 - bit)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn c(re: f64) -> Complex64 {
        Complex64::new(re, 0.0)
    }

    #[test]
    fn test_matrix_width() {
        assert_eq!(matrix_width(4), Some(1));
        assert_eq!(matrix_width(16), Some(2));
        assert_eq!(matrix_width(64), Some(3));
        assert_eq!(matrix_width(1), None);
        assert_eq!(matrix_width(8), None);
        assert_eq!(matrix_width(0), None);
    }

    #[test]
    fn test_reverse_qubit_order_cnot() {
        // CX with control on the most significant qubit
        let big_endian = [
            c(1.0), c(0.0), c(0.0), c(0.0),
            c(0.0), c(1.0), c(0.0), c(0.0),
            c(0.0), c(0.0), c(0.0), c(1.0),
            c(0.0), c(0.0), c(1.0), c(0.0),
        ];
        let little_endian = reverse_qubit_order(&big_endian, 2);
        let expected = [
            c(1.0), c(0.0), c(0.0), c(0.0),
            c(0.0), c(0.0), c(0.0), c(1.0),
            c(0.0), c(0.0), c(1.0), c(0.0),
            c(0.0), c(1.0), c(0.0), c(0.0),
        ];
        assert_eq!(little_endian, expected);
        assert_eq!(reverse_qubit_order(&little_endian, 2), big_endian);
    }

    #[test]
    fn test_single_qubit_is_unchanged() {
        let m = [c(0.0), c(1.0), c(1.0), c(0.0)];
        assert_eq!(reverse_qubit_order(&m, 1), m);
    }
}
