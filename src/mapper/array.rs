//! `ndarray` batch forms of the mapper operations.
//!
//! Shapes are preserved; each element goes through the scalar operation.

use ndarray::{Array, ArrayBase, Data, Dimension};

use super::FixedPointMapper;

impl FixedPointMapper {
    /// Element-wise [`encode`](Self::encode) over an array of any shape.
    pub fn encode_array<S, D>(&self, input: &ArrayBase<S, D>) -> Array<u64, D>
    where
        S: Data<Elem = f64>,
        D: Dimension,
    {
        input.mapv(|x| self.encode(x))
    }

    /// Element-wise [`decode_unsigned`](Self::decode_unsigned).
    pub fn decode_unsigned_array<S, D>(&self, input: &ArrayBase<S, D>) -> Array<f64, D>
    where
        S: Data<Elem = u64>,
        D: Dimension,
    {
        input.mapv(|x| self.decode_unsigned(x))
    }

    /// Element-wise [`decode_signed`](Self::decode_signed).
    pub fn decode_signed_array<S, D>(&self, input: &ArrayBase<S, D>) -> Array<f64, D>
    where
        S: Data<Elem = u64>,
        D: Dimension,
    {
        input.mapv(|x| self.decode_signed(x))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::{array, Array2};

    #[test]
    fn test_encode_array_preserves_shape() {
        let mapper = FixedPointMapper::new(8, 100).unwrap();
        let input = array![[1.5, 0.25], [-0.5, 3.0]];
        let encoded = mapper.encode_array(&input);
        assert_eq!(encoded.dim(), (2, 2));
        assert_eq!(encoded, array![[150u64, 25], [206, 44]]);
    }

    #[test]
    fn test_decode_arrays() {
        let mapper = FixedPointMapper::new(8, 100).unwrap();
        let words = array![150u64, 50];
        assert_eq!(mapper.decode_unsigned_array(&words), array![1.5, 0.5]);
        assert_eq!(mapper.decode_signed_array(&words), array![-1.06, 0.5]);
    }

    #[test]
    fn test_array_matches_batch() {
        let mapper = FixedPointMapper::with_fractional_bits(32, 12).unwrap();
        let input = Array2::from_shape_fn((3, 4), |(i, j)| (i as f64 - 1.0) * 3.7 + j as f64 * 0.13);
        let flat: Vec<f64> = input.iter().copied().collect();

        let encoded = mapper.encode_array(&input);
        let batch = mapper.encode_batch(&flat);
        assert_eq!(encoded.iter().copied().collect::<Vec<_>>(), batch);

        let decoded = mapper.decode_signed_array(&encoded.view());
        assert_eq!(
            decoded.iter().copied().collect::<Vec<_>>(),
            mapper.decode_signed_batch(&batch)
        );
    }
}
