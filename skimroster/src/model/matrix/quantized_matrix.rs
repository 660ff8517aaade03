/// largest stored value. the cap leaves the top bit clear so values also
/// fit a signed 16-bit integer.
pub const MAX_QUANTIZED_VALUE: f64 = 32767.0;

/// a dense origin-destination matrix of scaled 16-bit values, or the empty
/// matrix backing deferred roster entries. stored values are the source
/// values multiplied by the entry scaling; dividing them back out happens
/// at query time.
#[derive(Debug, Clone, PartialEq)]
pub enum QuantizedMatrix {
    /// no backing file. every cell reads as zero.
    Empty,
    Dense { size: usize, values: Box<[u16]> },
}

impl QuantizedMatrix {
    /// a size x size matrix of zeroes
    pub fn new_dense(size: usize) -> QuantizedMatrix {
        QuantizedMatrix::Dense {
            size,
            values: vec![0; size * size].into_boxed_slice(),
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, QuantizedMatrix::Empty)
    }

    /// number of rows (and columns). the empty matrix has size 0.
    pub fn size(&self) -> usize {
        match self {
            QuantizedMatrix::Empty => 0,
            QuantizedMatrix::Dense { size, .. } => *size,
        }
    }

    /// stored value for an origin, destination pair. the empty matrix
    /// returns zero for any pair; a dense matrix returns None out of bounds.
    #[inline]
    pub fn get(&self, origin: usize, destination: usize) -> Option<u16> {
        match self {
            QuantizedMatrix::Empty => Some(0),
            QuantizedMatrix::Dense { size, values } => {
                if origin >= *size || destination >= *size {
                    None
                } else {
                    values.get(origin * size + destination).copied()
                }
            }
        }
    }

    pub fn get_mut(&mut self, origin: usize, destination: usize) -> Option<&mut u16> {
        match self {
            QuantizedMatrix::Empty => None,
            QuantizedMatrix::Dense { size, values } => {
                if origin >= *size || destination >= *size {
                    None
                } else {
                    values.get_mut(origin * *size + destination)
                }
            }
        }
    }

    /// scales a source value into its stored form. the value is clamped to
    /// [0, 32767 / scale] first so the scaled result is representable.
    pub fn quantize(value: f64, scale: f64) -> u16 {
        let ceiling = MAX_QUANTIZED_VALUE / scale;
        let clamped = if value.is_nan() {
            0.0
        } else {
            value.clamp(0.0, ceiling)
        };
        (clamped * scale).round() as u16
    }
}
