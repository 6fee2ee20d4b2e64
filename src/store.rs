//! The boundary to the surrounding framework: read-only access to the
//! arrays an expression may reference.

use std::collections::HashMap;

/// Read-only lookup of the arrays available to an expression.
///
/// The engine never mutates a source array; it only reads shapes and
/// element values and produces a new output array. `value` promotes the
/// stored element at a flat tuple-major index to `f64`, whatever the
/// backing storage type is.
pub trait ArrayStore {
    /// Whether an array with exactly this name exists.
    fn contains(&self, name: &str) -> bool;

    /// `(tuples, components)` of the named array.
    fn shape(&self, name: &str) -> Option<(usize, usize)>;

    /// The element at `index` in `0 .. tuples * components`.
    fn value(&self, name: &str, index: usize) -> Option<f64>;
}

#[derive(Debug, Clone)]
struct StoredArray {
    tuples: usize,
    components: usize,
    elements: Vec<f64>,
}

/// A plain in-memory [`ArrayStore`].
///
/// Stands in for the host framework's array collection in tests and the
/// CLI.
#[derive(Debug, Clone, Default)]
pub struct ArrayMap {
    arrays: HashMap<String, StoredArray>,
}

impl ArrayMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a one-component array; each element is one tuple.
    pub fn insert_scalar(&mut self, name: impl Into<String>, elements: Vec<f64>) {
        let tuples = elements.len();
        self.arrays.insert(
            name.into(),
            StoredArray {
                tuples,
                components: 1,
                elements,
            },
        );
    }

    /// Insert an array with an explicit shape.
    ///
    /// `elements` is tuple-major and its length must equal
    /// `tuples * components`.
    pub fn insert(
        &mut self,
        name: impl Into<String>,
        tuples: usize,
        components: usize,
        elements: Vec<f64>,
    ) {
        assert_eq!(
            elements.len(),
            tuples * components,
            "element count must match the declared shape"
        );
        self.arrays.insert(
            name.into(),
            StoredArray {
                tuples,
                components,
                elements,
            },
        );
    }

    pub fn len(&self) -> usize {
        self.arrays.len()
    }

    pub fn is_empty(&self) -> bool {
        self.arrays.is_empty()
    }
}

impl ArrayStore for ArrayMap {
    fn contains(&self, name: &str) -> bool {
        self.arrays.contains_key(name)
    }

    fn shape(&self, name: &str) -> Option<(usize, usize)> {
        self.arrays
            .get(name)
            .map(|array| (array.tuples, array.components))
    }

    fn value(&self, name: &str, index: usize) -> Option<f64> {
        self.arrays
            .get(name)
            .and_then(|array| array.elements.get(index))
            .copied()
    }
}
