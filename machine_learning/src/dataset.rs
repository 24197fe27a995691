use parking_lot::RwLock;

/// A single observed (x, y) pair.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    pub x: f32,
    pub y: f32,
}

impl Sample {
    /// Creates a new `Sample`.
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

impl From<(f32, f32)> for Sample {
    fn from((x, y): (f32, f32)) -> Self {
        Self { x, y }
    }
}

/// An ordered, read-only view of the samples known at some instant.
///
/// Insertion order is kept since it defines the order in which the path is drawn.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    samples: Vec<Sample>,
}

impl Dataset {
    /// Creates a new dataset from owned samples.
    pub fn new(samples: Vec<Sample>) -> Self {
        Self { samples }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    #[inline]
    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    pub fn iter(&self) -> impl Iterator<Item = &Sample> {
        self.samples.iter()
    }

    /// Splits the samples into their input and output columns.
    ///
    /// # Returns
    /// A tuple with the xs and the ys, in dataset order.
    pub fn columns(&self) -> (Vec<f32>, Vec<f32>) {
        self.samples.iter().map(|s| (s.x, s.y)).unzip()
    }
}

impl<'a> IntoIterator for &'a Dataset {
    type Item = &'a Sample;
    type IntoIter = std::slice::Iter<'a, Sample>;

    fn into_iter(self) -> Self::IntoIter {
        self.samples.iter()
    }
}

/// Append-only storage for the samples accumulated during a session.
///
/// Every method takes `&self`, appends are serialized by the inner lock so cycles
/// running at the same time never corrupt the sequence.
#[derive(Debug, Default)]
pub struct DatasetStore {
    samples: RwLock<Vec<Sample>>,
}

impl DatasetStore {
    /// Creates a new, empty `DatasetStore`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new `DatasetStore` holding the given seed samples.
    ///
    /// # Arguments
    /// * `seed` - The samples known at startup, in order.
    pub fn seeded<I>(seed: I) -> Self
    where
        I: IntoIterator<Item = Sample>,
    {
        Self {
            samples: RwLock::new(seed.into_iter().collect()),
        }
    }

    /// Adds a sample at the end of the sequence.
    pub fn append(&self, sample: Sample) {
        self.samples.write().push(sample);
    }

    /// Copies the current sequence into an owned `Dataset`.
    pub fn snapshot(&self) -> Dataset {
        Dataset::new(self.samples.read().clone())
    }

    pub fn len(&self) -> usize {
        self.samples.read().len()
    }
}
