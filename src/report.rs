use std::fmt;

/// Final statistics of a dataset, printed as six `label: value` lines.
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub collection_size: usize,
    pub universe_size: i64,
    pub different_tokens: usize,
    pub set_size_avg: f64,
    pub set_size_max: usize,
    pub set_size_stddev: f64,
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // `{:?}` keeps the decimal point on whole floats (`3.0`, not `3`)
        writeln!(f, "collection_size: {}", self.collection_size)?;
        writeln!(f, "universe_size: {}", self.universe_size)?;
        writeln!(f, "different_tokens: {}", self.different_tokens)?;
        writeln!(f, "set_size_avg: {:?}", self.set_size_avg)?;
        writeln!(f, "set_size_max: {}", self.set_size_max)?;
        writeln!(f, "set_size_stddev: {:?}", self.set_size_stddev)
    }
}
