/// Named positions inside a 7-field sample vector.
///
/// The disk-util tuple positions are kept exactly as the log producer emits
/// them; the names only say which series each position feeds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Time,
    Cpu,
    Memory,
    WriteBytes,
    TotalWrite,
    ReadBytes,
    TotalRead,
}

impl Field {
    pub fn index(self) -> usize {
        match self {
            Field::Time => 0,
            Field::Cpu => 1,
            Field::Memory => 2,
            Field::WriteBytes => 3,
            Field::TotalWrite => 4,
            Field::ReadBytes => 5,
            Field::TotalRead => 6,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Field::Time => "time",
            Field::Cpu => "cpu usage",
            Field::Memory => "memory usage",
            Field::WriteBytes => "write bytes",
            Field::TotalWrite => "total write",
            Field::ReadBytes => "read bytes",
            Field::TotalRead => "total read",
        }
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SampleError {
    #[error("missing {} (position {index}, line has {len} numeric fields)", .field.name())]
    MissingField {
        field: Field,
        index: usize,
        len: usize,
    },
}

/// Ordered numbers extracted from one log line.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SampleVector(pub Vec<f64>);

impl SampleVector {
    pub fn new(values: Vec<f64>) -> Self {
        Self(values)
    }

    pub fn get(&self, field: Field) -> Result<f64, SampleError> {
        let index = field.index();
        self.0.get(index).copied().ok_or(SampleError::MissingField {
            field,
            index,
            len: self.0.len(),
        })
    }
}

/// Per-file parallel series, one entry per log line in file order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SeriesSet {
    pub time: Vec<f64>,
    pub memory: Vec<f64>,
    pub cpu: Vec<f64>,
    pub write_bytes: Vec<f64>,
    pub read_bytes: Vec<f64>,
    pub total_write: Vec<f64>,
    pub total_read: Vec<f64>,
}

impl SeriesSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one sample. All positions are read before anything is appended,
    /// so the series stay the same length on failure.
    pub fn push(&mut self, sample: &SampleVector) -> Result<(), SampleError> {
        let time = sample.get(Field::Time)?;
        let cpu = sample.get(Field::Cpu)?;
        let memory = sample.get(Field::Memory)?;
        let write_bytes = sample.get(Field::WriteBytes)?;
        let total_write = sample.get(Field::TotalWrite)?;
        let read_bytes = sample.get(Field::ReadBytes)?;
        let total_read = sample.get(Field::TotalRead)?;

        self.time.push(time);
        self.cpu.push(cpu);
        self.memory.push(memory);
        self.write_bytes.push(write_bytes);
        self.total_write.push(total_write);
        self.read_bytes.push(read_bytes);
        self.total_read.push(total_read);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.time.len()
    }

    pub fn is_empty(&self) -> bool {
        self.time.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn full_sample() -> SampleVector {
        SampleVector::new(vec![2240.0, 0.0, 119.546875, 0.0, 26071040.0, 0.0, 323584.0])
    }

    #[test]
    fn push_maps_positions_to_series() {
        let mut set = SeriesSet::new();
        set.push(&full_sample()).unwrap();
        set.push(&SampleVector::new(vec![2290.0, 12.0, 120.0, 1.0, 2.0, 3.0, 4.0]))
            .unwrap();

        assert_eq!(set.len(), 2);
        assert_eq!(set.time, vec![2240.0, 2290.0]);
        assert_eq!(set.cpu, vec![0.0, 12.0]);
        assert_eq!(set.memory, vec![119.546875, 120.0]);
        assert_eq!(set.write_bytes, vec![0.0, 1.0]);
        assert_eq!(set.total_write, vec![26071040.0, 2.0]);
        assert_eq!(set.read_bytes, vec![0.0, 3.0]);
        assert_eq!(set.total_read, vec![323584.0, 4.0]);
    }

    #[test]
    fn short_sample_reports_first_missing_field() {
        let short = SampleVector::new(vec![10.0, 1.0, 5.5]);
        let err = short.get(Field::WriteBytes).unwrap_err();
        assert_eq!(
            err,
            SampleError::MissingField {
                field: Field::WriteBytes,
                index: 3,
                len: 3
            }
        );
        assert_eq!(
            err.to_string(),
            "missing write bytes (position 3, line has 3 numeric fields)"
        );
    }

    #[test]
    fn failed_push_leaves_series_untouched() {
        let mut set = SeriesSet::new();
        set.push(&full_sample()).unwrap();

        let short = SampleVector::new(vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
        let err = set.push(&short).unwrap_err();
        assert!(matches!(
            err,
            SampleError::MissingField {
                field: Field::TotalRead,
                index: 6,
                len: 6
            }
        ));
        assert_eq!(set.len(), 1);
        assert_eq!(set.total_write.len(), 1);
        assert_eq!(set.read_bytes.len(), 1);
    }

    #[test]
    fn empty_sample_misses_time() {
        let err = SampleVector::default().get(Field::Time).unwrap_err();
        assert_eq!(err.to_string(), "missing time (position 0, line has 0 numeric fields)");
    }
}
