use csv::StringRecord;

/// Read access to the fields of one delimited row.
pub trait DelimitedRow {
    fn field_count(&self) -> usize;

    /// Gets the field at `index`, or None if the row is shorter
    fn field(&self, index: usize) -> Option<&str>;
}

impl<S: AsRef<str>> DelimitedRow for [S] {
    fn field_count(&self) -> usize {
        self.len()
    }

    fn field(&self, index: usize) -> Option<&str> {
        self.get(index).map(AsRef::as_ref)
    }
}

impl<S: AsRef<str>, const N: usize> DelimitedRow for [S; N] {
    fn field_count(&self) -> usize {
        N
    }

    fn field(&self, index: usize) -> Option<&str> {
        self.as_slice().field(index)
    }
}

impl<S: AsRef<str>> DelimitedRow for Vec<S> {
    fn field_count(&self) -> usize {
        self.len()
    }

    fn field(&self, index: usize) -> Option<&str> {
        self.as_slice().field(index)
    }
}

impl DelimitedRow for StringRecord {
    fn field_count(&self) -> usize {
        self.len()
    }

    fn field(&self, index: usize) -> Option<&str> {
        self.get(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_string_record_fields() {
        let record = StringRecord::from(vec!["FOO", "15-1234", "CA"]);

        assert_eq!(record.field_count(), 3);
        assert_eq!(DelimitedRow::field(&record, 1), Some("15-1234"));
        assert_eq!(DelimitedRow::field(&record, 3), None);
    }

    #[test]
    fn test_slice_fields() {
        let row = vec!["FOO".to_string(), "CA".to_string()];

        assert_eq!(row.field_count(), 2);
        assert_eq!(row.field(0), Some("FOO"));
        assert_eq!(row.field(2), None);
    }
}
