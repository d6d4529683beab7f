use crate::constants::FIELD_HEADER_NAMES;
use crate::models::Error;
use crate::types::ColumnIndex;
use log::{info, warn};
use std::fmt;

/// The columns the aggregation reads from every row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LogicalField {
    OccupationName,
    OccupationCode,
    WorksiteState,
    CaseStatus,
}

impl LogicalField {
    /// Resolution order used by `FieldIndexMap::resolve`.
    pub const ALL: [LogicalField; 4] = [
        LogicalField::OccupationName,
        LogicalField::OccupationCode,
        LogicalField::WorksiteState,
        LogicalField::CaseStatus,
    ];

    /// Header names accepted for this field, canonical name first.
    pub fn header_names(&self) -> &'static [&'static str] {
        FIELD_HEADER_NAMES
            .iter()
            .find(|(field, _)| field == self)
            .map(|(_, names)| *names)
            .unwrap_or(&[])
    }

    pub fn canonical_header_name(&self) -> &'static str {
        self.header_names().first().copied().unwrap_or_default()
    }
}

impl fmt::Display for LogicalField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.canonical_header_name())
    }
}

/// Column positions of the four logical fields within a header row.
///
/// A map only exists when every field resolved; there is no partially resolved state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldIndexMap {
    pub occupation_name: ColumnIndex,
    pub occupation_code: ColumnIndex,
    pub worksite_state: ColumnIndex,
    pub case_status: ColumnIndex,
}

impl FieldIndexMap {
    /// Builds the map from a header row.
    ///
    /// For each field the canonical header name is looked up first, then each alternate
    /// in priority order. Matching is exact and case-sensitive; if a header name occurs
    /// more than once the leftmost column wins.
    pub fn resolve<S: AsRef<str>>(header_fields: &[S]) -> Result<Self, Error> {
        let mut positions = [0; 4];

        for (position, field) in positions.iter_mut().zip(LogicalField::ALL) {
            *position = Self::locate(header_fields, field).ok_or_else(|| {
                warn!("Could not resolve column for {}", field);
                Error::Schema { field }
            })?;
        }

        let [occupation_name, occupation_code, worksite_state, case_status] = positions;
        let field_index_map = FieldIndexMap {
            occupation_name,
            occupation_code,
            worksite_state,
            case_status,
        };

        info!("Resolved header columns: {:?}", field_index_map);

        Ok(field_index_map)
    }

    fn locate<S: AsRef<str>>(header_fields: &[S], field: LogicalField) -> Option<ColumnIndex> {
        field.header_names().iter().find_map(|name| {
            header_fields
                .iter()
                .position(|header_field| header_field.as_ref() == *name)
        })
    }
}
