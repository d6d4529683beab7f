pub mod aggregation_result;
pub use aggregation_result::{AggregationResult, SkipReason, SkippedRows};

pub mod certified_application_counter;
pub use certified_application_counter::{aggregate, try_aggregate, CertifiedApplicationCounter};

pub mod delimited_row;
pub use delimited_row::DelimitedRow;

pub mod config;
pub use config::ReportConfig;

pub mod error;
pub use error::Error;

pub mod field_index_map;
pub use field_index_map::{FieldIndexMap, LogicalField};

pub mod frequency_counter;
pub use frequency_counter::FrequencyCounter;

pub mod ranked_entry;
pub use ranked_entry::RankedEntry;

pub mod report_ranker;
pub use report_ranker::{rank_top, rank_top_occupations, rank_top_states};
