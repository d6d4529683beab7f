use crate::models::{LogicalField, ReportConfig};

pub const DEFAULT_REPORT_CONFIG: ReportConfig = ReportConfig {
    top_k: 10,
    delimiter: b';',
};

/// Case status value (after whitespace removal and upper-casing) of a certified application.
pub const CERTIFIED_CASE_STATUS: &str = "CERTIFIED";

/// Header names accepted for each logical field. The first entry is the canonical name;
/// the rest are spellings used by older disclosure files, in lookup priority order.
pub const FIELD_HEADER_NAMES: &[(LogicalField, &[&str])] = &[
    (
        LogicalField::OccupationName,
        &["SOC_NAME", "LCA_CASE_SOC_NAME", "OCCUPATIONAL_TITLE"],
    ),
    (
        LogicalField::OccupationCode,
        &["SOC_CODE", "LCA_CASE_SOC_CODE", "JOB_CODE"],
    ),
    (
        LogicalField::WorksiteState,
        &[
            "WORKSITE_STATE",
            "LCA_CASE_WORKLOC1_STATE",
            "STATE_1",
            "WORK_LOCATION_STATE1",
        ],
    ),
    (
        LogicalField::CaseStatus,
        &["CASE_STATUS", "STATUS", "APPROVAL_STATUS"],
    ),
];

pub const TOP_OCCUPATIONS_TITLE: &str = "TOP_OCCUPATIONS";
pub const TOP_STATES_TITLE: &str = "TOP_STATES";
pub const REPORT_COLUMNS_SUFFIX: &str = "NUMBER_CERTIFIED_APPLICATIONS;PERCENTAGE";
