pub mod calculate_percentage;
pub mod normalize_case_status;
pub mod normalize_soc_code;
pub mod normalize_soc_name;
pub mod normalize_worksite_state;
pub mod select_top_k;
pub mod sort_results;

pub use calculate_percentage::calculate_percentage;
pub use normalize_case_status::{is_certified_case_status, normalize_case_status};
pub use normalize_soc_code::normalize_soc_code;
pub use normalize_soc_name::normalize_soc_name;
pub use normalize_worksite_state::normalize_worksite_state;
pub use select_top_k::select_top_k;
pub use sort_results::sort_results;
pub mod write_report;
pub use write_report::write_report;
