#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportConfig {
    /// Number of entries kept in each report.
    pub top_k: usize,
    /// Field delimiter of the input file.
    pub delimiter: u8,
}
