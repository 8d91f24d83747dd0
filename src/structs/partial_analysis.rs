/// Fields recovered by a single extraction tier. `None` means the tier found
/// nothing usable for that field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PartialAnalysis {
    pub strengths: Option<String>,
    pub improvements: Option<String>,
    pub recommendations: Option<String>,
    pub time_complexity: Option<String>,
    pub space_complexity: Option<String>,
    pub score: Option<i64>,
}

impl PartialAnalysis {
    pub fn is_empty(&self) -> bool {
        self.strengths.is_none()
            && self.improvements.is_none()
            && self.recommendations.is_none()
            && self.time_complexity.is_none()
            && self.space_complexity.is_none()
            && self.score.is_none()
    }
}
