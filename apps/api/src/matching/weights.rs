/// Fixed tuning for the weighted-sum score. Changing these is a code
/// change, not a runtime option; they must sum to 1.0 so the aggregate
/// stays in [0, 1].
pub const MATCH_WEIGHTS: Weights = Weights {
    skills: 0.60,
    location: 0.20,
    recency: 0.15,
    job_type: 0.05,
};

#[derive(Debug, Clone, Copy)]
pub struct Weights {
    pub skills: f64,
    pub location: f64,
    pub recency: f64,
    pub job_type: f64,
}

impl Weights {
    pub fn sum(&self) -> f64 {
        self.skills + self.location + self.recency + self.job_type
    }
}
