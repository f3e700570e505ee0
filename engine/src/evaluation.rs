pub trait Evaluation: Clone {
    /// Best achievable score from the acting player's perspective.
    fn score(&self) -> i64;

    /// False when an evaluation was cancelled before sweeping every candidate.
    fn is_complete(&self) -> bool;
}
