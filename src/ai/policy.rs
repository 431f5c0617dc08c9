/// Selects a column for a computer-controlled player.
pub trait OpponentPolicy {
    /// Pick one column out of `legal`, which the caller guarantees is non-empty.
    fn select_move(&mut self, legal: &[usize]) -> usize;

    /// Return the policy's display name.
    fn name(&self) -> &str;
}

/// Difficulty label offered to the player.
///
/// Every tier currently plays the same uniformly random policy.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    serde::Serialize,
    serde::Deserialize,
    clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    #[default]
    Normal,
    Hard,
}

impl Difficulty {
    pub fn label(self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Normal => "Normal",
            Difficulty::Hard => "Hard",
        }
    }
}
