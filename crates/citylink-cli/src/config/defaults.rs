use crate::cli::{OutputFormat, SelfPairsMode, Strategy};

pub fn default_strategy() -> Strategy {
    Strategy::Greedy
}

pub fn default_self_pairs() -> SelfPairsMode {
    SelfPairsMode::Derive
}

pub fn default_format() -> OutputFormat {
    OutputFormat::Text
}
