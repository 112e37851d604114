// crates/yatra-core/src/model/qa.rs
use serde::{Deserialize, Serialize};

/// A known question with its answer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct QaPair {
    pub question: String,
    pub answer: String,
}

impl QaPair {
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
        }
    }
}

/// Question/answer table in source order. Question text may repeat.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct QaTable {
    pub pairs: Vec<QaPair>,
}

impl QaTable {
    pub fn new(pairs: Vec<QaPair>) -> Self {
        Self { pairs }
    }

    pub fn pairs(&self) -> &[QaPair] {
        &self.pairs
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}
