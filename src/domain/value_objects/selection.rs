//! 1-based index selection over the discovered file list
//!
//! Editor integrations show discovered files as a numbered list and send back
//! something like `"1, 3,4"`.

use std::path::PathBuf;

use crate::error::{HarnessError, HarnessResult};

/// Parsed, zero-based indices in the order the user typed them
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexSelection {
    raw: String,
    indices: Vec<usize>,
}

impl IndexSelection {
    /// Parse a comma-separated list of 1-based indices.
    ///
    /// Empty segments (e.g. a trailing comma) are ignored.
    pub fn parse(input: &str) -> HarnessResult<Self> {
        let mut indices = Vec::new();

        for token in input.split(',').map(str::trim).filter(|t| !t.is_empty()) {
            let number: usize = token.parse().map_err(|_| HarnessError::InvalidSelection {
                input: input.to_string(),
                message: format!("'{}' is not a number", token),
            })?;
            if number == 0 {
                return Err(HarnessError::InvalidSelection {
                    input: input.to_string(),
                    message: "indices start at 1".to_string(),
                });
            }
            indices.push(number - 1);
        }

        if indices.is_empty() {
            return Err(HarnessError::InvalidSelection {
                input: input.to_string(),
                message: "no indices given".to_string(),
            });
        }

        Ok(Self {
            raw: input.to_string(),
            indices,
        })
    }

    /// Zero-based indices
    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    /// Map the indices onto `candidates`, preserving selection order and duplicates.
    pub fn resolve(&self, candidates: &[PathBuf]) -> HarnessResult<Vec<PathBuf>> {
        self.indices
            .iter()
            .map(|&i| {
                candidates
                    .get(i)
                    .cloned()
                    .ok_or_else(|| HarnessError::InvalidSelection {
                        input: self.raw.clone(),
                        message: format!(
                            "index {} is out of range (1..={})",
                            i + 1,
                            candidates.len()
                        ),
                    })
            })
            .collect()
    }
}
