//! Resolving which registry cases a run covers

use crate::error::{Error, Result};
use crate::registry::{Registry, TestCase};

/// How the run set was chosen. The executor only overrides skip reasons for
/// [`SelectionMode::ByIndex`], regardless of how many cases a filter matched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionMode {
    All,
    ByIndex(usize),
    ByFilter(String),
}

impl SelectionMode {
    /// Build the mode from the optional `--index`/`--filter` pair
    pub fn from_request(index: Option<usize>, filter: Option<String>) -> Result<Self> {
        match (index, filter) {
            (Some(_), Some(_)) => Err(Error::ConflictingSelection),
            (Some(index), None) => Ok(SelectionMode::ByIndex(index)),
            (None, Some(filter)) => Ok(SelectionMode::ByFilter(filter)),
            (None, None) => Ok(SelectionMode::All),
        }
    }
}

/// The ordered run set together with the mode that produced it
#[derive(Debug, Clone)]
pub struct Selection<'r> {
    pub mode: SelectionMode,
    pub cases: Vec<&'r TestCase>,
}

impl<'r> Selection<'r> {
    pub fn len(&self) -> usize {
        self.cases.len()
    }

    /// A filter that matched nothing; reported, not treated as an error
    pub fn is_empty(&self) -> bool {
        self.cases.is_empty()
    }
}

/// Resolve a selection mode against the registry.
pub fn select(registry: &Registry, mode: SelectionMode) -> Result<Selection<'_>> {
    let cases = match &mode {
        SelectionMode::All => registry.cases().iter().collect(),
        SelectionMode::ByIndex(index) => {
            let case = registry.get(*index).ok_or(Error::IndexOutOfRange {
                index: *index,
                len: registry.len(),
            })?;
            vec![case]
        }
        SelectionMode::ByFilter(filter) => registry
            .cases()
            .iter()
            .filter(|case| case.function.contains(filter.as_str()))
            .collect(),
    };

    Ok(Selection { mode, cases })
}
