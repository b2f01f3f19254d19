//! The fixed, ordered set of contract checks

mod cases;
pub mod naming;

pub use cases::vec_map_cases;
pub use naming::{FunctionName, function_name, harness_name};

/// One function contract checked against one harness
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestCase {
    /// Fully-qualified, monomorphized method reference
    pub function: String,
    /// Namespaced harness entry point
    pub harness: String,
    /// Why the case is excluded from default runs, if it is
    pub skip: Option<String>,
}

impl TestCase {
    pub fn new(function: impl Into<String>, harness: impl Into<String>) -> Self {
        Self {
            function: function.into(),
            harness: harness.into(),
            skip: None,
        }
    }

    pub fn skipped(mut self, reason: impl Into<String>) -> Self {
        self.skip = Some(reason.into());
        self
    }

    /// The `<function>/<harness>` pair handed to `--check-contract`
    pub fn contract_target(&self) -> String {
        format!("{}/{}", self.function, self.harness)
    }
}

/// Ordered, read-only list of test cases. The position of a case is its index.
#[derive(Debug, Clone)]
pub struct Registry {
    cases: Vec<TestCase>,
}

impl Registry {
    /// Panics if any case has an empty function or harness name; the registry
    /// is compiled in, so a malformed entry is a bug rather than bad input.
    pub fn new(cases: Vec<TestCase>) -> Self {
        for (index, case) in cases.iter().enumerate() {
            assert!(
                !case.function.is_empty() && !case.harness.is_empty(),
                "test case {index} has an empty function or harness name"
            );
        }
        Self { cases }
    }

    /// The `VecMap` contract registry
    pub fn vec_map() -> Self {
        Self::new(vec_map_cases())
    }

    pub fn cases(&self) -> &[TestCase] {
        &self.cases
    }

    pub fn get(&self, index: usize) -> Option<&TestCase> {
        self.cases.get(index)
    }

    pub fn len(&self) -> usize {
        self.cases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cases.is_empty()
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::vec_map()
    }
}
