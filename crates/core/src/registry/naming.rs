//! Qualified names in the verifier's symbol-addressing syntax

/// Key type used when a case does not pick its own instantiation
pub const DEFAULT_KEY_TYPE: &str = "u8";
/// Value type used when a case does not pick its own instantiation
pub const DEFAULT_VALUE_TYPE: &str = "u8";
/// Module that holds every contract harness in the target file
pub const HARNESS_MODULE: &str = "contract_harnesses";

/// Build the fully-qualified name of a method on a monomorphized two-parameter type.
///
/// `function_name("VecMap", "u8", "u8", "get", &["u8"])` yields
/// `VecMap::<u8, u8>::get::<u8>`. An empty `explicit_type_args` slice means
/// the method is not generic and no turbofish is appended.
pub fn function_name(
    type_name: &str,
    key_type: &str,
    value_type: &str,
    method: &str,
    explicit_type_args: &[&str],
) -> String {
    let mut name = format!("{type_name}::<{key_type}, {value_type}>::{method}");
    if !explicit_type_args.is_empty() {
        name.push_str(&format!("::<{}>", explicit_type_args.join(", ")));
    }
    name
}

/// Qualify a harness name with the harness module
pub fn harness_name(name: &str) -> String {
    format!("{HARNESS_MODULE}::{name}")
}

/// Builder over [`function_name`] that fills in the default key and value types.
#[derive(Debug, Clone)]
pub struct FunctionName<'a> {
    type_name: &'a str,
    method: &'a str,
    key_type: &'a str,
    value_type: &'a str,
    type_args: Vec<&'a str>,
}

impl<'a> FunctionName<'a> {
    pub fn new(type_name: &'a str, method: &'a str) -> Self {
        Self {
            type_name,
            method,
            key_type: DEFAULT_KEY_TYPE,
            value_type: DEFAULT_VALUE_TYPE,
            type_args: Vec::new(),
        }
    }

    pub fn key(mut self, key_type: &'a str) -> Self {
        self.key_type = key_type;
        self
    }

    pub fn value(mut self, value_type: &'a str) -> Self {
        self.value_type = value_type;
        self
    }

    pub fn type_args(mut self, args: &[&'a str]) -> Self {
        self.type_args = args.to_vec();
        self
    }

    pub fn build(&self) -> String {
        function_name(
            self.type_name,
            self.key_type,
            self.value_type,
            self.method,
            &self.type_args,
        )
    }
}
