use std::collections::HashMap;
use std::env;

/// Read-only view of the variables an export run can look up.
pub trait Environment {
    /// Returns `None` only when the variable is not set at all.
    fn lookup(&self, name: &str) -> Option<String>;
}

/// The environment of the current process.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl Environment for ProcessEnv {
    fn lookup(&self, name: &str) -> Option<String> {
        env::var_os(name).map(|val| val.to_string_lossy().into_owned())
    }
}

impl Environment for HashMap<String, String> {
    fn lookup(&self, name: &str) -> Option<String> {
        self.get(name).cloned()
    }
}
