use crate::diagnostics::Diagnostics;
use crate::env::Environment;
use crate::error::ExportError;
use crate::output::{self, OutputTarget};
use crate::utils::parse_env_names;
use log::debug;

/// What a single run was asked to export.
#[derive(Debug, Clone, Default)]
pub struct Request {
    /// Comma-separated variable names, as received.
    pub env_names: String,
    /// Write to the secret output file instead of the general one.
    pub secret: bool,
}

/// Outcome of looking one name up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lookup {
    pub name: String,
    pub value: String,
    pub found: bool,
}

pub fn validate(request: &Request) -> Result<(), ExportError> {
    if request.env_names.is_empty() {
        return Err(ExportError::InvalidArgument);
    }
    Ok(())
}

pub struct Exporter<'a, E, D> {
    env: &'a E,
    diagnostics: &'a D,
    output: &'a output::Config,
}

impl<'a, E: Environment, D: Diagnostics> Exporter<'a, E, D> {
    pub fn new(env: &'a E, diagnostics: &'a D, output: &'a output::Config) -> Self {
        Self {
            env,
            diagnostics,
            output,
        }
    }

    fn lookup(&self, name: String) -> Lookup {
        match self.env.lookup(&name) {
            Some(value) => Lookup {
                name,
                value,
                found: true,
            },
            None => Lookup {
                name,
                value: String::new(),
                found: false,
            },
        }
    }

    /// Export every requested variable, in order
    ///
    /// Stops at the first file error. Lines appended before that stay in place.
    pub fn run(&self, request: &Request) -> Result<(), ExportError> {
        validate(request)?;

        let target = OutputTarget::select(request.secret);
        let names = parse_env_names(&request.env_names);
        debug!("Exporting {} variable(s) to {}", names.len(), target);

        for name in names {
            let lookup = self.lookup(name);
            if !lookup.found {
                self.diagnostics.warn(&format!(
                    "environment variable {} does not exist",
                    lookup.name
                ));
            }

            self.diagnostics
                .info(&format!("inspecting environment variable: {}", lookup.name));

            output::append_line(self.output, target, &lookup.name, &lookup.value)?;

            if lookup.found {
                self.diagnostics
                    .info(&format!("successfully exported {}", lookup.name));
            } else {
                self.diagnostics.info(&format!(
                    "exported {} with empty value (variable does not exist)",
                    lookup.name
                ));
            }
        }

        Ok(())
    }
}
