use std::collections::BTreeMap;
use std::sync::OnceLock;

use hc_core::{CatalogError, ErrorKind, ScriptCode};
use hc_parser::{CallDoc, CallSpecDoc, FunctionDoc, ScriptDoc};
use regex::Regex;
use tracing::{trace, warn};

pub trait TemplateCompiler {
    fn can_compile(&self, script: &ScriptDoc) -> bool;
    fn compile(&self, script: &ScriptDoc) -> Result<ScriptCode, CatalogError>;
}

#[derive(Debug, Clone, Default)]
pub struct FunctionTemplateCompiler {
    functions: BTreeMap<String, FunctionDoc>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct CompiledCode {
    code: String,
    revert: String,
}

impl CompiledCode {
    fn append(mut self, call: CompiledCode, separate: bool) -> Self {
        push_block(&mut self.code, &call.code, separate);
        push_block(&mut self.revert, &call.revert, separate);
        self
    }
}

fn push_block(target: &mut String, block: &str, separate: bool) {
    target.push_str(block);
    if separate && !block.is_empty() {
        target.push('\n');
    }
}

impl FunctionTemplateCompiler {
    pub fn new(functions: &[FunctionDoc]) -> Result<Self, CatalogError> {
        let mut table = BTreeMap::new();
        for function in functions {
            if table
                .insert(function.name.clone(), function.clone())
                .is_some()
            {
                return Err(CatalogError::new(
                    ErrorKind::DuplicateName,
                    format!("Duplicate function name \"{}\".", function.name),
                ));
            }
        }
        Ok(Self { functions: table })
    }

    fn normalize_calls(script: &ScriptDoc) -> Result<Vec<CallDoc>, CatalogError> {
        let Some(value) = script.call.as_ref() else {
            return Err(CatalogError::new(
                ErrorKind::InvalidShape,
                format!("Script \"{}\" does not call any function.", script.name),
            ));
        };
        CallSpecDoc::from_value(value)
            .map(CallSpecDoc::into_calls)
            .map_err(|error| {
                CatalogError::new(
                    ErrorKind::InvalidShape,
                    format!(
                        "Called function(s) of script \"{}\" must be an object or a sequence of objects: {}",
                        script.name, error
                    ),
                )
            })
    }

    fn expand_call(&self, call: &CallDoc, script: &ScriptDoc) -> Result<CompiledCode, CatalogError> {
        let Some(function) = self.functions.get(&call.function) else {
            return Err(CatalogError::new(
                ErrorKind::UnknownFunction,
                format!(
                    "Used function is not defined \"{}\". Script: \"{}\"",
                    call.function, script.name
                ),
            ));
        };

        let mut code = function.code.clone();
        let mut revert = function.revert_code.clone();
        for parameter in &function.parameters {
            let Some(value) = call.parameters.get(parameter) else {
                continue;
            };
            code = substitute_parameter(&code, parameter, value);
            revert = substitute_parameter(&revert, parameter, value);
        }

        for leftover in unresolved_parameters(&code).chain(unresolved_parameters(&revert)) {
            warn!(
                script = %script.name,
                function = %function.name,
                parameter = %leftover,
                "placeholder left unresolved"
            );
        }
        trace!(script = %script.name, function = %function.name, "expanded call");

        Ok(CompiledCode { code, revert })
    }
}

impl TemplateCompiler for FunctionTemplateCompiler {
    fn can_compile(&self, script: &ScriptDoc) -> bool {
        script.call.is_some()
    }

    fn compile(&self, script: &ScriptDoc) -> Result<ScriptCode, CatalogError> {
        let calls = Self::normalize_calls(script)?;
        let last = calls.len().saturating_sub(1);
        let compiled = calls
            .iter()
            .enumerate()
            .try_fold(CompiledCode::default(), |compiled, (index, call)| {
                let expanded = self.expand_call(call, script)?;
                Ok::<_, CatalogError>(compiled.append(expanded, index != last))
            })?;
        ScriptCode::new(&script.name, compiled.code, Some(compiled.revert))
    }
}

fn substitute_parameter(code: &str, name: &str, value: &str) -> String {
    code.replacen(&format!("{{{{ ${} }}}}", name), value, 1)
}

fn placeholder_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| {
        Regex::new(r"\{\{ \$([A-Za-z0-9_]+) \}\}").expect("placeholder regex must compile")
    })
}

fn unresolved_parameters(code: &str) -> impl Iterator<Item = &str> {
    placeholder_regex()
        .captures_iter(code)
        .filter_map(|captures| captures.get(1).map(|name| name.as_str()))
}
