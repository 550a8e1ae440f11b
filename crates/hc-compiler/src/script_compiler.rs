use hc_core::{CatalogError, Script, ScriptCode};
use hc_parser::ScriptDoc;
use tracing::warn;

use crate::function_compiler::TemplateCompiler;

pub fn parse_script(
    script: &ScriptDoc,
    compiler: &dyn TemplateCompiler,
) -> Result<Script, CatalogError> {
    Ok(Script::new(
        script.name.clone(),
        parse_code(script, compiler)?,
        script.documentation_urls(),
        script.recommend,
    ))
}

pub fn parse_code(
    script: &ScriptDoc,
    compiler: &dyn TemplateCompiler,
) -> Result<ScriptCode, CatalogError> {
    if compiler.can_compile(script) {
        if script.code.is_some() {
            warn!(script = %script.name, "literal code ignored in favor of call");
        }
        return compiler.compile(script);
    }
    ScriptCode::new(
        &script.name,
        script.code.clone().unwrap_or_default(),
        script.revert_code.clone(),
    )
}
