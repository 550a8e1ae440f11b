use chrono::{DateTime, Utc};
use hc_core::{Application, CatalogError, OperatingSystem, ProjectInformation};
use hc_parser::ApplicationDoc;
use tracing::debug;

use crate::category_builder::CategoryTreeBuilder;
use crate::function_compiler::FunctionTemplateCompiler;
use crate::scripting_definition::parse_scripting_definition;

pub fn parse_application(
    document: &ApplicationDoc,
    info: ProjectInformation,
    date: DateTime<Utc>,
) -> Result<Application, CatalogError> {
    let actions = match document.actions.as_deref() {
        Some(actions) if !actions.is_empty() => actions,
        _ => {
            return Err(CatalogError::empty_collection(
                "application does not define any action",
            ))
        }
    };

    let compiler = FunctionTemplateCompiler::new(document.functions.as_deref().unwrap_or_default())?;
    let mut builder = CategoryTreeBuilder::new(&compiler);
    let categories = actions
        .iter()
        .map(|action| builder.build(action))
        .collect::<Result<Vec<_>, _>>()?;

    let os = parse_os(document.os.as_deref())?;
    let scripting = parse_scripting_definition(document.scripting.as_ref(), &info, date)?;
    let application = Application::new(os, info, categories, scripting)?;

    debug!(
        os = application.os().name(),
        categories = application.total_categories(),
        scripts = application.total_scripts(),
        recommended = application.recommended_scripts().len(),
        "parsed application"
    );
    Ok(application)
}

fn parse_os(os: Option<&str>) -> Result<OperatingSystem, CatalogError> {
    match os {
        Some(os) if !os.is_empty() => OperatingSystem::parse(os),
        _ => Err(CatalogError::missing_input("undefined os")),
    }
}
