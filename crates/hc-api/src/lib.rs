use chrono::{DateTime, Utc};
use hc_compiler::{parse_application, parse_project_information};
use hc_parser::parse_catalog_document;
use tracing::debug;

pub use hc_core::{
    Application, CatalogError, Category, CategoryId, ErrorKind, OperatingSystem,
    ProjectInformation, Script, ScriptCode, ScriptingDefinition, ScriptingLanguage,
};

/// Compiles catalog text into an `Application`, reading project metadata
/// through `env` and stamping `{{ date }}` with the current time.
pub fn load_application<F>(source: &str, env: F) -> Result<Application, CatalogError>
where
    F: Fn(&str) -> Option<String>,
{
    load_application_at(source, env, Utc::now())
}

pub fn load_application_at<F>(
    source: &str,
    env: F,
    date: DateTime<Utc>,
) -> Result<Application, CatalogError>
where
    F: Fn(&str) -> Option<String>,
{
    let document = parse_catalog_document(source)?;
    let info = parse_project_information(env)?;
    debug!(name = %info.name, version = %info.version, "loading catalog");
    parse_application(&document, info, date)
}

pub fn load_application_from_process_env(source: &str) -> Result<Application, CatalogError> {
    load_application(source, |key| std::env::var(key).ok())
}
