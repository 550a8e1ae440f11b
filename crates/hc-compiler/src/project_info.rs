use hc_core::{CatalogError, ProjectInformation};

pub const NAME_KEY: &str = "HC_APP_NAME";
pub const VERSION_KEY: &str = "HC_APP_VERSION";
pub const REPOSITORY_URL_KEY: &str = "HC_APP_REPOSITORY_URL";
pub const HOMEPAGE_URL_KEY: &str = "HC_APP_HOMEPAGE_URL";

pub fn parse_project_information<F>(lookup: F) -> Result<ProjectInformation, CatalogError>
where
    F: Fn(&str) -> Option<String>,
{
    let required = |key: &str| {
        lookup(key)
            .filter(|value| !value.is_empty())
            .ok_or_else(|| CatalogError::missing_input(format!("undefined {}", key)))
    };

    Ok(ProjectInformation::new(
        required(NAME_KEY)?,
        required(VERSION_KEY)?,
        required(REPOSITORY_URL_KEY)?,
        required(HOMEPAGE_URL_KEY)?,
    ))
}
