use serde::Serialize;

use crate::error::CatalogError;

pub type CategoryId = u32;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum OperatingSystem {
    Windows,
    #[serde(rename = "macOS")]
    MacOs,
    Linux,
    Unknown,
}

impl OperatingSystem {
    pub fn parse(value: &str) -> Result<Self, CatalogError> {
        match value {
            "windows" => Ok(Self::Windows),
            "macOS" => Ok(Self::MacOs),
            "linux" => Ok(Self::Linux),
            _ => Err(CatalogError::unknown_enum_value(format!(
                "unsupported os: \"{}\"",
                value
            ))),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Windows => "windows",
            Self::MacOs => "macOS",
            Self::Linux => "linux",
            Self::Unknown => "unknown",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ScriptingLanguage {
    Bash,
    Batchfile,
}

impl ScriptingLanguage {
    pub fn parse(value: &str) -> Result<Self, CatalogError> {
        match value {
            "bash" => Ok(Self::Bash),
            "batchfile" => Ok(Self::Batchfile),
            _ => Err(CatalogError::unknown_enum_value(format!(
                "unknown language: \"{}\"",
                value
            ))),
        }
    }

    pub fn file_extension(self) -> &'static str {
        match self {
            Self::Bash => "sh",
            Self::Batchfile => "bat",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScriptCode {
    code: String,
    revert: Option<String>,
}

impl ScriptCode {
    pub fn new(
        script_name: &str,
        code: impl Into<String>,
        revert: Option<String>,
    ) -> Result<Self, CatalogError> {
        let code = code.into();
        if code.is_empty() {
            return Err(CatalogError::invalid_code(format!(
                "code of script \"{}\" is empty",
                script_name
            )));
        }
        Ok(Self {
            code,
            revert: revert.filter(|revert| !revert.is_empty()),
        })
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn revert(&self) -> Option<&str> {
        self.revert.as_deref()
    }

    pub fn can_revert(&self) -> bool {
        self.revert.as_deref().is_some_and(|revert| !revert.is_empty())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Script {
    name: String,
    code: ScriptCode,
    documentation_urls: Vec<String>,
    is_recommended: bool,
}

impl Script {
    pub fn new(
        name: impl Into<String>,
        code: ScriptCode,
        documentation_urls: Vec<String>,
        is_recommended: bool,
    ) -> Self {
        Self {
            name: name.into(),
            code,
            documentation_urls,
            is_recommended,
        }
    }

    pub fn id(&self) -> &str {
        &self.name
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn code(&self) -> &ScriptCode {
        &self.code
    }

    pub fn documentation_urls(&self) -> &[String] {
        &self.documentation_urls
    }

    pub fn is_recommended(&self) -> bool {
        self.is_recommended
    }

    pub fn can_revert(&self) -> bool {
        self.code.can_revert()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    id: CategoryId,
    name: String,
    scripts: Vec<Script>,
    sub_categories: Vec<Category>,
    documentation_urls: Vec<String>,
}

impl Category {
    pub fn new(
        id: CategoryId,
        name: impl Into<String>,
        scripts: Vec<Script>,
        sub_categories: Vec<Category>,
        documentation_urls: Vec<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            scripts,
            sub_categories,
            documentation_urls,
        }
    }

    pub fn id(&self) -> CategoryId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn scripts(&self) -> &[Script] {
        &self.scripts
    }

    pub fn sub_categories(&self) -> &[Category] {
        &self.sub_categories
    }

    pub fn documentation_urls(&self) -> &[String] {
        &self.documentation_urls
    }

    pub fn all_scripts(&self) -> Vec<&Script> {
        let mut scripts = Vec::new();
        collect_scripts(self, &mut scripts);
        scripts
    }

    pub fn all_categories(&self) -> Vec<&Category> {
        let mut categories = Vec::new();
        collect_categories(self, &mut categories);
        categories
    }
}

fn collect_scripts<'a>(category: &'a Category, out: &mut Vec<&'a Script>) {
    out.extend(category.scripts.iter());
    for sub_category in &category.sub_categories {
        collect_scripts(sub_category, out);
    }
}

fn collect_categories<'a>(category: &'a Category, out: &mut Vec<&'a Category>) {
    out.push(category);
    for sub_category in &category.sub_categories {
        collect_categories(sub_category, out);
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectInformation {
    pub name: String,
    pub version: String,
    pub repository_url: String,
    pub homepage: String,
}

impl ProjectInformation {
    pub fn new(
        name: impl Into<String>,
        version: impl Into<String>,
        repository_url: impl Into<String>,
        homepage: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
            repository_url: repository_url.into(),
            homepage: homepage.into(),
        }
    }

    pub fn repository_web_url(&self) -> &str {
        self.repository_url
            .strip_suffix(".git")
            .unwrap_or(&self.repository_url)
    }

    pub fn feedback_url(&self) -> String {
        format!("{}/issues", self.repository_web_url())
    }

    pub fn release_url(&self) -> String {
        format!(
            "{}/releases/tag/{}",
            self.repository_web_url(),
            self.version
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScriptingDefinition {
    language: ScriptingLanguage,
    file_extension: &'static str,
    start_code: String,
    end_code: String,
}

impl ScriptingDefinition {
    pub fn new(
        language: ScriptingLanguage,
        start_code: impl Into<String>,
        end_code: impl Into<String>,
    ) -> Result<Self, CatalogError> {
        let start_code = start_code.into();
        let end_code = end_code.into();
        if start_code.is_empty() {
            return Err(CatalogError::invalid_code("start code is empty"));
        }
        if end_code.is_empty() {
            return Err(CatalogError::invalid_code("end code is empty"));
        }
        Ok(Self {
            language,
            file_extension: language.file_extension(),
            start_code,
            end_code,
        })
    }

    pub fn language(&self) -> ScriptingLanguage {
        self.language
    }

    pub fn file_extension(&self) -> &str {
        self.file_extension
    }

    pub fn start_code(&self) -> &str {
        &self.start_code
    }

    pub fn end_code(&self) -> &str {
        &self.end_code
    }
}
