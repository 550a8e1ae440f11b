use std::collections::BTreeSet;

use serde::Serialize;

use crate::error::{CatalogError, ErrorKind};
use crate::types::{
    Category, CategoryId, OperatingSystem, ProjectInformation, Script, ScriptingDefinition,
};

/// Root of a compiled catalog. Every instance satisfies:
/// a known `os`, at least one category, at least one script, at least one
/// recommended script and unique script names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Application {
    os: OperatingSystem,
    info: ProjectInformation,
    actions: Vec<Category>,
    scripting: ScriptingDefinition,
    total_scripts: usize,
    total_categories: usize,
}

impl Application {
    pub fn new(
        os: OperatingSystem,
        info: ProjectInformation,
        actions: Vec<Category>,
        scripting: ScriptingDefinition,
    ) -> Result<Self, CatalogError> {
        if os == OperatingSystem::Unknown {
            return Err(CatalogError::unknown_enum_value("unknown os"));
        }
        if actions.is_empty() {
            return Err(CatalogError::empty_collection(
                "Application must consist of at least one category",
            ));
        }

        let scripts = flatten_scripts(&actions);
        if scripts.is_empty() {
            return Err(CatalogError::empty_collection(
                "Application must consist of at least one script",
            ));
        }
        if !scripts.iter().any(|script| script.is_recommended()) {
            return Err(CatalogError::empty_collection(
                "Application must consist of at least one recommended script",
            ));
        }
        ensure_unique_script_names(&scripts)?;

        let total_scripts = scripts.len();
        let total_categories = flatten_categories(&actions).len();

        Ok(Self {
            os,
            info,
            actions,
            scripting,
            total_scripts,
            total_categories,
        })
    }

    pub fn os(&self) -> OperatingSystem {
        self.os
    }

    pub fn info(&self) -> &ProjectInformation {
        &self.info
    }

    pub fn actions(&self) -> &[Category] {
        &self.actions
    }

    pub fn scripting(&self) -> &ScriptingDefinition {
        &self.scripting
    }

    pub fn total_scripts(&self) -> usize {
        self.total_scripts
    }

    pub fn total_categories(&self) -> usize {
        self.total_categories
    }

    pub fn all_scripts(&self) -> Vec<&Script> {
        flatten_scripts(&self.actions)
    }

    pub fn all_categories(&self) -> Vec<&Category> {
        flatten_categories(&self.actions)
    }

    pub fn recommended_scripts(&self) -> Vec<&Script> {
        flatten_scripts(&self.actions)
            .into_iter()
            .filter(|script| script.is_recommended())
            .collect()
    }

    pub fn find_script(&self, id: &str) -> Option<&Script> {
        flatten_scripts(&self.actions)
            .into_iter()
            .find(|script| script.id() == id)
    }

    pub fn find_category(&self, id: CategoryId) -> Option<&Category> {
        flatten_categories(&self.actions)
            .into_iter()
            .find(|category| category.id() == id)
    }
}

fn flatten_scripts(actions: &[Category]) -> Vec<&Script> {
    actions.iter().flat_map(Category::all_scripts).collect()
}

fn flatten_categories(actions: &[Category]) -> Vec<&Category> {
    actions.iter().flat_map(Category::all_categories).collect()
}

fn ensure_unique_script_names(scripts: &[&Script]) -> Result<(), CatalogError> {
    let mut seen = BTreeSet::new();
    for script in scripts {
        if !seen.insert(script.id()) {
            return Err(CatalogError::new(
                ErrorKind::DuplicateName,
                format!("Duplicate script name \"{}\".", script.id()),
            ));
        }
    }
    Ok(())
}
