use hc_core::{CatalogError, Category, CategoryId};
use hc_parser::{CategoryDoc, CategoryOrScriptDoc};

use crate::function_compiler::TemplateCompiler;
use crate::script_compiler::parse_script;

pub struct CategoryTreeBuilder<'a> {
    compiler: &'a dyn TemplateCompiler,
    category_counter: CategoryId,
}

impl<'a> CategoryTreeBuilder<'a> {
    pub fn new(compiler: &'a dyn TemplateCompiler) -> Self {
        Self {
            compiler,
            category_counter: 0,
        }
    }

    fn next_category_id(&mut self) -> CategoryId {
        self.category_counter += 1;
        self.category_counter
    }

    pub fn build(&mut self, category: &CategoryDoc) -> Result<Category, CatalogError> {
        let id = self.next_category_id();
        let mut scripts = Vec::new();
        let mut sub_categories = Vec::new();

        for child in &category.children {
            match child {
                CategoryOrScriptDoc::Script(script) => {
                    scripts.push(parse_script(script, self.compiler)?);
                }
                CategoryOrScriptDoc::Category(nested) => {
                    sub_categories.push(self.build(nested)?);
                }
            }
        }

        Ok(Category::new(
            id,
            category.category.clone(),
            scripts,
            sub_categories,
            category.documentation_urls(),
        ))
    }
}
