use hc_core::{CatalogError, ErrorKind};

use crate::document::ApplicationDoc;

pub fn parse_catalog_document(source: &str) -> Result<ApplicationDoc, CatalogError> {
    if source.trim().is_empty() {
        return Err(CatalogError::missing_input("application is null or undefined"));
    }

    let document = serde_yaml::from_str::<Option<ApplicationDoc>>(source)
        .map_err(|error| CatalogError::new(ErrorKind::Parse, error.to_string()))?;

    document.ok_or_else(|| CatalogError::missing_input("application is null or undefined"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::CategoryOrScriptDoc;

    #[test]
    fn parse_catalog_document_reads_all_sections() {
        let source = r#"
os: windows
scripting:
  language: batchfile
  startCode: "@echo off"
  endCode: "exit /b 0"
actions:
  - category: Privacy
    docs: https://docs.example/privacy
    children:
      - name: Disable telemetry
        recommend: true
        call:
          function: SetRegistry
          parameters:
            key: AllowTelemetry
functions:
  - name: SetRegistry
    parameters: [ key ]
    code: reg add {{ $key }}
    revertCode: reg delete {{ $key }}
"#;
        let document = parse_catalog_document(source).expect("catalog should parse");
        assert_eq!(document.os.as_deref(), Some("windows"));
        let scripting = document.scripting.expect("scripting");
        assert_eq!(scripting.language.as_deref(), Some("batchfile"));
        assert_eq!(scripting.start_code.as_deref(), Some("@echo off"));

        let actions = document.actions.expect("actions");
        assert_eq!(actions.len(), 1);
        assert_eq!(
            actions[0].documentation_urls(),
            vec!["https://docs.example/privacy"]
        );
        assert!(matches!(
            &actions[0].children[0],
            CategoryOrScriptDoc::Script(script) if script.call.is_some() && script.code.is_none()
        ));

        let functions = document.functions.expect("functions");
        assert_eq!(functions[0].parameters, vec!["key"]);
        assert_eq!(functions[0].revert_code, "reg delete {{ $key }}");
    }

    #[test]
    fn parse_catalog_document_allows_missing_sections() {
        let document = parse_catalog_document("os: linux\n").expect("catalog should parse");
        assert!(document.actions.is_none());
        assert!(document.scripting.is_none());
        assert!(document.functions.is_none());
    }

    #[test]
    fn parse_catalog_document_reports_missing_document() {
        for source in ["", "   \n", "~\n"] {
            let error = parse_catalog_document(source).expect_err("missing document");
            assert_eq!(error.kind, ErrorKind::MissingInput);
        }
    }

    #[test]
    fn parse_catalog_document_reports_malformed_yaml() {
        let error = parse_catalog_document("os: [windows\n").expect_err("invalid yaml");
        assert_eq!(error.kind, ErrorKind::Parse);
    }

    #[test]
    fn parse_catalog_document_reports_wrong_record_shape() {
        let error =
            parse_catalog_document("actions: not-a-list\n").expect_err("actions must be a list");
        assert_eq!(error.kind, ErrorKind::Parse);
    }
}
