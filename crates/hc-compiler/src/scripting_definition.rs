use chrono::{DateTime, Utc};
use hc_core::{CatalogError, ProjectInformation, ScriptingDefinition, ScriptingLanguage};
use hc_parser::ScriptingDefinitionDoc;

const RFC1123_FORMAT: &str = "%a, %d %b %Y %H:%M:%S GMT";

pub fn parse_scripting_definition(
    definition: Option<&ScriptingDefinitionDoc>,
    info: &ProjectInformation,
    date: DateTime<Utc>,
) -> Result<ScriptingDefinition, CatalogError> {
    let Some(definition) = definition else {
        return Err(CatalogError::missing_input("undefined scripting definition"));
    };
    let language = match definition.language.as_deref() {
        Some(language) if !language.is_empty() => ScriptingLanguage::parse(language)?,
        _ => return Err(CatalogError::missing_input("undefined language")),
    };

    let start_code = apply_substitutions(
        definition.start_code.as_deref().unwrap_or_default(),
        info,
        date,
    );
    let end_code = apply_substitutions(
        definition.end_code.as_deref().unwrap_or_default(),
        info,
        date,
    );

    ScriptingDefinition::new(language, start_code, end_code)
}

fn apply_substitutions(code: &str, info: &ProjectInformation, date: DateTime<Utc>) -> String {
    code.replacen("{{ homepage }}", &info.homepage, 1)
        .replacen("{{ version }}", &info.version, 1)
        .replacen("{{ date }}", &format_date(date), 1)
}

pub fn format_date(date: DateTime<Utc>) -> String {
    date.format(RFC1123_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use hc_core::ErrorKind;

    fn info() -> ProjectInformation {
        ProjectInformation::new(
            "hardcat",
            "1.0.2",
            "https://github.com/hardcat/hardcat",
            "https://cloudarchitecture.io",
        )
    }

    fn date() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 10, 16, 8, 5, 9)
            .single()
            .expect("valid date")
    }

    fn definition(language: &str, start: &str, end: &str) -> ScriptingDefinitionDoc {
        ScriptingDefinitionDoc {
            language: Some(language.to_string()),
            start_code: Some(start.to_string()),
            end_code: Some(end.to_string()),
        }
    }

    #[test]
    fn parses_language_and_extension() {
        let parsed = parse_scripting_definition(
            Some(&definition("batchfile", "start", "end")),
            &info(),
            date(),
        )
        .expect("definition");
        assert_eq!(parsed.language(), ScriptingLanguage::Batchfile);
        assert_eq!(parsed.file_extension(), "bat");
        assert_eq!(parsed.start_code(), "start");
        assert_eq!(parsed.end_code(), "end");
    }

    #[test]
    fn substitutes_version() {
        let parsed = parse_scripting_definition(
            Some(&definition("bash", "v:{{ version }}", "end")),
            &info(),
            date(),
        )
        .expect("definition");
        assert_eq!(parsed.start_code(), "v:1.0.2");
    }

    #[test]
    fn substitutes_all_tokens_in_start_and_end_code() {
        let code = "homepage: {{ homepage }}, version: {{ version }}, date: {{ date }}";
        let expected = "homepage: https://cloudarchitecture.io, version: 1.0.2, date: Fri, 16 Oct 2026 08:05:09 GMT";
        let parsed =
            parse_scripting_definition(Some(&definition("bash", code, code)), &info(), date())
                .expect("definition");
        assert_eq!(parsed.start_code(), expected);
        assert_eq!(parsed.end_code(), expected);
    }

    #[test]
    fn unknown_language_fails() {
        let error = parse_scripting_definition(
            Some(&definition("unknown", "start", "end")),
            &info(),
            date(),
        )
        .expect_err("unknown language must fail");
        assert_eq!(error.kind, ErrorKind::UnknownEnumValue);
        assert!(error.message.contains("unknown language"));
    }

    #[test]
    fn missing_definition_or_language_fails() {
        let error = parse_scripting_definition(None, &info(), date())
            .expect_err("missing definition must fail");
        assert_eq!(error.kind, ErrorKind::MissingInput);

        let without_language = ScriptingDefinitionDoc {
            language: None,
            ..definition("bash", "start", "end")
        };
        let error = parse_scripting_definition(Some(&without_language), &info(), date())
            .expect_err("missing language must fail");
        assert_eq!(error.kind, ErrorKind::MissingInput);
    }

    #[test]
    fn empty_code_after_substitution_fails() {
        let mut empty_info = info();
        empty_info.version = String::new();
        let error = parse_scripting_definition(
            Some(&definition("bash", "{{ version }}", "end")),
            &empty_info,
            date(),
        )
        .expect_err("empty start code must fail");
        assert_eq!(error.kind, ErrorKind::InvalidCode);

        let missing_end = ScriptingDefinitionDoc {
            end_code: None,
            ..definition("bash", "start", "end")
        };
        let error = parse_scripting_definition(Some(&missing_end), &info(), date())
            .expect_err("missing end code must fail");
        assert_eq!(error.kind, ErrorKind::InvalidCode);
    }
}
