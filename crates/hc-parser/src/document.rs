use std::collections::BTreeMap;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer};
use serde_yaml::Value as YamlValue;

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationDoc {
    #[serde(default)]
    pub os: Option<String>,
    #[serde(default)]
    pub scripting: Option<ScriptingDefinitionDoc>,
    #[serde(default)]
    pub actions: Option<Vec<CategoryDoc>>,
    #[serde(default)]
    pub functions: Option<Vec<FunctionDoc>>,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScriptingDefinitionDoc {
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub start_code: Option<String>,
    #[serde(default)]
    pub end_code: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum DocumentationUrlsDoc {
    Single(String),
    Many(Vec<String>),
}

impl DocumentationUrlsDoc {
    pub fn to_vec(&self) -> Vec<String> {
        match self {
            Self::Single(url) => vec![url.clone()],
            Self::Many(urls) => urls.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryDoc {
    pub category: String,
    #[serde(default)]
    pub children: Vec<CategoryOrScriptDoc>,
    #[serde(default)]
    pub docs: Option<DocumentationUrlsDoc>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum CategoryOrScriptDoc {
    Category(CategoryDoc),
    Script(ScriptDoc),
}

impl<'de> Deserialize<'de> for CategoryOrScriptDoc {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = YamlValue::deserialize(deserializer)?;
        if value.get("category").is_some() {
            serde_yaml::from_value(value)
                .map(Self::Category)
                .map_err(D::Error::custom)
        } else {
            serde_yaml::from_value(value)
                .map(Self::Script)
                .map_err(D::Error::custom)
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScriptDoc {
    pub name: String,
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub revert_code: Option<String>,
    #[serde(default)]
    pub call: Option<YamlValue>,
    #[serde(default)]
    pub recommend: bool,
    #[serde(default)]
    pub docs: Option<DocumentationUrlsDoc>,
}

impl ScriptDoc {
    pub fn documentation_urls(&self) -> Vec<String> {
        self.docs
            .as_ref()
            .map(DocumentationUrlsDoc::to_vec)
            .unwrap_or_default()
    }
}

impl CategoryDoc {
    pub fn documentation_urls(&self) -> Vec<String> {
        self.docs
            .as_ref()
            .map(DocumentationUrlsDoc::to_vec)
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CallDoc {
    pub function: String,
    #[serde(default, deserialize_with = "deserialize_parameters")]
    pub parameters: BTreeMap<String, String>,
}

// Scalars become text, null is dropped.
fn deserialize_parameters<'de, D>(deserializer: D) -> Result<BTreeMap<String, String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<BTreeMap<String, YamlValue>>::deserialize(deserializer)?
        .unwrap_or_default();
    let mut parameters = BTreeMap::new();
    for (name, value) in raw {
        let text = match value {
            YamlValue::Null => continue,
            YamlValue::Bool(flag) => flag.to_string(),
            YamlValue::Number(number) => number.to_string(),
            YamlValue::String(text) => text,
            YamlValue::Sequence(_) | YamlValue::Mapping(_) | YamlValue::Tagged(_) => {
                return Err(D::Error::custom(format!(
                    "parameter \"{}\" must be a string, number or boolean",
                    name
                )));
            }
        };
        parameters.insert(name, text);
    }
    Ok(parameters)
}

#[derive(Debug, Clone, PartialEq)]
pub enum CallSpecDoc {
    Single(CallDoc),
    Sequence(Vec<CallDoc>),
}

impl CallSpecDoc {
    pub fn from_value(value: &YamlValue) -> Result<Self, serde_yaml::Error> {
        match value {
            YamlValue::Mapping(_) => serde_yaml::from_value(value.clone()).map(Self::Single),
            YamlValue::Sequence(_) => serde_yaml::from_value(value.clone()).map(Self::Sequence),
            _ => Err(serde_yaml::Error::custom(
                "expected a call object or a sequence of call objects",
            )),
        }
    }

    // A single call is a one-element sequence.
    pub fn into_calls(self) -> Vec<CallDoc> {
        match self {
            Self::Single(call) => vec![call],
            Self::Sequence(calls) => calls,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FunctionDoc {
    pub name: String,
    #[serde(default)]
    pub parameters: Vec<String>,
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub revert_code: String,
}
