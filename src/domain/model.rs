use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

pub const UNKNOWN: &str = "Unknown";
pub const UNKNOWN_WEIGHT: &str = "Unknown Weight";
pub const UNKNOWN_BREED: &str = "Unknown Breed";
pub const UNKNOWN_ORIGIN: &str = "Unknown Origin";

/// One record of the image search response.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    #[serde(default, deserialize_with = "lenient_url")]
    pub url: String,
    #[serde(default)]
    pub breeds: Option<Vec<BreedInfo>>,
}

// Breed fields come from a loosely kept catalogue: a value of the wrong type is
// treated as missing instead of failing the whole record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BreedInfo {
    #[serde(default, deserialize_with = "lenient_string")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub origin: Option<String>,
    #[serde(default, deserialize_with = "lenient_weight")]
    pub weight: Option<Weight>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Weight {
    #[serde(default, deserialize_with = "lenient_string")]
    pub imperial: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub metric: Option<String>,
}

fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(value.as_str().map(str::to_string))
}

fn lenient_url<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(lenient_string(deserializer)?.unwrap_or_default())
}

fn lenient_weight<'de, D>(deserializer: D) -> Result<Option<Weight>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    if !value.is_object() {
        return Ok(None);
    }
    Ok(serde_json::from_value(value).ok())
}

impl Candidate {
    /// First breed descriptor, if the record carries any.
    pub fn primary_breed(&self) -> Option<&BreedInfo> {
        self.breeds.as_ref().and_then(|breeds| breeds.first())
    }
}

fn or_default(value: Option<&str>, default: &str) -> String {
    match value {
        Some(v) if !v.is_empty() => v.to_string(),
        _ => default.to_string(),
    }
}

impl BreedInfo {
    pub fn name_or_default(&self) -> String {
        or_default(self.name.as_deref(), UNKNOWN)
    }

    pub fn origin_or_default(&self) -> String {
        or_default(self.origin.as_deref(), UNKNOWN)
    }

    pub fn weight_or_default(&self) -> String {
        let metric = self.weight.as_ref().and_then(|w| w.metric.as_deref());
        or_default(metric, UNKNOWN_WEIGHT)
    }
}

/// The accepted, displayed dog. Replaced wholesale, never edited.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DogResult {
    pub image: String,
    pub name: String,
    pub origin: String,
    pub weight: String,
}

impl DogResult {
    pub fn from_breed(image: &str, breed: &BreedInfo) -> Self {
        Self {
            image: image.to_string(),
            name: breed.name_or_default(),
            origin: breed.origin_or_default(),
            weight: breed.weight_or_default(),
        }
    }

    /// Result used for candidates that came back without breed descriptors.
    pub fn without_breed(image: &str) -> Self {
        Self {
            image: image.to_string(),
            name: UNKNOWN_BREED.to_string(),
            origin: UNKNOWN_ORIGIN.to_string(),
            weight: UNKNOWN_WEIGHT.to_string(),
        }
    }

    pub fn attribute(&self, attribute: Attribute) -> &str {
        match attribute {
            Attribute::Name => &self.name,
            Attribute::Origin => &self.origin,
            Attribute::Weight => &self.weight,
        }
    }

    pub fn attributes(&self) -> [&str; 3] {
        [&self.name, &self.origin, &self.weight]
    }
}

/// The three bannable fields of a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Attribute {
    Name,
    Origin,
    Weight,
}

impl Attribute {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "name" | "breed" => Some(Attribute::Name),
            "origin" => Some(Attribute::Origin),
            "weight" => Some(Attribute::Weight),
            _ => None,
        }
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Attribute::Name => "name",
            Attribute::Origin => "origin",
            Attribute::Weight => "weight",
        };
        f.write_str(label)
    }
}
