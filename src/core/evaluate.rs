use crate::domain::ban_list::BanList;
use crate::domain::model::{Candidate, DogResult};
use crate::utils::error::Result;

/// What a single candidate means for the discovery loop.
#[derive(Debug, Clone, PartialEq)]
pub enum Verdict {
    /// No breed descriptors: accepted as-is, the ban list is not consulted.
    NoBreedInfo(DogResult),
    Rejected {
        result: DogResult,
        matched: Vec<String>,
    },
    Acceptable(DogResult),
}

/// Picks the first record out of a search response body.
///
/// `Ok(None)` covers bodies that are not arrays and empty arrays. A first element
/// that does not decode as a candidate is an error.
pub fn first_candidate(body: serde_json::Value) -> Result<Option<Candidate>> {
    let first = match body {
        serde_json::Value::Array(items) => items.into_iter().next(),
        _ => None,
    };

    match first {
        Some(item) => Ok(Some(serde_json::from_value(item)?)),
        None => Ok(None),
    }
}

pub fn evaluate(candidate: &Candidate, ban_list: &BanList) -> Verdict {
    let Some(breed) = candidate.primary_breed() else {
        return Verdict::NoBreedInfo(DogResult::without_breed(&candidate.url));
    };

    let result = DogResult::from_breed(&candidate.url, breed);
    let matched: Vec<String> = ban_list
        .matches(&result.attributes())
        .into_iter()
        .map(str::to_string)
        .collect();

    if matched.is_empty() {
        Verdict::Acceptable(result)
    } else {
        Verdict::Rejected { result, matched }
    }
}
