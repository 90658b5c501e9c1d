//! Fallback behaviour across translations with plan-generated requests.

use std::collections::HashMap;
use std::num::NonZeroU32;

use lectio_allocate::generate_study_plan;
use lectio_canon::{CanonTable, SectionName};
use lectio_passage::{FallbackChain, PassageError, PassageOutcome, PassageProvider, PassageRequest};

/// Serves texts for a fixed set of (translation, reference) pairs.
struct Library {
    texts: HashMap<(String, String), String>,
}

impl Library {
    fn new(entries: &[(&str, &str, &str)]) -> Self {
        let texts = entries
            .iter()
            .map(|&(t, r, text)| ((t.to_string(), r.to_string()), text.to_string()))
            .collect();
        Self { texts }
    }
}

impl PassageProvider for Library {
    fn name(&self) -> &str {
        "library"
    }

    fn fetch(&self, request: &PassageRequest) -> PassageOutcome {
        let reference = request.reference();
        match self
            .texts
            .get(&(request.translation().to_string(), reference.clone()))
        {
            Some(text) => PassageOutcome::Success {
                text: text.clone(),
                reference,
            },
            None => PassageOutcome::failure(format!("{reference} not in library")),
        }
    }
}

#[test]
fn requests_follow_plan_references() {
    let plan = generate_study_plan(CanonTable::standard(), NonZeroU32::new(365).unwrap());
    let portion = plan.day(1).unwrap().portion(SectionName::History).unwrap();
    let request = PassageRequest::new(&portion.books()[0], "web");
    assert_eq!(request.reference(), "Genesis 1-2");
    assert_eq!(request.book_code(), Some("gen"));

    let chain = FallbackChain::new().with_provider(Library::new(&[(
        "web",
        "Genesis 1-2",
        "In the beginning",
    )]));
    let found = chain.fetch(&request).unwrap();
    assert_eq!(found.translation, "web");
    assert_eq!(found.text, "In the beginning");
}

#[test]
fn retries_in_default_translation() {
    let portion = lectio_allocate::BookPortion::new("Jude", Some(vec![1]), Some("1-25".into()));
    let chain = FallbackChain::new().with_provider(Library::new(&[("kjv", "Jude 1", "Jude, the servant")]));
    let found = chain.fetch(&PassageRequest::new(&portion, "niv")).unwrap();
    assert_eq!(found.translation, "kjv");
    assert_eq!(found.provider, "library");
}

#[test]
fn no_retry_when_disabled() {
    let portion = lectio_allocate::BookPortion::new("Jude", Some(vec![1]), None);
    let chain = FallbackChain::new()
        .with_provider(Library::new(&[("kjv", "Jude 1", "Jude, the servant")]))
        .with_fallback_translation(None);
    let err = chain.fetch(&PassageRequest::new(&portion, "niv")).unwrap_err();
    match err {
        PassageError::AllProvidersFailed { failures, .. } => assert_eq!(failures.len(), 1),
        other => panic!("unexpected error: {other}"),
    }
}
