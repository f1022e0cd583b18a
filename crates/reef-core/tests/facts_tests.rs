// Host-side tests for the random-fact endpoint contract.

use rand::rngs::StdRng;
use rand::SeedableRng;
use reef_core::facts::{CACHE_CONTROL_NO_STORE, CONTENT_TYPE_JSON};
use reef_core::*;

#[test]
fn bundled_facts_load() {
    let book = FactBook::bundled().expect("bundled facts");
    assert!(book.len() >= 10);
}

#[test]
fn random_response_is_uncached_json() {
    let book = FactBook::bundled().expect("bundled facts");
    let mut rng = StdRng::seed_from_u64(1);
    let resp = book.random_response(&mut rng);
    assert_eq!(resp.status, 200);
    assert_eq!(resp.header("content-type"), Some(CONTENT_TYPE_JSON));
    assert_eq!(resp.header("Cache-Control"), Some(CACHE_CONTROL_NO_STORE));

    let fact: Fact = serde_json::from_str(&resp.body).expect("fact body");
    assert!(!fact.fact.is_empty());
}

#[test]
fn every_fact_is_eventually_served() {
    let book = FactBook::bundled().expect("bundled facts");
    let mut rng = StdRng::seed_from_u64(2);
    let mut seen = vec![0usize; book.len() + 1];
    for _ in 0..book.len() * 200 {
        let fact = book.pick(&mut rng).expect("non-empty");
        seen[fact.id as usize] += 1;
    }
    assert!(seen[1..].iter().all(|&n| n > 100), "{:?}", seen);
}

#[test]
fn empty_book_answers_service_unavailable() {
    let book = FactBook::new(Vec::new());
    let mut rng = StdRng::seed_from_u64(3);
    assert!(book.pick(&mut rng).is_none());
    let resp = book.random_response(&mut rng);
    assert_eq!(resp.status, 503);
    assert_eq!(resp.header("Content-Type"), Some(CONTENT_TYPE_JSON));
    let body: serde_json::Value = serde_json::from_str(&resp.body).expect("error body");
    assert_eq!(body["error"], "no facts available");
}

#[test]
fn optional_fields_are_omitted_when_absent() {
    let book = FactBook::from_json(r#"[{ "id": 7, "fact": "Claws." }]"#).expect("parse");
    let mut rng = StdRng::seed_from_u64(4);
    let resp = book.random_response(&mut rng);
    assert_eq!(resp.body, r#"{"id":7,"fact":"Claws."}"#);
}

#[test]
fn malformed_fact_list_is_rejected() {
    assert!(matches!(FactBook::from_json("[{\"id\": 1}]"), Err(FactError::Json(_))));
}
