//! Aggregation and drug/journal queries over a cross-reference fixture.

use std::collections::BTreeSet;

use drugmention_core::{
    drugs_co_mentioned_with, drugs_in_journals, journal_with_max_distinct_drugs,
    journals_mentioning,
};
use drugmention_model::SnapshotRecord;
use serde_json::{Value, json};

const EMERGENCY_NURSING: &str = "Journal of emergency nursing";
const PEDIATRICS: &str = "The Journal of pediatrics";
const NEONATAL: &str = "The journal of maternal-fetal & neonatal medicine";

fn mention(drug: &str, journal: &str, mention_date: &str, source_file: &str) -> SnapshotRecord {
    let Value::Object(map) = json!({
        "drug": drug,
        "journal": journal,
        "mention_date": mention_date,
        "source_file": source_file,
        "ingestion_timestamp": "2024-11-13T10:00:00",
    }) else {
        unreachable!()
    };
    map
}

fn fixture() -> Vec<SnapshotRecord> {
    vec![
        mention("DIPHENHYDRAMINE", EMERGENCY_NURSING, "2020-01-01", "clinical_trials"),
        mention("DIPHENHYDRAMINE", EMERGENCY_NURSING, "2020-01-01", "pubmed"),
        mention("DIPHENHYDRAMINE", PEDIATRICS, "2019-01-01", "pubmed"),
        mention("EPINEPHRINE", EMERGENCY_NURSING, "2020-04-27", "clinical_trials"),
        mention(
            "EPINEPHRINE",
            "The journal of allergy and clinical immunology. In practice",
            "2020-02-01",
            "pubmed",
        ),
        mention("TETRACYCLINE", "Journal of food protection", "2020-01-01", "pubmed"),
        mention("TETRACYCLINE", "American journal of veterinary research", "2020-01-02", "pubmed"),
        mention("TETRACYCLINE", "Psychopharmacology", "2020-01-01", "pubmed"),
        mention("ETHANOL", "Psychopharmacology", "2020-01-01", "pubmed"),
        mention("ATROPINE", NEONATAL, "2020-03-01", "pubmed"),
        mention("BETAMETHASONE", NEONATAL, "2020-03-01", "pubmed"),
        mention(
            "BETAMETHASONE",
            "Journal of back and musculoskeletal rehabilitation",
            "2020-01-01",
            "clinical_trials",
        ),
        mention(
            "BETAMETHASONE",
            "Hôpitaux Universitaires de Genève",
            "2020-01-01",
            "clinical_trials",
        ),
        mention(
            "ISOPRENALINE",
            "Journal of photochemistry and photobiology. B, Biology",
            "2020-01-01",
            "pubmed",
        ),
    ]
}

fn set(values: &[&str]) -> BTreeSet<String> {
    values.iter().map(|v| (*v).to_string()).collect()
}

#[test]
fn emergency_nursing_mentions_most_drugs() {
    let winner = journal_with_max_distinct_drugs(&fixture()).unwrap();

    assert_eq!(winner.journal, EMERGENCY_NURSING);
    assert_eq!(winner.distinct_drugs, 2);
}

#[test]
fn journals_for_diphenhydramine() {
    let journals = journals_mentioning(&fixture(), "DIPHENHYDRAMINE");

    assert_eq!(journals, set(&[EMERGENCY_NURSING, PEDIATRICS]));
}

#[test]
fn journal_lookup_ignores_case_and_padding() {
    let journals = journals_mentioning(&fixture(), " diphenhydramine ");

    assert_eq!(journals, set(&[EMERGENCY_NURSING, PEDIATRICS]));
}

#[test]
fn absent_drug_has_no_journals() {
    let data = fixture();

    assert!(journals_mentioning(&data, "PARACETAMOL").is_empty());
    assert_eq!(drugs_co_mentioned_with(&data, "PARACETAMOL", None), None);
}

#[test]
fn source_filter_is_exact() {
    let data = fixture();
    let journals = set(&[EMERGENCY_NURSING]);

    let clinical = drugs_in_journals(&data, &journals, Some("clinical_trials"));
    let pubmed = drugs_in_journals(&data, &journals, Some("pubmed"));
    let wrong_case = drugs_in_journals(&data, &journals, Some("PubMed"));

    assert_eq!(clinical, set(&["DIPHENHYDRAMINE", "EPINEPHRINE"]));
    assert_eq!(pubmed, set(&["DIPHENHYDRAMINE"]));
    assert!(wrong_case.is_empty());
}

#[test]
fn co_mentioned_drugs_with_pubmed_filter() {
    let data = fixture();

    assert_eq!(
        drugs_co_mentioned_with(&data, "DIPHENHYDRAMINE", Some("pubmed")),
        Some(set(&["DIPHENHYDRAMINE"]))
    );
    assert_eq!(
        drugs_co_mentioned_with(&data, "BETAMETHASONE", Some("pubmed")),
        Some(set(&["ATROPINE", "BETAMETHASONE"]))
    );
}

#[test]
fn co_mentioned_drugs_across_all_sources() {
    let data = fixture();

    assert_eq!(
        drugs_co_mentioned_with(&data, "TETRACYCLINE", None),
        Some(set(&["ETHANOL", "TETRACYCLINE"]))
    );
    assert_eq!(
        drugs_co_mentioned_with(&data, "DIPHENHYDRAMINE", None),
        Some(set(&["DIPHENHYDRAMINE", "EPINEPHRINE"]))
    );
}
