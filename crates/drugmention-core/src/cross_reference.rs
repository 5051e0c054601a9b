//! Drug-in-title join between drugs and publications.

use chrono::NaiveDate;
use drugmention_model::{CrossReferenceRecord, DrugRecord, PublicationRecord, Result, RunContext};
use serde::Serialize;
use tracing::{debug, error};

use crate::validate::{Curated, non_empty};

/// Field values gathered for one drug/publication match before validation.
///
/// Rejected candidates are what the error sink receives.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CrossReferenceCandidate {
    pub drug: String,
    pub journal: String,
    pub mention_date: NaiveDate,
    pub source_file: String,
}

impl CrossReferenceCandidate {
    fn new(drug: &DrugRecord, publication: &PublicationRecord) -> Self {
        Self {
            drug: drug.drug.clone(),
            journal: publication.journal.clone(),
            mention_date: publication.date,
            source_file: publication.source_file.clone(),
        }
    }

    /// Build the record, stamped with the run's ingestion time.
    pub fn into_record(self, ctx: &RunContext) -> Result<CrossReferenceRecord> {
        non_empty("drug", &self.drug)?;
        Ok(CrossReferenceRecord {
            drug: self.drug,
            journal: self.journal,
            mention_date: self.mention_date,
            source_file: self.source_file,
            ingestion_timestamp: ctx.started_at,
        })
    }
}

/// Match every drug against every publication title.
///
/// A drug is mentioned when its name, lowercased, is a substring of the
/// lowercased title. Output runs drug by drug, then publication by
/// publication; duplicate publications from different source files each
/// yield their own record.
pub fn cross_reference(
    drugs: &[DrugRecord],
    publications: &[PublicationRecord],
    ctx: &RunContext,
) -> Curated<CrossReferenceRecord, CrossReferenceCandidate> {
    let titles: Vec<String> = publications
        .iter()
        .map(|publication| publication.title.to_lowercase())
        .collect();

    let mut curated = Curated::default();
    for drug in drugs {
        let needle = drug.drug.to_lowercase();
        for (publication, title) in publications.iter().zip(&titles) {
            if !title.contains(&needle) {
                continue;
            }
            let candidate = CrossReferenceCandidate::new(drug, publication);
            match candidate.clone().into_record(ctx) {
                Ok(record) => curated.valid.push(record),
                Err(err) => {
                    error!(
                        candidate = ?candidate,
                        error = %err,
                        "cross reference failed validation"
                    );
                    curated.errors.push(candidate);
                }
            }
        }
    }

    debug!(
        drug_count = drugs.len(),
        publication_count = publications.len(),
        match_count = curated.valid.len(),
        "cross reference complete"
    );
    curated
}
