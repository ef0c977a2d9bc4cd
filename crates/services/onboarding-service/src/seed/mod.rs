//! Reference data seeding.
//!
//! Rows are inserted one at a time, in order, each with its own conflict
//! clause. Rows that already exist are skipped and counted; any other
//! failure stops the run.

mod fixtures;

use std::fmt;
use std::sync::Arc;

use tracing::{debug, info};

use common::AppResult;

use crate::repository::FixtureRepository;

/// Inserted vs skipped rows for one table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedCount {
    pub inserted: usize,
    pub skipped: usize,
}

impl SeedCount {
    fn record(&mut self, inserted: bool) {
        if inserted {
            self.inserted += 1;
        } else {
            self.skipped += 1;
        }
    }
}

impl fmt::Display for SeedCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} inserted, {} skipped", self.inserted, self.skipped)
    }
}

/// Outcome of a seed run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedReport {
    pub logistics_items: SeedCount,
    pub logistics_requests: SeedCount,
    pub psychometric_tests: SeedCount,
    pub psychometric_questions: SeedCount,
}

impl SeedReport {
    pub fn inserted(&self) -> usize {
        self.counts().iter().map(|c| c.inserted).sum()
    }

    pub fn skipped(&self) -> usize {
        self.counts().iter().map(|c| c.skipped).sum()
    }

    fn counts(&self) -> [SeedCount; 4] {
        [
            self.logistics_items,
            self.logistics_requests,
            self.psychometric_tests,
            self.psychometric_questions,
        ]
    }
}

/// Loads the reference fixtures through a `FixtureRepository`.
pub struct Seeder {
    repo: Arc<dyn FixtureRepository>,
}

impl Seeder {
    pub fn new(repo: Arc<dyn FixtureRepository>) -> Self {
        Self { repo }
    }

    /// Insert every fixture row that is not already present.
    ///
    /// Parents are seeded before the rows that reference them.
    pub async fn run(&self) -> AppResult<SeedReport> {
        let mut report = SeedReport::default();

        for item in fixtures::logistics_items() {
            let inserted = self.repo.insert_logistics_item(&item).await?;
            debug!(sku = %item.sku, inserted, "Logistics item");
            report.logistics_items.record(inserted);
        }
        info!("Logistics items: {}", report.logistics_items);

        for request in fixtures::logistics_requests() {
            let inserted = self.repo.insert_logistics_request(&request).await?;
            debug!(reference = %request.reference, inserted, "Logistics request");
            report.logistics_requests.record(inserted);
        }
        info!("Logistics requests: {}", report.logistics_requests);

        for test in fixtures::psychometric_tests() {
            let inserted = self.repo.insert_psychometric_test(&test).await?;
            debug!(slug = %test.slug, inserted, "Psychometric test");
            report.psychometric_tests.record(inserted);
        }
        info!("Psychometric tests: {}", report.psychometric_tests);

        for question in fixtures::psychometric_questions() {
            let inserted = self.repo.insert_psychometric_question(&question).await?;
            debug!(
                test = %question.test_slug,
                position = question.position,
                inserted,
                "Psychometric question"
            );
            report.psychometric_questions.record(inserted);
        }
        info!("Psychometric questions: {}", report.psychometric_questions);

        info!(
            inserted = report.inserted(),
            skipped = report.skipped(),
            "Seeding finished"
        );
        Ok(report)
    }
}
