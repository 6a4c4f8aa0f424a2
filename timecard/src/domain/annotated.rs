use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;
use serde_json::Value;
use tracing::instrument;

use super::{LineId, Period, TimecardLine, TimecardLinePatch};
use crate::{Clock, IdGenerator, RandomLineIds, SystemClock, TimecardError};

/// Schema tag carried by every annotated line.
pub const LINE_VERSION: &str = "line-0.1";

/// A timecard line with identity, record bookkeeping and the dates derived from its
/// year, week and day.
///
/// The derived dates are recomputed on construction and on every update. Identity, the
/// creation timestamp and the version tag are fixed once the line is constructed.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct AnnotatedTimecardLine {
    #[serde(flatten)]
    line: TimecardLine,
    recorded: DateTime<Utc>,
    work_date: NaiveDate,
    line_number: f32,
    #[serde(rename = "recId")]
    record_identity: i32,
    #[serde(rename = "recVersion")]
    record_version: i32,
    unique_identifier: LineId,
    period_from: NaiveDate,
    period_to: NaiveDate,
    version: String,
}

impl AnnotatedTimecardLine {
    /// Annotates `line` using the system clock and a random identity.
    pub fn new(line: TimecardLine) -> Result<Self, TimecardError> {
        Self::new_with(line, &SystemClock, &RandomLineIds)
    }

    pub fn new_with(
        line: TimecardLine,
        clock: &impl Clock,
        ids: &impl IdGenerator,
    ) -> Result<Self, TimecardError> {
        let period = Period::for_week(line.year, line.week)?;
        let work_date = period.work_date(line.day);

        let annotated = Self {
            line,
            recorded: clock.now(),
            work_date,
            line_number: 0.0,
            record_identity: 0,
            record_version: 0,
            unique_identifier: ids.next_id(),
            period_from: period.from,
            period_to: period.to,
            version: LINE_VERSION.to_string(),
        };

        tracing::debug!(
            id = %annotated.unique_identifier,
            work_date = %annotated.work_date,
            "annotated new timecard line"
        );

        Ok(annotated)
    }

    /// Replaces the raw fields with those of `line` and recomputes the derived dates.
    #[instrument(name = "AnnotatedTimecardLine::update", skip(self, line), fields(id = %self.unique_identifier))]
    pub fn update(&mut self, line: &TimecardLine) -> Result<&mut Self, TimecardError> {
        self.commit(line.clone())?;
        Ok(self)
    }

    /// Applies the present fields of `patch` and recomputes the derived dates.
    #[instrument(name = "AnnotatedTimecardLine::apply_patch", skip(self, patch), fields(id = %self.unique_identifier))]
    pub fn apply_patch(&mut self, patch: &TimecardLinePatch) -> Result<&mut Self, TimecardError> {
        self.commit(patch.merged_into(&self.line))?;
        Ok(self)
    }

    /// Applies a loosely-typed partial document such as `{"hours": 8}`.
    ///
    /// A document that fails to parse leaves the line untouched.
    #[instrument(name = "AnnotatedTimecardLine::update_from_document", skip(self, document), fields(id = %self.unique_identifier))]
    pub fn update_from_document(&mut self, document: &Value) -> Result<&mut Self, TimecardError> {
        let patch = TimecardLinePatch::try_from(document).inspect_err(|e| {
            tracing::warn!("rejected update document: {}", e);
        })?;
        self.apply_patch(&patch)
    }

    fn commit(&mut self, line: TimecardLine) -> Result<(), TimecardError> {
        let period = Period::for_week(line.year, line.week)?;

        self.work_date = period.work_date(line.day);
        self.period_from = period.from;
        self.period_to = period.to;
        self.line = line;

        tracing::debug!(
            period_from = %self.period_from,
            work_date = %self.work_date,
            "recomputed timecard period"
        );

        Ok(())
    }

    /// Stores the persistence layer's record identity and version.
    pub fn set_record(&mut self, identity: i32, version: i32) {
        self.record_identity = identity;
        self.record_version = version;
    }

    pub fn set_line_number(&mut self, line_number: f32) {
        self.line_number = line_number;
    }

    pub fn line(&self) -> &TimecardLine {
        &self.line
    }

    pub fn recorded(&self) -> DateTime<Utc> {
        self.recorded
    }

    pub fn unique_identifier(&self) -> LineId {
        self.unique_identifier
    }

    pub fn record_identity(&self) -> i32 {
        self.record_identity
    }

    pub fn record_version(&self) -> i32 {
        self.record_version
    }

    pub fn line_number(&self) -> f32 {
        self.line_number
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn work_date(&self) -> NaiveDate {
        self.work_date
    }

    pub fn period_from(&self) -> NaiveDate {
        self.period_from
    }

    pub fn period_to(&self) -> NaiveDate {
        self.period_to
    }

    pub fn period(&self) -> Period {
        Period {
            from: self.period_from,
            to: self.period_to,
        }
    }
}
