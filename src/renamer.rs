//! Tool library renamer
//!
//! Runs one pass over a tool library:
//! 1. Records whose description contains a blocked word are kept verbatim
//! 2. Everything else is dispatched on `type` through the naming rules
//! 3. The resulting list is deduplicated, first occurrence wins
//!
//! Any malformed record aborts the whole pass; no partial document is returned.

use crate::config::RenamerConfig;
use crate::error::Result;
use crate::library::{ToolLibraryDocument, ToolRecord};
use crate::naming::{NamingRule, RuleOutcome};

/// What happened to a single record
#[derive(Debug, Clone, PartialEq)]
pub enum RecordOutcome {
    /// Description contains a blocked word; kept verbatim
    Filtered(ToolRecord),
    /// Known type; description replaced
    Renamed(ToolRecord),
    /// Unknown type or special drill; kept verbatim
    PassedThrough(ToolRecord),
    /// Tapered mill with an unknown taper kind; left out
    Dropped,
}

impl RecordOutcome {
    /// The record to carry into the output, if any
    pub fn into_record(self) -> Option<ToolRecord> {
        match self {
            Self::Filtered(r) | Self::Renamed(r) | Self::PassedThrough(r) => Some(r),
            Self::Dropped => None,
        }
    }
}

/// Narration events emitted while a document is processed
#[derive(Debug, Clone, PartialEq)]
pub enum RenameEvent {
    Evaluating { label: String },
    Filtered { label: String },
    Renamed { description: String },
    PassedThrough { label: String },
    Dropped { label: String },
    DedupStarted,
    Duplicate { description: String },
}

/// Counts for one rename pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenameSummary {
    pub input: usize,
    pub output: usize,
    pub filtered: usize,
    pub renamed: usize,
    pub passed_through: usize,
    pub dropped: usize,
    pub duplicates: usize,
}

/// Normalizes tool descriptions against a fixed block list and rule table
#[derive(Debug, Clone)]
pub struct ToolRenamer {
    blocked_words: Vec<String>,
}

impl Default for ToolRenamer {
    fn default() -> Self {
        Self::from_config(&RenamerConfig::default())
    }
}

impl ToolRenamer {
    pub fn new<I, S>(blocked_words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            blocked_words: blocked_words.into_iter().map(Into::into).collect(),
        }
    }

    pub fn from_config(config: &RenamerConfig) -> Self {
        Self::new(config.blocked_words.iter().cloned())
    }

    /// Whether an already-uppercased description contains a blocked word
    pub fn is_blocked(&self, upper_description: &str) -> bool {
        self.blocked_words
            .iter()
            .any(|word| upper_description.contains(word.as_str()))
    }

    /// Decide the fate of one record without touching the input
    pub fn rename_record(&self, record: &ToolRecord) -> Result<RecordOutcome> {
        let description = record.description()?.to_uppercase();
        if self.is_blocked(&description) {
            return Ok(RecordOutcome::Filtered(record.clone()));
        }

        let Some(rule) = record.tool_type()?.and_then(NamingRule::for_type) else {
            return Ok(RecordOutcome::PassedThrough(record.clone()));
        };

        let outcome = match rule.apply(record)? {
            RuleOutcome::Name(name) => RecordOutcome::Renamed(record.with_description(name)),
            RuleOutcome::PassThrough => RecordOutcome::PassedThrough(record.clone()),
            RuleOutcome::Drop => RecordOutcome::Dropped,
        };
        Ok(outcome)
    }

    pub fn rename_document(&self, document: &ToolLibraryDocument) -> Result<(ToolLibraryDocument, RenameSummary)> {
        self.rename_document_with(document, |_| {})
    }

    /// Rename every record, reporting progress through `on_event`
    pub fn rename_document_with<F>(
        &self,
        document: &ToolLibraryDocument,
        mut on_event: F,
    ) -> Result<(ToolLibraryDocument, RenameSummary)>
    where
        F: FnMut(&RenameEvent),
    {
        let mut summary = RenameSummary {
            input: document.len(),
            ..Default::default()
        };
        let mut emit = |event: RenameEvent| {
            log::debug!("{:?}", event);
            on_event(&event);
        };

        let mut renamed = Vec::with_capacity(document.len());
        for record in &document.data {
            let label = record.label();
            emit(RenameEvent::Evaluating { label: label.clone() });

            let outcome = self.rename_record(record)?;
            match &outcome {
                RecordOutcome::Filtered(_) => {
                    summary.filtered += 1;
                    emit(RenameEvent::Filtered { label });
                }
                RecordOutcome::Renamed(r) => {
                    summary.renamed += 1;
                    emit(RenameEvent::Renamed { description: r.label() });
                }
                RecordOutcome::PassedThrough(_) => {
                    summary.passed_through += 1;
                    emit(RenameEvent::PassedThrough { label });
                }
                RecordOutcome::Dropped => {
                    summary.dropped += 1;
                    emit(RenameEvent::Dropped { label });
                }
            }
            renamed.extend(outcome.into_record());
        }

        emit(RenameEvent::DedupStarted);
        let mut unique: Vec<ToolRecord> = Vec::with_capacity(renamed.len());
        for record in renamed {
            if unique.iter().any(|kept| kept.same_as(&record)) {
                summary.duplicates += 1;
                emit(RenameEvent::Duplicate { description: record.label() });
            } else {
                unique.push(record);
            }
        }

        summary.output = unique.len();
        log::info!(
            "Renamed tool library: {} input records, {} output records",
            summary.input,
            summary.output
        );
        Ok((ToolLibraryDocument::new(unique), summary))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CamError;
    use serde_json::{Value, json};

    fn document(records: Value) -> ToolLibraryDocument {
        serde_json::from_value(json!({ "data": records })).unwrap()
    }

    fn end_mill(description: &str, dc: f64) -> Value {
        json!({
            "description": description,
            "type": "flat end mill",
            "BMC": "carbide",
            "geometry": {"DC": dc}
        })
    }

    #[test]
    fn test_blocked_word_passes_through_verbatim() {
        let renamer = ToolRenamer::default();
        let record = ToolRecord::from_value(end_mill("Sandvik coromill 6mm", 6.0)).unwrap();

        let outcome = renamer.rename_record(&record).unwrap();
        assert_eq!(outcome, RecordOutcome::Filtered(record));
    }

    #[test]
    fn test_blocked_word_wins_over_malformed_geometry() {
        let renamer = ToolRenamer::default();
        let record = ToolRecord::from_value(json!({
            "description": "iscar high feed", "type": "flat end mill", "geometry": {}
        }))
        .unwrap();

        assert!(matches!(renamer.rename_record(&record), Ok(RecordOutcome::Filtered(_))));
    }

    #[test]
    fn test_blocked_words_are_matched_on_uppercased_description() {
        let renamer = ToolRenamer::new(["TEC"]);
        assert!(renamer.is_blocked("TECTOOL 8MM"));
        assert!(!renamer.is_blocked("tectool 8mm"));
    }

    #[test]
    fn test_unknown_type_passes_through() {
        let renamer = ToolRenamer::default();
        let record = ToolRecord::from_value(json!({
            "description": "chamfer 90", "type": "chamfer mill", "geometry": {}
        }))
        .unwrap();

        assert_eq!(
            renamer.rename_record(&record).unwrap(),
            RecordOutcome::PassedThrough(record)
        );
    }

    #[test]
    fn test_non_string_type_passes_through() {
        let input = document(json!([{"description": "x", "type": 5}]));

        let (output, summary) = ToolRenamer::default().rename_document(&input).unwrap();
        assert_eq!(output, input);
        assert_eq!(summary.passed_through, 1);
    }

    #[test]
    fn test_non_string_taper_kind_is_dropped() {
        let input = document(json!([
            {"description": "x", "type": "tapered mill", "tapered-type": null,
             "BMC": "carbide", "geometry": {"DC": 3.0, "RE": 0.5, "TA": 1.5}}
        ]));

        let (output, summary) = ToolRenamer::default().rename_document(&input).unwrap();
        assert!(output.is_empty());
        assert_eq!(summary.dropped, 1);
    }

    #[test]
    fn test_dedup_treats_equal_numbers_as_equal() {
        let input = document(json!([
            {"description": "gauge", "type": "gauge", "L": 6},
            {"description": "gauge", "type": "gauge", "L": 6.0},
        ]));

        let (output, summary) = ToolRenamer::default().rename_document(&input).unwrap();
        assert_eq!(output.len(), 1);
        assert_eq!(output.data[0].fields().get("L"), Some(&json!(6)));
        assert_eq!(summary.duplicates, 1);
    }

    #[test]
    fn test_missing_type_is_error() {
        let renamer = ToolRenamer::default();
        let record = ToolRecord::from_value(json!({"description": "x"})).unwrap();
        assert!(matches!(
            renamer.rename_record(&record),
            Err(CamError::MissingField { .. })
        ));
    }

    #[test]
    fn test_end_to_end_example() {
        let input = ToolLibraryDocument::from_json_str(
            r#"{"data":[{"description":"old","type":"flat end mill","BMC":"CARBIDE","geometry":{"DC":5.996}}]}"#,
        )
        .unwrap();

        let (output, summary) = ToolRenamer::default().rename_document(&input).unwrap();

        assert_eq!(
            output.to_json_string().unwrap(),
            r#"{"data":[{"description":"CARBIDE ENDMILL 6.0MM","type":"flat end mill","BMC":"CARBIDE","geometry":{"DC":5.996}}]}"#
        );
        assert_eq!(summary.input, 1);
        assert_eq!(summary.output, 1);
        assert_eq!(summary.renamed, 1);
    }

    #[test]
    fn test_input_document_is_not_mutated() {
        let input = document(json!([end_mill("old", 5.996)]));
        let before = input.clone();
        ToolRenamer::default().rename_document(&input).unwrap();
        assert_eq!(input, before);
    }

    #[test]
    fn test_unknown_taper_kind_is_dropped() {
        let input = document(json!([
            {"description": "vee", "type": "tapered mill", "tapered-type": "tapered_vee",
             "BMC": "carbide", "geometry": {"DC": 3.0, "RE": 0.0, "TA": 10.0}},
            end_mill("old", 4.0)
        ]));

        let (output, summary) = ToolRenamer::default().rename_document(&input).unwrap();
        assert_eq!(output.len(), 1);
        assert_eq!(output.data[0].description().unwrap(), "CARBIDE ENDMILL 4.0MM");
        assert_eq!(summary.dropped, 1);
    }

    #[test]
    fn test_dedup_keeps_first_occurrence() {
        let input = document(json!([
            end_mill("first", 6.0),
            end_mill("bulk", 10.0),
            end_mill("second", 6.001),
        ]));

        let (output, summary) = ToolRenamer::default().rename_document(&input).unwrap();
        let names: Vec<String> = output.data.iter().map(|r| r.description().unwrap()).collect();

        // Same generated name, different DC: not duplicates.
        assert_eq!(names, ["CARBIDE ENDMILL 6.0MM", "CARBIDE ENDMILL 10.0MM", "CARBIDE ENDMILL 6.0MM"]);
        assert_eq!(summary.duplicates, 0);

        let input = document(json!([
            end_mill("first", 6.0),
            end_mill("bulk", 10.0),
            end_mill("second", 6.0),
        ]));
        let (output, summary) = ToolRenamer::default().rename_document(&input).unwrap();
        let names: Vec<String> = output.data.iter().map(|r| r.description().unwrap()).collect();
        assert_eq!(names, ["CARBIDE ENDMILL 6.0MM", "CARBIDE ENDMILL 10.0MM"]);
        assert_eq!(summary.duplicates, 1);
        assert_eq!(summary.output, 2);
    }

    #[test]
    fn test_dedup_ignores_key_order() {
        let input = document(json!([
            {"description": "a", "type": "chamfer mill", "BMC": "hss"},
            {"BMC": "hss", "type": "chamfer mill", "description": "a"},
        ]));
        let (output, _) = ToolRenamer::default().rename_document(&input).unwrap();
        assert_eq!(output.len(), 1);
    }

    #[test]
    fn test_malformed_record_aborts_run() {
        let input = document(json!([
            end_mill("ok", 6.0),
            {"description": "bad", "type": "turning general",
             "geometry": {"INSD": 12.7, "RE": 0.8, "RA": 3, "TC": "M", "SCTY": "G", "SC": "C"}}
        ]));

        let err = ToolRenamer::default().rename_document(&input).unwrap_err();
        assert!(matches!(err, CamError::UnknownReliefCode { .. }));
    }

    #[test]
    fn test_idempotent_on_renamed_output() {
        let input = document(json!([
            end_mill("old", 5.996),
            {"description": "d", "type": "drill", "BMC": "hss", "geometry": {"DC": 8.5, "SIG": 118}},
            {"description": "t", "type": "turning general",
             "geometry": {"INSD": 12.7, "RE": 0.8, "RA": 0, "TC": "M", "SCTY": "G", "SC": "C"}},
            {"description": "misc", "type": "gauge"}
        ]));

        let renamer = ToolRenamer::default();
        let (once, _) = renamer.rename_document(&input).unwrap();
        let (twice, _) = renamer.rename_document(&once).unwrap();
        assert_eq!(once.to_json_string().unwrap(), twice.to_json_string().unwrap());
    }

    #[test]
    fn test_events_narrate_each_record() {
        let input = document(json!([end_mill("old", 5.996), end_mill("old", 5.996)]));
        let mut events = Vec::new();

        ToolRenamer::default()
            .rename_document_with(&input, |e| events.push(e.clone()))
            .unwrap();

        assert_eq!(
            events,
            vec![
                RenameEvent::Evaluating { label: "old".to_string() },
                RenameEvent::Renamed { description: "CARBIDE ENDMILL 6.0MM".to_string() },
                RenameEvent::Evaluating { label: "old".to_string() },
                RenameEvent::Renamed { description: "CARBIDE ENDMILL 6.0MM".to_string() },
                RenameEvent::DedupStarted,
                RenameEvent::Duplicate { description: "CARBIDE ENDMILL 6.0MM".to_string() },
            ]
        );
    }

    #[test]
    fn test_count_never_grows() {
        let input = document(json!([
            end_mill("a", 1.0),
            end_mill("a", 1.0),
            {"description": "Tungaloy drill", "type": "drill", "BMC": "c", "geometry": {"DC": 3, "SIG": 140}},
            {"description": "x", "type": "drill", "BMC": "c", "geometry": {"DC": 3, "SIG": 140}},
        ]));
        let (output, summary) = ToolRenamer::default().rename_document(&input).unwrap();
        assert!(output.len() <= input.len());
        assert_eq!(summary.filtered, 1);
        assert_eq!(summary.passed_through, 1);
    }
}
