use crate::record::{parse_records, PhotoRecord, RecordError};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, Default)]
pub struct PlanOptions {
    pub allow_missing_extension: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenameCandidate {
    pub original_name: String,
    pub new_name: String,
    pub city: String,
    pub timestamp: String,
    pub sequence: String,
    pub changed: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct RenameStats {
    pub records: usize,
    pub cities: usize,
    pub largest_group: usize,
    pub unchanged: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenamePlan {
    pub candidates: Vec<RenameCandidate>,
    pub stats: RenameStats,
}

pub fn rename(input: &str) -> Result<String, RecordError> {
    rename_with_options(input, &PlanOptions::default())
}

pub fn rename_with_options(input: &str, options: &PlanOptions) -> Result<String, RecordError> {
    let plan = generate_plan(input, options)?;
    let names: Vec<&str> = plan
        .candidates
        .iter()
        .map(|candidate| candidate.new_name.as_str())
        .collect();
    Ok(names.join("\n"))
}

pub fn generate_plan(input: &str, options: &PlanOptions) -> Result<RenamePlan, RecordError> {
    let records = parse_records(input)?;
    let mut stats = RenameStats {
        records: records.len(),
        ..RenameStats::default()
    };

    let groups = group_by_city(&records);
    stats.cities = groups.len();

    // fixed-width timestamps: bytewise order is chronological order, and the
    // stable sort keeps input order on equal timestamps
    let mut sequences = vec![String::new(); records.len()];
    for indices in groups.values() {
        let mut sorted = indices.clone();
        sorted.sort_by(|a, b| records[*a].timestamp.cmp(&records[*b].timestamp));

        stats.largest_group = stats.largest_group.max(sorted.len());
        let width = sorted.len().to_string().len();

        for (position, &index) in sorted.iter().enumerate() {
            sequences[index] = format!("{:0width$}", position + 1);
        }
    }

    let mut candidates = Vec::with_capacity(records.len());
    for record in &records {
        let sequence = std::mem::take(&mut sequences[record.index]);
        let new_name = render_name(record, &sequence, options)?;
        let changed = new_name != record.filename;
        if !changed {
            stats.unchanged += 1;
        }

        candidates.push(RenameCandidate {
            original_name: record.filename.clone(),
            new_name,
            city: record.city.clone(),
            timestamp: record.timestamp.clone(),
            sequence,
            changed,
        });
    }

    Ok(RenamePlan { candidates, stats })
}

fn group_by_city(records: &[PhotoRecord]) -> HashMap<&str, Vec<usize>> {
    let mut groups = HashMap::<&str, Vec<usize>>::new();
    for record in records {
        groups
            .entry(record.city.as_str())
            .or_default()
            .push(record.index);
    }
    groups
}

fn render_name(
    record: &PhotoRecord,
    sequence: &str,
    options: &PlanOptions,
) -> Result<String, RecordError> {
    match record.extension.as_deref() {
        Some(extension) => Ok(format!("{}{}.{}", record.city, sequence, extension)),
        None if options.allow_missing_extension => Ok(format!("{}{}", record.city, sequence)),
        None => Err(RecordError::MissingExtension {
            line: record.index + 1,
            filename: record.filename.clone(),
        }),
    }
}
