use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhotoRecord {
    pub index: usize,
    pub filename: String,
    pub city: String,
    pub timestamp: String,
    pub extension: Option<String>,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RecordError {
    #[error("{line}行目のレコードが不正です: フィールド数{found} (必要数3)")]
    MalformedRecord { line: usize, found: usize },
    #[error("{line}行目のファイル名に拡張子がありません: {filename}")]
    MissingExtension { line: usize, filename: String },
}

pub fn parse_records(input: &str) -> Result<Vec<PhotoRecord>, RecordError> {
    if input.is_empty() {
        return Ok(Vec::new());
    }

    let mut records = Vec::new();
    for (index, line) in input.split('\n').enumerate() {
        records.push(parse_record(index, line)?);
    }

    Ok(records)
}

fn parse_record(index: usize, line: &str) -> Result<PhotoRecord, RecordError> {
    let fields: Vec<&str> = line.split(", ").collect();
    if fields.len() != 3 {
        return Err(RecordError::MalformedRecord {
            line: index + 1,
            found: fields.len(),
        });
    }

    Ok(PhotoRecord {
        index,
        filename: fields[0].to_string(),
        city: fields[1].to_string(),
        timestamp: fields[2].to_string(),
        extension: split_extension(fields[0]),
    })
}

fn split_extension(filename: &str) -> Option<String> {
    match filename.rsplit_once('.') {
        Some((_, extension)) if !extension.is_empty() => Some(extension.to_string()),
        _ => None,
    }
}
