use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use bstr::BString;
use log::info;
use serde::{Deserialize, Serialize};

use crate::core::domain::ObjectRecord;
use crate::error::{GrouperError, GrouperResult};
use crate::io::format::format_number;

/// Separator between the record fields and the distance column.
const DISTANCE_SEPARATOR: &str = "  \t  ";

/// Options controlling how records are written.
///
/// # Fields
///
/// * `leading_blank_line` - Emit the type-change separator before the very
///   first record too. The previous type starts out empty, so this is `true`
///   unless the first record has an empty type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputOptions {
    #[serde(default = "default_leading_blank_line")]
    pub leading_blank_line: bool,
}

fn default_leading_blank_line() -> bool {
    true
}

impl Default for OutputOptions {
    fn default() -> Self {
        Self {
            leading_blank_line: default_leading_blank_line(),
        }
    }
}

/// Write one record as an output line, without the trailing newline.
///
/// Text fields are written as the raw bytes read from the input.
pub fn write_record<W: Write>(writer: &mut W, record: &ObjectRecord) -> std::io::Result<()> {
    writer.write_all(&record.name)?;
    write!(writer, " {} {} ", format_number(record.x), format_number(record.y))?;
    writer.write_all(&record.object_type)?;
    writer.write_all(b" ")?;
    writer.write_all(&record.created)?;
    write!(
        writer,
        "{}Distance: {}",
        DISTANCE_SEPARATOR,
        format_number(record.distance())
    )
}

/// Format one record as an output line, without the trailing newline.
///
/// # Examples
///
/// ```
/// use point_grouper::core::domain::ObjectRecord;
/// use point_grouper::io::writer::format_record;
///
/// let record = ObjectRecord::new("Alpha", 1.0, 4.5, "Fruit", "01.01.2020");
/// assert_eq!(
///     format_record(&record),
///     "Alpha 1 4.5 Fruit 01.01.2020  \t  Distance: 3.5"
/// );
/// ```
pub fn format_record(record: &ObjectRecord) -> BString {
    let mut line = Vec::new();
    // Writing into a Vec cannot fail
    let _ = write_record(&mut line, record);
    BString::from(line)
}

/// Write `records` to `writer`, one per line, with a blank line before every
/// change of type.
///
/// Returns the number of record lines written.
pub fn write_records<W: Write>(
    writer: &mut W,
    records: &[ObjectRecord],
    options: &OutputOptions,
) -> std::io::Result<usize> {
    let mut current_type: Option<&[u8]> = None;

    for record in records {
        let previous = current_type.unwrap_or(b"");
        let is_first = current_type.is_none();

        if record.object_type.as_slice() != previous
            && (options.leading_blank_line || !is_first)
        {
            writeln!(writer)?;
        }
        current_type = Some(record.object_type.as_slice());

        write_record(writer, record)?;
        writeln!(writer)?;
    }

    writer.flush()?;
    Ok(records.len())
}

/// Render `records` in the output file format using [`write_records`].
pub fn render_records(records: &[ObjectRecord], options: &OutputOptions) -> BString {
    let mut buffer = Vec::new();
    // Writing into a Vec cannot fail
    let _ = write_records(&mut buffer, records, options);
    BString::from(buffer)
}

/// Create (or truncate) `path` and write `records` into it.
pub fn write_records_to_file(
    path: &Path,
    records: &[ObjectRecord],
    options: &OutputOptions,
) -> GrouperResult<usize> {
    let file = File::create(path).map_err(|source| GrouperError::OutputOpen {
        path: path.to_path_buf(),
        source,
    })?;

    let mut writer = BufWriter::new(file);
    let written =
        write_records(&mut writer, records, options).map_err(|source| GrouperError::OutputWrite {
            path: path.to_path_buf(),
            source,
        })?;

    info!("Wrote {} records to {}", written, path.display());
    Ok(written)
}
