//! Task tables as Arrow record batches (CSV and Parquet)
//!
//! Columns are matched by header name, so column order is free and extra
//! columns are ignored. Legacy headers (`task_id`, `T_gov`, `T_azure`,
//! `T_ds`, `T_total`, `p_gov`, `p_azure`, `p_ds`) are accepted on input.

use std::fs::File;
use std::io::Cursor;
use std::path::Path;
use std::sync::Arc;

use arrow::array::{Array, ArrayRef, Float64Array, StringArray};
use arrow::csv::reader::Format;
use arrow::csv::{ReaderBuilder, WriterBuilder};
use arrow::datatypes::{DataType, Field, Schema, SchemaRef};
use arrow::record_batch::RecordBatch;
use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;
use parquet::arrow::ArrowWriter;

use crate::schema::{TaskRecord, TaskRecordWire};
use crate::{Error, Result};

const ID: (&str, &str) = ("id", "task_id");
const DURATION_A: (&str, &str) = ("duration_a", "T_gov");
const DURATION_B: (&str, &str) = ("duration_b", "T_azure");
const DURATION_C: (&str, &str) = ("duration_c", "T_ds");
const TOTAL: (&str, &str) = ("total", "T_total");
const PROPORTION_A: (&str, &str) = ("proportion_a", "p_gov");
const PROPORTION_B: (&str, &str) = ("proportion_b", "p_azure");
const PROPORTION_C: (&str, &str) = ("proportion_c", "p_ds");

const NUMERIC_COLUMNS: [(&str, &str); 7] = [
    DURATION_A,
    DURATION_B,
    DURATION_C,
    TOTAL,
    PROPORTION_A,
    PROPORTION_B,
    PROPORTION_C,
];

/// Canonical schema of a task table.
#[must_use]
pub fn task_schema() -> SchemaRef {
    Arc::new(Schema::new(vec![
        Field::new(ID.0, DataType::Utf8, true),
        Field::new(DURATION_A.0, DataType::Float64, false),
        Field::new(DURATION_B.0, DataType::Float64, false),
        Field::new(DURATION_C.0, DataType::Float64, false),
        Field::new(TOTAL.0, DataType::Float64, true),
        Field::new(PROPORTION_A.0, DataType::Float64, true),
        Field::new(PROPORTION_B.0, DataType::Float64, true),
        Field::new(PROPORTION_C.0, DataType::Float64, true),
    ]))
}

/// Encode tasks as a single record batch in the canonical schema.
///
/// # Errors
///
/// Returns error if the batch cannot be assembled
pub fn tasks_to_batch(tasks: &[TaskRecord]) -> Result<RecordBatch> {
    let proportion = |pick: fn(&crate::schema::Proportions) -> f64| -> ArrayRef {
        Arc::new(
            tasks
                .iter()
                .map(|t| t.proportions().as_ref().map(pick))
                .collect::<Float64Array>(),
        )
    };

    let columns: Vec<ArrayRef> = vec![
        Arc::new(tasks.iter().map(TaskRecord::id).collect::<StringArray>()),
        Arc::new(Float64Array::from_iter_values(tasks.iter().map(TaskRecord::duration_a))),
        Arc::new(Float64Array::from_iter_values(tasks.iter().map(TaskRecord::duration_b))),
        Arc::new(Float64Array::from_iter_values(tasks.iter().map(TaskRecord::duration_c))),
        Arc::new(tasks.iter().map(TaskRecord::total).collect::<Float64Array>()),
        proportion(|p| p.a()),
        proportion(|p| p.b()),
        proportion(|p| p.c()),
    ];

    Ok(RecordBatch::try_new(task_schema(), columns)?)
}

/// Decode a record batch into tasks.
///
/// Missing duration columns read as `0.0`; missing optional columns and
/// null cells read as absent. A row with an incomplete proportion triple
/// has no proportions.
///
/// # Errors
///
/// Returns `MalformedInput` if a known column has an unexpected type
pub fn batch_to_tasks(batch: &RecordBatch) -> Result<Vec<TaskRecord>> {
    let ids = match lookup(batch, ID) {
        Some(column) => Some(column.as_any().downcast_ref::<StringArray>().ok_or_else(|| {
            Error::MalformedInput(format!(
                "column '{}' must be text, found {}",
                ID.0,
                column.data_type()
            ))
        })?),
        None => None,
    };
    let duration_a = float_column(batch, DURATION_A)?;
    let duration_b = float_column(batch, DURATION_B)?;
    let duration_c = float_column(batch, DURATION_C)?;
    let total = float_column(batch, TOTAL)?;
    let proportion_a = float_column(batch, PROPORTION_A)?;
    let proportion_b = float_column(batch, PROPORTION_B)?;
    let proportion_c = float_column(batch, PROPORTION_C)?;

    let tasks: Vec<TaskRecord> = (0..batch.num_rows())
        .map(|row| {
            TaskRecordWire {
                id: ids
                    .filter(|c| c.is_valid(row))
                    .map(|c| c.value(row))
                    .filter(|id| !id.is_empty())
                    .map(str::to_string),
                duration_a: cell(duration_a, row).unwrap_or(0.0),
                duration_b: cell(duration_b, row).unwrap_or(0.0),
                duration_c: cell(duration_c, row).unwrap_or(0.0),
                total: cell(total, row),
                proportion_a: cell(proportion_a, row),
                proportion_b: cell(proportion_b, row),
                proportion_c: cell(proportion_c, row),
            }
            .into()
        })
        .collect();

    Ok(tasks)
}

/// Read tasks from a CSV file with a header row.
///
/// # Errors
///
/// Returns error if the file cannot be read or a cell cannot be parsed
pub fn read_csv(path: &Path) -> Result<Vec<TaskRecord>> {
    let text = std::fs::read_to_string(path)?;
    let text = text.strip_prefix('\u{feff}').unwrap_or(&text);
    if text.trim().is_empty() {
        return Ok(Vec::new());
    }

    let (header, _) = Format::default()
        .with_header(true)
        .infer_schema(Cursor::new(text.as_bytes()), Some(0))?;
    let reader = ReaderBuilder::new(csv_schema(&header))
        .with_header(true)
        .build(Cursor::new(text.as_bytes()))?;

    let mut tasks = Vec::new();
    for batch in reader {
        tasks.extend(batch_to_tasks(&batch?)?);
    }
    Ok(tasks)
}

/// Write tasks to a CSV file, overwriting it.
///
/// # Errors
///
/// Returns error if the file cannot be written
pub fn write_csv(path: &Path, tasks: &[TaskRecord]) -> Result<()> {
    let batch = tasks_to_batch(tasks)?;
    let file = File::create(path)?;
    let mut writer = WriterBuilder::new()
        .with_header(true)
        .build(file);
    writer.write(&batch)?;
    Ok(())
}

/// Read tasks from a Parquet file.
///
/// # Errors
///
/// Returns error if file cannot be read or parsed
pub fn read_parquet(path: &Path) -> Result<Vec<TaskRecord>> {
    let file = File::open(path)?;
    let reader = ParquetRecordBatchReaderBuilder::try_new(file)?.build()?;

    let mut tasks = Vec::new();
    for batch in reader {
        tasks.extend(batch_to_tasks(&batch?)?);
    }
    Ok(tasks)
}

/// Write tasks to a Parquet file, overwriting it.
///
/// # Errors
///
/// Returns error if the file cannot be written
pub fn write_parquet(path: &Path, tasks: &[TaskRecord]) -> Result<()> {
    let batch = tasks_to_batch(tasks)?;
    let file = File::create(path)?;
    let mut writer = ArrowWriter::try_new(file, batch.schema(), None)?;
    writer.write(&batch)?;
    writer.close()?;
    Ok(())
}

/// Typed schema for a CSV file from the column names of its header.
///
/// Known numeric columns are `Float64`, everything else is text.
fn csv_schema(header: &Schema) -> SchemaRef {
    let fields: Vec<Field> = header
        .fields()
        .iter()
        .map(|field| {
            let name = field.name().trim();
            let numeric = NUMERIC_COLUMNS
                .iter()
                .any(|&(canonical, legacy)| name == canonical || name == legacy);
            let data_type = if numeric {
                DataType::Float64
            } else {
                DataType::Utf8
            };
            Field::new(name, data_type, true)
        })
        .collect();
    Arc::new(Schema::new(fields))
}

fn lookup<'a>(batch: &'a RecordBatch, (canonical, legacy): (&str, &str)) -> Option<&'a ArrayRef> {
    batch
        .column_by_name(canonical)
        .or_else(|| batch.column_by_name(legacy))
}

fn float_column<'a>(
    batch: &'a RecordBatch,
    names: (&str, &str),
) -> Result<Option<&'a Float64Array>> {
    lookup(batch, names)
        .map(|column| {
            column
                .as_any()
                .downcast_ref::<Float64Array>()
                .ok_or_else(|| {
                    Error::MalformedInput(format!(
                        "column '{}' must be Float64, found {}",
                        names.0,
                        column.data_type()
                    ))
                })
        })
        .transpose()
}

fn cell(column: Option<&Float64Array>, row: usize) -> Option<f64> {
    column.filter(|c| c.is_valid(row)).map(|c| c.value(row))
}
