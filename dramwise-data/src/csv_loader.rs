//! Delimited-text flavour tables.

use std::io::Read;

use camino::Utf8Path;
use csv::{ReaderBuilder, StringRecord, Trim};
use dramwise_core::{AttributeSet, Dataset, DatasetError};
use log::{debug, info};

use crate::LoadError;
use crate::fs::open_utf8_file;

/// Default column holding distillery names.
pub const DEFAULT_KEY_COLUMN: &str = "Distillery";

/// Reads a header-led delimited table into a [`Dataset`].
///
/// The key column names each distillery and every attribute of the
/// requested [`AttributeSet`] must appear as a header. Other columns are
/// ignored. Fields are trimmed before parsing.
///
/// # Examples
/// ```
/// use dramwise_core::AttributeSet;
/// use dramwise_data::CsvDatasetLoader;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let table = "RowID,Distillery,X,Y\n1,Ardbeg,4,0\n2,Glenlivet,1,3\n";
/// let attributes = AttributeSet::new(["X", "Y"])?;
/// let dataset = CsvDatasetLoader::default().read(table.as_bytes(), &attributes)?;
/// assert_eq!(dataset.intensity("Ardbeg", "X"), Some(4));
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvDatasetLoader {
    key_column: String,
    delimiter: u8,
}

impl Default for CsvDatasetLoader {
    fn default() -> Self {
        Self {
            key_column: DEFAULT_KEY_COLUMN.to_owned(),
            delimiter: b',',
        }
    }
}

/// Header positions resolved once per table.
struct Columns {
    key: usize,
    attributes: Vec<usize>,
}

impl CsvDatasetLoader {
    /// Use `column` as the distillery name column.
    #[must_use]
    pub fn with_key_column(mut self, column: impl Into<String>) -> Self {
        self.key_column = column.into();
        self
    }

    /// Split fields on `delimiter` instead of a comma.
    #[must_use]
    pub const fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Load the table stored at `path`.
    ///
    /// # Errors
    /// Returns [`LoadError::Open`] when the file cannot be opened, otherwise
    /// any error from [`CsvDatasetLoader::read`].
    pub fn load(&self, path: &Utf8Path, attributes: &AttributeSet) -> Result<Dataset, LoadError> {
        let file = open_utf8_file(path).map_err(|source| LoadError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        debug!("loading flavour table from {path}");
        self.read(file, attributes)
    }

    /// Read a table from any byte source.
    ///
    /// # Errors
    /// Returns [`LoadError::Csv`] for unreadable input,
    /// [`LoadError::MissingColumn`] when the key column or an attribute is
    /// absent from the header, and [`LoadError::Dataset`] when a cell is not
    /// an integer or the rows do not form a valid dataset.
    pub fn read<R: Read>(
        &self,
        reader: R,
        attributes: &AttributeSet,
    ) -> Result<Dataset, LoadError> {
        let mut csv = ReaderBuilder::new()
            .delimiter(self.delimiter)
            .trim(Trim::All)
            .from_reader(reader);
        let columns = self.resolve_columns(csv.headers()?, attributes)?;

        let mut rows = Vec::new();
        for record in csv.records() {
            rows.push(parse_row(&record?, &columns, attributes)?);
        }
        debug!("read {} rows", rows.len());
        Ok(Dataset::new(attributes.clone(), rows)?)
    }

    fn resolve_columns(
        &self,
        headers: &StringRecord,
        attributes: &AttributeSet,
    ) -> Result<Columns, LoadError> {
        let find = |column: &str| {
            headers
                .iter()
                .position(|header| header == column)
                .ok_or_else(|| LoadError::MissingColumn {
                    column: column.to_owned(),
                })
        };
        let key = find(self.key_column.as_str())?;
        let indices = attributes.iter().map(find).collect::<Result<Vec<_>, _>>()?;

        let ignored: Vec<&str> = headers
            .iter()
            .enumerate()
            .filter(|(index, _)| *index != key && !indices.contains(index))
            .map(|(_, header)| header)
            .collect();
        if !ignored.is_empty() {
            info!("ignoring columns: {}", ignored.join(", "));
        }
        Ok(Columns {
            key,
            attributes: indices,
        })
    }
}

fn parse_row(
    record: &StringRecord,
    columns: &Columns,
    attributes: &AttributeSet,
) -> Result<(String, Vec<(String, i32)>), DatasetError> {
    let cell = |index: usize| record.get(index).unwrap_or_default();
    let name = cell(columns.key).to_owned();
    let cells = attributes
        .iter()
        .zip(&columns.attributes)
        .map(|(attribute, index)| {
            let raw = cell(*index);
            raw.parse::<i32>()
                .map(|value| (attribute.to_owned(), value))
                .map_err(|_| DatasetError::InvalidIntensity {
                    distillery: name.clone(),
                    attribute: attribute.to_owned(),
                    raw: raw.to_owned(),
                })
        })
        .collect::<Result<Vec<_>, _>>()?;
    Ok((name, cells))
}
