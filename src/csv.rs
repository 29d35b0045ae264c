//! Utilities for working with CSV files.
//!
//! Fields are split on commas and trimmed; quoting is not supported. Blank lines are skipped.

use std::borrow::Cow;
use std::fs::File;
use std::io;
use std::io::{BufRead, BufReader, BufWriter, Lines, Write};
use std::ops::Index;
use std::path::Path;

pub struct CsvWriter {
    writer: BufWriter<File>,
}
impl CsvWriter {
    pub fn create(path: impl AsRef<Path>) -> Result<Self, io::Error> {
        let file = File::create(path)?;
        let writer = BufWriter::new(file);
        Ok(Self { writer })
    }

    pub fn append<R>(&mut self, record: R) -> Result<(), io::Error>
    where
        R: IntoIterator,
        R::Item: AsRef<str>,
    {
        for (index, datum) in record.into_iter().enumerate() {
            if index > 0 {
                self.writer.write_all(b",")?;
            }
            self.writer.write_all(datum.as_ref().as_bytes())?;
        }
        self.writer.write_all(b"\n")?;
        Ok(())
    }

    pub fn flush(&mut self) -> Result<(), io::Error> {
        self.writer.flush()
    }
}

pub struct CsvReader {
    lines: Lines<BufReader<File>>,
    line: usize,
}
impl CsvReader {
    pub fn open(path: impl AsRef<Path>) -> Result<Self, io::Error> {
        let file = File::open(path)?;
        let lines = BufReader::new(file).lines();
        Ok(Self { lines, line: 0 })
    }

    /// The 1-based number of the line most recently read.
    pub fn line(&self) -> usize {
        self.line
    }

    pub fn read(&mut self) -> Option<Result<Vec<String>, io::Error>> {
        loop {
            let line = self.lines.next()?;
            self.line += 1;
            match line {
                Ok(line) if line.trim().is_empty() => continue,
                Ok(line) => {
                    return Some(Ok(line
                        .split(',')
                        .map(|field| field.trim().to_string())
                        .collect()))
                }
                Err(err) => return Some(Err(err)),
            }
        }
    }
}

impl Iterator for CsvReader {
    type Item = Result<Vec<String>, io::Error>;

    fn next(&mut self) -> Option<Self::Item> {
        self.read()
    }
}

/// Column names of a CSV file, taken from its first row.
#[derive(Debug, Clone, PartialEq)]
pub struct Header {
    columns: Vec<String>,
}
impl Header {
    pub fn position(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|column| column == name)
    }
}

impl From<Vec<String>> for Header {
    fn from(columns: Vec<String>) -> Self {
        Self { columns }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    items: Vec<Cow<'static, str>>,
}
impl Record {
    pub fn with_capacity(capacity: usize) -> Self {
        let mut items = Vec::with_capacity(capacity);
        items.resize_with(capacity, || Cow::Borrowed(""));
        Self { items }
    }

    pub fn with_values<I>(values: I) -> Self
    where
        I: IntoIterator,
        I::Item: ToString,
    {
        let items = values
            .into_iter()
            .map(|value| Cow::Owned(value.to_string()))
            .collect();
        Self { items }
    }

    pub fn set(&mut self, ordinal: impl Into<usize>, value: impl ToString) {
        self.items[ordinal.into()] = Cow::Owned(value.to_string())
    }
}

impl IntoIterator for Record {
    type Item = Cow<'static, str>;
    type IntoIter = std::vec::IntoIter<Cow<'static, str>>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<I: Into<usize>> Index<I> for Record {
    type Output = Cow<'static, str>;

    fn index(&self, index: I) -> &Self::Output {
        &self.items[index.into()]
    }
}
