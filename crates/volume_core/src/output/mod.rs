//! CSV output of generated series.
//!
//! The series file has a `date,volume` header followed by one row per day.
//! The optional component breakdown adds `trend,yearly,weekly,noise` columns.

mod csv_writer;

pub use csv_writer::{write_components, write_records, CsvSeriesWriter, WrittenFile};
