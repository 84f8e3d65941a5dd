use std::fs::File;
use std::io;
use std::path;

use serde::de::DeserializeOwned;

/// Opens an input file, reporting failure the same way as a bad read.
pub fn open(path : &path::Path) -> Result<File, csv::Error> {
    Ok(File::open(path)?)
}

/// Reads every row of a CSV with headers, pairing each record with the line it was read from.
pub fn deserialize<T, R>(reader : R) -> Result<Vec<(u32, T)>, csv::Error>
where
    T : DeserializeOwned,
    R : io::Read,
{
    let mut reader =
        csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut records = Vec::new();

    // The header occupies line 1.
    let mut counter = 1;
    for result in reader.deserialize() {
        counter += 1;
        records.push((counter, result?));
    }

    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    use serde::Deserialize;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Row {
        a : String,
        b : u32,
    }

    #[test]
    fn rows_are_numbered_from_line_two() {
        let rows : Vec<(u32, Row)> = deserialize("a,b\n x , 1\ny,2\n".as_bytes()).unwrap();

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0], (2, Row { a : "x".to_string(), b : 1 }));
        assert_eq!(rows[1].0, 3);
        assert_eq!(rows[1].1.a, "y");
        assert_eq!(rows[1].1.b, 2);
    }

    #[test]
    fn bad_rows_are_errors() {
        let rows : Result<Vec<(u32, Row)>, _> = deserialize("a,b\nx,not-a-number\n".as_bytes());
        assert!(rows.is_err());
    }

    #[test]
    fn missing_files_are_io_errors() {
        let error = open(path::Path::new("/definitely/not/here.csv")).unwrap_err();
        assert!(matches!(error.kind(), csv::ErrorKind::Io(_)));
    }
}
