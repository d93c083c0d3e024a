use crate::errors::AppError;
use csv::ReaderBuilder;
use std::path::Path;

#[cfg(test)]
mod read_column_tests {
    use super::*;
    use assert_fs::prelude::*;
    use assert_fs::TempDir;

    #[test]
    fn collects_one_value_per_row_in_input_order() {
        let temp = TempDir::new().unwrap();
        let input = create_input(
            &temp,
            "a@x.com,Alice\r\nb@x.com,Bob\r\nc@x.com,Carol\r\n",
        );

        let actual = read_column(&input, 0).unwrap();

        assert_eq!(
            vec![
                String::from("a@x.com"),
                String::from("b@x.com"),
                String::from("c@x.com"),
            ],
            actual
        );
    }

    #[test]
    fn silently_skips_rows_too_short_for_the_column() {
        let temp = TempDir::new().unwrap();
        let input = create_input(&temp, "a@x.com,1\r\nb@x.com\r\nc@x.com,3\r\n");

        let actual = read_column(&input, 1).unwrap();

        assert_eq!(vec![String::from("1"), String::from("3")], actual);
    }

    #[test]
    fn retains_short_rows_that_still_cover_the_column() {
        let temp = TempDir::new().unwrap();
        let input = create_input(&temp, "a@x.com,1\r\nb@x.com\r\n");

        let actual = read_column(&input, 0).unwrap();

        assert_eq!(vec![String::from("a@x.com"), String::from("b@x.com")], actual);
    }

    #[test]
    fn takes_values_verbatim_without_normalisation() {
        let temp = TempDir::new().unwrap();
        let input = create_input(&temp, "A@X.COM,1\r\na@x.com,2\r\nA@X.COM,3\r\n");

        let actual = read_column(&input, 0).unwrap();

        assert_eq!(
            vec![
                String::from("A@X.COM"),
                String::from("a@x.com"),
                String::from("A@X.COM"),
            ],
            actual
        );
    }

    #[test]
    fn errors_if_the_file_does_not_exist() {
        let temp = TempDir::new().unwrap();

        let result = read_column(&temp.path().join("missing.csv"), 0);

        assert!(result.is_err());
    }

    fn create_input(temp: &TempDir, contents: &str) -> std::path::PathBuf {
        let file = temp.child("example.csv");

        file.write_str(contents).unwrap();

        file.path().into()
    }
}

pub fn read_column(path: &Path, column_index: usize) -> Result<Vec<String>, AppError> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)?;

    let mut column_data = vec![];

    for record in reader.records() {
        if let Some(value) = record?.get(column_index) {
            column_data.push(value.into());
        }
    }

    Ok(column_data)
}
