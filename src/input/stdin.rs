use super::Result;
use std::io::{self, BufRead, Read};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delimiter {
    Newline,
    Null,
}

/// Read the path list from stdin
pub fn read_path_list(delimiter: Delimiter) -> Result<Vec<String>> {
    let stdin = io::stdin();
    let reader = stdin.lock();
    match delimiter {
        Delimiter::Newline => read_line_delimited_strings(reader),
        Delimiter::Null => read_null_delimited_strings(reader),
    }
}

/// One path per line. Blank lines are skipped and a trailing `\r` is dropped;
/// the path text itself is kept verbatim.
pub fn read_line_delimited_strings<R: BufRead>(reader: R) -> Result<Vec<String>> {
    let mut inputs = Vec::new();

    for line in reader.lines() {
        let line = line?;
        let line = line.strip_suffix('\r').unwrap_or(&line);
        if !line.trim().is_empty() {
            inputs.push(line.to_string());
        }
    }

    Ok(inputs)
}

pub fn read_null_delimited_strings<R: Read>(mut reader: R) -> Result<Vec<String>> {
    let mut buffer = Vec::new();
    reader.read_to_end(&mut buffer)?;

    let inputs: Vec<String> = buffer
        .split(|&b| b == 0)
        .filter(|s| !s.is_empty())
        .map(|bytes| String::from_utf8_lossy(bytes).into_owned())
        .collect();

    Ok(inputs)
}
