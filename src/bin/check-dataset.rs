use geometry_compare::dataset::{header_is_valid, parse_csv_line};
use geometry_compare::geojson::validate_shape_strict;
use geometry_compare::{MyError, MyResult};

use indicatif::{ProgressBar, ProgressStyle};
use serde_json::Value;
use structopt::StructOpt;

use std::collections::HashSet;
use std::convert::TryInto;

#[derive(StructOpt)]
struct Opts {
    /// Csv file to check
    csv_file: String,
    /// Require geometry columns to contain valid geojson, not just valid json
    #[structopt(long)]
    strict: bool,
}

fn main() -> MyResult<()> {
    let Opts { csv_file, strict } = Opts::from_args();

    let content = std::fs::read_to_string(&csv_file)?;
    let mut lines = content.lines();

    let header = lines.next().unwrap_or("");
    if !header_is_valid(header) {
        return Err(Box::new(MyError::MalformedHeader));
    }

    let lines: Vec<_> = lines.collect();

    let progress = ProgressBar::new(lines.len().try_into().unwrap());
    progress.set_style(
        ProgressStyle::default_bar()
            .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len}")
            .progress_chars("#>-"),
    );

    let mut seen_uuids = HashSet::new();
    let mut bad_rows = 0;
    let mut checked = 0;

    for (index, line) in lines.iter().enumerate() {
        progress.inc(1);

        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        // header is line 1
        let line_number = index + 2;
        checked += 1;

        let columns = parse_csv_line(line);
        if columns.len() < 3 {
            println!("line {}: only {} columns", line_number, columns.len());
            bad_rows += 1;
            continue;
        }

        if !seen_uuids.insert(columns[0].clone()) {
            println!(
                "line {}: duplicate uuid \"{}\", only the first row is ever returned",
                line_number, columns[0]
            );
        }

        let mut row_is_bad = false;
        for (name, field) in &[("old_geojson", &columns[1]), ("new_geojson", &columns[2])] {
            if field.is_empty() {
                continue;
            }

            let result = if strict {
                validate_shape_strict(field)
            } else {
                serde_json::from_str::<Value>(field)
                    .map(|_| ())
                    .map_err(|err| err.to_string())
            };

            if let Err(reason) = result {
                println!("line {}: invalid {}: {}", line_number, name, reason);
                row_is_bad = true;
            }
        }

        if row_is_bad {
            bad_rows += 1;
        }
    }

    progress.finish();

    if bad_rows > 0 {
        return Err(Box::new(MyError::InvalidDataset { rows: bad_rows }));
    }

    println!("all {} rows seem valid :-)", checked);

    Ok(())
}
