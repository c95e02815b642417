use std::fmt::Display;
use std::iter;

use comfy_table::presets::UTF8_NO_BORDERS;
use comfy_table::{ContentArrangement, Row, Table};
use itertools::Itertools;

use crate::analyzer::{FaceCounts, Tally};
use crate::die::Snapshot;
use crate::table::{NarrowTable, WideTable};
use crate::value::Value;

/// Plain-text rendering of die states, results and statistics.
pub trait PrintExt {
    fn table(&self) -> String;

    fn print_table(&self) {
        print!("{}", self.table());
    }
}

fn new_table<R>(header: R) -> Table
where
    R: Into<Row>,
{
    let mut table = Table::new();
    table
        .load_preset(UTF8_NO_BORDERS)
        .set_content_arrangement(ContentArrangement::DynamicFullWidth)
        .set_header(header);
    table
}

fn tuple<T: Display>(key: &[T]) -> String {
    format!("({})", key.iter().join(", "))
}

impl<T> PrintExt for Snapshot<T>
where
    T: Value + Display,
{
    fn table(&self) -> String {
        let mut table = new_table(["face", "weight"]);
        for (face, weight) in self {
            table.add_row(vec![face.to_string(), format!("{weight:.3}")]);
        }
        format!("{table}\n")
    }
}

impl<T> PrintExt for WideTable<T>
where
    T: Value + Display,
{
    fn table(&self) -> String {
        let header = iter::once("roll".to_string())
            .chain((1..=self.dice()).map(|d| d.to_string()));
        let mut table = new_table(header);
        for (r, row) in self.rows().enumerate() {
            table.add_row(
                iter::once((r + 1).to_string()).chain(row.iter().map(ToString::to_string)),
            );
        }
        format!("{table}\n")
    }
}

impl<T> PrintExt for NarrowTable<T>
where
    T: Value + Display,
{
    fn table(&self) -> String {
        let mut table = new_table(["roll", "die", "value"]);
        for row in self {
            table.add_row(vec![
                row.roll.to_string(),
                row.die.to_string(),
                row.value.to_string(),
            ]);
        }
        format!("{table}\n")
    }
}

impl<T> PrintExt for FaceCounts<T>
where
    T: Value + Display,
{
    fn table(&self) -> String {
        let header = iter::once("roll".to_string())
            .chain(self.faces().iter().map(ToString::to_string));
        let mut table = new_table(header);
        for (r, row) in self.rows().enumerate() {
            table.add_row(
                iter::once((r + 1).to_string()).chain(row.iter().map(ToString::to_string)),
            );
        }
        format!("{table}\n")
    }
}

impl<T> PrintExt for Tally<T>
where
    T: Value + Display,
{
    fn table(&self) -> String {
        let mut table = new_table(["outcome", "count"]);
        for (key, count) in self {
            table.add_row(vec![tuple(key), count.to_string()]);
        }
        format!("{table}\n")
    }
}
