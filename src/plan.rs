//! Packing Plan

use std::{io, sync::Arc};

use smallvec::{SmallVec, smallvec};
use tabled::{
    builder::Builder,
    grid::config::HorizontalLine,
    settings::{
        Alignment, Color, Style, Theme,
        object::{Columns, Rows},
    },
};

use crate::{catalog::PackSizes, selection::PackSelection};

/// The outcome of packing one order: the optimal selection alongside the
/// incorrect candidates, both computed from the same pack sizes.
#[derive(Debug, Clone)]
pub struct PackingPlan {
    ordered: u64,
    correct: PackSelection,
    incorrect: Vec<PackSelection>,
    sizes: Arc<PackSizes>,
}

impl PackingPlan {
    /// Create a new plan with the given details.
    #[must_use]
    pub fn new(
        ordered: u64,
        correct: PackSelection,
        incorrect: Vec<PackSelection>,
        sizes: Arc<PackSizes>,
    ) -> Self {
        Self {
            ordered,
            correct,
            incorrect,
            sizes,
        }
    }

    /// Quantity ordered
    #[must_use]
    pub fn ordered(&self) -> u64 {
        self.ordered
    }

    /// Optimal selection
    #[must_use]
    pub fn correct(&self) -> &PackSelection {
        &self.correct
    }

    /// Naive candidates that differ from the optimal selection
    #[must_use]
    pub fn incorrect(&self) -> &[PackSelection] {
        &self.incorrect
    }

    /// Pack sizes the plan was computed from
    #[must_use]
    pub fn sizes(&self) -> &PackSizes {
        &self.sizes
    }

    /// Items shipped by the optimal selection
    #[must_use]
    pub fn shipped(&self) -> u64 {
        self.correct.total_items()
    }

    /// Items shipped beyond the ordered quantity
    #[must_use]
    pub fn surplus(&self) -> u64 {
        self.shipped().saturating_sub(self.ordered)
    }

    /// Packs used by the optimal selection
    #[must_use]
    pub fn pack_count(&self) -> u64 {
        self.correct.total_packs()
    }

    /// Writes the plan as a table followed by a summary.
    ///
    /// # Errors
    ///
    /// Returns an error if writing to `out` fails.
    pub fn write_to(&self, mut out: impl io::Write) -> io::Result<()> {
        let mut builder = Builder::default();

        builder.push_record(["", "Pack Size", "Count", "Items"]);

        let mut boundary_rows: SmallVec<[usize; 8]> = smallvec![];
        let mut row = 1;

        row += append_selection_rows(&mut builder, "Correct", &self.correct);

        for (i, candidate) in self.incorrect.iter().enumerate() {
            boundary_rows.push(row);
            row += append_selection_rows(
                &mut builder,
                &format!("Incorrect #{}", i + 1),
                candidate,
            );
        }

        let mut table = builder.build();
        let mut theme = Theme::from(Style::modern_rounded());
        let separator = HorizontalLine::new(Some('─'), Some('┼'), Some('├'), Some('┤'));

        theme.remove_horizontal_lines();
        theme.insert_horizontal_line(1, separator);

        for &boundary in &boundary_rows {
            theme.insert_horizontal_line(boundary, separator);
        }

        table.with(theme);
        table.modify(Rows::first(), Color::BOLD);
        table.modify(Columns::new(1..4), Alignment::right());

        writeln!(out, "\n{table}")?;
        writeln!(out, "\nSizes:   {}", self.sizes)?;
        writeln!(out, "Ordered: {}", self.ordered)?;
        writeln!(out, "Shipped: {}", self.shipped())?;
        writeln!(out, "Surplus: {}", self.surplus())?;
        writeln!(out, "Packs:   {}", self.pack_count())?;

        Ok(())
    }
}

/// Push one row per pack size, returning how many rows were added.
fn append_selection_rows(builder: &mut Builder, label: &str, selection: &PackSelection) -> usize {
    if selection.is_empty() {
        builder.push_record([label, "-", "0", "0"]);

        return 1;
    }

    let mut rows = 0;

    for (size, count) in selection.iter() {
        let label = if rows == 0 { label } else { "" };

        builder.push_record([
            label.to_string(),
            size.to_string(),
            count.to_string(),
            size.saturating_mul(count).to_string(),
        ]);

        rows += 1;
    }

    rows
}
