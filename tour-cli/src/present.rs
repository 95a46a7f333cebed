//! Rendering of solved tours for the terminal.

use std::io::Write;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use tour_core::Tour;

use crate::CliError;

/// How `tour plan` prints the solved tour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Numbered landmark list followed by the totals.
    #[default]
    Text,
    /// Pretty-printed JSON object.
    Json,
}

pub(crate) fn write_tour(
    writer: &mut dyn Write,
    format: OutputFormat,
    tour: &Tour,
) -> Result<(), CliError> {
    match format {
        OutputFormat::Text => write_text(writer, tour).map_err(CliError::WriteOutput),
        OutputFormat::Json => write_json(writer, tour),
    }
}

/// Reals use `Debug` formatting so whole numbers keep their `.0`.
fn write_text(writer: &mut dyn Write, tour: &Tour) -> std::io::Result<()> {
    writeln!(writer, "The visited landmarks:")?;
    for (position, landmark) in tour.landmarks.iter().enumerate() {
        writeln!(writer, "{}- {landmark}", position + 1)?;
    }
    writeln!(writer)?;
    writeln!(writer, "Total attractiveness score: {:?}", tour.total_score)?;
    writeln!(writer)?;
    writeln!(writer, "Total travel time is: {:?} minutes", tour.total_time)?;
    Ok(())
}

fn write_json(writer: &mut dyn Write, tour: &Tour) -> Result<(), CliError> {
    let payload = serde_json::to_string_pretty(tour).map_err(CliError::SerialiseTour)?;
    writer
        .write_all(payload.as_bytes())
        .map_err(CliError::WriteOutput)?;
    writer.write_all(b"\n").map_err(CliError::WriteOutput)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};
    use tour_core::Landmark;

    #[fixture]
    fn scenic_tour() -> Tour {
        Tour {
            landmarks: ["Hotel", "A", "B", "Hotel"].map(Landmark::new).to_vec(),
            total_score: 18.0,
            total_time: 8.0,
        }
    }

    fn render(format: OutputFormat, tour: &Tour) -> String {
        let mut buffer = Vec::new();
        write_tour(&mut buffer, format, tour).expect("in-memory writes succeed");
        String::from_utf8(buffer).expect("utf-8 output")
    }

    #[rstest]
    fn text_lists_every_stop_then_totals(scenic_tour: Tour) {
        let expected = "The visited landmarks:\n\
                        1- Hotel\n\
                        2- A\n\
                        3- B\n\
                        4- Hotel\n\
                        \n\
                        Total attractiveness score: 18.0\n\
                        \n\
                        Total travel time is: 8.0 minutes\n";
        assert_eq!(render(OutputFormat::Text, &scenic_tour), expected);
    }

    #[rstest]
    fn text_keeps_fractional_totals() {
        let tour = Tour {
            landmarks: ["Hotel", "Hotel"].map(Landmark::new).to_vec(),
            total_score: 10.5,
            total_time: 0.25,
        };
        let output = render(OutputFormat::Text, &tour);
        assert!(output.contains("Total attractiveness score: 10.5\n"));
        assert!(output.contains("Total travel time is: 0.25 minutes\n"));
    }

    #[rstest]
    fn json_round_trips_the_tour(scenic_tour: Tour) {
        let output = render(OutputFormat::Json, &scenic_tour);
        let value: serde_json::Value = serde_json::from_str(&output).expect("valid JSON");
        assert_eq!(value["landmarks"][3], "Hotel");
        assert_eq!(value["total_score"], 18.0);
        assert_eq!(value["total_time"], 8.0);
    }
}
