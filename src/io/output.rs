use std::io::Write;
use std::str::FromStr;

use clap::ValueEnum;
use colored::*;
use comfy_table::{presets::UTF8_FULL, Cell, Color, Table};
use serde::Serialize;

use crate::analysis::ShapeCount;
use crate::batch::BatchReport;
use crate::core::{InsertionPoint, Template, TemplateSet, UNMATCHED_SENTINEL};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Pretty-printed JSON
    Json,
    /// Human-readable tables
    Terminal,
    /// Tab-separated values, one row per line
    Plain,
}

impl FromStr for OutputFormat {
    type Err = String;

    /// Accepts exactly the spellings `--format` accepts, ignoring case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        <Self as ValueEnum>::from_str(s, true)
            .map_err(|_| format!("unknown output format '{}'", s))
    }
}

/// A learned template paired with the example it came from.
#[derive(Debug, Clone, Serialize)]
pub struct TemplateEntry<'a> {
    pub index: usize,
    pub example: &'a str,
    pub layout: String,
    pub target_length: usize,
    pub insertion_points: &'a [InsertionPoint],
}

impl<'a> TemplateEntry<'a> {
    pub fn collect(examples: &'a [String], templates: &'a TemplateSet) -> Vec<Self> {
        templates
            .iter()
            .zip(examples)
            .enumerate()
            .map(|(index, (template, example))| Self::new(index, example, template))
            .collect()
    }

    fn new(index: usize, example: &'a str, template: &'a Template) -> Self {
        Self {
            index,
            example,
            layout: template.layout(),
            target_length: template.target_length(),
            insertion_points: template.insertion_points(),
        }
    }
}

pub trait OutputWriter {
    fn write_report(&mut self, report: &BatchReport) -> anyhow::Result<()>;
    fn write_templates(&mut self, templates: &[TemplateEntry<'_>]) -> anyhow::Result<()>;
    fn write_shapes(&mut self, shapes: &[ShapeCount]) -> anyhow::Result<()>;
}

pub fn create_writer<'w>(format: OutputFormat, writer: Box<dyn Write + 'w>) -> Box<dyn OutputWriter + 'w> {
    match format {
        OutputFormat::Json => Box::new(JsonWriter::new(writer)),
        OutputFormat::Terminal => Box::new(TerminalWriter::new(writer)),
        OutputFormat::Plain => Box::new(PlainWriter::new(writer)),
    }
}

pub struct JsonWriter<W: Write> {
    writer: W,
}

impl<W: Write> JsonWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    fn write_json<T: Serialize + ?Sized>(&mut self, value: &T) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(value)?;
        self.writer.write_all(json.as_bytes())?;
        writeln!(self.writer)?;
        Ok(())
    }
}

impl<W: Write> OutputWriter for JsonWriter<W> {
    fn write_report(&mut self, report: &BatchReport) -> anyhow::Result<()> {
        self.write_json(report)
    }

    fn write_templates(&mut self, templates: &[TemplateEntry<'_>]) -> anyhow::Result<()> {
        self.write_json(templates)
    }

    fn write_shapes(&mut self, shapes: &[ShapeCount]) -> anyhow::Result<()> {
        self.write_json(shapes)
    }
}

/// Tab-separated output; segments are joined with `|`.
pub struct PlainWriter<W: Write> {
    writer: W,
}

impl<W: Write> PlainWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for PlainWriter<W> {
    fn write_report(&mut self, report: &BatchReport) -> anyhow::Result<()> {
        for record in &report.records {
            writeln!(
                self.writer,
                "{}\t{}\t{}",
                record.raw,
                record.normalized,
                record.segments.join("|")
            )?;
        }
        Ok(())
    }

    fn write_templates(&mut self, templates: &[TemplateEntry<'_>]) -> anyhow::Result<()> {
        for entry in templates {
            writeln!(
                self.writer,
                "{}\t{}\t{}\t{}",
                entry.index,
                entry.example,
                entry.layout,
                entry.target_length
            )?;
        }
        Ok(())
    }

    fn write_shapes(&mut self, shapes: &[ShapeCount]) -> anyhow::Result<()> {
        for shape in shapes {
            writeln!(self.writer, "{}\t{}\t{}", shape.pattern, shape.count, shape.sample)?;
        }
        Ok(())
    }
}

pub struct TerminalWriter<W: Write> {
    writer: W,
}

impl<W: Write> TerminalWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    fn print_table(&mut self, table: &Table) -> anyhow::Result<()> {
        writeln!(self.writer, "{table}")?;
        Ok(())
    }
}

fn format_points(points: &[InsertionPoint]) -> String {
    points
        .iter()
        .map(|p| format!("{}@{}", p.separator, p.position))
        .collect::<Vec<_>>()
        .join(" ")
}

impl<W: Write> OutputWriter for TerminalWriter<W> {
    fn write_report(&mut self, report: &BatchReport) -> anyhow::Result<()> {
        let mut table = Table::new();
        table
            .load_preset(UTF8_FULL)
            .set_header(vec!["Raw", "Normalized", "Segments", "Template"]);

        for record in &report.records {
            let normalized = if record.normalized == UNMATCHED_SENTINEL {
                Cell::new(&record.normalized).fg(Color::Red)
            } else {
                Cell::new(&record.normalized)
            };
            let template = record
                .template_index
                .map(|i| i.to_string())
                .unwrap_or_else(|| "-".to_string());
            table.add_row(vec![
                Cell::new(&record.raw),
                normalized,
                Cell::new(record.segments.join(" | ")),
                Cell::new(template),
            ]);
        }
        self.print_table(&table)?;

        let summary = &report.summary;
        writeln!(
            self.writer,
            "{} {} of {} identifiers normalized, {} unable to reformat",
            "Summary:".bold(),
            summary.matched.to_string().green(),
            summary.total,
            summary.unmatched.to_string().red()
        )?;
        for (index, count) in summary.per_template.iter().enumerate() {
            writeln!(self.writer, "  template {index}: {count}")?;
        }
        Ok(())
    }

    fn write_templates(&mut self, templates: &[TemplateEntry<'_>]) -> anyhow::Result<()> {
        let mut table = Table::new();
        table
            .load_preset(UTF8_FULL)
            .set_header(vec!["#", "Example", "Layout", "Length", "Insertion points"]);
        for entry in templates {
            table.add_row(vec![
                Cell::new(entry.index),
                Cell::new(entry.example),
                Cell::new(&entry.layout),
                Cell::new(entry.target_length),
                Cell::new(format_points(entry.insertion_points)),
            ]);
        }
        self.print_table(&table)
    }

    fn write_shapes(&mut self, shapes: &[ShapeCount]) -> anyhow::Result<()> {
        let mut table = Table::new();
        table
            .load_preset(UTF8_FULL)
            .set_header(vec!["Shape", "Count", "Sample"]);
        for shape in shapes {
            table.add_row(vec![
                Cell::new(&shape.pattern),
                Cell::new(shape.count),
                Cell::new(&shape.sample),
            ]);
        }
        self.print_table(&table)?;

        if let Some(dominant) = shapes.first() {
            writeln!(
                self.writer,
                "{} {} ({} identifiers)",
                "Dominant shape:".bold(),
                dominant.pattern.cyan(),
                dominant.count
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::batch::normalize_batch;
    use crate::config::ParallelConfig;

    fn report() -> BatchReport {
        let templates = TemplateSet::from_examples(["12-345.6789"]);
        normalize_batch(&["123456789", "1234"], &templates, &ParallelConfig::sequential())
    }

    #[test]
    fn test_output_format_from_str() {
        assert_eq!("json".parse::<OutputFormat>(), Ok(OutputFormat::Json));
        assert_eq!("Terminal".parse::<OutputFormat>(), Ok(OutputFormat::Terminal));
        assert!("csv".parse::<OutputFormat>().is_err());
    }

    #[test]
    fn test_output_format_parses_every_cli_value() {
        for variant in OutputFormat::value_variants() {
            let name = variant
                .to_possible_value()
                .map(|value| value.get_name().to_string())
                .unwrap();
            assert_eq!(name.parse::<OutputFormat>(), Ok(*variant));
        }
    }

    #[test]
    fn test_terminal_writer_shapes_names_dominant_shape() {
        colored::control::set_override(false);
        let shapes = crate::analysis::summarize_shapes(["12-345", "1234", "98-765"]);
        let mut buffer = Vec::new();
        TerminalWriter::new(&mut buffer).write_shapes(&shapes).unwrap();
        colored::control::unset_override();

        let output = String::from_utf8(buffer).unwrap();
        assert!(output.contains("Dominant shape: NN-NNN (2 identifiers)"));
    }

    #[test]
    fn test_plain_writer_report() {
        let mut buffer = Vec::new();
        PlainWriter::new(&mut buffer).write_report(&report()).unwrap();
        let output = String::from_utf8(buffer).unwrap();
        assert_eq!(
            output,
            "123456789\t12-345.6789\t12|345|6789\n1234\tUnable to reformat\t\n"
        );
    }

    #[test]
    fn test_json_writer_report() {
        let mut buffer = Vec::new();
        JsonWriter::new(&mut buffer).write_report(&report()).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&buffer).unwrap();
        assert_eq!(value["records"][0]["normalized"], "12-345.6789");
        assert_eq!(value["records"][1]["normalized"], "Unable to reformat");
        assert_eq!(value["records"][1]["template_index"], serde_json::Value::Null);
        assert_eq!(value["summary"]["matched"], 1);
    }

    #[test]
    fn test_terminal_writer_report_mentions_summary() {
        let mut buffer = Vec::new();
        TerminalWriter::new(&mut buffer).write_report(&report()).unwrap();
        let output = String::from_utf8(buffer).unwrap();
        assert!(output.contains("12-345.6789"));
        assert!(output.contains("Unable to reformat"));
        assert!(output.contains("identifiers normalized"));
    }

    #[test]
    fn test_template_entries_pair_examples() {
        let examples = vec!["12-345.6789".to_string(), "06F-04069O".to_string()];
        let templates = TemplateSet::from_examples(&examples);
        let entries = TemplateEntry::collect(&examples, &templates);

        assert_eq!(entries.len(), 2);
        assert_eq!(entries[1].example, "06F-04069O");
        assert_eq!(entries[1].layout, "###-######");
        assert_eq!(format_points(entries[0].insertion_points), "-@2 .@5");
    }
}
