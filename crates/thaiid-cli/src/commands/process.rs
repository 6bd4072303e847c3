//! Process command - extract fields from a single OCR output file.

use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::time::Instant;

use clap::Args;
use console::style;
use tracing::{debug, info};

use thaiid_core::{
    CardParser, ExtractionResponse, ExtractionResult, FieldName, IdCardParser, RecognizedText,
    ThaiIdConfig,
};

use super::config::load_config;

/// Arguments for the process command.
#[derive(Args)]
pub struct ProcessArgs {
    /// Input file with OCR output (JSON or one fragment per line), or "-" for stdin
    #[arg(required = true)]
    input: PathBuf,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,

    /// How to read the input
    #[arg(long, value_enum, default_value = "auto")]
    input_format: InputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pretty: bool,

    /// Report validation issues for the extracted record
    #[arg(long)]
    validate: bool,

    /// Show which rule produced each field
    #[arg(long)]
    show_matches: bool,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output
    Json,
    /// CSV output
    Csv,
    /// Plain text summary
    Text,
}

impl OutputFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Json => "json",
            OutputFormat::Csv => "csv",
            OutputFormat::Text => "txt",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum InputFormat {
    /// Decide from the file extension and content
    Auto,
    /// JSON OCR output
    Json,
    /// One fragment per line
    Lines,
}

pub async fn run(args: ProcessArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();
    let config = load_config(config_path)?;

    let content = read_input(&args.input)?;
    info!("Processing input: {}", args.input.display());

    let text = parse_input(&content, &args.input, args.input_format, &config)?;
    debug!("Read {} fragments", text.len());

    let parser = IdCardParser::with_config(config.extraction.clone());
    let result = parser.parse(&text);

    if args.validate || config.output.validate {
        let issues = result.record.validate(chrono::Local::now().date_naive());
        if !issues.is_empty() {
            eprintln!("{}", style("Validation issues:").yellow());
            for issue in &issues {
                eprintln!("  - {}", issue);
            }
        }
    }

    if args.show_matches {
        print_matches(&result);
    }

    let output = format_response(
        &result.response(),
        args.format,
        args.pretty || config.output.pretty,
    )?;

    if let Some(output_path) = &args.output {
        fs::write(output_path, &output)?;
        eprintln!(
            "{} Output written to {}",
            style("✓").green(),
            output_path.display()
        );
    } else {
        println!("{}", output);
    }

    debug!("Total processing time: {:?}", start.elapsed());

    Ok(())
}

fn read_input(path: &Path) -> anyhow::Result<String> {
    if path.as_os_str() == "-" {
        let mut content = String::new();
        std::io::stdin().read_to_string(&mut content)?;
        return Ok(content);
    }

    if !path.exists() {
        anyhow::bail!("Input file not found: {}", path.display());
    }

    Ok(fs::read_to_string(path)?)
}

/// Turn file content into recognized text.
pub fn parse_input(
    content: &str,
    path: &Path,
    format: InputFormat,
    config: &ThaiIdConfig,
) -> anyhow::Result<RecognizedText> {
    let is_json = match format {
        InputFormat::Json => true,
        InputFormat::Lines => false,
        InputFormat::Auto => {
            let extension = path
                .extension()
                .and_then(|e| e.to_str())
                .unwrap_or("")
                .to_lowercase();
            extension == "json" || content.trim_start().starts_with(['[', '{'])
        }
    };

    if is_json {
        Ok(RecognizedText::from_json(content, &config.input)?)
    } else {
        Ok(RecognizedText::from_lines(content))
    }
}

fn print_matches(result: &ExtractionResult) {
    eprintln!("{}", style("Matches:").blue());
    for m in &result.matches {
        let marker = if m.fallback { " (fallback)" } else { "" };
        eprintln!(
            "  {}{} at {}..{}: {:?}",
            m.rule, marker, m.position.0, m.position.1, m.source
        );
    }
    if !result.missing_fields.is_empty() {
        let missing: Vec<&str> = result.missing_fields.iter().map(|f| f.as_str()).collect();
        eprintln!("  missing: {}", missing.join(", "));
    }
}

pub fn format_response(
    response: &ExtractionResponse,
    format: OutputFormat,
    pretty: bool,
) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json if pretty => Ok(serde_json::to_string_pretty(response)?),
        OutputFormat::Json => Ok(serde_json::to_string(response)?),
        OutputFormat::Csv => format_csv(response),
        OutputFormat::Text => Ok(format_text(response)),
    }
}

fn format_csv(response: &ExtractionResponse) -> anyhow::Result<String> {
    let mut wtr = csv::Writer::from_writer(vec![]);

    let mut header: Vec<&str> = FieldName::ALL.iter().map(|f| f.as_str()).collect();
    header.push("full_text");
    wtr.write_record(&header)?;

    let mut row: Vec<&str> = response
        .fields
        .fields()
        .map(|(_, v)| v.unwrap_or(""))
        .collect();
    row.push(&response.full_text);
    wtr.write_record(&row)?;

    let data = String::from_utf8(wtr.into_inner()?)?;
    Ok(data)
}

fn format_text(response: &ExtractionResponse) -> String {
    let record = &response.fields;
    let mut output = String::new();

    output.push_str(&format!(
        "Citizen ID: {}\n",
        record.citizen_id.as_deref().unwrap_or("-")
    ));
    output.push_str("\n");

    output.push_str("Name:\n");
    output.push_str(&format!(
        "  TH: {} {} {}\n",
        record.prefix.as_deref().unwrap_or("-"),
        record.name_th.as_deref().unwrap_or("-"),
        record.lastname_th.as_deref().unwrap_or("-")
    ));
    output.push_str(&format!(
        "  EN: {} {}\n",
        record.name_en.as_deref().unwrap_or("-"),
        record.lastname_en.as_deref().unwrap_or("-")
    ));
    output.push_str(&format!(
        "Date of birth: {}\n",
        record.dob.as_deref().unwrap_or("-")
    ));
    output.push_str(&format!(
        "Religion: {}\n",
        record.religion.as_deref().unwrap_or("-")
    ));
    output.push_str("\n");

    output.push_str("Address:\n");
    for field in [
        FieldName::Address,
        FieldName::Village,
        FieldName::Subdistrict,
        FieldName::District,
        FieldName::Province,
    ] {
        output.push_str(&format!(
            "  {}: {}\n",
            field,
            record.get(field).unwrap_or("-")
        ));
    }
    output.push_str("\n");

    output.push_str(&format!(
        "Issued: {}\n",
        record.issued_date.as_deref().unwrap_or("-")
    ));
    output.push_str(&format!(
        "Expires: {}\n",
        record.expired_date.as_deref().unwrap_or("-")
    ));

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use thaiid_core::extract_fields;

    #[test]
    fn test_parse_input_auto_detects_json() {
        let config = ThaiIdConfig::default();
        let text =
            parse_input(r#"["a", "b"]"#, Path::new("card.txt"), InputFormat::Auto, &config)
                .unwrap();
        assert_eq!(text.full_text(), "a b");

        let text =
            parse_input("[a]\nb", Path::new("card.txt"), InputFormat::Lines, &config).unwrap();
        assert_eq!(text.full_text(), "[a] b");
    }

    #[test]
    fn test_format_csv() {
        let response = extract_fields(&["นาย สมชาย ใจดี"]);
        let csv = format_response(&response, OutputFormat::Csv, false).unwrap();
        let mut lines = csv.lines();

        assert!(lines.next().unwrap().starts_with("citizen_id,prefix,name_th"));
        assert!(lines.next().unwrap().starts_with(",นาย,สมชาย,ใจดี,"));
    }

    #[test]
    fn test_format_text() {
        let response = extract_fields(&["1 2345 67890 12 3"]);
        let text = format_response(&response, OutputFormat::Text, false).unwrap();
        assert!(text.starts_with("Citizen ID: 1234567890123\n"));
        assert!(text.contains("  province: -\n"));
    }
}
