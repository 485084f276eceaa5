use std::fs;
use std::io::Read;
use std::path::PathBuf;
use std::process;

use clap::Parser;

use wordexporter::config;
use wordexporter::{generate_curl_command, generate_update_curl_command, parse_content_text};

const DEFAULT_API_URL: &str = "http://localhost:3000/api/contents";

#[derive(Parser, Debug)]
#[command(
    name = "wordexporter",
    about = "Parse structured text from Word documents into content records"
)]
struct Cli {
    /// Input file containing structured text (if not provided, read from stdin)
    #[arg(short = 'i', long)]
    input_file: Option<PathBuf>,

    /// Output file for the result (if not provided, print to stdout)
    #[arg(short = 'o', long)]
    output_file: Option<PathBuf>,

    /// Generate a curl command for the content API
    #[arg(short = 'c', long)]
    curl: bool,

    /// API base URL (overrides the config file)
    #[arg(short = 'a', long)]
    api_url: Option<String>,

    /// ID of an existing record: generate a PUT update command instead of a create
    #[arg(short = 'u', long)]
    update_id: Option<String>,

    /// Pretty-print the JSON output
    #[arg(short = 'p', long)]
    pretty: bool,

    /// Config file holding the default API URL
    #[arg(long, default_value = "config.toml")]
    config: String,
}

fn read_input(cli: &Cli) -> Result<String, String> {
    match &cli.input_file {
        Some(path) => fs::read_to_string(path)
            .map_err(|e| format!("Error reading input file {}: {}", path.display(), e)),
        None => {
            eprintln!("Enter your structured text (Ctrl+D to finish):");
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .map_err(|e| format!("Error reading stdin: {}", e))?;
            Ok(text)
        }
    }
}

fn resolve_api_url(cli: &Cli) -> String {
    if let Some(url) = &cli.api_url {
        return url.clone();
    }
    match config::load_config_from_file(&cli.config) {
        Ok(loaded_config) => loaded_config.api_url,
        Err(err_msg) => {
            eprintln!("{}", err_msg);
            eprintln!("Using default API URL: {}", DEFAULT_API_URL);
            DEFAULT_API_URL.to_string()
        }
    }
}

fn run(cli: &Cli) -> Result<(), String> {
    let text = read_input(cli)?;
    let record = parse_content_text(&text);

    if record.title.is_empty() {
        eprintln!("Warning: no title found in the parsed text.");
    }

    let json_output = if cli.pretty {
        serde_json::to_string_pretty(&record)
    } else {
        serde_json::to_string(&record)
    }
    .map_err(|e| format!("Failed to serialize record: {}", e))?;

    let curl_command = if cli.curl || cli.update_id.is_some() {
        let api_url = resolve_api_url(cli);
        let command = match &cli.update_id {
            Some(content_id) => generate_update_curl_command(&record, &api_url, content_id)?,
            None => generate_curl_command(&record, &api_url)?,
        };
        Some(command)
    } else {
        None
    };

    match &cli.output_file {
        Some(path) => {
            let mut contents = json_output;
            if let Some(command) = &curl_command {
                contents.push_str("\n\n# curl command:\n");
                contents.push_str(command);
            }
            fs::write(path, contents)
                .map_err(|e| format!("Error writing output file {}: {}", path.display(), e))?;
            eprintln!("Saved output to {}", path.display());
        }
        None => {
            println!("{}", json_output);
            if let Some(command) = &curl_command {
                println!("\n# curl command:");
                println!("{}", command);
            }
        }
    }
    Ok(())
}

fn main() {
    let cli = Cli::parse();
    if let Err(err_msg) = run(&cli) {
        eprintln!("{}", err_msg);
        process::exit(1);
    }
}
