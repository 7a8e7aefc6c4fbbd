use clap::{CommandFactory, Parser};
use miniyaml::Node;
use std::path::Path;

#[derive(Debug, Parser)]
#[command(name = "miniyaml")]
#[command(about = "Auto-convert between JSON and block-style YAML settings", long_about = None)]
#[command(after_help = "\x1b[1;4mExamples:\x1b[0m
  Convert a JSON settings file to YAML:
    \x1b[1mminiyaml\x1b[0m settings.json

  Convert a YAML settings file to JSON:
    \x1b[1mminiyaml\x1b[0m config.yml

  Convert a raw JSON string to YAML:
    \x1b[1mminiyaml\x1b[0m '{\"retries\":\"3\"}'

  Convert a raw YAML string to JSON:
    \x1b[1mminiyaml\x1b[0m 'retries: \"3\"'")]
struct Cli {
    #[arg(help = "Input source: file path or raw JSON/YAML string")]
    input: String,
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = process(&cli.input) {
        eprintln!("Error: {}\n", e);
        Cli::command().print_help().unwrap();
        std::process::exit(1);
    }
}

fn get_input_content(source: &str) -> Result<String, Box<dyn std::error::Error>> {
    if Path::new(source).exists() {
        let content = std::fs::read_to_string(source)?;
        Ok(content)
    } else {
        Ok(source.to_string())
    }
}

fn process(input: &str) -> Result<(), Box<dyn std::error::Error>> {
    let content = get_input_content(input)?;

    match serde_json::from_str::<Node>(&content) {
        Ok(node) => {
            let yaml = miniyaml::dump(&node)?;
            print!("{}", yaml);
        }
        Err(json_err) => match miniyaml::load(&content) {
            Ok(map) => {
                let json = serde_json::to_string_pretty(&Node::Mapping(map))?;
                print!("{}", json);
            }
            Err(yaml_err) => {
                return Err(format!(
                    "Input is neither valid JSON nor a readable YAML settings document\nJSON error: {}\nYAML error: {}",
                    json_err, yaml_err
                )
                .into());
            }
        },
    }

    Ok(())
}
