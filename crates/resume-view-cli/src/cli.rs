//! Headless CLI mode for scripting

use resume_view_core::{
    build_view, Config, DisplayBlock, DisplayPreferences, FetchState, ResumeClient,
};

/// Parsed CLI command
#[derive(Debug, PartialEq, Eq)]
pub enum Command {
    Fetch { name: Option<String>, json: bool },
}

pub fn print_help() {
    println!("resume-view --cli - headless mode");
    println!();
    println!("USAGE:");
    println!("    resume-view --cli fetch [--name <NAME>] [--json]");
    println!();
    println!("COMMANDS:");
    println!("    fetch           Fetch one resume and print it");
    println!();
    println!("OPTIONS:");
    println!("    --name <NAME>   Name to request (default: configured name)");
    println!("    --json          Print the raw payload as pretty JSON");
}

pub fn parse_args(args: &[String]) -> Result<Command, String> {
    match args[0].as_str() {
        "fetch" => {
            let mut name = None;
            let mut json = false;
            let mut i = 1;
            while i < args.len() {
                match args[i].as_str() {
                    "--name" => {
                        i += 1;
                        name = Some(
                            args.get(i)
                                .cloned()
                                .ok_or_else(|| "--name requires a value".to_string())?,
                        );
                    }
                    "--json" => json = true,
                    other => return Err(format!("unknown option: {}", other)),
                }
                i += 1;
            }
            Ok(Command::Fetch { name, json })
        }
        other => Err(format!("unknown command: {}", other)),
    }
}

pub fn run(command: Command) -> anyhow::Result<()> {
    match command {
        Command::Fetch { name, json } => run_fetch(name, json),
    }
}

fn run_fetch(name: Option<String>, json: bool) -> anyhow::Result<()> {
    let config = Config::load();
    let name = name.unwrap_or(config.default_name);
    let client = ResumeClient::new(config.endpoint);

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    let resume = runtime.block_on(client.fetch_resume(&name))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&resume)?);
        return Ok(());
    }

    let tree = build_view(&DisplayPreferences::default(), &FetchState::Loaded(resume));
    for line in render_plain(&tree.blocks) {
        println!("{}", line);
    }
    Ok(())
}

/// Flatten display blocks to plain text lines
fn render_plain(blocks: &[DisplayBlock]) -> Vec<String> {
    let mut lines = Vec::new();
    for block in blocks {
        match block {
            DisplayBlock::Indicator => {}
            DisplayBlock::Heading { text, .. } => lines.push(text.clone()),
            DisplayBlock::Labeled { label, value, .. } => {
                lines.push(format!("{}: {}", label, value));
            }
            DisplayBlock::Paragraph { text, .. } => lines.push(text.clone()),
            DisplayBlock::Bullet { text, .. } => lines.push(format!("\u{2022} {}", text)),
            DisplayBlock::Group(inner) => {
                lines.extend(render_plain(inner));
                lines.push(String::new());
            }
            DisplayBlock::Spacer => lines.push(String::new()),
        }
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use resume_view_core::Resume;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse_fetch_defaults() {
        let command = parse_args(&args(&["fetch"])).unwrap();
        assert_eq!(
            command,
            Command::Fetch {
                name: None,
                json: false
            }
        );
    }

    #[test]
    fn test_parse_fetch_with_options() {
        let command = parse_args(&args(&["fetch", "--name", "alice", "--json"])).unwrap();
        assert_eq!(
            command,
            Command::Fetch {
                name: Some("alice".to_string()),
                json: true
            }
        );
    }

    #[test]
    fn test_parse_rejects_dangling_name() {
        assert!(parse_args(&args(&["fetch", "--name"])).is_err());
    }

    #[test]
    fn test_parse_rejects_unknown_command() {
        assert!(parse_args(&args(&["frobnicate"])).is_err());
    }

    #[test]
    fn test_render_plain_output() {
        let resume = Resume {
            name: "Alice".to_string(),
            email: "a@x.com".to_string(),
            phone: "1".to_string(),
            address: "2".to_string(),
            twitter: "3".to_string(),
            summary: "Engineer.".to_string(),
            skills: vec!["Go".to_string()],
            projects: vec![],
        };
        let tree = build_view(&DisplayPreferences::default(), &FetchState::Loaded(resume));
        let lines = render_plain(&tree.blocks);

        assert_eq!(lines[0], "Alice");
        assert_eq!(lines[1], "Email: a@x.com");
        assert!(lines.contains(&"\u{2022} Go".to_string()));
    }
}
