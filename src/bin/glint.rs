//! Command-line interface for glint
//!
//! This binary highlights code strings and files into the formats the
//! library supports.
//!
//! Usage:
//!   glint html `<code>` [--class-prefix `<prefix>`] [--grammar `<name>`]
//!   glint terminal `<path>` [--theme `<name-or-file>`] [--grammar `<name>`]
//!   glint tokens `<code>` [--format `<text|json>`] [--grammar `<name>`]
//!   glint markdown `<path>`

use clap::{Arg, ArgMatches, Command};

use glint::output::EventOutputFormat;
use glint::{
    Grammar, HtmlOutputFormat, JavaScriptGrammar, MarkdownDecorator, SwiftGrammar,
    SyntaxHighlighter, TerminalOutputFormat, Theme, TokenDumpOutputFormat,
};

fn main() {
    let matches = Command::new("glint")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A tool for highlighting source code into HTML, terminal or token output")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("html")
                .about("Highlight a code string as HTML")
                .arg(
                    Arg::new("code")
                        .help("The code to highlight")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("class-prefix")
                        .long("class-prefix")
                        .help("Prefix for the generated CSS class names")
                        .default_value(""),
                )
                .arg(grammar_arg()),
        )
        .subcommand(
            Command::new("terminal")
                .about("Highlight a source file with terminal escape codes")
                .arg(
                    Arg::new("path")
                        .help("Path to the source file")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("theme")
                        .long("theme")
                        .short('t')
                        .help("Built-in theme name or path to a YAML theme file")
                        .default_value("midnight"),
                )
                .arg(grammar_arg()),
        )
        .subcommand(
            Command::new("tokens")
                .about("Print the classified token stream for a code string")
                .arg(
                    Arg::new("code")
                        .help("The code to tokenize")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("format")
                        .long("format")
                        .short('f')
                        .help("Output format: 'text' or 'json'")
                        .default_value("text"),
                )
                .arg(grammar_arg()),
        )
        .subcommand(
            Command::new("markdown")
                .about("Replace fenced code blocks in a Markdown file with highlighted HTML")
                .arg(
                    Arg::new("path")
                        .help("Path to the Markdown file")
                        .required(true)
                        .index(1),
                ),
        )
        .get_matches();

    match matches.subcommand() {
        Some(("html", sub_matches)) => handle_html_command(sub_matches),
        Some(("terminal", sub_matches)) => handle_terminal_command(sub_matches),
        Some(("tokens", sub_matches)) => handle_tokens_command(sub_matches),
        Some(("markdown", sub_matches)) => handle_markdown_command(sub_matches),
        _ => unreachable!("a subcommand is required"),
    }
}

fn grammar_arg() -> Arg {
    Arg::new("grammar")
        .long("grammar")
        .short('g')
        .help("Language grammar: 'swift' or 'javascript'")
        .default_value("swift")
}

/// Resolve the grammar flag, exiting with an error for unknown names.
fn resolve_grammar(matches: &ArgMatches) -> Box<dyn Grammar> {
    let name = matches
        .get_one::<String>("grammar")
        .map(String::as_str)
        .unwrap_or("swift");

    match name {
        "swift" => Box::new(SwiftGrammar::new()),
        "javascript" | "js" => Box::new(JavaScriptGrammar::new()),
        other => {
            eprintln!("Unknown grammar: {other}");
            eprintln!("Available grammars: swift, javascript");
            std::process::exit(1);
        }
    }
}

fn read_file_or_exit(path: &str) -> String {
    std::fs::read_to_string(path).unwrap_or_else(|error| {
        eprintln!("Failed to read '{path}': {error}");
        std::process::exit(1);
    })
}

fn handle_html_command(matches: &ArgMatches) {
    let code = matches.get_one::<String>("code").expect("code is required");
    let prefix = matches
        .get_one::<String>("class-prefix")
        .map(String::as_str)
        .unwrap_or("");

    let format = HtmlOutputFormat::with_class_prefix(prefix);
    let highlighter = SyntaxHighlighter::with_boxed_grammar(format, resolve_grammar(matches));
    println!("{}", highlighter.highlight(code));
}

fn handle_terminal_command(matches: &ArgMatches) {
    let path = matches.get_one::<String>("path").expect("path is required");
    let theme_name = matches
        .get_one::<String>("theme")
        .map(String::as_str)
        .unwrap_or("midnight");

    let theme = Theme::resolve(theme_name).unwrap_or_else(|error| {
        eprintln!("{error}");
        eprintln!("Available themes: {}", Theme::builtin_names().join(", "));
        std::process::exit(1);
    });

    let code = read_file_or_exit(path);
    let highlighter =
        SyntaxHighlighter::with_boxed_grammar(TerminalOutputFormat::new(theme), resolve_grammar(matches));
    println!("{}", highlighter.highlight(&code));
}

fn handle_tokens_command(matches: &ArgMatches) {
    let code = matches.get_one::<String>("code").expect("code is required");
    let format = matches
        .get_one::<String>("format")
        .map(String::as_str)
        .unwrap_or("text");

    match format {
        "text" => {
            let highlighter =
                SyntaxHighlighter::with_boxed_grammar(TokenDumpOutputFormat, resolve_grammar(matches));
            println!("{}", highlighter.highlight(code));
        }
        "json" => {
            let highlighter =
                SyntaxHighlighter::with_boxed_grammar(EventOutputFormat, resolve_grammar(matches));
            let events = highlighter.highlight(code);
            let json = serde_json::to_string_pretty(&events).unwrap_or_else(|error| {
                eprintln!("Failed to serialize events: {error}");
                std::process::exit(1);
            });
            println!("{json}");
        }
        other => {
            eprintln!("Unknown format: {other} (expected 'text' or 'json')");
            std::process::exit(1);
        }
    }
}

fn handle_markdown_command(matches: &ArgMatches) {
    let path = matches.get_one::<String>("path").expect("path is required");
    let markdown = read_file_or_exit(path);

    let decorator = MarkdownDecorator::new();
    println!("{}", decorator.decorate(&markdown));
}
