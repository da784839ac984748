mod highlighter;
mod lexer;

use clap::{Parser, builder::RangedU64ValueParser};
use lispy::{
    Engine, EngineOptions, ExecutionOptions, ParseOptions, parser::MAX_NESTING_LIMIT, read,
    render_error,
};
use miette::{IntoDiagnostic, Result};
use reedline::{
    DefaultPrompt, DefaultPromptSegment, EditCommand, Emacs, FileBackedHistory, KeyCode,
    KeyModifiers, Keybindings, Reedline, ReedlineEvent, Signal, default_emacs_keybindings,
};
use std::io::BufRead;
use std::io::BufReader;
use std::path::PathBuf;
use tracing::{debug, warn};

const HISTORY_CAPACITY: usize = 1000;

/// Lispy - a prefix arithmetic calculator written as S-expressions
#[derive(Parser, Debug)]
#[command(name = "lispy", version)]
#[command(about = "Evaluate S-expression arithmetic", long_about = None)]
struct Args {
    /// Print the parse tree (for debugging)
    #[arg(long)]
    debug_parse: bool,

    /// Print the value read from the parse tree, before evaluation
    #[arg(long)]
    debug_read: bool,

    /// Maximum parenthesis nesting accepted on one line
    #[arg(long, value_parser = RangedU64ValueParser::<usize>::new().range(1..=MAX_NESTING_LIMIT as u64))]
    max_depth: Option<usize>,

    /// Maximum evaluation depth
    #[arg(long)]
    max_eval_depth: Option<usize>,

    /// Do not read or write the history file
    #[arg(long)]
    no_history: bool,

    /// Expression to evaluate (if not provided, reads from stdin)
    expression: Option<String>,
}

impl Args {
    fn engine_options(&self) -> EngineOptions {
        let mut options = EngineOptions::default();
        if let Some(max_depth) = self.max_depth {
            options.default_parse_options = ParseOptions { max_depth };
        }
        if let Some(max_depth) = self.max_eval_depth {
            options.default_execution_options = ExecutionOptions { max_depth };
        }
        options
    }
}

fn add_keybindings(keybindings: &mut Keybindings) {
    keybindings.add_binding(
        KeyModifiers::ALT,
        KeyCode::Enter,
        ReedlineEvent::Edit(vec![EditCommand::InsertNewline]),
    );
}

fn history_path() -> Option<PathBuf> {
    let dir = dirs::data_dir()?.join("lispy");
    if let Err(e) = std::fs::create_dir_all(&dir) {
        warn!("cannot create history directory {}: {}", dir.display(), e);
        return None;
    }
    Some(dir.join("history.txt"))
}

fn load_history() -> Option<FileBackedHistory> {
    let path = history_path()?;
    match FileBackedHistory::with_file(HISTORY_CAPACITY, path.clone()) {
        Ok(history) => {
            debug!("using history file {}", path.display());
            Some(history)
        }
        Err(e) => {
            warn!("cannot open history file {}: {}", path.display(), e);
            None
        }
    }
}

fn setup_reedline(use_history: bool) -> (Reedline, DefaultPrompt) {
    let mut keybindings = default_emacs_keybindings();
    add_keybindings(&mut keybindings);

    let edit_mode = Box::new(Emacs::new(keybindings));

    let mut line_editor = Reedline::create()
        .with_highlighter(Box::new(highlighter::Highlighter))
        .with_validator(Box::new(highlighter::ParenValidator))
        .with_edit_mode(edit_mode);

    if use_history {
        if let Some(history) = load_history() {
            line_editor = line_editor.with_history(Box::new(history));
        }
    }

    let prompt = DefaultPrompt::new(
        DefaultPromptSegment::Basic("lispy".to_string()),
        DefaultPromptSegment::Empty,
    );

    (line_editor, prompt)
}

fn interpret_input(engine: &Engine, input: &str, debug_parse: bool, debug_read: bool) {
    if input.trim().is_empty() {
        return;
    }

    // Parse
    let tree = match engine.parse(input) {
        Ok(tree) => tree,
        Err(e) => {
            render_error(&e);
            return;
        }
    };

    if debug_parse {
        println!("=== Parse Tree ===");
        print!("{}", tree);
        println!();
    }

    // Read
    let value = read(&tree);

    if debug_read {
        println!("=== Read Value ===");
        println!("{}", value);
        println!();
    }

    // Evaluate
    let result = engine.evaluate(value);
    println!("{}", result);
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging subscriber
    use tracing_subscriber::{EnvFilter, fmt};

    // Use LISPY_LOG or RUST_LOG environment variable to control log level
    // Default to WARN if not set
    let filter = EnvFilter::try_from_env("LISPY_LOG")
        .or_else(|_| EnvFilter::try_from_default_env())
        .or_else(|_| EnvFilter::try_new("warn"))
        .into_diagnostic()?;

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let engine = Engine::new(args.engine_options());

    // Check if we have a direct expression argument
    if let Some(expr) = &args.expression {
        interpret_input(&engine, expr, args.debug_parse, args.debug_read);
        return Ok(());
    }

    // Otherwise, check if we're in interactive or pipe mode
    let is_interactive = atty::is(atty::Stream::Stdin);

    if is_interactive {
        // Interactive REPL mode
        let (mut line_editor, prompt) = setup_reedline(!args.no_history);

        println!("Lispy Version {}", env!("CARGO_PKG_VERSION"));
        println!("Press Ctrl+C or Ctrl+D to Exit\n");

        loop {
            let sig = match line_editor.read_line(&prompt) {
                Ok(s) => s,
                Err(e) => {
                    eprintln!("Reedline error: {e}");
                    return Ok(());
                }
            };

            match sig {
                Signal::Success(buffer) => {
                    interpret_input(&engine, &buffer, args.debug_parse, args.debug_read);
                }
                Signal::CtrlD | Signal::CtrlC => {
                    println!("\nGoodbye!");
                    return Ok(());
                }
            }
        }
    } else {
        // Pipe/stdin mode
        let stdin = std::io::stdin();
        let reader = BufReader::new(stdin.lock());

        for line in reader.lines() {
            let line = match line {
                Ok(l) => l,
                Err(e) => {
                    eprintln!("Error reading line from stdin: {}", e);
                    return Ok(());
                }
            };

            interpret_input(&engine, &line, args.debug_parse, args.debug_read);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_map_onto_engine_options() {
        let args = Args::parse_from(["lispy", "--max-depth", "8", "--max-eval-depth", "20"]);
        let options = args.engine_options();
        assert_eq!(options.default_parse_options.max_depth, 8);
        assert_eq!(options.default_execution_options.max_depth, 20);
    }

    #[test]
    fn test_max_depth_above_nesting_limit_is_rejected() {
        let too_deep = (MAX_NESTING_LIMIT + 1).to_string();
        assert!(Args::try_parse_from(["lispy", "--max-depth", &too_deep]).is_err());
        assert!(Args::try_parse_from(["lispy", "--max-depth", "0"]).is_err());

        let at_limit = MAX_NESTING_LIMIT.to_string();
        let args = Args::parse_from(["lispy", "--max-depth", &at_limit]);
        assert_eq!(args.engine_options().default_parse_options.max_depth, MAX_NESTING_LIMIT);
    }

    #[test]
    fn test_default_args_keep_engine_defaults() {
        let args = Args::parse_from(["lispy", "(+ 1 2)"]);
        let options = args.engine_options();
        let defaults = EngineOptions::default();
        assert_eq!(
            options.default_parse_options.max_depth,
            defaults.default_parse_options.max_depth
        );
        assert_eq!(
            options.default_execution_options.max_depth,
            defaults.default_execution_options.max_depth
        );
        assert_eq!(args.expression.as_deref(), Some("(+ 1 2)"));
    }
}
