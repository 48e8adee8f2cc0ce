use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;

use linescript::ast::{Script, printer};
use linescript::error::CompileError;
use linescript::interpreter::branch::BranchMode;
use linescript::interpreter::{Interpreter, Options};
use linescript::parser::Parser as ScriptParser;
use linescript::scanner;

#[derive(Parser, Debug)]
#[command(name = "linescript", about = "Run a line-oriented script")]
struct Cli {
    /// Script file to run
    file: PathBuf,

    /// Dump tokens and exit
    #[arg(long)]
    dump_tokens: bool,

    /// Dump parsed operations and exit
    #[arg(long)]
    dump_ops: bool,

    /// Operation dump format
    #[arg(long, default_value = "sexp", value_parser = ["sexp", "json"])]
    ops_format: String,

    /// How IF/ENDIF pairs are tracked
    #[arg(long, default_value = "nested", value_parser = ["nested", "flat"])]
    branches: String,

    /// Fail on non-integer operands and unrecognized comparison operators
    #[arg(long)]
    strict: bool,
}

/// Only I/O failure is fatal; invalid UTF-8 is replaced rather than rejected.
fn read_source(path: &Path) -> Result<String> {
    let bytes =
        std::fs::read(path).with_context(|| format!("read script file '{}'", path.display()))?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

fn parse_source(path: &Path, source: &str) -> Result<Script> {
    let tokens = scanner::scan(source);
    ScriptParser::new(tokens)
        .parse()
        .map_err(|e| report_compile_error(e, path, source))
}

fn report_compile_error(error: CompileError, path: &Path, source: &str) -> anyhow::Error {
    let error = error.with_source_code(path.display().to_string(), source);
    eprintln!("{:?}", miette::Report::new(error));
    anyhow::anyhow!("script '{}' is malformed", path.display())
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    let source = read_source(&cli.file)?;

    if cli.dump_tokens {
        for token in scanner::scan(&source) {
            println!("{token}");
        }
        return Ok(());
    }

    let script = parse_source(&cli.file, &source)?;

    if cli.dump_ops {
        match cli.ops_format.as_str() {
            "json" => {
                let json = printer::to_json(&script).context("serialize operations")?;
                println!("{json}");
            }
            _ => print!("{}", printer::to_sexp(&script)),
        }
        return Ok(());
    }

    let options = Options {
        branch_mode: cli
            .branches
            .parse::<BranchMode>()
            .with_context(|| format!("unknown branch mode '{}'", cli.branches))?,
        strict: cli.strict,
    };
    log::debug!("running '{}' with {options:?}", cli.file.display());

    let mut interpreter = Interpreter::with_options(options);
    interpreter.interpret(&script).map_err(|e| {
        eprintln!("{}", e.display_with_line(&source));
        anyhow::anyhow!("script '{}' failed", cli.file.display())
    })?;
    Ok(())
}
