use scrap::prelude::v1::*;
use std::env;
use std::fs::File;
use std::io::{self, BufRead, BufReader};

use wlgen_codegen::PassErr;
use wlgen_parser::TraceErr;

/// The input path standing in for stdin.
const STDIN_PATH: &str = "-";

type RuntimeResult<T> = Result<T, RuntimeError>;

/// Represents an error that can return an exit code.
trait ErrorWithExitCode {
    /// Returns an exit status for a given error;
    fn exit_code(&self) -> i32;
}

#[derive(Debug, PartialEq, thiserror::Error)]
enum RuntimeError {
    #[error("can't open the specified input file: {0}")]
    FileUnreadable(String),
    #[error(transparent)]
    Trace(#[from] TraceErr),
    #[error(transparent)]
    Translation(#[from] PassErr),
    #[error("{0}")]
    Undefined(String),
}

impl ErrorWithExitCode for RuntimeError {
    fn exit_code(&self) -> i32 {
        match self {
            Self::FileUnreadable(_) | Self::Trace(_) | Self::Translation(_) => 1,
            Self::Undefined(_) => 127,
        }
    }
}

fn open_input(path: &str) -> RuntimeResult<Box<dyn BufRead>> {
    if path == STDIN_PATH {
        return Ok(Box::new(io::stdin().lock()));
    }

    File::open(path)
        .map(|f| Box::new(BufReader::new(f)) as Box<dyn BufRead>)
        .map_err(|e| RuntimeError::FileUnreadable(format!("{}: {}", path, e)))
}

fn init_logging(level: &str) -> RuntimeResult<()> {
    let level = level
        .parse::<tracing::Level>()
        .map_err(|_| RuntimeError::Undefined(format!("unknown log level: {}", level)))?;

    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_max_level(level)
        .try_init()
        .map_err(|e| RuntimeError::Undefined(e.to_string()))
}

/// Runs every pass over a derivation trace, returning the full instruction
/// listing. Nothing is returned unless all passes succeed.
fn compile<R: BufRead>(input: R) -> RuntimeResult<String> {
    use wlgen_codegen::machine::arch::mips::Mips;
    use wlgen_codegen::{CompilationStage, SymbolCollector};
    use wlgen_parser::{build_parse_tree, DerivationReader};

    let mut reader = DerivationReader::new(input);
    let tree = build_parse_tree(&mut reader)?;
    tracing::info!(lines = reader.lines_consumed(), "replayed derivation trace");

    let symbols = SymbolCollector.apply(&tree)?;
    let insts = Mips.apply((&tree, &symbols))?;

    Ok(insts.concat())
}

/// Flags that consume the following argument as their value.
const VALUED_FLAGS: &[&str] = &["-i", "--in-file", "-l", "--log-level"];

/// Rewrites a positional path, wherever it appears, into the equivalent
/// `--in-file` flag. A bare `-` is a path naming stdin.
fn normalize_args(raw_args: Vec<String>) -> Vec<String> {
    let mut args = raw_args.into_iter();
    let mut normalized: Vec<String> = args.next().into_iter().collect();

    while let Some(arg) = args.next() {
        if VALUED_FLAGS.contains(&arg.as_str()) {
            normalized.push(arg);
            normalized.extend(args.next());
        } else if arg == STDIN_PATH || !arg.starts_with('-') {
            normalized.push("-i".to_string());
            normalized.push(arg);
        } else {
            normalized.push(arg);
        }
    }

    normalized
}

fn main() {
    let raw_args = normalize_args(env::args().collect());
    let args = raw_args.iter().map(|a| a.as_str()).collect::<Vec<&str>>();

    let cmd = scrap::Cmd::new("wlgen")
        .description("Generates MIPS assembly from a WL derivation trace.")
        .version("0.1.0")
        .with_flag(
            scrap::Flag::expect_string(
                "in-file",
                "i",
                "an input path for a derivation trace, - reads stdin.",
            )
            .optional()
            .with_default(STDIN_PATH.to_string()),
        )
        .with_flag(
            scrap::Flag::expect_string(
                "log-level",
                "l",
                "the most verbose level of diagnostics written to stderr.",
            )
            .optional()
            .with_default("warn".to_string()),
        )
        .with_handler(|(inf, level)| {
            init_logging(&level)
                .and_then(|_| open_input(&inf))
                .and_then(|input| compile(input))
                .map(|asm| print!("{}", asm))
        });

    let help_string = cmd.help();
    let eval_res = cmd
        .evaluate(&args[..])
        .map_err(|e| RuntimeError::Undefined(e.to_string()))
        .and_then(|flags| cmd.dispatch(flags));

    match eval_res {
        Ok(_) => (),
        Err(e @ RuntimeError::Undefined(_)) => {
            eprintln!("ERROR: {}\n{}", e, &help_string);
            std::process::exit(e.exit_code())
        }
        Err(e) => {
            eprintln!("ERROR: {}", e);
            std::process::exit(e.exit_code())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RETURN_FIRST_PARAM: &str = include_str!("../tests/fixtures/return_first_param.wli");
    const RETURN_SECOND_PARAM: &str = include_str!("../tests/fixtures/return_second_param.wli");
    const TRUNCATED: &str = include_str!("../tests/fixtures/truncated.wli");
    const THREE_PARAMS: &str = include_str!("../tests/fixtures/three_params.wli");

    #[test]
    fn should_compile_a_trace_returning_the_first_parameter() {
        assert_eq!(
            Ok("add $3,$0,$1\njr $31\n".to_string()),
            compile(RETURN_FIRST_PARAM.as_bytes())
        );
    }

    #[test]
    fn should_compile_a_trace_returning_the_second_parameter() {
        assert_eq!(
            Ok("add $3,$0,$2\njr $31\n".to_string()),
            compile(RETURN_SECOND_PARAM.as_bytes())
        );
    }

    #[test]
    fn should_fail_without_output_on_a_truncated_trace() {
        let res = compile(TRUNCATED.as_bytes());

        assert_eq!(
            Err(RuntimeError::Trace(TraceErr::UnexpectedEof { lines: 20 })),
            res
        );
        assert_eq!(1, res.unwrap_err().exit_code());
    }

    #[test]
    fn should_fail_on_an_unsupported_procedure() {
        let res = compile(THREE_PARAMS.as_bytes());

        assert!(matches!(
            res,
            Err(RuntimeError::Translation(PassErr::UnrecognizedRule(_)))
        ));
        assert_eq!(1, res.unwrap_err().exit_code());
    }

    #[test]
    fn should_fail_on_a_missing_input_file() {
        let res = open_input("fixtures/does_not_exist.wli");

        assert!(matches!(res, Err(RuntimeError::FileUnreadable(_))));
    }

    #[test]
    fn should_fail_on_a_trace_that_is_not_utf8() {
        let res = compile(&b"S BOF procedure EOF\n\xff\xfe\n"[..]);

        assert!(matches!(res, Err(RuntimeError::Trace(TraceErr::Io(_)))));
        assert_eq!(1, res.unwrap_err().exit_code());
    }

    #[test]
    fn should_rewrite_a_positional_path_into_the_in_file_flag() {
        let args = |args: &[&str]| args.iter().map(|a| a.to_string()).collect::<Vec<_>>();

        assert_eq!(
            args(&["wlgen", "-i", "prog.wli"]),
            normalize_args(args(&["wlgen", "prog.wli"]))
        );
        assert_eq!(
            args(&["wlgen", "-i", "-"]),
            normalize_args(args(&["wlgen", "-"]))
        );
        assert_eq!(args(&["wlgen"]), normalize_args(args(&["wlgen"])));
    }

    #[test]
    fn should_rewrite_a_positional_path_alongside_flags() {
        let args = |args: &[&str]| args.iter().map(|a| a.to_string()).collect::<Vec<_>>();

        assert_eq!(
            args(&["wlgen", "-l", "debug", "-i", "prog.wli"]),
            normalize_args(args(&["wlgen", "-l", "debug", "prog.wli"]))
        );
        assert_eq!(
            args(&["wlgen", "-i", "prog.wli", "--log-level", "trace"]),
            normalize_args(args(&["wlgen", "prog.wli", "--log-level", "trace"]))
        );
        assert_eq!(
            args(&["wlgen", "-i", "prog.wli", "-l", "info"]),
            normalize_args(args(&["wlgen", "-i", "prog.wli", "-l", "info"]))
        );
        assert_eq!(
            args(&["wlgen", "-i", "-"]),
            normalize_args(args(&["wlgen", "-i", "-"]))
        );
    }
}
