//! Jam CLI

use jamc::commands::{
    check_file, eval_inline, explain_error, lex_file, parse_file, run_all_file, run_file,
};
use jamc::{parse_run_args, RunOptions};

fn main() {
    jamc::init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    let command = &args[1];

    match command.as_str() {
        "run" => {
            let (positionals, options) = run_options(&args[2..]);
            let [path] = positionals.as_slice() else {
                eprintln!("Usage: jam run <file.jam> [options]");
                std::process::exit(1);
            };
            run_file(path, &options);
        }
        "eval" => {
            let (positionals, options) = run_options(&args[2..]);
            let [source] = positionals.as_slice() else {
                eprintln!("Usage: jam eval '<source>' [options]");
                std::process::exit(1);
            };
            eval_inline(source, &options);
        }
        "all" => {
            let (positionals, options) = run_options(&args[2..]);
            let [path] = positionals.as_slice() else {
                eprintln!("Usage: jam all <file.jam> [--max-depth=N|none] [--print-depth=N]");
                std::process::exit(1);
            };
            run_all_file(path, &options);
        }
        "check" => {
            let (positionals, options) = run_options(&args[2..]);
            let [path] = positionals.as_slice() else {
                eprintln!("Usage: jam check <file.jam> [--flat-scopes]");
                std::process::exit(1);
            };
            check_file(path, &options);
        }
        "parse" => {
            if args.len() < 3 {
                eprintln!("Usage: jam parse <file.jam>");
                std::process::exit(1);
            }
            parse_file(&args[2]);
        }
        "lex" => {
            if args.len() < 3 {
                eprintln!("Usage: jam lex <file.jam>");
                std::process::exit(1);
            }
            lex_file(&args[2]);
        }
        "--explain" | "explain" => {
            if args.len() < 3 {
                eprintln!("Usage: jam --explain <error-code>");
                eprintln!("Example: jam --explain E3008");
                std::process::exit(1);
            }
            explain_error(&args[2]);
        }
        "help" | "--help" | "-h" => {
            print_usage();
        }
        "version" | "--version" | "-v" => {
            println!("jam {}", env!("CARGO_PKG_VERSION"));
        }
        _ => {
            // `jam <file> [args] [lists]`
            if std::path::Path::new(command).exists() || command.ends_with(".jam") {
                let (positionals, mut options) = run_options(&args[2..]);
                if let Err(e) = options.apply_positional_policy(&positionals) {
                    eprintln!("error: {e}");
                    std::process::exit(1);
                }
                run_file(command, &options);
            } else {
                eprintln!("Unknown command: {command}");
                eprintln!();
                print_usage();
                std::process::exit(1);
            }
        }
    }
}

fn run_options(args: &[String]) -> (Vec<String>, RunOptions) {
    match parse_run_args(args) {
        Ok(parsed) => parsed,
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(1);
        }
    }
}

fn print_usage() {
    println!("Jam interpreter");
    println!();
    println!("Usage: jam <command> [options]");
    println!("       jam <file.jam> [args] [lists]");
    println!();
    println!("Commands:");
    println!("  run <file.jam>       Evaluate a program and print its value");
    println!("  eval '<source>'      Evaluate a program given inline");
    println!("  all <file.jam>       Evaluate under all nine policies");
    println!("  check <file.jam>     Parse and context-check only");
    println!("  parse <file.jam>     Print the program back as source");
    println!("  lex <file.jam>       Tokenize and display tokens");
    println!("  --explain <code>     Explain an error code (e.g., E3008)");
    println!("  help                 Show this help message");
    println!("  version              Show version information");
    println!();
    println!("Evaluation options:");
    println!("  --args=<discipline>   Argument and let bindings: value, name, need");
    println!("  --lists=<discipline>  cons cells: value, name, need");
    println!("  --max-depth=<n|none>  Recursion limit (default: 100000)");
    println!("  --print-depth=<n>     Elide lists longer or deeper than n (default: 1000)");
    println!("  --flat-scopes         Use the flat context check");
    println!("  --stats               Print an evaluation profile to stderr");
    println!();
    println!("Logging:");
    println!("  RUST_LOG=jam_eval=debug   Enable tracing for a crate");
    println!("  JAM_LOG_TREE=1            Indent trace output by span");
    println!();
    println!("Examples:");
    println!("  jam run demos/append.jam --args=need --lists=need");
    println!("  jam demos/streams.jam name need");
    println!("  jam all demos/streams.jam --max-depth=2000");
    println!("  jam eval 'let x := 6; in x * 7'");
}
