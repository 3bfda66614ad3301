//! Region Algebra - Command Line Interface
//!
//! Parses a region expression, optionally minimizes it, and prints the
//! canonical text form; with `--bind` it evaluates the region instead.

use clap::{Parser, ValueEnum};
use region_algebra::Term;
use std::collections::HashMap;
use std::process;

#[derive(Debug, Clone, ValueEnum)]
enum Form {
    /// Canonical form without minimization
    Canonical,
    /// Minimal sum-of-products (disjunctive normal form)
    Dnf,
    /// Minimal product-of-sums (conjunctive normal form)
    Cnf,
}

#[derive(Parser, Debug)]
#[command(name = "regionc")]
#[command(about = "Symbolic boolean algebra for region descriptions", long_about = None)]
#[command(version)]
struct Args {
    /// Region expression, e.g. "12 13'+14"
    #[arg(value_name = "EXPRESSION")]
    expression: String,

    /// Output form
    #[arg(short, long, value_enum, default_value = "canonical")]
    form: Form,

    /// Evaluate instead of printing, with surface bindings like 12=true
    /// (repeatable; every referenced surface must be bound)
    #[arg(short, long = "bind", value_name = "MAG=BOOL")]
    bind: Vec<String>,

    /// Also print the complement of the result
    #[arg(short, long)]
    complement: bool,
}

fn main() {
    let args = Args::parse();

    let term = match Term::parse(&args.expression) {
        Ok(term) => term,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };

    let result = match args.form {
        Form::Canonical => term,
        Form::Dnf => match term.to_dnf() {
            Ok(dnf) => dnf,
            Err(e) => {
                eprintln!("Error: {}", e);
                process::exit(1);
            }
        },
        Form::Cnf => match term.to_cnf() {
            Ok(cnf) => cnf,
            Err(e) => {
                eprintln!("Error: {}", e);
                process::exit(1);
            }
        },
    };

    if !args.bind.is_empty() {
        let assignment = match parse_bindings(&args.bind) {
            Ok(assignment) => assignment,
            Err(message) => {
                eprintln!("Error: {}", message);
                process::exit(1);
            }
        };
        match result.evaluate(&assignment) {
            Ok(value) => println!("{}", value),
            Err(e) => {
                eprintln!("Error: {}", e);
                process::exit(1);
            }
        }
        return;
    }

    println!("{}", result);
    if args.complement {
        let mut complemented = result;
        complemented.complement();
        println!("{}", complemented);
    }
}

fn parse_bindings(bindings: &[String]) -> Result<HashMap<u32, bool>, String> {
    let mut assignment = HashMap::new();
    for binding in bindings {
        let (magnitude, value) = binding
            .split_once('=')
            .ok_or_else(|| format!("binding `{}` is not of the form MAG=BOOL", binding))?;
        let magnitude: u32 = magnitude
            .trim()
            .parse()
            .map_err(|_| format!("binding `{}` has a non-integer surface", binding))?;
        let value: bool = value
            .trim()
            .parse()
            .map_err(|_| format!("binding `{}` has a non-boolean value", binding))?;
        assignment.insert(magnitude, value);
    }
    Ok(assignment)
}
