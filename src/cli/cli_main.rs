use super::cli_examples::examples_menu;
use crate::Chemistry::chemical_equation::ChemicalEquation;
use crate::Chemistry::formula_parser::parse_formula;
use crate::Chemistry::lab_repository::{LabConditions, LabRepository};
use crate::Chemistry::molmass::molar_mass;
use crate::Chemistry::reaction_report::{ReactionReport, ReportError};
use crate::settings::LabSettings;
use log::{error, warn};
use std::io::{self, Write};

const USAGE: &str = "usage: stoichlab [--json] \"<equation>\"\n       stoichlab            (interactive menu)";

/// Entry point of the binary, returns the process exit code.
/// Without an equation among the arguments the interactive menu is started.
pub fn run_cli(args: &[String], settings: &LabSettings) -> i32 {
    let mut json = false;
    let mut words: Vec<&str> = Vec::new();
    for arg in args {
        match arg.as_str() {
            "--json" => json = true,
            "-h" | "--help" => {
                println!("{}", USAGE);
                return 0;
            }
            other => words.push(other),
        }
    }
    let repository = match load_repository(settings) {
        Some(repository) => repository,
        None => return 1,
    };
    if words.is_empty() {
        if json {
            eprintln!("{}", USAGE);
            return 2;
        }
        run_interactive_menu(settings, &repository);
        return 0;
    }
    match run_equation(&words.join(" "), json, settings, &repository) {
        Ok(()) => 0,
        Err(e) => {
            eprintln!("\x1b[31m{}\x1b[0m", e);
            if e.is_client_error() { 2 } else { 1 }
        }
    }
}

fn load_repository(settings: &LabSettings) -> Option<LabRepository> {
    match settings.repository() {
        Ok(repository) => Some(repository),
        Err(e) => {
            warn!("{}, falling back to the bundled lab library", e);
            match LabRepository::builtin() {
                Ok(repository) => Some(repository),
                Err(e) => {
                    error!("bundled lab library is broken: {}", e);
                    None
                }
            }
        }
    }
}

/// balance and analyze one equation, print a table or JSON
pub fn run_equation(
    text: &str,
    json: bool,
    settings: &LabSettings,
    repository: &LabRepository,
) -> Result<(), ReportError> {
    let equation = ChemicalEquation::parse_equation(text)?;
    let report = ReactionReport::from_equation(&equation, settings.budget(), repository.rules())?;
    if json {
        match report.to_json() {
            Ok(text) => println!("{}", text),
            Err(e) => error!("failed to serialize report: {}", e),
        }
    } else {
        report.print_table();
    }
    Ok(())
}

pub fn run_interactive_menu(settings: &LabSettings, repository: &LabRepository) {
    loop {
        show_main_menu();
        let choice = get_user_input();

        match choice.trim() {
            "1" => formula_menu(),
            "2" => equation_menu(settings, repository),
            "3" => lab_menu(repository),
            "4" => examples_menu(),
            "0" | "" => {
                println!("Goodbye!");
                break;
            }
            _ => println!("Invalid choice. Please try again."),
        }
    }
}
/* colors
Blue (\x1b[34m) - Welcome header text
Yellow (\x1b[33m) - Menu options
Cyan (\x1b[36m) - prompts
Red (\x1b[31m) - errors
Reset (\x1b[0m) - Returns to normal color after each colored section
*/
fn show_main_menu() {
    println!(
        "\x1b[34m\n Welcome to StoichLab: parsing of chemical formulae,\n
    exact balancing of equations and classification of reactions \n \x1b[0m"
    );
    println!("\x1b[33m1. Parse formula\x1b[0m");
    println!("\x1b[33m2. Balance and analyze equation\x1b[0m");
    println!("\x1b[33m3. Lab mixing\x1b[0m");
    println!("\x1b[33m4. Examples\x1b[0m");
    println!("\x1b[33m0. Exit\x1b[0m");
    prompt("Enter your choice: ");
}

fn prompt(text: &str) {
    print!("\x1b[36m{}\x1b[0m", text);
    let _ = io::stdout().flush();
}

/// one line from stdin, empty on end of input or read failure
pub(crate) fn get_user_input() -> String {
    let mut input = String::new();
    if let Err(e) = io::stdin().read_line(&mut input) {
        error!("Failed to read input: {}", e);
        input.clear();
    }
    input
}

fn formula_menu() {
    prompt("Formula (e.g. Ca(OH)2, SO4^2-(aq)): ");
    let input = get_user_input();
    match parse_formula(input.trim()) {
        Ok(parsed) => {
            println!("elements:  {:?}", parsed.elements());
            if let Some(charge) = parsed.charge() {
                println!("charge:    {:+}", charge);
            }
            if let Some(state) = parsed.state() {
                println!("state:     {:?}", state);
            }
            println!("canonical: {} ({})", parsed, parsed.to_subscript_string());
            match molar_mass(&parsed) {
                Ok(mass) => println!("molar mass: {:.3} g/mol", mass),
                Err(e) => println!("molar mass: {}", e),
            }
        }
        Err(e) => println!("\x1b[31m{}\x1b[0m", e),
    }
}

fn equation_menu(settings: &LabSettings, repository: &LabRepository) {
    prompt("Equation (e.g. C3H8 + O2 -> CO2 + H2O): ");
    let input = get_user_input();
    if let Err(e) = run_equation(input.trim(), false, settings, repository) {
        println!("\x1b[31m{}\x1b[0m", e);
    }
}

fn lab_menu(repository: &LabRepository) {
    println!("\n=== Chemical shelf ===");
    for chemical in repository.chemicals() {
        println!(
            "\x1b[33m{:<8}\x1b[0m {:<22} {:<8} {}",
            chemical.id, chemical.name, chemical.formula, chemical.hazard
        );
    }
    prompt("Chemicals to mix (ids separated by spaces): ");
    let input = get_user_input();
    let ids: Vec<&str> = input
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|s| !s.is_empty())
        .collect();
    prompt("Heat the beaker? [y/N]: ");
    let heated = get_user_input().trim().eq_ignore_ascii_case("y");
    let conditions = LabConditions {
        heated,
        stirred: false,
    };

    let outcome = repository.evaluate_reaction(&ids[..], conditions);
    println!("{}", outcome.message);
    match outcome.reaction {
        Some(reaction) => {
            println!("  {}", reaction.equation);
            println!("  {}", reaction.explanation);
            if !reaction.safety.is_empty() {
                println!("  \x1b[31msafety:\x1b[0m {}", reaction.safety);
            }
            if let Ok(effects) = serde_json::to_string(&reaction.effects) {
                println!("  effects: {}", effects);
            }
        }
        None => {
            let effects = repository.default_effects(&ids[..]);
            println!(
                "  mixture color {}",
                effects.color.unwrap_or_else(|| "#ffffff".to_string())
            );
        }
    }
}
