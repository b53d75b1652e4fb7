use super::cli_main::get_user_input;
use crate::Examples::stoich_examples::stoich_examples;
use std::io::{self, Write};

pub fn examples_menu() {
    loop {
        println!("\n=== Examples ===");
        println!("1. Parsing of formulae");
        println!("2. Molar masses");
        println!("3. Balancing of equations");
        println!("4. Classification of reactions");
        println!("5. Full reaction report");
        println!("6. Lab mixing");
        println!("0. Back to main menu");
        print!("Enter your choice: ");
        let _ = io::stdout().flush();

        let choice = get_user_input();
        match choice.trim() {
            "1" => stoich_examples(0),
            "2" => stoich_examples(1),
            "3" => stoich_examples(2),
            "4" => stoich_examples(3),
            "5" => stoich_examples(4),
            "6" => stoich_examples(5),
            "0" | "" => break,
            _ => println!("Invalid choice. Please try again."),
        }
    }
}
