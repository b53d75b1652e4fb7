/// examples submenu
pub mod cli_examples;
/// argument handling and the interactive main menu
pub mod cli_main;
