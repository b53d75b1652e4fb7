/// formula parsing, molar masses, balancing, classification and lab mixing examples
pub mod stoich_examples;
