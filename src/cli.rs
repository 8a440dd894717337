// File: ./src/cli.rs
//! Shared command-line interface logic, like printing help.

pub fn print_help(binary_name: &str) {
    println!(
        "Afaire v{} - A small and friendly command-line task tracker",
        env!("CARGO_PKG_VERSION")
    );
    println!();
    println!("USAGE:");
    println!("    {} [--root <path>]", binary_name);
    println!("    {} --help", binary_name);
    println!();
    println!("OPTIONS:");
    println!("    -r, --root <path>     Use a different directory for config and data.");
    println!("    -h, --help            Show this help message.");
    println!();
    println!("COMMANDS (typed at the prompt, case-insensitive):");
    println!("    list                            Show every task with its number");
    println!("    todo <description>              Add a todo");
    println!("    deadline <desc> /by <date>      Add a deadline");
    println!("    event <desc> /from <date> /to <date>");
    println!("                                    Add an event");
    println!("    mark <n>                        Mark task n as done");
    println!("    unmark <n>                      Mark task n as not done");
    println!("    delete <n>                      Remove task n from the list");
    println!("    find <text>                     Show tasks whose description contains <text>");
    println!("    check <date>                    Show tasks that fall on <date>");
    println!("    bye                             Save and quit");
    println!();
    println!("DATES:");
    println!("    YYYY-MM-DD or YYYY-MM-DDTHH:MM (the time part is ignored)");
    println!();
    println!("EXAMPLES:");
    println!("    todo read book");
    println!("    deadline submit report /by 2019-10-15");
    println!("    event project meeting /from 2019-10-15 /to 2019-10-16");
    println!("    check 2019-10-15");
    println!("    find report");
}
