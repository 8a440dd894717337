use afaire::config::Config;
use afaire::context::{AppContext, SharedContext, TestContext};
use afaire::repl::run_with_io;
use std::io::Cursor;
use std::rc::Rc;

fn run_session(ctx: Rc<TestContext>, script: &str) -> String {
    let shared: SharedContext = ctx;
    let mut input = Cursor::new(script.to_string());
    let mut output = Vec::new();
    run_with_io(shared, &mut input, &mut output).unwrap();
    String::from_utf8(output).unwrap()
}

#[test]
fn test_add_list_bye_session() {
    let ctx = Rc::new(TestContext::new());
    let out = run_session(ctx, "todo read book\nlist\nbye\n");

    assert!(out.starts_with("Hello! What needs doing?\n"));
    assert!(out.contains("Added to your list:"));
    assert!(out.contains("You now have 1 task(s) on the list."));
    assert!(out.contains("Here is everything on your list:"));
    assert!(out.contains("1. [T][ ] read book"));
    assert!(out.ends_with("Bye! Your list will be here when you get back.\n"));
}

#[test]
fn test_session_recovers_from_errors() {
    let ctx = Rc::new(TestContext::new());
    let out = run_session(ctx, "frobnicate\nmark 1\ntodo read book\nbye\n");

    assert!(out.contains("I don't know the command 'FROBNICATE'."));
    assert!(out.contains("task 1 does not exist; the list has 0 task(s)."));
    // Both failures were recovered; the add still went through.
    assert!(out.contains("You now have 1 task(s) on the list."));
}

#[test]
fn test_blank_lines_are_ignored_silently() {
    let ctx = Rc::new(TestContext::new());
    let out = run_session(ctx, "\n   \nlist\nbye\n");

    assert!(out.contains("There is nothing on your list."));
    // Three prompts before the list output, none with an error between.
    assert!(!out.contains("I don't know the command"));
}

#[test]
fn test_saved_list_is_picked_up_on_startup() {
    let ctx = Rc::new(TestContext::new());
    let out = run_session(ctx.clone(), "todo read book\ntodo water plants\nbye\n");
    assert!(!out.contains("picked up"));

    let out = run_session(ctx, "list\nbye\n");
    assert!(out.contains("(picked up 2 task(s) from your saved list)"));
    assert!(out.contains("1. [T][ ] read book"));
    assert!(out.contains("2. [T][ ] water plants"));
}

#[test]
fn test_corrupt_store_starts_fresh_and_refuses_to_save() {
    let ctx = Rc::new(TestContext::new());
    let garbage = "not a task line at all\n";
    std::fs::write(ctx.get_task_file_path().unwrap(), garbage).unwrap();

    let out = run_session(ctx.clone(), "todo read book\nbye\n");
    assert!(out.contains("starting fresh"));
    assert!(out.contains("not saving"));

    let on_disk = std::fs::read_to_string(ctx.get_task_file_path().unwrap()).unwrap();
    assert_eq!(on_disk, garbage);
}

#[test]
fn test_end_of_input_counts_as_goodbye() {
    let ctx = Rc::new(TestContext::new());
    let out = run_session(ctx, "todo read book\n");

    assert!(out.contains("You now have 1 task(s) on the list."));
    assert!(out.ends_with("Bye! Your list will be here when you get back.\n"));
}

#[test]
fn test_greeting_uses_configured_name() {
    let ctx = Rc::new(TestContext::new());
    let config = Config {
        autosave: true,
        user_name: Some("Ada".to_string()),
    };
    config.save(ctx.as_ref()).unwrap();

    let out = run_session(ctx, "bye\n");
    assert!(out.starts_with("Hello, Ada! What needs doing?\n"));
}
